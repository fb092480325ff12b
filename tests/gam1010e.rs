//! End-to-end script assembly on the older firmware generation

use gamry_script::{ lookup, CaSpec, CvSpec, LsvSpec, RunOptions, ScriptError };

#[test]
fn cv_script_has_no_quiet_time_even_when_requested()
{
    let model = lookup("gam1010e").unwrap();
    // quiet time is not part of this generation's dialect; it is ignored
    let run = RunOptions::new("F", "run1").header("H").quiet_time(2.0);

    let spec = CvSpec {
        e_initial: 0.0,
        e_vertex1: 0.5,
        e_vertex2: -0.5,
        e_final: 0.0,
        scan_rate: 0.1,
        e_step: 0.001,
        sweeps: 2,
        sensitivity: 1e-6,
    };
    let script = spec.compose(&model, &run).unwrap().finish();

    assert_eq!(
        script.text(),
        "c\u{2}\0\0\n\
         folder: F\n\
         fileoverride\n\
         header: H\n\
         \n\
         tech=cv\n\
         ei=0\n\
         eh=0.5\n\
         el=-0.5\n\
         pn=p\n\
         cl=3\n\
         efon\n\
         ef=0\n\
         si=0.001\n\
         v=0.1\n\
         sens=1e-06\n\
         run\n\
         save:run1\n\
         tsave:run1\n\
         \u{20}forcequit: yesiamsure\n"
    );
}

#[test]
fn lsv_with_bipot_appends_the_channel_clause_before_the_end_clause()
{
    let model = lookup("gam1010e").unwrap();
    let run = RunOptions::new("F", "lsv1");

    let spec = LsvSpec {
        e_initial: 0.0,
        e_final: 0.5,
        scan_rate: 0.1,
        e_step: 0.001,
        sensitivity: 1e-6,
    };
    let script = spec.compose(&model, &run).unwrap().with_bipot(0.2, 1e-7).unwrap();

    assert_eq!(
        script.text(),
        "c\u{2}\0\0\n\
         folder: F\n\
         fileoverride\n\
         header: \n\
         \n\
         tech=lsv\n\
         ei=0\n\
         ef=0.5\n\
         v=0.1\n\
         si=0.001\n\
         sens=1e-06\n\
         e2=0.2\n\
         sens2=1e-07\n\
         i2on\n\
         run\n\
         save:lsv1\n\
         tsave:lsv1\n\
         run\n\
         save:lsv1\n\
         tsave:lsv1\n\
         \u{20}forcequit: yesiamsure\n"
    );
}

#[test]
fn bipot_potential_is_validated_against_the_model_window()
{
    let model = lookup("gam1010e").unwrap();
    let run = RunOptions::new("F", "ca1");

    let spec = CaSpec {
        e_initial: 0.0,
        e_vertex1: 0.4,
        e_vertex2: -0.4,
        e_step: 0.001,
        sweeps: 3,
        pulse_width: 0.25,
        sensitivity: 1e-6,
    };
    let staged = spec.compose(&model, &run).unwrap();

    let err = staged.with_bipot(12.5, 1e-6).unwrap_err();
    assert!(matches!(err, ScriptError::OutOfRange { label: "E2", units: "V", .. }));

    // an in-window channel potential attaches fine on this generation
    assert!(staged.with_bipot(0.2, 1e-6).is_ok());
}

#[test]
fn ir_compensation_and_bipot_compose_together()
{
    let model = lookup("gam1010e").unwrap();
    let run = RunOptions::new("F", "ca1").resistance(120.0);

    let spec = CaSpec {
        e_initial: 0.0,
        e_vertex1: 0.4,
        e_vertex2: -0.4,
        e_step: 0.001,
        sweeps: 3,
        pulse_width: 0.25,
        sensitivity: 1e-6,
    };
    let text = spec
        .compose(&model, &run)
        .unwrap()
        .with_bipot(0.2, 1e-6)
        .unwrap()
        .text();

    let bipot_at = text.find("i2on").unwrap();
    let mir_at = text.find("mir=120").unwrap();
    assert!(bipot_at < mir_at, "channel clause must precede the end clause");
    assert!(text.contains("\nmir=120\nircompon\nrun\nircompoff\nsave:ca1\ntsave:ca1"));
}

#[test]
fn unknown_model_is_rejected_by_name()
{
    let err = lookup("gam5000").unwrap_err();
    assert_eq!(err.to_string(), "Gamry model gam5000 is not supported");
}

//! Pulse techniques: normal pulse voltammetry

use crate::{
    error::ScriptError,
    instrument::Instrument,
    script::{ Assembler, RunOptions },
    Script,
};

/// Normal pulse voltammetry (`tech=NPV`)
///
/// Applies pulses of increasing amplitude from the initial toward the final
/// potential. Only defined on the newer firmware generation, and still in
/// development there: the emitted script is complete and runnable, but the
/// pulse timing defaults have not been verified against the full instrument
/// line.
#[derive(Debug, Clone)]
pub struct NpvSpec
{
    /// Initial potential, V
    pub e_initial: f64,
    /// Final potential, V
    pub e_final: f64,
    /// Potential increment per pulse, V; accepted unchecked
    pub e_step: f64,
    /// Width of each pulse, s; accepted unchecked
    pub pulse_width: f64,
    /// Current range, A
    pub sensitivity: f64,
}

impl NpvSpec
{
    /// Validates the endpoint potentials, then assembles the body
    pub fn compose(&self, model: &Instrument, run: &RunOptions)
        -> Result<Script, ScriptError>
    {
        model.check_potential(self.e_initial, "Eini")?;
        model.check_potential(self.e_final, "Efin")?;

        let mut asm = Assembler::new("NPV");
        asm.param("ei", self.e_initial)
            .param("ef", self.e_final)
            .param("si", self.e_step)
            .param("pw", self.pulse_width)
            .quiet_time(model, run)
            .param("sens", self.sensitivity);

        Ok(asm.seal(model, run))
    }
}

#[cfg(test)]
mod tests
{
    use super::NpvSpec;
    use crate::{
        error::ScriptError,
        instrument::GAM1010E7,
        script::RunOptions,
    };

    fn npv() -> NpvSpec
    {
        NpvSpec {
            e_initial: -0.1,
            e_final: 0.6,
            e_step: 0.004,
            pulse_width: 0.06,
            sensitivity: 1e-6,
        }
    }

    #[test]
    fn npv_body_matches_the_dialect()
    {
        let run = RunOptions::new("F", "npv1");
        let script = npv().compose(&GAM1010E7, &run).unwrap();

        assert_eq!(
            script.body,
            "tech=NPV\nei=-0.1\nef=0.6\nsi=0.004\npw=0.06\nqt=2\nsens=1e-06"
        );
    }

    #[test]
    fn npv_validates_only_the_endpoints()
    {
        let mut spec = npv();
        spec.e_final = 16.0;
        let run = RunOptions::new("F", "npv1");
        let err = spec.compose(&GAM1010E7, &run).unwrap_err();

        assert!(matches!(err, ScriptError::OutOfRange { label: "Efin", .. }));

        let mut spec = npv();
        spec.pulse_width = -5.0;
        assert!(spec.compose(&GAM1010E7, &run).is_ok());
    }
}

//! Instrument model catalog
//!
//! # Purpose
//! Every script is validated against the capability table of the instrument
//! model it targets. This module holds those tables: one [`Instrument`]
//! record per supported model, keyed by its lowercase id, along with the
//! range-check helper every technique uses.
//!
//! # Firmware generations
//! The Interface 1010E family has shipped under two Framework generations
//! whose script dialects differ. Both are catalogued here as separate
//! models:
//!
//!   - **`gam1010e`** — the older framework. Eight technique codes, a
//!     bipotentiostat channel, a wide frequency range, and no quiet-time
//!     support.
//!
//!   - **`gam1010e7`** — the newer framework. Adds quiet time (2 s default)
//!     and normal pulse voltammetry, widens the potential window, and drops
//!     the bipotentiostat channel.
//!
//! The file tag at the top of each generated script is what the runner uses
//! to distinguish the generations; it is emitted byte-for-byte and the two
//! generations differ only in the case of the leading byte.
//!
//! ## What if my model isn't catalogued?
//! The entries mostly exist to keep impossible requests from reaching the
//! instrument, e.g. a 20 V sweep vertex on a ±12 V analog front end. The
//! script dialect itself is shared across far more of the Gamry line than
//! is catalogued here, so an entry for a sibling model with the same
//! front-end ratings will usually produce scripts your instrument accepts.

use std::fmt;

use crate::error::ScriptError;

/// An inclusive numeric bound pair
///
/// Invariant: `min <= max` for every range the catalog defines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range
{
    pub min: f64,
    pub max: f64,
}

/// Static capability record for one instrument model
///
/// Instances are plain data: all members are either `Copy` or `'static`
/// references into the catalog, so a lookup hands out a fresh copy and the
/// catalog itself stays read-only. Nothing here is mutated after
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct Instrument
{
    /// Catalog key, e.g. `gam1010e`
    pub id: &'static str,
    /// Human-readable name, shown in error messages and summaries
    pub name: &'static str,
    /// Opaque byte prefix the runner uses to identify the firmware generation
    pub file_tag: &'static str,
    /// Vendor technique codes this generation accepts
    pub techniques: &'static [&'static str],
    /// Human-readable descriptions of the optional settings
    pub options: &'static [&'static str],
    /// Whether a second working electrode channel is fitted
    pub has_bipot: bool,
    /// Whether the firmware can compensate solution resistance during a run
    pub has_ir_comp: bool,
    /// Applied potential window, volts
    pub potential: Range,
    /// Sweep scan rate window, volts per second
    pub scan_rate: Range,
    /// Impedance perturbation frequency window, hertz, where defined
    pub frequency: Option<Range>,
    /// Default quiet time in seconds; `None` on generations without one
    pub quiet_time: Option<f64>,
}

/// Defines the catalog: one `Instrument` constant per model plus the
/// `lookup` match over their ids.
macro_rules! define_models
{
    { $( $konst:ident { $( $field:ident : $value:expr ),+ $(,)? } )+ } => {
        $(
            pub const $konst: Instrument = Instrument {
                $( $field: $value ),+
            };
        )+

        /// Looks up a model by its catalog id
        ///
        /// Returns a fresh copy of the capability record, or
        /// [`ScriptError::UnsupportedModel`] naming the rejected id when no
        /// entry matches.
        pub fn lookup(model: &str) -> Result<Instrument, ScriptError>
        {
            $(
                if model == $konst.id {
                    return Ok($konst);
                }
            )+

            Err(ScriptError::UnsupportedModel(model.to_owned()))
        }

        /// All catalogued models
        pub const MODELS: &[&Instrument] = &[ $( &$konst ),+ ];
    }
}

define_models!
{
    GAM1010E {
        id: "gam1010e",
        name: "Gamry Interface 1010E (gam1010e)",
        file_tag: "c\u{2}\0\0",
        techniques: &["CV", "CA", "LSV", "OCP", "CP", "DP", "SWV", "EIS"],
        options: &["Resistance in ohms (resistance)"],
        has_bipot: true,
        has_ir_comp: true,
        potential: Range { min: -12.0, max: 12.0 },
        scan_rate: Range { min: 0.000001, max: 10_000.0 },
        frequency: Some(Range { min: 0.00001, max: 2_000_000.0 }),
        quiet_time: None,
    }

    GAM1010E7 {
        id: "gam1010e7",
        name: "Gamry Interface 1010E, Framework 7 (gam1010e7)",
        file_tag: "C\u{2}\0\0",
        techniques: &["CV", "LSV", "CA", "IT", "NPV", "OCP", "EIS"],
        options: &[
            "Resistance in ohms (resistance)",
            "Quiet time in seconds (quiet_time)",
        ],
        has_bipot: false,
        has_ir_comp: true,
        potential: Range { min: -15.0, max: 15.0 },
        scan_rate: Range { min: 0.000001, max: 10_000.0 },
        frequency: Some(Range { min: 0.0001, max: 1_000_000.0 }),
        quiet_time: Some(2.0),
    }
}

/// Checks that `value` lies within `[low, high]`
///
/// Both boundaries are accepted. On failure the returned
/// [`ScriptError::OutOfRange`] carries the label, units, bounds, and the
/// offending value so the caller's message names exactly what to fix.
pub fn check_range(
    value: f64,
    low: f64,
    high: f64,
    label: &'static str,
    units: &'static str,
) -> Result<(), ScriptError>
{
    if value < low || value > high {
        Err(ScriptError::OutOfRange { label, units, low, high, value })
    }
    else {
        Ok(())
    }
}

impl Instrument
{
    /// Checks a potential parameter against this model's analog window
    pub fn check_potential(&self, value: f64, label: &'static str) -> Result<(), ScriptError>
    {
        check_range(value, self.potential.min, self.potential.max, label, "V")
    }

    /// Checks a scan rate parameter against this model's sweep capability
    pub fn check_scan_rate(&self, value: f64, label: &'static str) -> Result<(), ScriptError>
    {
        check_range(value, self.scan_rate.min, self.scan_rate.max, label, "V/s")
    }
}

impl fmt::Display for Instrument
{
    /// Renders the specification summary for this model
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        writeln!(f, "Model: {}", self.name)?;
        writeln!(f, "Techniques available: {}", self.techniques.join(", "))?;
        write!(f, "Options available: {}", self.options.join(", "))
    }
}

#[cfg(test)]
mod tests
{
    use super::{ check_range, lookup, MODELS };
    use crate::error::ScriptError;

    #[test]
    fn lookup_unknown_model_names_the_id()
    {
        let err = lookup("chi760e").unwrap_err();
        assert_eq!(err, ScriptError::UnsupportedModel("chi760e".to_owned()));
        assert!(err.to_string().contains("chi760e"));
    }

    #[test]
    fn lookup_known_models()
    {
        assert_eq!(lookup("gam1010e").unwrap().id, "gam1010e");
        assert_eq!(lookup("gam1010e7").unwrap().id, "gam1010e7");
    }

    #[test]
    fn every_catalogued_range_is_ordered()
    {
        for model in MODELS {
            assert!(model.potential.min <= model.potential.max, "{}", model.id);
            assert!(model.scan_rate.min <= model.scan_rate.max, "{}", model.id);

            if let Some(frequency) = model.frequency {
                assert!(frequency.min <= frequency.max, "{}", model.id);
            }
        }
    }

    #[test]
    fn generations_differ_as_documented()
    {
        let older = lookup("gam1010e").unwrap();
        let newer = lookup("gam1010e7").unwrap();

        assert!(older.has_bipot && !newer.has_bipot);
        assert!(older.quiet_time.is_none() && newer.quiet_time == Some(2.0));
        assert!(newer.potential.max > older.potential.max);
        assert_ne!(older.file_tag, newer.file_tag);
        assert!(newer.techniques.contains(&"NPV"));
        assert!(!older.techniques.contains(&"NPV"));
    }

    #[test]
    fn boundaries_are_inclusive()
    {
        assert!(check_range(-12.0, -12.0, 12.0, "Eini", "V").is_ok());
        assert!(check_range(12.0, -12.0, 12.0, "Eini", "V").is_ok());
        assert!(check_range(12.001, -12.0, 12.0, "Eini", "V").is_err());
        assert!(check_range(-12.001, -12.0, 12.0, "Eini", "V").is_err());
    }

    #[test]
    fn out_of_range_message_is_operator_friendly()
    {
        let err = check_range(15.0, -12.0, 12.0, "Ev1", "V").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Ev1 should be between -12 V and 12 V. Received 15 V"
        );
    }
}

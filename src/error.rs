//! Script generation error definitions
//!
//! Every error here is raised synchronously while a script is being composed
//! or while the bipot add-on is being attached. Once composition has
//! succeeded, rendering the final text cannot fail.

use thiserror::Error;

/// An error describing why a script could not be composed
///
/// These are input errors, not device errors: they indicate that the caller
/// asked for something the selected instrument model cannot do, or supplied
/// a parameter outside the model's metering range. There is nothing to retry;
/// the offending parameter has to change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError
{
    /// The requested model id matches no entry in the catalog
    ///
    /// No script can be built without a capability table, so this is raised
    /// by [`lookup`](crate::instrument::lookup) before any builder exists.
    #[error("Gamry model {0} is not supported")]
    UnsupportedModel(String),

    /// A validated numeric parameter fell outside the model's range
    ///
    /// Carries everything needed for a precise user-facing message. The
    /// phrasing matches what operators of these instruments are used to
    /// seeing from the vendor tooling.
    #[error("{label} should be between {low} {units} and {high} {units}. Received {value} {units}")]
    OutOfRange
    {
        /// Parameter name as it appears in the technique documentation, e.g. `Eini`
        label: &'static str,
        /// Unit shorthand, e.g. `V` or `V/s`
        units: &'static str,
        low: f64,
        high: f64,
        value: f64,
    },

    /// The bipotentiostat channel was requested on a model without one
    #[error("{model} does not have bipot abilities")]
    UnsupportedFeature
    {
        /// Display name of the offending model
        model: &'static str,
    },
}

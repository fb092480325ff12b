//! Technique parameter specs
//!
//! One spec struct per supported technique. Each spec is a flat record of
//! the numeric parameters the technique needs; composing it against a model
//! and a set of [`RunOptions`](crate::RunOptions) validates the parameters
//! that have defined bounds and assembles the body text.
//!
//! # Which parameters are validated
//! Deliberately only the parameters the instrument's analog front end
//! physically bounds: potentials and scan rates. Timing parameters (pulse
//! width, sample interval, total time) and counts pass through unchecked —
//! configurations accepted by deployed instruments must keep being
//! accepted, so no bounds are imposed here beyond what the firmware itself
//! enforces.
//!
//! # Bipot staging
//! The sweep and step specs (CV, LSV, CA) compose to
//! [`BipotCapable`](crate::BipotCapable); everything else composes straight
//! to [`Script`](crate::Script). Whether the second channel may actually be
//! enabled is decided by the model at attachment time.

mod sweep;
mod step;
mod pulse;
mod passive;

pub use sweep::{ CvSpec, LsvSpec };
pub use step::{ CaSpec, ItSpec };
pub use pulse::NpvSpec;
pub use passive::{ EisSpec, OcpSpec };

//! Control script generation for **Gamry** potentiostats
//!
//! # Purpose
//! This library turns experiment parameters (potentials, scan rates,
//! sample intervals, sensitivities, frequencies) into the line-oriented
//! control scripts the Gamry runner application executes. It is a
//! validation-and-templating layer: parameters are checked against the
//! capability table of the selected instrument model, and the script text
//! is assembled as a single string. Writing that string to disk and talking
//! to the physical instrument are deliberately left to the caller.
//!
//! # Usage
//! Look up a model, describe the run, compose a technique:
//!
//! ```
//! use gamry_script::{ lookup, CvSpec, RunOptions };
//!
//! let model = lookup("gam1010e7")?;
//! let run = RunOptions::new("C:\\Data", "run1").header("blank scan");
//!
//! let script = CvSpec {
//!     e_initial: 0.0,
//!     e_vertex1: 0.5,
//!     e_vertex2: -0.5,
//!     e_final: 0.0,
//!     scan_rate: 0.1,
//!     e_step: 0.001,
//!     sweeps: 2,
//!     sensitivity: 1e-6,
//! }
//! .compose(&model, &run)?
//! .finish();
//!
//! assert!(script.text().contains("tech=cv"));
//! # Ok::<(), gamry_script::ScriptError>(())
//! ```
//!
//! On a model with the bipotentiostat channel, the sweep and step
//! techniques can enable the second working electrode before finishing:
//!
//! ```
//! # use gamry_script::{ lookup, LsvSpec, RunOptions };
//! # let model = lookup("gam1010e")?;
//! # let run = RunOptions::new("C:\\Data", "run2");
//! # let spec = LsvSpec {
//! #     e_initial: 0.0, e_final: 0.5, scan_rate: 0.1, e_step: 0.001, sensitivity: 1e-6,
//! # };
//! let script = spec.compose(&model, &run)?.with_bipot(0.2, 1e-6)?;
//! assert!(script.text().contains("i2on"));
//! # Ok::<(), gamry_script::ScriptError>(())
//! ```
//!
//! # Script format
//! The emitted text follows the runner's fixed grammar:
//!
//! ```text
//! <file-format-tag>
//! folder: <folder>
//! fileoverride
//! header: <header text>
//!
//! tech=<technique-code>
//! <key>=<value>
//! ...
//! [e2=<E2>          bipotentiostat clause, where attached
//! sens2=<sens2>
//! i2on
//! run
//! save:<file>
//! tsave:<file>]
//! [mir=<ohms>       IR-compensated end clause, or the plain
//! ircompon          run/save pair when resistance is zero
//! run
//! ircompoff]
//! save:<file>
//! tsave:<file>
//!
//!  forcequit: yesiamsure
//! ```
//!
//! The file-format tag is a short byte prefix identifying the firmware
//! generation and is emitted byte-for-byte; see
//! [`instrument`] for the catalogued models and their differences.
//!
//! # Errors
//! Everything that can go wrong goes wrong while composing: an unknown
//! model id, a validated parameter outside the model's range, or the bipot
//! channel requested on a model without one. Rendering the text of a
//! composed [`Script`] never fails.

pub mod error;
pub mod instrument;
pub mod script;
pub mod tech;

mod value;

pub use error::ScriptError;
pub use instrument::{ check_range, lookup, Instrument, Range };
pub use script::{ sweep_window, BipotCapable, Polarity, RunOptions, Script };
pub use tech::{ CaSpec, CvSpec, EisSpec, ItSpec, LsvSpec, NpvSpec, OcpSpec };

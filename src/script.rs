//! Shared script assembly
//!
//! # Purpose
//! Every technique produces the same outer structure: a header naming the
//! destination, a `key=value` body, a run/save end clause, and a force-quit
//! footer. This module owns those invariant parts plus the two rules every
//! sweep technique shares: the sweep-window orientation and the optional
//! bipotentiostat clause.
//!
//! # Staging
//! Composition is a two-stage affair. A technique spec composes into either
//! a finished [`Script`] or, for the techniques that can drive a second
//! working electrode, a [`BipotCapable`] stage. The stage borrows nothing
//! mutable: [`BipotCapable::with_bipot`] builds a *new* script, so a failed
//! attachment leaves the base untouched and there is no way to attach the
//! clause twice to one script.

use crate::{
    error::ScriptError,
    instrument::Instrument,
    value::fmt_param,
};

use std::fmt;

/// The fixed force-quit footer every script ends with
///
/// The leading space before `forcequit` is part of the vendor format.
const FOOT: &str = "\n forcequit: yesiamsure\n";

/// Settings shared by every script regardless of technique
///
/// `quiet_time` only takes effect on models whose firmware generation
/// defines a quiet time; elsewhere it is silently ignored, matching the
/// behavior operators already rely on. A `resistance` of zero leaves IR
/// compensation off.
#[derive(Debug, Clone)]
pub struct RunOptions
{
    pub(crate) folder: String,
    pub(crate) file_name: String,
    pub(crate) header: String,
    pub(crate) quiet_time: Option<f64>,
    pub(crate) resistance: f64,
}

impl RunOptions
{
    /// Creates run options targeting the given destination folder and file
    pub fn new(folder: &str, file_name: &str) -> Self
    {
        Self {
            folder: folder.to_owned(),
            file_name: file_name.to_owned(),
            header: String::new(),
            quiet_time: None,
            resistance: 0.0,
        }
    }

    /// Sets the free-text header recorded at the top of the script
    pub fn header(mut self, text: &str) -> Self
    {
        self.header = text.to_owned();
        self
    }

    /// Overrides the model's default quiet time, in seconds
    pub fn quiet_time(mut self, seconds: f64) -> Self
    {
        self.quiet_time = Some(seconds);
        self
    }

    /// Sets the solution resistance in ohms, enabling IR compensation
    ///
    /// Takes effect only on models that support resistance compensation.
    pub fn resistance(mut self, ohms: f64) -> Self
    {
        self.resistance = ohms;
        self
    }
}

/// Direction flag of an oriented sweep window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity
{
    /// The sweep departs toward the upper vertex first (`pn=p`)
    Positive,
    /// The sweep departs toward the lower vertex first (`pn=n`)
    Negative,
}

impl fmt::Display for Polarity
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Positive => f.write_str("p"),
            Self::Negative => f.write_str("n"),
        }
    }
}

/// Orients a pair of sweep vertex potentials
///
/// Returns `(high, low, polarity)`: the larger vertex becomes the upper
/// bound `eh`, the smaller the lower bound `el`, and the polarity flag says
/// which way the sweep departs. Only a strictly greater first vertex makes
/// the sweep positive-going; a tie is negative-going.
pub fn sweep_window(ev1: f64, ev2: f64) -> (f64, f64, Polarity)
{
    if ev1 > ev2 {
        (ev1, ev2, Polarity::Positive)
    }
    else {
        (ev2, ev1, Polarity::Negative)
    }
}

/// A fully composed control script
///
/// Immutable once produced. [`text`](Self::text) re-derives the same string
/// on every call; nothing about the script can fail or change after
/// composition.
#[derive(Debug, Clone)]
pub struct Script
{
    pub(crate) head: String,
    pub(crate) body: String,
    pub(crate) end: String,
}

impl Script
{
    /// Renders the complete script text
    pub fn text(&self) -> String
    {
        format!("{}{}{}{}", self.head, self.body, self.end, FOOT)
    }
}

/// A composed script whose technique can drive the bipotentiostat channel
///
/// Produced by the CV, LSV, and CA specs. Call [`finish`](Self::finish) to
/// take the script as-is, or [`with_bipot`](Self::with_bipot) to derive a
/// script with the second working electrode enabled. Whether the channel is
/// actually fitted is a property of the model, checked at attachment.
#[derive(Debug, Clone)]
pub struct BipotCapable
{
    pub(crate) script: Script,
    pub(crate) model: Instrument,
    pub(crate) file_name: String,
}

impl BipotCapable
{
    /// Finishes composition without touching the second channel
    pub fn finish(self) -> Script
    {
        self.script
    }

    /// Derives a script with the bipotentiostat channel enabled
    ///
    /// `e2` is the channel potential in volts, validated against the model's
    /// potential window; `sens2` is the channel sensitivity in amperes,
    /// accepted unchecked like the primary sensitivity. Fails with
    /// [`ScriptError::UnsupportedFeature`] when the model has no second
    /// channel, leaving the base script unchanged.
    pub fn with_bipot(&self, e2: f64, sens2: f64) -> Result<Script, ScriptError>
    {
        if !self.model.has_bipot {
            return Err(ScriptError::UnsupportedFeature { model: self.model.name });
        }

        self.model.check_potential(e2, "E2")?;

        let mut script = self.script.clone();
        script.body.push_str(&format!(
            "\ne2={}\nsens2={}\ni2on\nrun\nsave:{}\ntsave:{}",
            fmt_param(e2),
            fmt_param(sens2),
            self.file_name,
            self.file_name,
        ));

        Ok(script)
    }
}

/// Accumulates the body of one technique and seals it into a script
///
/// The body is newline-joined with no trailing newline; the header supplies
/// the blank line above it and the end clause opens with its own line break.
pub(crate) struct Assembler
{
    lines: Vec<String>,
}

impl Assembler
{
    /// Starts a body for the given vendor technique code
    pub fn new(tech: &str) -> Self
    {
        Self { lines: vec![format!("tech={}", tech)] }
    }

    /// Appends one `key=value` parameter line
    pub fn param(&mut self, key: &str, value: f64) -> &mut Self
    {
        self.lines.push(format!("{}={}", key, fmt_param(value)));
        self
    }

    /// Appends a literal line, e.g. `efon`
    pub fn raw(&mut self, line: &str) -> &mut Self
    {
        self.lines.push(line.to_owned());
        self
    }

    /// Appends the quiet time line on models whose generation defines one
    ///
    /// The run options may override the model default; on generations
    /// without quiet time the override is ignored.
    pub fn quiet_time(&mut self, model: &Instrument, run: &RunOptions) -> &mut Self
    {
        if let Some(default) = model.quiet_time {
            self.param("qt", run.quiet_time.unwrap_or(default));
        }

        self
    }

    /// Seals the body into a finished script
    pub fn seal(self, model: &Instrument, run: &RunOptions) -> Script
    {
        Script {
            head: head(model, run),
            body: self.lines.join("\n"),
            end: end_clause(model, run),
        }
    }

    /// Seals the body into the bipot-capable stage
    pub fn seal_bipot(self, model: &Instrument, run: &RunOptions) -> BipotCapable
    {
        let file_name = run.file_name.clone();

        BipotCapable {
            script: self.seal(model, run),
            model: *model,
            file_name,
        }
    }
}

/// Builds the invariant header block
fn head(model: &Instrument, run: &RunOptions) -> String
{
    format!(
        "{}\nfolder: {}\nfileoverride\nheader: {}\n\n",
        model.file_tag, run.folder, run.header,
    )
}

/// Builds the run/save end clause
///
/// A nonzero solution resistance on a model with resistance compensation
/// wraps the run in `ircompon`/`ircompoff`; everything else gets the plain
/// run-then-save pair.
fn end_clause(model: &Instrument, run: &RunOptions) -> String
{
    if run.resistance != 0.0 && model.has_ir_comp {
        format!(
            "\nmir={}\nircompon\nrun\nircompoff\nsave:{}\ntsave:{}",
            fmt_param(run.resistance), run.file_name, run.file_name,
        )
    }
    else {
        format!("\nrun\nsave:{}\ntsave:{}", run.file_name, run.file_name)
    }
}

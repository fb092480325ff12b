//! Techniques without a driven sweep: open circuit and impedance

use log::warn;

use crate::{
    error::ScriptError,
    instrument::Instrument,
    script::{ Assembler, RunOptions },
    Script,
};

/// Open circuit potential against time (`tech=ocpt`)
///
/// Records the cell's rest potential without applying one. The acceptance
/// window is hard-coded to ±10 V regardless of the model's own potential
/// bounds; that is what the runner expects for this technique. Still in
/// development: composition logs a caution but the script is complete.
#[derive(Debug, Clone)]
pub struct OcpSpec
{
    /// Total measurement time, s; accepted unchecked
    pub t_total: f64,
    /// Sample interval, s; accepted unchecked
    pub t_interval: f64,
}

impl OcpSpec
{
    /// Assembles the body; no parameters have defined bounds
    pub fn compose(&self, model: &Instrument, run: &RunOptions)
        -> Result<Script, ScriptError>
    {
        warn!("OCP technique is still in development. Use with caution.");

        let mut asm = Assembler::new("ocpt");
        asm.param("st", self.t_total)
            .param("eh", 10.0)
            .param("el", -10.0)
            .param("si", self.t_interval)
            .quiet_time(model, run);

        Ok(asm.seal(model, run))
    }
}

/// Electrochemical impedance spectroscopy (`tech=imp`)
///
/// Sweeps a perturbation frequency between two bounds at a bias potential.
/// Still in development: no parameter is validated yet, not even against
/// the model's frequency range, and composition logs a caution. The script
/// text itself is complete and runnable.
#[derive(Debug, Clone)]
pub struct EisSpec
{
    /// Bias potential, V
    pub e_initial: f64,
    /// Lower perturbation frequency, Hz
    pub freq_low: f64,
    /// Upper perturbation frequency, Hz
    pub freq_high: f64,
    /// Perturbation amplitude, V
    pub amplitude: f64,
    /// Current range, A
    pub sensitivity: f64,
}

impl EisSpec
{
    /// Assembles the body; no parameters have defined bounds
    pub fn compose(&self, model: &Instrument, run: &RunOptions)
        -> Result<Script, ScriptError>
    {
        warn!("EIS technique is still in development. Use with caution.");

        let mut asm = Assembler::new("imp");
        asm.param("ei", self.e_initial)
            .param("fl", self.freq_low)
            .param("fh", self.freq_high)
            .param("amp", self.amplitude)
            .param("sens", self.sensitivity)
            .quiet_time(model, run);

        Ok(asm.seal(model, run))
    }
}

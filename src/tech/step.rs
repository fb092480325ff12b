//! Potential step techniques: chronoamperometry and current-time

use crate::{
    error::ScriptError,
    instrument::Instrument,
    script::{ sweep_window, Assembler, BipotCapable, RunOptions },
    Script,
};

/// Step chronoamperometry (`tech=ca`)
///
/// Steps between two potentials, recording the current transient of each
/// step. The step potentials reuse the sweep-window orientation, so they
/// may be given in either order.
#[derive(Debug, Clone)]
pub struct CaSpec
{
    /// Initial potential, V
    pub e_initial: f64,
    /// First step potential, V
    pub e_vertex1: f64,
    /// Second step potential, V
    pub e_vertex2: f64,
    /// Sample interval, V
    pub e_step: f64,
    /// Number of step cycles
    pub sweeps: u32,
    /// Width of each step, s; accepted unchecked
    pub pulse_width: f64,
    /// Current range, A
    pub sensitivity: f64,
}

impl CaSpec
{
    /// Validates the three potentials, then assembles the body
    ///
    /// Pulse width, sample interval, and the cycle count pass through
    /// unchecked.
    pub fn compose(&self, model: &Instrument, run: &RunOptions)
        -> Result<BipotCapable, ScriptError>
    {
        model.check_potential(self.e_initial, "Eini")?;
        model.check_potential(self.e_vertex1, "Ev1")?;
        model.check_potential(self.e_vertex2, "Ev2")?;

        let (eh, el, pn) = sweep_window(self.e_vertex1, self.e_vertex2);

        let mut asm = Assembler::new("ca");
        asm.param("ei", self.e_initial)
            .param("eh", eh)
            .param("el", el)
            .raw(&format!("pn={}", pn))
            .raw(&format!("cl={}", self.sweeps))
            .param("pw", self.pulse_width)
            .param("si", self.e_step)
            .quiet_time(model, run)
            .param("sens", self.sensitivity);

        Ok(asm.seal_bipot(model, run))
    }
}

/// Amperometric current-time (`tech=i-t`)
///
/// Holds one potential and records current against time. Only defined on
/// the newer firmware generation.
#[derive(Debug, Clone)]
pub struct ItSpec
{
    /// Held step potential, V
    pub e_step: f64,
    /// Total run time, s; accepted unchecked
    pub t_total: f64,
    /// Sample interval, s; accepted unchecked
    pub t_interval: f64,
    /// Current range, A
    pub sensitivity: f64,
}

impl ItSpec
{
    /// Validates the step potential, then assembles the body
    pub fn compose(&self, model: &Instrument, run: &RunOptions)
        -> Result<Script, ScriptError>
    {
        model.check_potential(self.e_step, "Estep")?;

        let mut asm = Assembler::new("i-t");
        asm.param("ei", self.e_step)
            .param("st", self.t_total)
            .param("si", self.t_interval)
            .quiet_time(model, run)
            .param("sens", self.sensitivity);

        Ok(asm.seal(model, run))
    }
}

//! Potential sweep techniques: cyclic and linear sweep voltammetry

use crate::{
    error::ScriptError,
    instrument::Instrument,
    script::{ sweep_window, Assembler, BipotCapable, RunOptions },
};

/// Cyclic voltammetry (`tech=cv`)
///
/// Sweeps between two vertex potentials for a number of cycles, then ends
/// at a final potential. The vertices may be given in either order; the
/// larger becomes the upper bound and the order decides the initial sweep
/// direction.
#[derive(Debug, Clone)]
pub struct CvSpec
{
    /// Initial potential, V
    pub e_initial: f64,
    /// First vertex potential, V
    pub e_vertex1: f64,
    /// Second vertex potential, V
    pub e_vertex2: f64,
    /// Final potential, V
    pub e_final: f64,
    /// Scan rate, V/s
    pub scan_rate: f64,
    /// Potential increment per sample, V
    pub e_step: f64,
    /// Number of full sweeps; the instrument runs one extra settling cycle
    pub sweeps: u32,
    /// Current range, A
    pub sensitivity: f64,
}

impl CvSpec
{
    /// Validates the potentials and scan rate, then assembles the body
    pub fn compose(&self, model: &Instrument, run: &RunOptions)
        -> Result<BipotCapable, ScriptError>
    {
        model.check_potential(self.e_initial, "Eini")?;
        model.check_potential(self.e_vertex1, "Ev1")?;
        model.check_potential(self.e_vertex2, "Ev2")?;
        model.check_potential(self.e_final, "Efin")?;
        model.check_scan_rate(self.scan_rate, "sr")?;

        let (eh, el, pn) = sweep_window(self.e_vertex1, self.e_vertex2);

        let mut asm = Assembler::new("cv");
        asm.param("ei", self.e_initial)
            .param("eh", eh)
            .param("el", el)
            .raw(&format!("pn={}", pn))
            .raw(&format!("cl={}", self.sweeps + 1))
            .raw("efon")
            .param("ef", self.e_final)
            .param("si", self.e_step)
            .quiet_time(model, run)
            .param("v", self.scan_rate)
            .param("sens", self.sensitivity);

        Ok(asm.seal_bipot(model, run))
    }
}

/// Linear sweep voltammetry (`tech=lsv`)
///
/// A single sweep from the initial to the final potential.
#[derive(Debug, Clone)]
pub struct LsvSpec
{
    /// Initial potential, V
    pub e_initial: f64,
    /// Final potential, V
    pub e_final: f64,
    /// Scan rate, V/s
    pub scan_rate: f64,
    /// Potential increment per sample, V
    pub e_step: f64,
    /// Current range, A
    pub sensitivity: f64,
}

impl LsvSpec
{
    /// Validates the endpoints and scan rate, then assembles the body
    pub fn compose(&self, model: &Instrument, run: &RunOptions)
        -> Result<BipotCapable, ScriptError>
    {
        model.check_potential(self.e_initial, "Eini")?;
        model.check_potential(self.e_final, "Efin")?;
        model.check_scan_rate(self.scan_rate, "sr")?;

        let mut asm = Assembler::new("lsv");
        asm.param("ei", self.e_initial)
            .param("ef", self.e_final)
            .param("v", self.scan_rate)
            .param("si", self.e_step)
            .quiet_time(model, run)
            .param("sens", self.sensitivity);

        Ok(asm.seal_bipot(model, run))
    }
}

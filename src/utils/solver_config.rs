// src/utils/solver_config.rs
use crate::utils::{
    DEFAULT_SOLVER_SETTINGS,
    errors::CapacitanceError,
};

/// Numerical knobs shared by the deflection model and the capacitance integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Absolute error target of each one-dimensional integral.
    pub abs_tolerance: f64,
    /// Relative error target of each one-dimensional integral.
    pub rel_tolerance: f64,
    /// Maximum number of intervals the adaptive quadrature may hold.
    pub max_subdivisions: usize,
    /// Modal truncation `(m, n)` of the simply supported rectangular series.
    pub simply_supported_modes: (u32, u32),
    /// Modal truncation `(m, n)` of the clamped rectangular series.
    pub clamped_modes: (u32, u32),
    /// Grid points per axis used to scan the plate for electrode contact.
    pub contact_scan_resolution: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        DEFAULT_SOLVER_SETTINGS
    }
}

impl SolverSettings {
    pub fn new(
        abs_tolerance: Option<f64>,
        rel_tolerance: Option<f64>,
        max_subdivisions: Option<usize>,
        simply_supported_modes: Option<(u32, u32)>,
        clamped_modes: Option<(u32, u32)>,
        contact_scan_resolution: Option<usize>,
    ) -> Result<Self, CapacitanceError> {
        let default = DEFAULT_SOLVER_SETTINGS;
        let settings = Self {
            abs_tolerance: abs_tolerance.unwrap_or(default.abs_tolerance),
            rel_tolerance: rel_tolerance.unwrap_or(default.rel_tolerance),
            max_subdivisions: max_subdivisions.unwrap_or(default.max_subdivisions),
            simply_supported_modes: simply_supported_modes.unwrap_or(default.simply_supported_modes),
            clamped_modes: clamped_modes.unwrap_or(default.clamped_modes),
            contact_scan_resolution: contact_scan_resolution.unwrap_or(default.contact_scan_resolution),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CapacitanceError> {
        if !(self.abs_tolerance >= 0.0) || !(self.rel_tolerance >= 0.0) {
            return Err(CapacitanceError::InvalidConfiguration("Tolerances must be non-negative".to_string()));
        }
        if self.abs_tolerance == 0.0 && self.rel_tolerance == 0.0 {
            return Err(CapacitanceError::InvalidConfiguration("At least one tolerance must be positive".to_string()));
        }
        if self.max_subdivisions == 0 {
            return Err(CapacitanceError::InvalidConfiguration("Subdivision limit must be positive".to_string()));
        }
        let (ss_m, ss_n) = self.simply_supported_modes;
        let (cl_m, cl_n) = self.clamped_modes;
        if ss_m == 0 || ss_n == 0 || cl_m == 0 || cl_n == 0 {
            return Err(CapacitanceError::InvalidConfiguration("Modal truncation orders must be at least 1".to_string()));
        }
        if self.contact_scan_resolution < 2 {
            return Err(CapacitanceError::InvalidConfiguration("Contact scan needs at least 2 points per axis".to_string()));
        }
        Ok(())
    }
}

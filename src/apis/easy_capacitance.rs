// src/apis/easy_capacitance.rs

use crate::capacitance::CapacitanceService;
#[cfg(feature = "sweep")]
use crate::capacitance::{PressureSweep, SweepResult};
use crate::materials::{MaterialCatalog, MaterialRecord};
#[cfg(feature = "sweep")]
use crate::plates::PlateGeometry;
use crate::plates::{BoundaryCondition, PlateShape};
use crate::utils::{CapacitanceError, SolverSettings};
#[cfg(feature = "sweep")]
use crate::utils::DEFAULT_INITIAL_GAP;

/// A simplified interface for plate capacitance calculations.
///
/// Shapes and boundary conditions are given as strings (`"circular"`, `"rectangular"`,
/// `"simply_supported"`, `"clamped"`), which is what form-driven front ends hand over.
/// Each instance owns its own material catalog.
pub struct EasyCapacitance {
    catalog: MaterialCatalog,
    settings: SolverSettings,
}

impl Default for EasyCapacitance {
    fn default() -> Self {
        Self::new()
    }
}

impl EasyCapacitance {
    /// Creates a new `EasyCapacitance` with the built-in materials and default solver settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::apis::easy_capacitance::EasyCapacitance;
    ///
    /// let easy = EasyCapacitance::new();
    /// assert_eq!(easy.list_materials(), vec!["Aluminum", "Steel", "Glass", "Test"]);
    /// ```
    pub fn new() -> Self {
        Self::with_settings(SolverSettings::default())
    }

    pub fn with_settings(settings: SolverSettings) -> Self {
        Self {
            catalog: MaterialCatalog::new(),
            settings,
        }
    }

    fn service(&self) -> CapacitanceService<'_> {
        CapacitanceService::with_settings(&self.catalog, self.settings)
    }

    /// Capacitance in farads.
    ///
    /// # Errors
    ///
    /// Unknown shape or boundary strings give `InvalidConfiguration`; everything else is
    /// reported as by [`CapacitanceService::compute_capacitance`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::apis::easy_capacitance::EasyCapacitance;
    ///
    /// let easy = EasyCapacitance::new();
    /// let c = easy.compute_capacitance("rectangular", "clamped", 0.0, "Aluminum", 1e-4, 0.001, Some(0.001), None).unwrap();
    /// assert!((c - 8.854e-12).abs() < 1e-14);
    /// assert!(easy.compute_capacitance("oval", "clamped", 0.0, "Aluminum", 1e-4, 0.001, None, None).is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn compute_capacitance(
        &self,
        shape: &str,
        boundary_condition: &str,
        pressure: f64,
        material_name: &str,
        thickness: f64,
        dimension_a: f64,
        dimension_b: Option<f64>,
        initial_gap: Option<f64>,
    ) -> Result<f64, CapacitanceError> {
        let shape: PlateShape = shape.parse()?;
        let boundary_condition: BoundaryCondition = boundary_condition.parse()?;
        self.service().compute_capacitance(
            shape,
            boundary_condition,
            pressure,
            material_name,
            thickness,
            dimension_a,
            dimension_b,
            initial_gap,
        )
    }

    /// Capacitance over `points` pressures from `min_pressure` to `max_pressure`.
    #[cfg(feature = "sweep")]
    #[allow(clippy::too_many_arguments)]
    pub fn sweep(
        &self,
        shape: &str,
        boundary_condition: &str,
        material_name: &str,
        thickness: f64,
        dimension_a: f64,
        dimension_b: Option<f64>,
        initial_gap: Option<f64>,
        min_pressure: f64,
        max_pressure: f64,
        points: usize,
    ) -> Result<SweepResult, CapacitanceError> {
        let geometry = PlateGeometry::new(shape.parse()?, boundary_condition.parse()?, dimension_a, dimension_b, thickness)?;
        let sweep = PressureSweep::new(min_pressure, max_pressure, points)?;
        self.service()
            .sweep(&geometry, material_name, initial_gap.unwrap_or(DEFAULT_INITIAL_GAP), &sweep)
    }

    pub fn add_material(&self, name: &str, youngs_modulus: f64, poisson_ratio: f64, dielectric_constant: f64) -> MaterialRecord {
        self.catalog.add(name, youngs_modulus, poisson_ratio, dielectric_constant)
    }

    pub fn get_material(&self, name: &str) -> Result<MaterialRecord, CapacitanceError> {
        self.catalog.lookup(name)
    }

    pub fn list_materials(&self) -> Vec<String> {
        self.catalog.list_names()
    }
}

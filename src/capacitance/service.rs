// src/capacitance/service.rs

use log::debug;
use crate::capacitance::CapacitanceIntegrator;
use crate::materials::{MaterialCatalog, MaterialRecord};
use crate::plates::{flexural_rigidity, BoundaryCondition, DeflectionField, LoadParameters, PlateGeometry, PlateShape};
use crate::utils::{CapacitanceError, SolverSettings, DEFAULT_INITIAL_GAP};

/// Computes the capacitance of a pressure-loaded plate capacitor.
///
/// Each call resolves the material, derives the flexural rigidity, builds the deflection
/// field and integrates it. Calls share nothing but read access to the catalog, so a
/// service can be used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct CapacitanceService<'a> {
    catalog: &'a MaterialCatalog,
    settings: SolverSettings,
}

impl CapacitanceService<'static> {
    /// Service backed by the process-wide catalog and default solver settings.
    pub fn global() -> Self {
        Self::new(MaterialCatalog::global())
    }
}

impl<'a> CapacitanceService<'a> {
    pub fn new(catalog: &'a MaterialCatalog) -> Self {
        Self::with_settings(catalog, SolverSettings::default())
    }

    pub fn with_settings(catalog: &'a MaterialCatalog, settings: SolverSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &'a MaterialCatalog {
        self.catalog
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Capacitance in farads of a plate of the given shape and support under `pressure`.
    ///
    /// # Arguments
    ///
    /// * `shape` - Circular or rectangular electrode
    /// * `boundary_condition` - Simply supported or clamped edges
    /// * `pressure` - Uniform applied pressure in Pa
    /// * `material_name` - Catalog name of the plate material
    /// * `thickness` - Plate thickness in m
    /// * `dimension_a` - Radius (circular) or length (rectangular) in m
    /// * `dimension_b` - Width in m, required for rectangular plates
    /// * `initial_gap` - Electrode gap at zero pressure in m, 1 µm when `None`
    ///
    /// # Errors
    ///
    /// * `MissingDimension` - rectangular plate without a positive width
    /// * `InvalidConfiguration` - non-positive dimensions, gap, or a negative pressure
    /// * `MaterialNotFound` - `material_name` is not in the catalog
    /// * `IntegrationDivergence` - the plate touches the counter-electrode
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::capacitance::CapacitanceService;
    /// use rs_plate_capacitance::materials::MaterialCatalog;
    /// use rs_plate_capacitance::plates::{BoundaryCondition, PlateShape};
    ///
    /// let catalog = MaterialCatalog::new();
    /// let service = CapacitanceService::new(&catalog);
    /// let c = service.compute_capacitance(
    ///     PlateShape::Circular, BoundaryCondition::Clamped, 0.0, "Aluminum", 1e-4, 0.001, None, Some(1e-6),
    /// ).unwrap();
    /// assert!((c - 2.7816e-11).abs() < 1e-14);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn compute_capacitance(
        &self,
        shape: PlateShape,
        boundary_condition: BoundaryCondition,
        pressure: f64,
        material_name: &str,
        thickness: f64,
        dimension_a: f64,
        dimension_b: Option<f64>,
        initial_gap: Option<f64>,
    ) -> Result<f64, CapacitanceError> {
        let geometry = PlateGeometry::new(shape, boundary_condition, dimension_a, dimension_b, thickness)?;
        let load = LoadParameters::new(pressure, initial_gap.unwrap_or(DEFAULT_INITIAL_GAP))?;
        self.capacitance(&geometry, material_name, &load)
    }

    /// Same as [`CapacitanceService::compute_capacitance`] for an already validated plate.
    pub fn capacitance(
        &self,
        geometry: &PlateGeometry,
        material_name: &str,
        load: &LoadParameters,
    ) -> Result<f64, CapacitanceError> {
        geometry.validate()?;
        let material = self.catalog.lookup(material_name)?;
        self.capacitance_for(geometry, &material, load)
    }

    pub(crate) fn capacitance_for(
        &self,
        geometry: &PlateGeometry,
        material: &MaterialRecord,
        load: &LoadParameters,
    ) -> Result<f64, CapacitanceError> {
        let rigidity = flexural_rigidity(material.youngs_modulus, material.poisson_ratio, geometry.thickness);
        let field = DeflectionField::new(geometry, load.applied_pressure, rigidity, &self.settings)?;
        let capacitance = CapacitanceIntegrator::new(&self.settings)
            .integrate(&field, load.initial_gap, material.dielectric_constant)?;
        debug!("{} {} {} plate at {} Pa: C = {:e} F",
               material.name, geometry.shape, geometry.boundary_condition, load.applied_pressure, capacitance);
        Ok(capacitance)
    }
}

/// Computes a capacitance against the process-wide material catalog.
///
/// See [`CapacitanceService::compute_capacitance`].
///
/// # Examples
///
/// ```
/// use rs_plate_capacitance::capacitance::compute_capacitance;
/// use rs_plate_capacitance::plates::{BoundaryCondition, PlateShape};
///
/// let result = compute_capacitance(
///     PlateShape::Rectangular, BoundaryCondition::SimplySupported, 100.0, "Steel", 1e-4, 0.001, None, None,
/// );
/// assert!(result.is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn compute_capacitance(
    shape: PlateShape,
    boundary_condition: BoundaryCondition,
    pressure: f64,
    material_name: &str,
    thickness: f64,
    dimension_a: f64,
    dimension_b: Option<f64>,
    initial_gap: Option<f64>,
) -> Result<f64, CapacitanceError> {
    CapacitanceService::global().compute_capacitance(
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

// src/plates/geometry.rs

use std::fmt;
use std::str::FromStr;
use crate::utils::{CapacitanceError, DEFAULT_INITIAL_GAP};

/// Outline of the deflecting electrode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateShape {
    Circular,
    Rectangular,
}

/// Edge support of the deflecting electrode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    SimplySupported,
    Clamped,
}

impl fmt::Display for PlateShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlateShape::Circular => write!(f, "circular"),
            PlateShape::Rectangular => write!(f, "rectangular"),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoundaryCondition::SimplySupported => write!(f, "simply_supported"),
            BoundaryCondition::Clamped => write!(f, "clamped"),
        }
    }
}

impl FromStr for PlateShape {
    type Err = CapacitanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" => Ok(PlateShape::Circular),
            "rectangular" => Ok(PlateShape::Rectangular),
            _ => Err(CapacitanceError::InvalidConfiguration(format!(
                "Shape must be either 'circular' or 'rectangular', got '{}'", s
            ))),
        }
    }
}

impl FromStr for BoundaryCondition {
    type Err = CapacitanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simply_supported" => Ok(BoundaryCondition::SimplySupported),
            "clamped" => Ok(BoundaryCondition::Clamped),
            _ => Err(CapacitanceError::InvalidConfiguration(format!(
                "Boundary condition must be either 'simply_supported' or 'clamped', got '{}'", s
            ))),
        }
    }
}

/// Shape, support and dimensions of the deflecting electrode (SI units).
///
/// `dimension_a` is the radius of a circular plate or the length of a rectangular one;
/// `dimension_b` is the width and is only used for rectangular plates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateGeometry {
    pub shape: PlateShape,
    pub boundary_condition: BoundaryCondition,
    pub dimension_a: f64,
    pub dimension_b: Option<f64>,
    pub thickness: f64,
}

impl PlateGeometry {
    /// Creates and validates a plate geometry.
    ///
    /// # Errors
    ///
    /// * `MissingDimension` - rectangular plate without a positive width
    /// * `InvalidConfiguration` - thickness or `dimension_a` not a positive finite number
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::plates::{BoundaryCondition, PlateGeometry, PlateShape};
    ///
    /// let plate = PlateGeometry::new(PlateShape::Rectangular, BoundaryCondition::Clamped, 0.002, Some(0.001), 1e-4);
    /// assert!(plate.is_ok());
    ///
    /// let missing = PlateGeometry::new(PlateShape::Rectangular, BoundaryCondition::Clamped, 0.002, None, 1e-4);
    /// assert!(missing.is_err());
    /// ```
    pub fn new(
        shape: PlateShape,
        boundary_condition: BoundaryCondition,
        dimension_a: f64,
        dimension_b: Option<f64>,
        thickness: f64,
    ) -> Result<Self, CapacitanceError> {
        let geometry = Self { shape, boundary_condition, dimension_a, dimension_b, thickness };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn circular(boundary_condition: BoundaryCondition, radius: f64, thickness: f64) -> Result<Self, CapacitanceError> {
        Self::new(PlateShape::Circular, boundary_condition, radius, None, thickness)
    }

    pub fn rectangular(boundary_condition: BoundaryCondition, length: f64, width: f64, thickness: f64) -> Result<Self, CapacitanceError> {
        Self::new(PlateShape::Rectangular, boundary_condition, length, Some(width), thickness)
    }

    pub fn validate(&self) -> Result<(), CapacitanceError> {
        if !is_positive(self.thickness) {
            return Err(CapacitanceError::InvalidConfiguration(format!("Thickness must be positive, got {}", self.thickness)));
        }
        if !is_positive(self.dimension_a) {
            let what = match self.shape {
                PlateShape::Circular => "Radius",
                PlateShape::Rectangular => "Length",
            };
            return Err(CapacitanceError::InvalidConfiguration(format!("{} must be positive, got {}", what, self.dimension_a)));
        }
        if self.shape == PlateShape::Rectangular {
            self.width()?;
        }
        Ok(())
    }

    /// Width of a rectangular plate.
    pub fn width(&self) -> Result<f64, CapacitanceError> {
        match self.dimension_b {
            Some(b) if is_positive(b) => Ok(b),
            Some(b) => Err(CapacitanceError::MissingDimension(format!(
                "Width 'b' of a rectangular plate must be positive, got {}", b
            ))),
            None => Err(CapacitanceError::MissingDimension(
                "Width 'b' must be specified for rectangular plate".to_string(),
            )),
        }
    }

    /// Undeflected electrode area in m².
    pub fn area(&self) -> Result<f64, CapacitanceError> {
        match self.shape {
            PlateShape::Circular => Ok(std::f64::consts::PI * self.dimension_a * self.dimension_a),
            PlateShape::Rectangular => Ok(self.dimension_a * self.width()?),
        }
    }
}

/// Uniform pressure on the plate and the undeflected electrode gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadParameters {
    /// Applied pressure in Pa.
    pub applied_pressure: f64,
    /// Gap between the electrodes at zero pressure in m.
    pub initial_gap: f64,
}

impl LoadParameters {
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the pressure is negative or not finite, or if the
    /// gap is not a positive finite number.
    pub fn new(applied_pressure: f64, initial_gap: f64) -> Result<Self, CapacitanceError> {
        if !applied_pressure.is_finite() || applied_pressure < 0.0 {
            return Err(CapacitanceError::InvalidConfiguration(format!(
                "Pressure must be a non-negative finite value, got {}", applied_pressure
            )));
        }
        if !is_positive(initial_gap) {
            return Err(CapacitanceError::InvalidConfiguration(format!(
                "Initial gap must be positive, got {}", initial_gap
            )));
        }
        Ok(Self { applied_pressure, initial_gap })
    }

    /// Load with the default 1 µm gap.
    pub fn with_default_gap(applied_pressure: f64) -> Result<Self, CapacitanceError> {
        Self::new(applied_pressure, DEFAULT_INITIAL_GAP)
    }
}

/// Flexural rigidity D = E·t³ / (12·(1 − ν²)) of a plate in N·m.
///
/// # Examples
///
/// ```
/// use rs_plate_capacitance::plates::flexural_rigidity;
///
/// let d = flexural_rigidity(200e9, 0.3, 1e-3);
/// assert!((d - 18.315018315018314).abs() < 1e-9);
/// ```
pub fn flexural_rigidity(youngs_modulus: f64, poisson_ratio: f64, thickness: f64) -> f64 {
    youngs_modulus * thickness.powi(3) / (12.0 * (1.0 - poisson_ratio * poisson_ratio))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// src/plates/deflection.rs

use std::f64::consts::PI;
use log::debug;
use crate::plates::{BoundaryCondition, PlateGeometry, PlateShape};
use crate::utils::{CapacitanceError, SolverSettings};

/// Integration domain of a deflection field in its natural coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlateDomain {
    /// r ∈ [0, radius], θ ∈ [0, 2π]
    Polar { radius: f64 },
    /// x ∈ [0, length], y ∈ [0, width]
    Cartesian { length: f64, width: f64 },
}

/// Out-of-plane deflection of a pressure-loaded plate.
///
/// Every variant carries its ceiling `w_max`; [`DeflectionField::at`] never returns more
/// than that value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeflectionField {
    /// Paraboloid w_max·(1 − r²/a²).
    Paraboloid { w_max: f64, radius: f64 },
    /// Double sine series Σ amplitude/(m² + n²)·sin(mπx/a)·sin(nπy/b).
    ModalSeries {
        w_max: f64,
        amplitude: f64,
        length: f64,
        width: f64,
        modes: (u32, u32),
    },
}

impl DeflectionField {
    /// Selects and parameterises the deflection model for a plate under uniform pressure.
    ///
    /// | shape       | boundary         | w_max        | field                                            |
    /// |-------------|------------------|--------------|--------------------------------------------------|
    /// | circular    | simply supported | P·a⁴/(64·D)  | w_max·(1 − r²/a²)                                 |
    /// | circular    | clamped          | P·a⁴/(32·D)  | w_max·(1 − r²/a²)                                 |
    /// | rectangular | simply supported | P·a⁴/(64·D)  | Σ P·a⁴/(D(m²+n²))·sin(mπx/a)·sin(nπy/b)          |
    /// | rectangular | clamped          | P·a⁴/(32·D)  | Σ P·a⁴/(4D(m²+n²))·sin(mπx/a)·sin(nπy/b)         |
    ///
    /// The series are truncated at `settings.simply_supported_modes` and
    /// `settings.clamped_modes` respectively.
    ///
    /// # Errors
    ///
    /// * `MissingDimension` - rectangular plate without a width
    /// * `InvalidConfiguration` - non-positive or non-finite rigidity or negative pressure
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::plates::{BoundaryCondition, DeflectionField, PlateGeometry};
    /// use rs_plate_capacitance::utils::SolverSettings;
    ///
    /// let plate = PlateGeometry::circular(BoundaryCondition::Clamped, 0.001, 1e-4).unwrap();
    /// let field = DeflectionField::new(&plate, 1000.0, 6.5e-3, &SolverSettings::default()).unwrap();
    /// assert_eq!(field.at(0.0, 0.0), field.max_deflection());
    /// assert_eq!(field.at(0.001, 0.0), 0.0);
    /// ```
    pub fn new(
        geometry: &PlateGeometry,
        pressure: f64,
        rigidity: f64,
        settings: &SolverSettings,
    ) -> Result<Self, CapacitanceError> {
        if !rigidity.is_finite() || rigidity <= 0.0 {
            return Err(CapacitanceError::InvalidConfiguration(format!(
                "Flexural rigidity must be positive, got {:e}", rigidity
            )));
        }
        if !pressure.is_finite() || pressure < 0.0 {
            return Err(CapacitanceError::InvalidConfiguration(format!(
                "Pressure must be a non-negative finite value, got {}", pressure
            )));
        }

        let a = geometry.dimension_a;
        let load = pressure * a.powi(4) / rigidity;
        let field = match (geometry.shape, geometry.boundary_condition) {
            (PlateShape::Circular, BoundaryCondition::SimplySupported) => {
                DeflectionField::Paraboloid { w_max: load / 64.0, radius: a }
            }
            (PlateShape::Circular, BoundaryCondition::Clamped) => {
                DeflectionField::Paraboloid { w_max: load / 32.0, radius: a }
            }
            (PlateShape::Rectangular, BoundaryCondition::SimplySupported) => DeflectionField::ModalSeries {
                w_max: load / 64.0,
                amplitude: load,
                length: a,
                width: geometry.width()?,
                modes: settings.simply_supported_modes,
            },
            (PlateShape::Rectangular, BoundaryCondition::Clamped) => DeflectionField::ModalSeries {
                w_max: load / 32.0,
                amplitude: load / 4.0,
                length: a,
                width: geometry.width()?,
                modes: settings.clamped_modes,
            },
        };

        debug!("{} {} plate: D = {:e} N·m, w_max = {:e} m",
               geometry.shape, geometry.boundary_condition, rigidity, field.max_deflection());
        Ok(field)
    }

    /// Ceiling of the field in m.
    pub fn max_deflection(&self) -> f64 {
        match *self {
            DeflectionField::Paraboloid { w_max, .. } => w_max,
            DeflectionField::ModalSeries { w_max, .. } => w_max,
        }
    }

    pub fn domain(&self) -> PlateDomain {
        match *self {
            DeflectionField::Paraboloid { radius, .. } => PlateDomain::Polar { radius },
            DeflectionField::ModalSeries { length, width, .. } => PlateDomain::Cartesian { length, width },
        }
    }

    /// Deflection at `(r, θ)` for polar fields or `(x, y)` for Cartesian ones, capped at
    /// [`DeflectionField::max_deflection`].
    ///
    /// The cap hides any mismatch between the truncated series and the closed-form
    /// maximum: away from the centre the raw series can exceed `w_max`, and the capped
    /// field is then flat there.
    #[inline]
    pub fn at(&self, first: f64, second: f64) -> f64 {
        self.uncapped(first, second).min(self.max_deflection())
    }

    /// Field value before the `w_max` cap is applied.
    pub fn uncapped(&self, first: f64, second: f64) -> f64 {
        match *self {
            DeflectionField::Paraboloid { w_max, radius } => {
                w_max * (1.0 - (first * first) / (radius * radius))
            }
            DeflectionField::ModalSeries { amplitude, length, width, modes, .. } => {
                amplitude * modal_sum(first / length, second / width, modes)
            }
        }
    }
}

/// Σ_{m,n} sin(mπξ)·sin(nπη) / (m² + n²) for normalised coordinates ξ, η.
fn modal_sum(xi: f64, eta: f64, (m_max, n_max): (u32, u32)) -> f64 {
    let mut sum = 0.0;
    for (m, sin_x) in (1..=m_max).zip(sine_multiples(PI * xi)) {
        let m2 = f64::from(m * m);
        for (n, sin_y) in (1..=n_max).zip(sine_multiples(PI * eta)) {
            sum += sin_x * sin_y / (m2 + f64::from(n * n));
        }
    }
    sum
}

/// sin(t), sin(2t), sin(3t), … by the Chebyshev recurrence
/// sin((k+1)t) = 2·cos(t)·sin(kt) − sin((k−1)t).
pub(crate) fn sine_multiples(t: f64) -> impl Iterator<Item = f64> {
    let two_cos = 2.0 * t.cos();
    let mut previous = 0.0;
    let mut current = t.sin();
    std::iter::from_fn(move || {
        let value = current;
        let next = two_cos * current - previous;
        previous = current;
        current = next;
        Some(value)
    })
}

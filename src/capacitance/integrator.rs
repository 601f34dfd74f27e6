// src/capacitance/integrator.rs

use std::f64::consts::PI;
use log::{debug, warn};
use crate::plates::{DeflectionField, PlateDomain};
use crate::utils::{AdaptiveQuadrature, CapacitanceError, SolverSettings, VACUUM_PERMITTIVITY};

/// Integrates the parallel-plate capacitance differential over a deflected plate:
///
/// C = K·ε₀·∬ dA / (d₀ − w)
///
/// Circular plates are integrated in polar coordinates (dA = r·dr·dθ), rectangular plates
/// in Cartesian coordinates (dA = dx·dy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitanceIntegrator {
    quadrature: AdaptiveQuadrature,
    contact_scan_resolution: usize,
}

impl Default for CapacitanceIntegrator {
    fn default() -> Self {
        Self::new(&SolverSettings::default())
    }
}

impl CapacitanceIntegrator {
    pub fn new(settings: &SolverSettings) -> Self {
        Self {
            quadrature: AdaptiveQuadrature::from_settings(settings),
            contact_scan_resolution: settings.contact_scan_resolution,
        }
    }

    /// Capacitance in farads of a plate with deflection `field` over a gap `initial_gap`
    /// filled with a dielectric of relative permittivity `dielectric_constant`.
    ///
    /// # Errors
    ///
    /// Returns `CapacitanceError::IntegrationDivergence` if the deflection closes the gap
    /// anywhere on the plate (pull-in) or if the integral does not converge.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::capacitance::CapacitanceIntegrator;
    /// use rs_plate_capacitance::plates::DeflectionField;
    ///
    /// let flat = DeflectionField::Paraboloid { w_max: 0.0, radius: 0.001 };
    /// let c = CapacitanceIntegrator::default().integrate(&flat, 1e-6, 1.0).unwrap();
    /// assert!((c - 2.7816e-11).abs() < 1e-14);
    /// ```
    pub fn integrate(
        &self,
        field: &DeflectionField,
        initial_gap: f64,
        dielectric_constant: f64,
    ) -> Result<f64, CapacitanceError> {
        if !initial_gap.is_finite() || initial_gap <= 0.0 {
            return Err(CapacitanceError::InvalidConfiguration(format!(
                "Initial gap must be positive, got {}", initial_gap
            )));
        }
        self.check_contact(field, initial_gap)?;

        let integral = match field.domain() {
            PlateDomain::Polar { radius } => self.quadrature.integrate_2d(
                |r, theta| local_gap(field, initial_gap, r, theta).map(|gap| r / gap),
                (0.0, 2.0 * PI),
                |_| 0.0,
                |_| radius,
            )?,
            PlateDomain::Cartesian { length, width } => self.quadrature.integrate_2d(
                |x, y| local_gap(field, initial_gap, x, y).map(|gap| 1.0 / gap),
                (0.0, width),
                |_| 0.0,
                |_| length,
            )?,
        };

        let capacitance = dielectric_constant * VACUUM_PERMITTIVITY * integral.value;
        if !capacitance.is_finite() {
            return Err(CapacitanceError::IntegrationDivergence(format!(
                "capacitance integral evaluated to {}", capacitance
            )));
        }
        debug!("∬ dA/(d0 - w) = {:e} (error {:e}, {} outer intervals), C = {:e} F",
               integral.value, integral.error, integral.intervals, capacitance);
        Ok(capacitance)
    }

    /// Samples the field on a regular grid (plus the domain centre) and fails if the
    /// deflection reaches the gap at any sample.
    pub fn check_contact(&self, field: &DeflectionField, initial_gap: f64) -> Result<(), CapacitanceError> {
        let n = self.contact_scan_resolution.max(2);
        let step = 1.0 / (n - 1) as f64;
        let (first_extent, second_extent, centre) = match field.domain() {
            PlateDomain::Polar { radius } => (radius, 2.0 * PI, (0.0, 0.0)),
            PlateDomain::Cartesian { length, width } => (length, width, (0.5 * length, 0.5 * width)),
        };

        local_gap(field, initial_gap, centre.0, centre.1)?;
        for i in 0..n {
            let u = first_extent * i as f64 * step;
            for j in 0..n {
                let v = second_extent * j as f64 * step;
                local_gap(field, initial_gap, u, v)?;
            }
        }
        Ok(())
    }
}

/// d₀ − w at one point, or a divergence error once the electrodes touch.
fn local_gap(field: &DeflectionField, initial_gap: f64, u: f64, v: f64) -> Result<f64, CapacitanceError> {
    let deflection = field.at(u, v);
    let gap = initial_gap - deflection;
    if gap > initial_gap * f64::EPSILON {
        Ok(gap)
    } else {
        warn!("Electrode contact at ({:e}, {:e}): deflection {:e} m, gap {:e} m",
              u, v, deflection, initial_gap);
        Err(CapacitanceError::IntegrationDivergence(format!(
            "deflection {:e} m at ({:e}, {:e}) closes the {:e} m gap (pull-in)",
            deflection, u, v, initial_gap
        )))
    }
}

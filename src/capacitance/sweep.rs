// src/capacitance/sweep.rs

use log::debug;
use rayon::prelude::*;
use crate::capacitance::CapacitanceService;
use crate::plates::{LoadParameters, PlateGeometry};
use crate::utils::{CapacitanceError, PICOFARADS_PER_FARAD};

/// Evenly spaced pressures from `min_pressure` to `max_pressure`, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureSweep {
    pub min_pressure: f64,
    pub max_pressure: f64,
    pub points: usize,
}

impl PressureSweep {
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for zero points, non-finite bounds, a negative lower
    /// bound, or `max_pressure < min_pressure`.
    pub fn new(min_pressure: f64, max_pressure: f64, points: usize) -> Result<Self, CapacitanceError> {
        if points == 0 {
            return Err(CapacitanceError::InvalidConfiguration("A pressure sweep needs at least one point".to_string()));
        }
        if !min_pressure.is_finite() || !max_pressure.is_finite() {
            return Err(CapacitanceError::InvalidConfiguration("Sweep bounds must be finite".to_string()));
        }
        if min_pressure < 0.0 {
            return Err(CapacitanceError::InvalidConfiguration(format!(
                "Minimum pressure must be non-negative, got {}", min_pressure
            )));
        }
        if max_pressure < min_pressure {
            return Err(CapacitanceError::InvalidConfiguration(format!(
                "Maximum pressure {} is below minimum pressure {}", max_pressure, min_pressure
            )));
        }
        Ok(Self { min_pressure, max_pressure, points })
    }

    /// The sweep's pressures; a single point sweep yields only `min_pressure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_plate_capacitance::capacitance::PressureSweep;
    ///
    /// let sweep = PressureSweep::new(0.0, 1000.0, 5).unwrap();
    /// assert_eq!(sweep.pressures(), vec![0.0, 250.0, 500.0, 750.0, 1000.0]);
    /// ```
    pub fn pressures(&self) -> Vec<f64> {
        if self.points == 1 {
            return vec![self.min_pressure];
        }
        let step = (self.max_pressure - self.min_pressure) / (self.points - 1) as f64;
        let mut pressures: Vec<f64> = (0..self.points)
            .map(|i| self.min_pressure + i as f64 * step)
            .collect();
        if let Some(last) = pressures.last_mut() {
            *last = self.max_pressure;
        }
        pressures
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Pa
    pub pressure: f64,
    /// F
    pub capacitance: f64,
}

/// Capacitance at every pressure of a sweep, in sweep order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn capacitances(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.capacitance).collect()
    }

    pub fn capacitances_pf(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.capacitance * PICOFARADS_PER_FARAD).collect()
    }

    /// Change of each capacitance relative to the first point, in percent.
    pub fn percent_change(&self) -> Vec<f64> {
        let Some(baseline) = self.points.first().map(|p| p.capacitance) else {
            return Vec::new();
        };
        self.points
            .iter()
            .map(|p| (p.capacitance - baseline) / baseline * 100.0)
            .collect()
    }
}

impl CapacitanceService<'_> {
    /// Evaluates the capacitance at every pressure of `sweep` in parallel.
    ///
    /// The material is resolved once up front. The first failing pressure fails the whole
    /// sweep; no partial result is returned.
    pub fn sweep(
        &self,
        geometry: &PlateGeometry,
        material_name: &str,
        initial_gap: f64,
        sweep: &PressureSweep,
    ) -> Result<SweepResult, CapacitanceError> {
        geometry.validate()?;
        let material = self.catalog().lookup(material_name)?;
        let pressures = sweep.pressures();
        debug!("Sweeping {} pressures from {} Pa to {} Pa", pressures.len(), sweep.min_pressure, sweep.max_pressure);

        let points = pressures
            .par_iter()
            .map(|&pressure| -> Result<SweepPoint, CapacitanceError> {
                let load = LoadParameters::new(pressure, initial_gap)?;
                let capacitance = self.capacitance_for(geometry, &material, &load)?;
                Ok(SweepPoint { pressure, capacitance })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SweepResult { points })
    }
}

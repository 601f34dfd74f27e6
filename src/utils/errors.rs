// src/utils/errors.rs

use std::fmt;
use std::error::Error;

/// Represents errors that can occur while computing the capacitance of a deflected plate.
#[derive(Debug, Clone, PartialEq)]
pub enum CapacitanceError {
    /// Indicates an unsupported shape/boundary combination or an out-of-range parameter.
    InvalidConfiguration(String),
    /// Indicates that the requested material is not present in the catalog.
    MaterialNotFound(String),
    /// Indicates that a rectangular plate was given without a usable width.
    MissingDimension(String),
    /// Indicates that the capacitance integrand diverged (electrode contact / pull-in)
    /// or that the integral failed to converge.
    IntegrationDivergence(String),
}

impl fmt::Display for CapacitanceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CapacitanceError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            CapacitanceError::MaterialNotFound(name) => write!(f, "Material {} not found", name),
            CapacitanceError::MissingDimension(msg) => write!(f, "Missing dimension: {}", msg),
            CapacitanceError::IntegrationDivergence(msg) => write!(f, "Integration diverged: {}", msg),
        }
    }
}

impl Error for CapacitanceError {}

/// Failures of the adaptive quadrature routine itself.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// The integrand returned NaN or an infinite value at `at`.
    NonFiniteIntegrand { at: f64 },
    /// The interval budget was spent before the error estimate met the tolerance.
    SubdivisionLimit { estimate: f64, error: f64 },
    /// An interval became too narrow to bisect in floating point.
    RoundoffLimit { at: f64 },
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadratureError::NonFiniteIntegrand { at } => {
                write!(f, "integrand is not finite at {:e}", at)
            }
            QuadratureError::SubdivisionLimit { estimate, error } => write!(
                f,
                "subdivision limit reached (estimate {:e}, error {:e})",
                estimate, error
            ),
            QuadratureError::RoundoffLimit { at } => {
                write!(f, "interval near {:e} cannot be subdivided further", at)
            }
        }
    }
}

impl Error for QuadratureError {}

impl From<QuadratureError> for CapacitanceError {
    fn from(err: QuadratureError) -> Self {
        CapacitanceError::IntegrationDivergence(err.to_string())
    }
}

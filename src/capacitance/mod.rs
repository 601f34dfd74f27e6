mod integrator;
mod service;
#[cfg(feature = "sweep")]
mod sweep;

pub use integrator::*;
pub use service::*;
#[cfg(feature = "sweep")]
pub use sweep::*;

#[cfg(test)]
#[cfg(feature = "sweep")]
mod sweep_tests;

pub mod errors;
mod constants;
mod solver_config;
mod quadrature;

pub use errors::*;
pub use constants::*;
pub use solver_config::*;
pub use quadrature::*;

#[cfg(test)]
mod solver_config_tests;

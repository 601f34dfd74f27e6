mod geometry;
mod deflection;

pub use geometry::*;
pub use deflection::*;

#[cfg(test)]
mod geometry_tests;

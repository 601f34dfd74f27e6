mod materials;
pub use materials::*;

#[cfg(test)]
mod materials_tests;

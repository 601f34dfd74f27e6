/// Permittivity of free space ε₀ in F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.85418782e-12;

/// Initial electrode gap used when the caller does not give one (1 µm).
pub const DEFAULT_INITIAL_GAP: f64 = 1e-6;

/// Picofarads per farad.
pub const PICOFARADS_PER_FARAD: f64 = 1e12;

pub const DEFAULT_SOLVER_SETTINGS: crate::utils::SolverSettings = crate::utils::SolverSettings {
    abs_tolerance: 1.49e-8,
    rel_tolerance: 1.49e-8,
    max_subdivisions: 200,
    simply_supported_modes: (4, 4),
    clamped_modes: (4, 50),
    contact_scan_resolution: 64,
};

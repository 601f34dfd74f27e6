use crate::utils::{SolverSettings, DEFAULT_SOLVER_SETTINGS};

#[test]
fn test_default_settings_truncation_orders() {
    let settings = SolverSettings::default();
    assert_eq!(settings, DEFAULT_SOLVER_SETTINGS);
    assert_eq!(settings.simply_supported_modes, (4, 4));
    assert_eq!(settings.clamped_modes, (4, 50));
    assert!(settings.validate().is_ok());
}

#[test]
fn test_new_overrides_only_given_values() {
    let settings = SolverSettings::new(Some(1e-10), None, None, None, Some((6, 6)), None).unwrap();
    assert_eq!(settings.abs_tolerance, 1e-10);
    assert_eq!(settings.rel_tolerance, DEFAULT_SOLVER_SETTINGS.rel_tolerance);
    assert_eq!(settings.clamped_modes, (6, 6));
    assert_eq!(settings.simply_supported_modes, (4, 4));
}

#[test]
fn test_new_rejects_invalid_values() {
    assert!(SolverSettings::new(Some(-1.0), None, None, None, None, None).is_err(), "Negative tolerance");
    assert!(SolverSettings::new(Some(0.0), Some(0.0), None, None, None, None).is_err(), "Both tolerances zero");
    assert!(SolverSettings::new(None, Some(f64::NAN), None, None, None, None).is_err(), "NaN tolerance");
    assert!(SolverSettings::new(None, None, Some(0), None, None, None).is_err(), "Zero subdivisions");
    assert!(SolverSettings::new(None, None, None, Some((0, 4)), None, None).is_err(), "Zero modes");
    assert!(SolverSettings::new(None, None, None, None, None, Some(1)).is_err(), "Scan too coarse");
}

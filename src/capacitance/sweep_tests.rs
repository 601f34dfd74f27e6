use approx::assert_relative_eq;
use crate::capacitance::{CapacitanceService, PressureSweep, SweepPoint, SweepResult};
use crate::materials::MaterialCatalog;
use crate::plates::{BoundaryCondition, PlateGeometry};
use crate::utils::CapacitanceError;

#[test]
fn test_pressures_match_linspace() {
    let sweep = PressureSweep::new(0.0, 1000.0, 50).unwrap();
    let pressures = sweep.pressures();
    assert_eq!(pressures.len(), 50);
    assert_eq!(pressures[0], 0.0);
    assert_eq!(pressures[49], 1000.0);
    assert_relative_eq!(pressures[1], 1000.0 / 49.0, max_relative = 1e-14);

    assert_eq!(PressureSweep::new(5.0, 10.0, 1).unwrap().pressures(), vec![5.0]);
    assert_eq!(PressureSweep::new(7.0, 7.0, 3).unwrap().pressures(), vec![7.0, 7.0, 7.0]);
}

#[test]
fn test_invalid_sweeps() {
    assert!(PressureSweep::new(0.0, 1000.0, 0).is_err(), "No points");
    assert!(PressureSweep::new(1000.0, 0.0, 10).is_err(), "Reversed bounds");
    assert!(PressureSweep::new(-1.0, 10.0, 10).is_err(), "Negative pressure");
    assert!(PressureSweep::new(0.0, f64::INFINITY, 10).is_err(), "Infinite bound");
}

#[test]
fn test_result_conversions() {
    let result = SweepResult {
        points: vec![
            SweepPoint { pressure: 0.0, capacitance: 2.0e-11 },
            SweepPoint { pressure: 500.0, capacitance: 2.5e-11 },
        ],
    };
    assert_eq!(result.capacitances(), vec![2.0e-11, 2.5e-11]);
    let pf = result.capacitances_pf();
    assert_relative_eq!(pf[0], 20.0, max_relative = 1e-12);
    assert_relative_eq!(pf[1], 25.0, max_relative = 1e-12);
    let change = result.percent_change();
    assert_eq!(change[0], 0.0);
    assert_relative_eq!(change[1], 25.0, max_relative = 1e-12);

    assert!(SweepResult { points: Vec::new() }.percent_change().is_empty());
}

#[test]
fn test_sweep_matches_single_calls() {
    let catalog = MaterialCatalog::new();
    let service = CapacitanceService::new(&catalog);
    let plate = PlateGeometry::circular(BoundaryCondition::Clamped, 0.001, 1e-4).unwrap();
    let sweep = PressureSweep::new(0.0, 1e5, 5).unwrap();

    let result = service.sweep(&plate, "Aluminum", 1e-6, &sweep).unwrap();
    assert_eq!(result.points.len(), 5);
    for point in &result.points {
        let single = service
            .compute_capacitance(plate.shape, plate.boundary_condition, point.pressure, "Aluminum", 1e-4, 0.001, None, Some(1e-6))
            .unwrap();
        assert_eq!(point.capacitance, single);
    }
    let change = result.percent_change();
    assert_eq!(change[0], 0.0);
    assert!(change.windows(2).all(|w| w[1] >= w[0]), "{:?}", change);
}

#[test]
fn test_sweep_into_pull_in_fails_whole_sweep() {
    let catalog = MaterialCatalog::new();
    let service = CapacitanceService::new(&catalog);
    let plate = PlateGeometry::rectangular(BoundaryCondition::SimplySupported, 0.001, 0.001, 1e-4).unwrap();
    let sweep = PressureSweep::new(0.0, 1e10, 3).unwrap();
    let result = service.sweep(&plate, "Steel", 1e-6, &sweep);
    assert!(matches!(result, Err(CapacitanceError::IntegrationDivergence(_))), "{:?}", result);
}

#[test]
fn test_sweep_unknown_material() {
    let catalog = MaterialCatalog::new();
    let service = CapacitanceService::new(&catalog);
    let plate = PlateGeometry::circular(BoundaryCondition::Clamped, 0.001, 1e-4).unwrap();
    let sweep = PressureSweep::new(0.0, 1000.0, 4).unwrap();
    assert_eq!(
        service.sweep(&plate, "Nonexistent", 1e-6, &sweep),
        Err(CapacitanceError::MaterialNotFound("Nonexistent".to_string()))
    );
}

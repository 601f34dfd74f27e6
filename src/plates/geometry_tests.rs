use std::f64::consts::PI;
use crate::assert_float_eq;
use crate::plates::{flexural_rigidity, BoundaryCondition, LoadParameters, PlateGeometry, PlateShape};
use crate::utils::{CapacitanceError, DEFAULT_INITIAL_GAP};

#[test]
fn test_parse_shape_and_boundary() {
    assert_eq!("circular".parse::<PlateShape>(), Ok(PlateShape::Circular));
    assert_eq!(" Rectangular ".parse::<PlateShape>(), Ok(PlateShape::Rectangular));
    assert_eq!("simply_supported".parse::<BoundaryCondition>(), Ok(BoundaryCondition::SimplySupported));
    assert_eq!("clamped".parse::<BoundaryCondition>(), Ok(BoundaryCondition::Clamped));

    assert!(matches!("triangular".parse::<PlateShape>(), Err(CapacitanceError::InvalidConfiguration(_))));
    assert!(matches!("free".parse::<BoundaryCondition>(), Err(CapacitanceError::InvalidConfiguration(_))));
}

#[test]
fn test_display_round_trips_through_parse() {
    for shape in [PlateShape::Circular, PlateShape::Rectangular] {
        assert_eq!(shape.to_string().parse::<PlateShape>(), Ok(shape));
    }
    for boundary in [BoundaryCondition::SimplySupported, BoundaryCondition::Clamped] {
        assert_eq!(boundary.to_string().parse::<BoundaryCondition>(), Ok(boundary));
    }
}

#[test]
fn test_rectangular_requires_positive_width() {
    let missing = PlateGeometry::new(PlateShape::Rectangular, BoundaryCondition::SimplySupported, 0.001, None, 1e-4);
    assert!(matches!(missing, Err(CapacitanceError::MissingDimension(_))));

    let zero = PlateGeometry::new(PlateShape::Rectangular, BoundaryCondition::SimplySupported, 0.001, Some(0.0), 1e-4);
    assert!(matches!(zero, Err(CapacitanceError::MissingDimension(_))));

    let ok = PlateGeometry::rectangular(BoundaryCondition::SimplySupported, 0.001, 0.002, 1e-4).unwrap();
    assert_eq!(ok.width(), Ok(0.002));
}

#[test]
fn test_circular_ignores_width() {
    let plate = PlateGeometry::new(PlateShape::Circular, BoundaryCondition::Clamped, 0.001, Some(-1.0), 1e-4);
    assert!(plate.is_ok());
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        PlateGeometry::circular(BoundaryCondition::Clamped, 0.0, 1e-4),
        Err(CapacitanceError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        PlateGeometry::circular(BoundaryCondition::Clamped, 0.001, -1e-4),
        Err(CapacitanceError::InvalidConfiguration(_))
    ));
    assert!(PlateGeometry::circular(BoundaryCondition::Clamped, f64::NAN, 1e-4).is_err());
    assert!(PlateGeometry::rectangular(BoundaryCondition::Clamped, f64::INFINITY, 0.001, 1e-4).is_err());
}

#[test]
fn test_area() {
    let disc = PlateGeometry::circular(BoundaryCondition::Clamped, 0.001, 1e-4).unwrap();
    assert_float_eq(disc.area().unwrap(), PI * 1e-6, 1e-18, Some("Disc area"));

    let rect = PlateGeometry::rectangular(BoundaryCondition::Clamped, 0.002, 0.001, 1e-4).unwrap();
    assert_float_eq(rect.area().unwrap(), 2e-6, 1e-18, Some("Rectangle area"));
}

#[test]
fn test_load_parameters() {
    let load = LoadParameters::with_default_gap(100.0).unwrap();
    assert_eq!(load.initial_gap, DEFAULT_INITIAL_GAP);
    assert_eq!(load.applied_pressure, 100.0);

    assert!(LoadParameters::new(0.0, 1e-6).is_ok(), "Zero pressure is valid");
    assert!(LoadParameters::new(-1.0, 1e-6).is_err(), "Negative pressure");
    assert!(LoadParameters::new(f64::NAN, 1e-6).is_err(), "NaN pressure");
    assert!(LoadParameters::new(100.0, 0.0).is_err(), "Zero gap");
    assert!(LoadParameters::new(100.0, -1e-6).is_err(), "Negative gap");
}

#[test]
fn test_flexural_rigidity() {
    // Aluminum, 0.1 mm thick
    let d = flexural_rigidity(70e9, 0.33, 1e-4);
    assert_float_eq(d, 70e9 * 1e-12 / (12.0 * (1.0 - 0.33 * 0.33)), 1e-15, Some("Aluminum rigidity"));

    // Rigidity scales with the cube of the thickness.
    let ratio = flexural_rigidity(70e9, 0.33, 2e-4) / d;
    assert_float_eq(ratio, 8.0, 1e-12, None);
}

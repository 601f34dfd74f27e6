// demos/pressure_sweep.rs

use rs_plate_capacitance::capacitance::{CapacitanceService, PressureSweep};
use rs_plate_capacitance::plates::{BoundaryCondition, PlateGeometry};
use rs_plate_capacitance::utils::{CapacitanceError, DEFAULT_INITIAL_GAP};

fn main() -> Result<(), CapacitanceError> {
    env_logger::init();

    let service = CapacitanceService::global();

    // 1 mm radius, 0.1 mm thick aluminum diaphragm over a 1 µm gap
    let plate = PlateGeometry::circular(BoundaryCondition::Clamped, 0.001, 1e-4)?;
    let sweep = PressureSweep::new(0.0, 1000.0, 50)?;

    let result = service.sweep(&plate, "Aluminum", DEFAULT_INITIAL_GAP, &sweep)?;

    println!("{:>12} {:>16} {:>14}", "P (Pa)", "C (pF)", "ΔC (%)");
    let capacitances = result.capacitances_pf();
    let changes = result.percent_change();
    for ((point, c_pf), change) in result.points.iter().zip(&capacitances).zip(&changes) {
        println!("{:>12.2} {:>16.10} {:>14.3e}", point.pressure, c_pf, change);
    }

    // Pressure at which the centre of the plate reaches the counter-electrode
    let contact = service.compute_capacitance(
        plate.shape, plate.boundary_condition, 1e9, "Aluminum", plate.thickness, plate.dimension_a, None, None,
    );
    match contact {
        Err(CapacitanceError::IntegrationDivergence(reason)) => println!("\nAt 1 GPa: pull-in ({})", reason),
        other => println!("\nAt 1 GPa: {:?}", other),
    }

    Ok(())
}

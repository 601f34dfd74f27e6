// rs_plate_capacitance_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the capacitance library.

use wasm_bindgen::prelude::*;
use rs_plate_capacitance::apis::easy_capacitance::EasyCapacitance;
use rs_plate_capacitance::utils::CapacitanceError;

fn to_js_error(error: CapacitanceError) -> JsValue {
    let message = error.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

#[wasm_bindgen]
pub struct WasmCapacitance {
    easy: EasyCapacitance,
}

#[wasm_bindgen]
impl WasmCapacitance {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            easy: EasyCapacitance::new(),
        }
    }

    /// Capacitance in farads; `dimension_b` is the width of rectangular plates and
    /// `initial_gap` defaults to 1 µm.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn compute_capacitance(
        &self,
        shape: &str,
        boundary_condition: &str,
        pressure: f64,
        material_name: &str,
        thickness: f64,
        dimension_a: f64,
        dimension_b: Option<f64>,
        initial_gap: Option<f64>,
    ) -> Result<f64, JsValue> {
        self.easy
            .compute_capacitance(shape, boundary_condition, pressure, material_name, thickness, dimension_a, dimension_b, initial_gap)
            .map_err(to_js_error)
    }

    /// Capacitances in picofarads over an evenly spaced pressure range.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn sweep_pf(
        &self,
        shape: &str,
        boundary_condition: &str,
        material_name: &str,
        thickness: f64,
        dimension_a: f64,
        dimension_b: Option<f64>,
        initial_gap: Option<f64>,
        min_pressure: f64,
        max_pressure: f64,
        points: usize,
    ) -> Result<js_sys::Float64Array, JsValue> {
        let result = self.easy
            .sweep(shape, boundary_condition, material_name, thickness, dimension_a, dimension_b, initial_gap, min_pressure, max_pressure, points)
            .map_err(to_js_error)?;
        Ok(js_sys::Float64Array::from(result.capacitances_pf().as_slice()))
    }

    #[wasm_bindgen]
    pub fn add_material(&self, name: &str, youngs_modulus: f64, poisson_ratio: f64, dielectric_constant: f64) {
        self.easy.add_material(name, youngs_modulus, poisson_ratio, dielectric_constant);
    }

    #[wasm_bindgen]
    pub fn list_materials(&self) -> js_sys::Array {
        self.easy
            .list_materials()
            .into_iter()
            .map(|name| JsValue::from_str(&name))
            .collect()
    }
}

impl Default for WasmCapacitance {
    fn default() -> Self {
        Self::new()
    }
}

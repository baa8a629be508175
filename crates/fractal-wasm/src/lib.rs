use wasm_bindgen::prelude::*;
use fractal_core::{sample_slice, Fractal2D, FractalParams, Grid, Simplex};

/// Params arrive as a plain JS object (`{ layers: 6, gain: 0.6 }`);
/// `undefined` or `null` means all defaults.
fn params_from_js(params: JsValue) -> Result<FractalParams, JsValue> {
    if params.is_undefined() || params.is_null() {
        return Ok(FractalParams::default());
    }
    serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid params: {e}")))
}

/// Sample fractal noise over seeded OpenSimplex at a 1 to 4 dimensional point.
#[wasm_bindgen]
pub fn sample(params: JsValue, seed: u32, point: Vec<f64>) -> Result<f64, JsValue> {
    let params = params_from_js(params)?;
    sample_slice(&Simplex::new(seed), params, &point).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sample a `width × height` 2D grid, row-major, returned as a Float64Array.
#[wasm_bindgen]
pub fn sample_grid(
    params: JsValue,
    seed: u32,
    width: usize,
    height: usize,
    origin_x: f64,
    origin_y: f64,
    step: f64,
) -> Result<Vec<f64>, JsValue> {
    let params = params_from_js(params)?;
    let base = Simplex::new(seed);
    let fbm = Fractal2D::new(&base, params);
    Ok(Grid::sample(&fbm, width, height, [origin_x, origin_y], step).data)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn grid_has_requested_size() {
        let data = sample_grid(JsValue::UNDEFINED, 7, 8, 4, 0.0, 0.0, 0.1).unwrap();
        assert_eq!(data.len(), 32);
        assert!(data.iter().all(|v| v.is_finite()));
    }

    #[wasm_bindgen_test]
    fn bad_arity_is_an_error() {
        assert!(sample(JsValue::NULL, 0, vec![1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
    }

    #[wasm_bindgen_test]
    fn object_params_are_parsed() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"layers".into(), &JsValue::from_f64(2.0)).unwrap();
        let params = params_from_js(obj.into()).unwrap();
        assert_eq!(params, FractalParams::new().layers(2));
    }
}

//! WebAssembly bindings.

use wasm_bindgen::prelude::*;

use crate::distance::distance;
use crate::models::Coordinate;
use crate::request::OptimizeRequest;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// Optimizes a request object and returns the route as a plain JS object.
#[wasm_bindgen(js_name = optimizeRoute)]
pub fn optimize_route(request: JsValue) -> Result<JsValue, JsValue> {
    let mut request: OptimizeRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| js_error(format!("invalid request: {e}")))?;

    // wasm32-unknown-unknown has no monotonic clock.
    request.config.time_limit_ms = None;

    let route = request.solve().map_err(js_error)?;
    serde_wasm_bindgen::to_value(&route).map_err(js_error)
}

/// Great-circle distance in kilometers between two coordinates.
#[wasm_bindgen(js_name = greatCircleDistance)]
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, JsValue> {
    let a = Coordinate::new(lat1, lon1).map_err(js_error)?;
    let b = Coordinate::new(lat2, lon2).map_err(js_error)?;
    Ok(distance(a, b))
}

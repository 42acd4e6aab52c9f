//! C ABI entry points.
//!
//! Requests and routes cross the boundary as JSON (see
//! [`OptimizeRequest`](crate::request::OptimizeRequest)). Results are
//! delivered through callbacks; the passed strings are only valid for the
//! duration of the callback.

use std::ffi::{CStr, CString};

use libc::c_char;

use crate::distance::distance;
use crate::models::Coordinate;
use crate::request::OptimizeRequest;

/// Receives a NUL-terminated UTF-8 string.
pub type Callback = extern "C" fn(*const c_char);

fn optimize_json(request: &str) -> Result<String, String> {
    let request: OptimizeRequest =
        serde_json::from_str(request).map_err(|e| format!("invalid request: {e}"))?;
    let route = request.solve().map_err(|e| e.to_string())?;
    serde_json::to_string(&route).map_err(|e| format!("cannot serialize route: {e}"))
}

fn deliver(message: String, callback: Callback) {
    // Interior NULs cannot occur in serde_json output or our messages; strip
    // them anyway rather than dropping the result.
    let message = CString::new(message.replace('\0', "")).unwrap_or_default();
    callback(message.as_ptr());
}

/// Optimizes the JSON-encoded request and reports the JSON route through
/// `success`, or an error message through `failure`.
///
/// # Safety
///
/// `request` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn geo_route_optimize(
    request: *const c_char,
    success: Callback,
    failure: Callback,
) {
    if request.is_null() {
        deliver("request is null".to_string(), failure);
        return;
    }

    let result = CStr::from_ptr(request)
        .to_str()
        .map_err(|e| format!("request is not valid UTF-8: {e}"))
        .and_then(optimize_json);

    match result {
        Ok(route) => deliver(route, success),
        Err(err) => deliver(err, failure),
    }
}

/// Great-circle distance in kilometers, or a negative value if either
/// coordinate is out of range.
#[no_mangle]
pub extern "C" fn geo_route_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    match (Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2)) {
        (Ok(a), Ok(b)) => distance(a, b),
        _ => -1.0,
    }
}

//! WASM bindings for the object-position parser.
//!
//! Exposes `parseObjectPosition()` to JavaScript via wasm-bindgen, returning
//! `[x, y]` as a `Float64Array`. `null` and `undefined` parse to the center.

use objpos_parser::{ObjectPosition, Parser};
use wasm_bindgen::prelude::*;

fn parse(input: Option<String>) -> ObjectPosition {
    objpos_parser::parse_optional(input.as_deref())
}

/// Parse an `object-position` value into `[x, y]`.
#[wasm_bindgen(js_name = parseObjectPosition)]
pub fn parse_object_position(input: Option<String>) -> js_sys::Float64Array {
    let pos = parse(input);
    js_sys::Float64Array::from(&[pos.x, pos.y][..])
}

/// Parse an `object-position` value into a plain `{ x, y }` object.
#[wasm_bindgen(js_name = parsePosition)]
pub fn parse_position(input: Option<String>) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&parse(input)).map_err(|e| JsError::new(&e.to_string()))
}

/// Validate a value strictly. Returns `{ x, y }` or throws with the column of
/// the first problem.
#[wasm_bindgen(js_name = checkPosition)]
pub fn check_position(input: &str) -> Result<JsValue, JsError> {
    let pos = Parser::check(input).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&pos).map_err(|e| JsError::new(&e.to_string()))
}

/// Format fractions back to CSS, e.g. `formatPosition(0.3, 0.7)` is `"30% 70%"`.
#[wasm_bindgen(js_name = formatPosition)]
pub fn format_position(x: f64, y: f64) -> String {
    ObjectPosition::new(x, y).to_string()
}

/// Get the parser version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! WASM bindings for picker configuration.
//!
//! Configuration objects cross the boundary as plain JS objects through
//! `serde-wasm-bindgen`, using the same field names as the JSON form.

use pickerkit_core::config::{self, PickerConfiguration};
use wasm_bindgen::prelude::*;

/// The built-in default configuration as a JS object.
#[wasm_bindgen]
pub fn default_configuration() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PickerConfiguration::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate a (possibly partial) configuration object and return it with
/// defaults filled in.
#[wasm_bindgen]
pub fn parse_configuration(value: JsValue) -> Result<JsValue, JsValue> {
    let config = from_js(value)?;
    serde_wasm_bindgen::to_value(&config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Install the process-wide configuration. Fails if one is already in use.
#[wasm_bindgen]
pub fn install_configuration(value: JsValue) -> Result<(), JsValue> {
    let config = from_js(value)?;
    config::install_global(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The process-wide configuration as a JS object.
#[wasm_bindgen]
pub fn current_configuration() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(config::global()).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js(value: JsValue) -> Result<PickerConfiguration, JsValue> {
    let config: PickerConfiguration =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

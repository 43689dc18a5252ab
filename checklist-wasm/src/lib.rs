//! Framework-neutral WASM <-> JavaScript bridge for the checklist logic.
//!
//! Selections are passed as arrays of symptom keys (`["itching", "bleeding"]`),
//! script inputs as arrays of display labels.

use checklist_core::{
    classify, compose_critical_clause, compose_script, mailto_link, parse_selection,
    ChecklistError, Checklist, Recommendation, SymptomId,
};
use checklist_gemini::{build_prompt, GeneratorConfig};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsGeneratorConfig {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    endpoint: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl From<JsGeneratorConfig> for GeneratorConfig {
    fn from(cfg: JsGeneratorConfig) -> Self {
        let mut base = GeneratorConfig::default();
        if let Some(key) = cfg.api_key.filter(|key| !key.is_empty()) {
            base.api_key = Some(key);
        }
        if let Some(model) = cfg.model {
            base.model = model;
        }
        if let Some(endpoint) = cfg.endpoint {
            base.endpoint = endpoint;
        }
        if let Some(secs) = cfg.timeout_secs {
            base.timeout_secs = secs;
        }
        base
    }
}

/// Read an optional JS config object, filling gaps from the defaults.
pub fn generator_config(config: Option<JsValue>) -> Result<GeneratorConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsGeneratorConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))?;
            Ok(GeneratorConfig::from(cfg))
        }
        _ => Ok(GeneratorConfig::default()),
    }
}

#[derive(Serialize)]
struct Assessment {
    status: checklist_core::Status,
    critical_clause: String,
    recommendation: Option<Recommendation>,
}

fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn read_selection(keys: JsValue) -> Result<Vec<SymptomId>, JsValue> {
    let keys: Vec<String> = from_value(keys)
        .map_err(|err| JsValue::from_str(&format!("Expected an array of symptom keys: {err}")))?;
    parse_selection(&keys).map_err(|err| JsValue::from_str(&format_checklist_error(err)))
}

fn read_labels(labels: JsValue) -> Result<Vec<String>, JsValue> {
    from_value(labels)
        .map_err(|err| JsValue::from_str(&format!("Expected an array of labels: {err}")))
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Could not serialize result: {err}")))
}

/// Catalog in display order, all unchecked.
#[wasm_bindgen]
pub fn symptom_catalog() -> Result<JsValue, JsValue> {
    init();
    serialize(&Checklist::new().summaries())
}

#[wasm_bindgen]
pub fn classify_symptoms(keys: JsValue) -> Result<JsValue, JsValue> {
    init();
    let selection = read_selection(keys)?;
    serialize(&classify(&selection))
}

#[wasm_bindgen]
pub fn critical_clause(keys: JsValue) -> Result<String, JsValue> {
    init();
    Ok(compose_critical_clause(&read_selection(keys)?))
}

/// Status, clause and result card in one call.
#[wasm_bindgen]
pub fn recommendation(keys: JsValue) -> Result<JsValue, JsValue> {
    init();
    let selection = read_selection(keys)?;
    serialize(&Assessment {
        status: classify(&selection),
        critical_clause: compose_critical_clause(&selection),
        recommendation: Recommendation::for_selection(&selection),
    })
}

#[wasm_bindgen(js_name = composeScript)]
pub fn compose_script_js(labels: JsValue) -> Result<String, JsValue> {
    init();
    Ok(compose_script(&read_labels(labels)?))
}

#[wasm_bindgen(js_name = mailtoLink)]
pub fn mailto_link_js(labels: JsValue) -> Result<String, JsValue> {
    init();
    Ok(mailto_link(&read_labels(labels)?))
}

/// Prompt the remote generator would receive for these labels.
#[wasm_bindgen]
pub fn generator_prompt(labels: JsValue) -> Result<String, JsValue> {
    init();
    Ok(build_prompt(&read_labels(labels)?))
}

fn format_checklist_error(err: ChecklistError) -> String {
    format!("Checklist error: {err}")
}

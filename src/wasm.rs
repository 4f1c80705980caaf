use wasm_bindgen::prelude::*;

use crate::contract::Debuggable;
use crate::render::{self, Section};
use crate::report::Report;
use crate::types::Branding;

fn to_js(value: &serde_json::Value) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}

fn branding_from(project_name: Option<String>) -> Branding {
    match project_name {
        Some(name) => Branding::new(name),
        None => Branding::default(),
    }
}

/// Render a JSON-encoded report into its text form.
///
/// Returns `{"output": "..."}` on success, `{"error": "..."}` for malformed
/// or contract-violating input.
#[wasm_bindgen]
pub fn render_report(report_json: &str, project_name: Option<String>) -> JsValue {
    let report = match Report::from_json(report_json) {
        Ok(r) => r,
        Err(e) => return error_result(&e.to_string()),
    };
    let output = render::render(&report, &branding_from(project_name));
    to_js(&serde_json::json!({"output": output}))
}

/// Stable identifier of a JSON-encoded report, or `None` if it fails to load.
#[wasm_bindgen]
pub fn report_identifier(report_json: &str) -> Option<String> {
    Report::from_json(report_json).ok().map(|r| r.identifier())
}

/// Fixed render order of the optional sections, with their header lines.
#[wasm_bindgen]
pub fn section_order(project_name: Option<String>) -> JsValue {
    let branding = branding_from(project_name);
    let sections: Vec<serde_json::Value> = Section::all()
        .iter()
        .map(|s| {
            serde_json::json!({
                "name": s.as_ref(),
                "header": s.header(&branding),
            })
        })
        .collect();
    to_js(&serde_json::Value::Array(sections))
}

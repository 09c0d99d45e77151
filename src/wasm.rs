//! WASM bindings for the layout-infer library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::layout::layout_parser;
use crate::schema::NodeSchema;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Deserialize `schema_json`, run [`layout_parser`], and re-serialize.
///
/// On malformed JSON this returns `{"error": "<message>"}` rather than
/// trapping, mirroring the teacher's `compile_diagram` error-degradation
/// pattern (§6, §7 — the one boundary that genuinely fails is this JSON
/// decode).
#[wasm_bindgen]
pub fn infer_layout_json(schema_json: &str) -> String {
    let schema: NodeSchema = match serde_json::from_str(schema_json) {
        Ok(schema) => schema,
        Err(e) => {
            console_error(&format!("Error parsing schema: {e}"));
            return error_json(&e.to_string());
        }
    };

    let annotated = layout_parser(schema);

    match serde_json::to_string(&annotated) {
        Ok(json) => json,
        Err(e) => {
            console_error(&format!("Error serializing layout result: {e}"));
            error_json(&e.to_string())
        }
    }
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_degrades_to_error_object() {
        let result = infer_layout_json("not json");
        assert!(result.contains("\"error\""));
    }

    #[test]
    fn well_formed_schema_round_trips() {
        let input = r#"{"componentName":"Box","frame":{"left":0,"top":0,"width":10,"height":10,"right":10,"bottom":10}}"#;
        let result = infer_layout_json(input);
        assert!(result.contains("\"componentName\":\"Box\""));
    }
}

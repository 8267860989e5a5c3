use kalkulus::{CloseMessage, Endpoint, KalkulusError};
use wasm_bindgen::prelude::*;

/// Browser handle on the proof protocol.
///
/// States cross the boundary as JSON strings so the client can store them
/// verbatim and send them back unchanged; options and close results are
/// plain JS objects.
#[wasm_bindgen]
pub struct KalkulusWasm {
    endpoint: Endpoint,
}

fn js_error(e: KalkulusError) -> JsError {
    web_sys::console::warn_1(&format!("{} rejected: {}", e.kind(), e).into());
    JsError::new(&format!("{}: {}", e.kind(), e))
}

#[wasm_bindgen]
impl KalkulusWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        KalkulusWasm {
            endpoint: Endpoint::new(),
        }
    }

    /// Identifiers of the available calculi
    #[wasm_bindgen]
    pub fn calculi(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&Endpoint::identifiers())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen]
    pub fn parse(
        &self,
        calculus: &str,
        formula: &str,
        params_js: JsValue,
    ) -> Result<String, JsError> {
        let params = if params_js.is_undefined() || params_js.is_null() {
            None
        } else {
            let value: serde_json::Value = serde_wasm_bindgen::from_value(params_js)
                .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
            Some(value.to_string())
        };
        self.endpoint
            .parse(calculus, formula, params.as_deref())
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn apply_move(&self, calculus: &str, state: &str, mv: &str) -> Result<String, JsError> {
        self.endpoint.apply_move(calculus, state, mv).map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn check_close(&self, calculus: &str, state: &str) -> Result<JsValue, JsError> {
        let encoded = self.endpoint.check_close(calculus, state).map_err(js_error)?;
        let msg: CloseMessage = serde_json::from_str(&encoded)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))?;
        serde_wasm_bindgen::to_value(&msg)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

impl Default for KalkulusWasm {
    fn default() -> Self {
        Self::new()
    }
}

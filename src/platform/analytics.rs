//! GA4 `gtag` sink.

use orbitlink_core::AnalyticsSink;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = gtag)]
    fn gtag_event(command: &str, name: &str, params: &JsValue) -> Result<(), JsValue>;
}

fn gtag_loaded() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("gtag")).unwrap_or(false))
        .unwrap_or(false)
}

/// Sends events through the page's global `gtag` function.
///
/// Pages without the GA snippet silently drop events.
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagSink;

impl AnalyticsSink for GtagSink {
    fn send(&self, name: &str, params: &Value) -> Result<(), String> {
        if !gtag_loaded() {
            return Ok(());
        }
        let params = js_sys::JSON::parse(&params.to_string()).map_err(|e| format!("{:?}", e))?;
        gtag_event("event", name, &params).map_err(|e| format!("{:?}", e))
    }
}

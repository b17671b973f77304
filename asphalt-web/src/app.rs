//! WebAssembly entry points.

use anyhow::Result;
use asphalt_core::EstimatorConfig;
use tracing::error;
use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::Event;

use crate::{
    dom::{self, JsResultExt},
    logging,
    nav::NavToggle,
    settings,
    widget::EstimateWidget,
};

/// Runs when the module is instantiated: sets up logging, then mounts both
/// page components once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let parsed = settings::embedded_config();
    logging::init_logging(parsed.as_ref().map_or("info", |c| c.log_level.as_str()));
    let config = parsed.unwrap_or_else(|error| {
        error!(%error, "embedded configuration rejected, using defaults");
        EstimatorConfig::default()
    });

    if let Err(error) = when_dom_ready(move || mount_all(&config)) {
        error!(?error, "estimator failed to start");
    }
}

/// Changes console log verbosity, e.g. `setLogLevel("debug")`.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(directive: &str) -> Result<(), JsValue> {
    logging::set_log_level(directive).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn when_dom_ready(run: impl FnOnce() + 'static) -> Result<()> {
    let document = dom::document()?;
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .js_context("reading document.readyState")?;
    if ready_state.as_string().as_deref() != Some("loading") {
        run();
        return Ok(());
    }

    let closure = Closure::once(move |_: Event| run());
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .js_context("waiting for DOMContentLoaded")?;
    closure.forget();
    Ok(())
}

fn mount_all(config: &EstimatorConfig) {
    let document = match dom::document() {
        Ok(document) => document,
        Err(error) => {
            error!(?error, "no document to mount into");
            return;
        }
    };

    logging::log_mount_result("navigation toggle", NavToggle::mount(&document, &config.nav));
    logging::log_mount_result("estimate widget", EstimateWidget::mount(&document, config));
}

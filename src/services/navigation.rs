use wasm_bindgen::JsValue;

/// Nombre del evento que dispara un re-render tras navegar
pub const NAVIGATE_EVENT: &str = "navigate";

/// Redirecciones imperativas ("/", "/users", ...)
pub trait Navigator {
    fn push(&self, path: &str);
    fn current_path(&self) -> String;
}

/// History API del navegador
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn push(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ [NAV] No hay window, ignorando navegación a {}", path);
            return;
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            log::error!("❌ [NAV] Error navegando a {}: {:?}", path, e);
            return;
        }
        log::info!("🧭 [NAV] -> {}", path);
        if let Ok(event) = web_sys::Event::new(NAVIGATE_EVENT) {
            let _ = window.dispatch_event(&event);
        }
    }

    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
}

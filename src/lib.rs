// ============================================================================
// ROSTER PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: acciones async sobre el store
// - Services: API, tokens, navegación
// - State: acciones + reducers + store con Rc<RefCell>
// - Models: estructuras compartidas con backend
// ============================================================================

mod config;
mod models;
mod services;
mod state;
mod context;
mod viewmodels;
mod dom;
mod views;
mod app;

#[cfg(test)]
mod testing;

use std::cell::{Cell, RefCell};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::dom::on_window_event;
use crate::services::NAVIGATE_EVENT;

// Instancia global de la app
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
    static RENDER_SCHEDULED: Cell<bool> = Cell::new(false);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Roster PWA ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listeners globales: registrar UNA sola vez aquí
    on_window_event(NAVIGATE_EVENT, |_| schedule_rerender())?;
    on_window_event("popstate", |_| schedule_rerender())?;

    Ok(())
}

/// Re-render en el próximo tick; varias llamadas seguidas cuentan como una.
/// Fuera de cualquier handler, para poder soltar sus listeners.
pub fn schedule_rerender() {
    if RENDER_SCHEDULED.with(|scheduled| scheduled.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_SCHEDULED.with(|scheduled| scheduled.set(false));
        rerender_app();
    })
    .forget();
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}

/// Llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

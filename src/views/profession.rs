// ============================================================================
// PROFESSION VIEW - Nombre de la profesión a partir de su id
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::context::AppContext;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::viewmodels::CatalogViewModel;
use crate::views::lookup::lookup_label;

/// Pide la lista solo si falta o está vieja, y pinta el nombre o "loading ..."
pub fn render_profession(ctx: &AppContext, state: &AppState, id: &str) -> Result<Element, JsValue> {
    let catalog = CatalogViewModel::new(ctx);
    spawn_local(async move {
        let _ = catalog.ensure_professions_loaded().await;
    });

    let label = lookup_label(&state.professions, id);
    Ok(ElementBuilder::new("p")?
        .class("profession")
        .text(label.text())
        .build())
}

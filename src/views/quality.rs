// ============================================================================
// QUALITY VIEW - Badges de cualidades
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::context::AppContext;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::CatalogViewModel;
use crate::views::lookup::{lookup_label, LookupLabel};

/// Clases del badge: el color de la cualidad si está resuelta
pub fn quality_badge_class(state: &AppState, id: &str) -> String {
    match state.qualities.by_id(id) {
        Some(quality) if !quality.color.is_empty() => format!("badge m-1 bg-{}", quality.color),
        _ => "badge m-1 bg-secondary".to_string(),
    }
}

pub fn render_qualities(ctx: &AppContext, state: &AppState, ids: &[String]) -> Result<Element, JsValue> {
    let catalog = CatalogViewModel::new(ctx);
    spawn_local(async move {
        let _ = catalog.ensure_qualities_loaded().await;
    });

    let container = ElementBuilder::new("div")?.class("qualities").build();
    for id in ids {
        let label = lookup_label(&state.qualities, id);
        let badge = match label {
            LookupLabel::Name(ref name) => ElementBuilder::new("span")?
                .class(&quality_badge_class(state, id))
                .text(name)
                .build(),
            _ => ElementBuilder::new("span")?
                .class("badge m-1 bg-light text-dark")
                .text(label.text())
                .build(),
        };
        append_child(&container, &badge)?;
    }
    Ok(container)
}

// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::context::AppContext;
use crate::dom::{append_child, get_element_by_id, release_listeners, set_inner_html};
use crate::viewmodels::AppLoader;
use crate::views::render_app;

pub struct App {
    ctx: AppContext,
    loader: AppLoader,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let ctx = AppContext::browser();
        let loader = AppLoader::new(&ctx);

        // Varios dispatch seguidos -> un solo re-render
        ctx.store.subscribe(crate::schedule_rerender);

        Ok(Self { ctx, loader, root })
    }

    /// Re-render completo
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(is_logged_in) = self.loader.take_change() {
            let loader = self.loader.clone();
            spawn_local(async move {
                loader.run(is_logged_in).await;
            });
        }

        let released = release_listeners();
        log::debug!("🧹 [APP] {} listeners liberados", released);
        set_inner_html(&self.root, "");
        let view = render_app(&self.ctx, &self.loader)?;
        append_child(&self.root, &view)?;
        Ok(())
    }
}

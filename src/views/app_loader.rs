use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::{AppLoader, LoaderView};

pub const LOADER_TEXT: &str = "loading...";

/// Placeholder mientras cargan los usuarios, si no el contenido
pub fn render_app_loader<F>(loader: &AppLoader, children: F) -> Result<Element, JsValue>
where
    F: FnOnce() -> Result<Element, JsValue>,
{
    match loader.view() {
        LoaderView::Loading => Ok(ElementBuilder::new("div")?
            .class("app-loader")
            .text(LOADER_TEXT)
            .build()),
        LoaderView::Ready => children(),
    }
}

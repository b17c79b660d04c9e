// ============================================================================
// APP VIEW - Navbar + app loader + vista según la ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::context::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{AppLoader, UsersViewModel, HOME_PATH, USERS_PATH};
use crate::views::app_loader::render_app_loader;
use crate::views::login::{render_login, render_register, LOGIN_PATH};
use crate::views::users::{render_edit_user, render_user_page, render_users_list};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Main,
    Login,
    Register,
    Users,
    UserPage(String),
    EditUser(String),
}

impl Route {
    /// Rutas de usuarios sin sesión -> login; login/registro con sesión -> usuarios
    pub fn resolve(path: &str, is_logged_in: bool) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        match (segments.as_slice(), is_logged_in) {
            (["login"], false) => Route::Login,
            (["register"], false) => Route::Register,
            (["login"] | ["register"], true) => Route::Users,
            (["users", ..], false) => Route::Login,
            (["users"], true) => Route::Users,
            (["users", id], true) => Route::UserPage(id.to_string()),
            (["users", id, "edit"], true) => Route::EditUser(id.to_string()),
            _ => Route::Main,
        }
    }
}

fn nav_link(ctx: &AppContext, text: &str, path: &'static str) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("button")?
        .class("nav-link btn btn-link")
        .attr("type", "button")?
        .text(text)
        .build();
    let navigator = ctx.navigator.clone();
    on_click(&link, move |_| navigator.push(path))?;
    Ok(link)
}

fn render_navbar(ctx: &AppContext, state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("navbar bg-light mb-3").build();
    append_child(&nav, &nav_link(ctx, "Main", HOME_PATH)?)?;

    if state.users.is_logged_in() {
        append_child(&nav, &nav_link(ctx, "Users", USERS_PATH)?)?;
        if let Some(user) = state.users.current_user_data() {
            let me = ElementBuilder::new("span")?
                .class("navbar-text")
                .text(user.display_name())
                .build();
            append_child(&nav, &me)?;
        }
        let logout = ElementBuilder::new("button")?
            .class("btn btn-outline-danger")
            .attr("type", "button")?
            .text("Log out")
            .build();
        let users_vm = UsersViewModel::new(ctx);
        on_click(&logout, move |_| users_vm.log_out())?;
        append_child(&nav, &logout)?;
    } else {
        append_child(&nav, &nav_link(ctx, "Login", LOGIN_PATH)?)?;
    }
    Ok(nav)
}

fn render_main() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("h1")?.class("main").text("Main Page").build())
}

fn render_route(ctx: &AppContext, state: &AppState, route: &Route) -> Result<Element, JsValue> {
    match route {
        Route::Main => render_main(),
        Route::Login => render_login(ctx, state),
        Route::Register => render_register(ctx, state),
        Route::Users => render_users_list(ctx, state),
        Route::UserPage(id) => render_user_page(ctx, state, id),
        Route::EditUser(id) => render_edit_user(ctx, state, id),
    }
}

/// Vista completa para la ruta actual
pub fn render_app(ctx: &AppContext, loader: &AppLoader) -> Result<Element, JsValue> {
    let state = ctx.store.snapshot();
    let route = Route::resolve(&ctx.navigator.current_path(), state.users.is_logged_in());
    log::debug!("🎬 [APP] render {:?}", route);

    let container = ElementBuilder::new("div")?.class("container").build();
    append_child(&container, &render_navbar(ctx, &state)?)?;
    let content = render_app_loader(loader, || render_route(ctx, &state, &route))?;
    append_child(&container, &content)?;
    Ok(container)
}

// ============================================================================
// USERS VIEWS - Lista, página de usuario y edición del propio perfil
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::context::AppContext;
use crate::dom::{add_class, append_child, get_element_by_id, input_value, on_click, on_submit, ElementBuilder};
use crate::models::UserRecord;
use crate::state::AppState;
use crate::viewmodels::{UsersViewModel, USERS_PATH};
use crate::views::profession::render_profession;
use crate::views::quality::render_qualities;

pub fn user_path(id: &str) -> String {
    format!("/users/{}", id)
}

pub fn edit_user_path(id: &str) -> String {
    format!("/users/{}/edit", id)
}

fn nav_button(ctx: &AppContext, class: &str, text: &str, path: String) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(text)
        .build();
    let navigator = ctx.navigator.clone();
    on_click(&button, move |_| navigator.push(&path))?;
    Ok(button)
}

fn text_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

/// Tabla de usuarios
pub fn render_users_list(ctx: &AppContext, state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("users-list").build();

    let users = match state.users.users_list() {
        Some(users) => users,
        None => {
            let empty = ElementBuilder::new("p")?
                .text(state.users.auth_error().unwrap_or("No users loaded"))
                .build();
            append_child(&container, &empty)?;
            return Ok(container);
        }
    };

    let title = ElementBuilder::new("h2")?
        .text(&format!("{} users", users.len()))
        .build();
    append_child(&container, &title)?;

    let table = ElementBuilder::new("table")?.class("table").build();
    let header = ElementBuilder::new("tr")?.build();
    for column in ["Name", "Qualities", "Profession", "Meetings", "Rate"] {
        append_child(&header, &ElementBuilder::new("th")?.text(column).build())?;
    }
    append_child(&table, &header)?;

    for user in users {
        let row = ElementBuilder::new("tr")?.build();
        if state.users.current_user_id() == Some(user.id.as_str()) {
            add_class(&row, "table-active")?;
        }

        let name_cell = ElementBuilder::new("td")?
            .child(nav_button(ctx, "btn btn-link", user.display_name(), user_path(&user.id))?)?
            .build();
        append_child(&row, &name_cell)?;

        let qualities_cell = ElementBuilder::new("td")?.build();
        append_child(&qualities_cell, &render_qualities(ctx, state, &user.qualities)?)?;
        append_child(&row, &qualities_cell)?;

        let profession_cell = ElementBuilder::new("td")?.build();
        if let Some(profession_id) = &user.profession {
            append_child(&profession_cell, &render_profession(ctx, state, profession_id)?)?;
        }
        append_child(&row, &profession_cell)?;

        append_child(&row, &text_cell(&user.completed_meetings.to_string())?)?;
        append_child(&row, &text_cell(&format!("{}/5", user.rate))?)?;
        append_child(&table, &row)?;
    }
    append_child(&container, &table)?;
    Ok(container)
}

/// Página de un usuario; el propio usuario ve el botón de editar
pub fn render_user_page(ctx: &AppContext, state: &AppState, user_id: &str) -> Result<Element, JsValue> {
    let Some(user) = state.users.user_by_id(user_id) else {
        return Ok(ElementBuilder::new("p")?.text("User not found").build());
    };

    let card = ElementBuilder::new("div")?.class("user-card").build();
    let avatar = ElementBuilder::new("img")?
        .class("avatar")
        .attr("src", &user.image)?
        .attr("alt", user.display_name())?
        .build();
    append_child(&card, &avatar)?;
    append_child(&card, &ElementBuilder::new("h3")?.text(user.display_name()).build())?;
    if let Some(profession_id) = &user.profession {
        append_child(&card, &render_profession(ctx, state, profession_id)?)?;
    }
    append_child(&card, &render_qualities(ctx, state, &user.qualities)?)?;
    append_child(
        &card,
        &ElementBuilder::new("p")?
            .text(&format!("Completed meetings: {} · Rate: {}/5", user.completed_meetings, user.rate))
            .build(),
    )?;

    if state.users.current_user_id() == Some(user_id) {
        append_child(&card, &nav_button(ctx, "btn btn-primary", "Edit", edit_user_path(user_id))?)?;
    }
    append_child(&card, &nav_button(ctx, "btn btn-secondary", "All users", USERS_PATH.to_string())?)?;
    Ok(card)
}

/// Payload de edición: nombre/email nuevos sobre el registro actual
pub fn edited_user(current: &UserRecord, name: &str, email: &str) -> UserRecord {
    let mut payload = current.clone();
    payload.name = name.trim().to_string();
    if !email.trim().is_empty() {
        payload.email = email.trim().to_string();
    }
    payload
}

/// Formulario de edición (solo del usuario logueado)
pub fn render_edit_user(ctx: &AppContext, state: &AppState, user_id: &str) -> Result<Element, JsValue> {
    let current = match state.users.current_user_data() {
        Some(user) if user.id == user_id => user.clone(),
        _ => return render_user_page(ctx, state, user_id),
    };

    let form = ElementBuilder::new("form")?.class("edit-user-form").build();
    let name_input = ElementBuilder::new("input")?
        .id("edit-name")?
        .attr("type", "text")?
        .attr("value", &current.name)?
        .build();
    let email_input = ElementBuilder::new("input")?
        .id("edit-email")?
        .attr("type", "email")?
        .attr("value", &current.email)?
        .build();
    let submit_text = if state.users.is_updating { "Saving..." } else { "Save" };
    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(submit_text)
        .build();

    append_child(&form, &ElementBuilder::new("label")?.text("Name").build())?;
    append_child(&form, &name_input)?;
    append_child(&form, &ElementBuilder::new("label")?.text("Email").build())?;
    append_child(&form, &email_input)?;
    if let Some(error) = state.users.auth_error() {
        append_child(&form, &ElementBuilder::new("p")?.class("text-danger").text(error).build())?;
    }
    append_child(&form, &submit)?;

    let users_vm = UsersViewModel::new(ctx);
    on_submit(&form, move || {
        let read = |id: &str| get_element_by_id(id).and_then(|el| input_value(&el)).unwrap_or_default();
        let payload = edited_user(&current, &read("edit-name"), &read("edit-email"));
        let redirect = user_path(&payload.id);
        let users_vm = users_vm.clone();
        spawn_local(async move {
            let _ = users_vm.update_user_data(payload, &redirect).await;
        });
    })?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::user;

    #[test]
    fn edited_user_keeps_other_fields() {
        let current = user("u1");
        let payload = edited_user(&current, "  New Name ", "");

        assert_eq!(payload.name, "New Name");
        assert_eq!(payload.email, current.email);
        assert_eq!(payload.rate, current.rate);
        assert_eq!(payload.id, "u1");
    }

    #[test]
    fn paths() {
        assert_eq!(user_path("u1"), "/users/u1");
        assert_eq!(edit_user_path("u1"), "/users/u1/edit");
    }
}

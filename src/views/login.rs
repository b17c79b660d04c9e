// ============================================================================
// LOGIN / REGISTER VIEWS
// ============================================================================

use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlSelectElement};
use crate::context::AppContext;
use crate::dom::{append_child, get_element_by_id, input_value, on_click, on_input, on_submit, ElementBuilder};
use crate::models::{Credentials, SignUpData};
use crate::state::AppState;
use crate::viewmodels::{UsersViewModel, USERS_PATH};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Valida el formulario antes de llamar al backend
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, String> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email".to_string());
    }
    if password.len() < 6 {
        return Err("Password must have at least 6 characters".to_string());
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn form_input(id: &str, input_type: &str, label: &str, value: &str) -> Result<(Element, Element), JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("form-control")
        .attr("type", input_type)?
        .attr("value", value)?
        .build();
    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok((group, input))
}

fn error_line(form: &Element, error: Option<&str>) -> Result<(), JsValue> {
    if let Some(error) = error {
        let line = ElementBuilder::new("p")?.class("text-danger").text(error).build();
        append_child(form, &line)?;
    }
    Ok(())
}

fn switch_link(ctx: &AppContext, text: &str, path: &'static str) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("button")?
        .class("btn btn-link")
        .attr("type", "button")?
        .text(text)
        .build();
    let navigator = ctx.navigator.clone();
    on_click(&link, move |_| navigator.push(path))?;
    Ok(link)
}

pub fn render_login(ctx: &AppContext, state: &AppState) -> Result<Element, JsValue> {
    let draft = ctx.login_draft.borrow().clone();
    let form = ElementBuilder::new("form")?.class("login-form").build();
    append_child(&form, &ElementBuilder::new("h3")?.text("Login").build())?;

    let (email_group, email_input) = form_input("login-email", "email", "Email", &draft.email)?;
    let (password_group, password_input) = form_input("login-password", "password", "Password", &draft.password)?;
    {
        let draft = ctx.login_draft.clone();
        let input = email_input.clone();
        on_input(&email_input, move |_| {
            draft.borrow_mut().email = input_value(&input).unwrap_or_default();
        })?;
    }
    {
        let draft = ctx.login_draft.clone();
        let input = password_input.clone();
        on_input(&password_input, move |_| {
            draft.borrow_mut().password = input_value(&input).unwrap_or_default();
        })?;
    }
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;

    let local_error = ElementBuilder::new("p")?.class("text-danger").build();
    append_child(&form, &local_error)?;
    error_line(&form, state.users.auth_error())?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary w-100")
        .attr("type", "submit")?
        .text("Submit")
        .build();
    append_child(&form, &submit)?;
    append_child(&form, &switch_link(ctx, "Don't have an account? Sign up", REGISTER_PATH)?)?;

    let users_vm = UsersViewModel::new(ctx);
    let draft = ctx.login_draft.clone();
    on_submit(&form, move || {
        let (email, password) = {
            let draft = draft.borrow();
            (draft.email.clone(), draft.password.clone())
        };
        match validate_credentials(&email, &password) {
            Ok(credentials) => {
                local_error.set_text_content(None);
                let users_vm = users_vm.clone();
                spawn_local(async move {
                    let _ = users_vm.login(credentials, USERS_PATH).await;
                });
            }
            Err(message) => local_error.set_text_content(Some(&message)),
        }
    })?;
    Ok(form)
}

/// Datos del registro; los campos vacíos no se mandan
pub fn sign_up_data(credentials: Credentials, name: &str, profession: &str) -> SignUpData {
    let mut profile = Map::new();
    if !name.trim().is_empty() {
        profile.insert("name".to_string(), Value::String(name.trim().to_string()));
    }
    if !profession.trim().is_empty() {
        profile.insert("profession".to_string(), Value::String(profession.trim().to_string()));
    }
    SignUpData {
        email: credentials.email,
        password: credentials.password,
        profile,
    }
}

pub fn render_register(ctx: &AppContext, state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.class("register-form").build();
    append_child(&form, &ElementBuilder::new("h3")?.text("Register").build())?;

    let (email_group, _) = form_input("register-email", "email", "Email", "")?;
    let (password_group, _) = form_input("register-password", "password", "Password", "")?;
    let (name_group, _) = form_input("register-name", "text", "Name", "")?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &name_group)?;

    // Select de profesiones si ya están cargadas
    let select = ElementBuilder::new("select")?
        .id("register-profession")?
        .class("form-select")
        .build();
    append_child(&select, &ElementBuilder::new("option")?.attr("value", "")?.text("Choose profession...").build())?;
    for profession in state.professions.list().unwrap_or_default() {
        let option = ElementBuilder::new("option")?
            .attr("value", &profession.id)?
            .text(&profession.name)
            .build();
        append_child(&select, &option)?;
    }
    append_child(&form, &select)?;

    let local_error = ElementBuilder::new("p")?.class("text-danger").build();
    append_child(&form, &local_error)?;
    error_line(&form, state.users.auth_error())?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary w-100")
        .attr("type", "submit")?
        .text("Submit")
        .build();
    append_child(&form, &submit)?;
    append_child(&form, &switch_link(ctx, "Already have an account? Log in", LOGIN_PATH)?)?;

    let users_vm = UsersViewModel::new(ctx);
    on_submit(&form, move || {
        let read = |id: &str| get_element_by_id(id).and_then(|el| input_value(&el)).unwrap_or_default();
        let profession = get_element_by_id("register-profession")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();
        match validate_credentials(&read("register-email"), &read("register-password")) {
            Ok(credentials) => {
                local_error.set_text_content(None);
                let data = sign_up_data(credentials, &read("register-name"), &profession);
                let users_vm = users_vm.clone();
                spawn_local(async move {
                    let _ = users_vm.sign_up(data).await;
                });
            }
            Err(message) => local_error.set_text_content(Some(&message)),
        }
    })?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_bad_input() {
        assert!(validate_credentials("nope", "secret1").is_err());
        assert!(validate_credentials("a@b.c", "123").is_err());

        let credentials = validate_credentials("  a@b.c ", "secret1").unwrap();
        assert_eq!(credentials.email, "a@b.c");
    }

    #[test]
    fn sign_up_data_skips_empty_fields() {
        let credentials = validate_credentials("a@b.c", "secret1").unwrap();

        let data = sign_up_data(credentials.clone(), "  ", "");
        assert!(data.profile.is_empty());

        let data = sign_up_data(credentials, "Ana", "p1");
        assert_eq!(data.profile.get("name").unwrap(), "Ana");
        assert_eq!(data.profile.get("profession").unwrap(), "p1");
    }
}

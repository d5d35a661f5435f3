// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::auth_viewmodel;
use crate::dom::{append_child, on_named_input, on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::i18n::t;

/// Render the login form; field values come from the credentials in state
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let credentials = state.auth.get_credentials();

    let screen = ElementBuilder::new("div")?
        .class("d-flex flex-column justify-content-center align-items-center")
        .attr("style", "height: 100vh")?
        .build();

    let heading = ElementBuilder::new("h3")?
        .text(&t("please_sign_in", &lang))
        .build();

    let form = ElementBuilder::new("form")?
        .id("login-form")?
        .class("d-flex flex-column")
        .build();

    let username_group = create_form_group(
        "username",
        "text",
        "email",
        &t("username", &lang),
        &credentials.username,
        state,
    )?;
    let password_group = create_form_group(
        "password",
        "password",
        "password",
        &t("password", &lang),
        &credentials.password,
        state,
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text(&t("sign_in", &lang))
        .build();

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            let state_clone = state_clone.clone();
            spawn_local(async move {
                auth_viewmodel(&state_clone).login().await;
            });
        })?;
    }

    append_child(&form, &username_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    append_child(&screen, &heading)?;
    append_child(&screen, &form)?;

    Ok(screen)
}

/// Floating-label input bound to one credentials field by `name`
fn create_form_group(
    name: &str,
    input_type: &str,
    id: &str,
    label_text: &str,
    value: &str,
    state: &AppState,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-control")
        .attrs(&[
            ("type", input_type),
            ("id", id),
            ("name", name),
            ("placeholder", label_text),
            ("value", value),
        ])?
        .build();

    {
        let state_clone = state.clone();
        on_named_input(&input, move |field, value| {
            auth_viewmodel(&state_clone).update_field(&field, &value);
        })?;
    }

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    Ok(ElementBuilder::new("div")?
        .class("form-floating mb-3")
        .children([input, label])?
        .build())
}

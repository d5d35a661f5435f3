// ============================================================================
// APP VIEW - Login form or catalog, depending on the auth flag
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::app_state::AppState;
use crate::views::{render_login, render_product_detail, render_product_list};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if !state.auth.is_authenticated() {
        return render_login(state);
    }

    let container = ElementBuilder::new("div")?
        .class("container")
        .build();

    let row = ElementBuilder::new("div")?
        .class("row")
        .build();

    append_child(&row, &render_product_list(state)?)?;
    append_child(&row, &render_product_detail(state)?)?;
    append_child(&container, &row)?;

    Ok(container)
}

// ============================================================================
// PRODUCT LIST VIEW - "check login" button + product table
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::auth_viewmodel;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::{CatalogViewModel, ProductRow};

pub fn render_product_list(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let check_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn btn-success mb-3")
        .text(&t("check_login", &lang))
        .build();

    {
        let state_clone = state.clone();
        on_click(&check_btn, move |_e| {
            let state_clone = state_clone.clone();
            spawn_local(async move {
                auth_viewmodel(&state_clone).check_login().await;
            });
        })?;
    }

    let title = ElementBuilder::new("h2")?
        .text(&t("product_list", &lang))
        .build();


    let head_row = ElementBuilder::new("tr")?.build();
    for key in ["col_title", "col_origin_price", "col_price", "col_enabled", "col_details"] {
        let th = ElementBuilder::new("th")?
            .attr("scope", "col")?
            .text(&t(key, &lang))
            .build();
        append_child(&head_row, &th)?;
    }
    let thead = ElementBuilder::new("thead")?.child(head_row)?.build();

    let table = ElementBuilder::new("table")?
        .class("table")
        .children([thead, render_table_body(state)?])?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("col-6")
        .children([check_btn, title, table])?
        .build())
}

fn render_table_body(state: &AppState) -> Result<Element, JsValue> {
    let tbody = ElementBuilder::new("tbody")?.build();

    let lang = state.language();
    for row in CatalogViewModel::new(state.clone()).rows() {
        append_child(&tbody, &render_row(&row, state, &lang)?)?;
    }

    Ok(tbody)
}

fn render_row(row: &ProductRow, state: &AppState, lang: &str) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?
        .data_key(&row.id.to_string())?
        .build();

    for text in [&row.title, &row.origin_price, &row.price, &row.enabled_label] {
        let td = ElementBuilder::new("td")?.text(text).build();
        append_child(&tr, &td)?;
    }

    let details_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn btn-primary")
        .text(&t("view_details", lang))
        .build();

    {
        let state_clone = state.clone();
        let id = row.id.clone();
        on_click(&details_btn, move |_e| {
            CatalogViewModel::new(state_clone.clone()).select(id.clone());
        })?;
    }

    let td = ElementBuilder::new("td")?.child(details_btn)?.build();
    append_child(&tr, &td)?;

    Ok(tr)
}

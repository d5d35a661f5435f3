// ============================================================================
// PRODUCT DETAIL VIEW - Right-hand detail panel + gallery
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, replace_children, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::{CatalogViewModel, DetailPanel, GallerySlot, ProductDetail};

const PANEL_ID: &str = "product-detail-panel";

pub fn render_product_detail(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let title = ElementBuilder::new("h2")?
        .text(&t("product_detail", &lang))
        .build();

    let panel = ElementBuilder::new("div")?
        .id(PANEL_ID)?
        .child(render_panel_content(state)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("col-6")
        .children([title, panel])?
        .build())
}

/// Incremental update after a selection; errors when the panel is not mounted
pub fn update_product_detail(state: &AppState) -> Result<(), JsValue> {
    let panel = get_element_by_id(PANEL_ID)
        .ok_or_else(|| JsValue::from_str("Detail panel not found, needs full render"))?;
    replace_children(&panel, &render_panel_content(state)?)
}

fn render_panel_content(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    match CatalogViewModel::new(state.clone()).detail() {
        DetailPanel::Placeholder { prompt } => Ok(ElementBuilder::new("p")?.text(&prompt).build()),
        DetailPanel::Product(detail) => render_card(&detail, &lang),
    }
}

fn render_card(detail: &ProductDetail, lang: &str) -> Result<Element, JsValue> {
    let image = ElementBuilder::new("img")?
        .class("card-img-top")
        .attrs(&[("src", detail.image_url.as_str()), ("alt", detail.title.as_str())])?
        .build();

    let badge = ElementBuilder::new("span")?
        .class("badge bg-primary ms-2")
        .text(&detail.category)
        .build();
    let heading = ElementBuilder::new("h5")?
        .class("card-title")
        .text(&detail.title)
        .child(badge)?
        .build();

    let description = ElementBuilder::new("p")?
        .class("card-text")
        .text(&format!("{} : {}", t("description", lang), detail.description))
        .build();

    let content = ElementBuilder::new("p")?
        .class("card-text")
        .text(&format!("{} : {}", t("content", lang), detail.content))
        .build();

    let origin_price = ElementBuilder::new("del")?
        .text(&detail.origin_price)
        .build();
    let prices = ElementBuilder::new("p")?
        .class("card-text")
        .child(origin_price)?
        .trailing_text(&format!(" / {}", detail.price))?
        .build();

    let gallery_title = ElementBuilder::new("h5")?
        .text(&t("more_images", lang))
        .build();

    let slots = detail
        .gallery
        .iter()
        .map(|slot| render_gallery_slot(slot, &detail.title))
        .collect::<Result<Vec<_>, _>>()?;
    let gallery = ElementBuilder::new("div")?
        .class("d-flex flex-wrap")
        .children(slots)?
        .build();

    let body = ElementBuilder::new("div")?
        .class("card-body")
        .children([heading, description, content, prices, gallery_title, gallery])?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card")
        .data_key(&detail.id.to_string())?
        .children([image, body])?
        .build())
}

/// Empty entries render an empty span so later images keep their key
fn render_gallery_slot(slot: &GallerySlot, alt: &str) -> Result<Element, JsValue> {
    match &slot.url {
        Some(url) => Ok(ElementBuilder::new("img")?
            .data_key(&slot.key())?
            .attrs(&[("src", url.as_str()), ("alt", alt)])?
            .build()),
        None => ElementBuilder::new("span")?
            .data_key(&slot.key())?
            .attr("aria-hidden", "true")
            .map(ElementBuilder::build),
    }
}

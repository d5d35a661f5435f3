// ============================================================================
// CATALOG VIEWMODEL - Table rows, detail panel and gallery (no DOM)
// ============================================================================

use crate::models::{Product, ProductId};
use crate::state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::i18n::t;

/// One row of the product table
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub title: String,
    pub origin_price: String,
    pub price: String,
    pub enabled: bool,
    pub enabled_label: String,
}

impl ProductRow {
    pub fn from_product(product: &Product, lang: &str) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            origin_price: format_price(product.origin_price),
            price: format_price(product.price),
            enabled: product.is_enabled,
            enabled_label: t(if product.is_enabled { "yes" } else { "no" }, lang),
        }
    }
}

pub fn product_rows(products: &[Product], lang: &str) -> Vec<ProductRow> {
    products
        .iter()
        .map(|product| ProductRow::from_product(product, lang))
        .collect()
}

/// One gallery position; `url == None` is an empty placeholder that keeps its index
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GallerySlot {
    pub index: usize,
    pub url: Option<String>,
}

impl GallerySlot {
    /// DOM key, stable across renders
    pub fn key(&self) -> String {
        format!("gallery-{}", self.index)
    }
}

pub fn gallery_slots(urls: &[String]) -> Vec<GallerySlot> {
    urls.iter()
        .enumerate()
        .map(|(index, url)| GallerySlot {
            index,
            url: Some(url).filter(|url| !url.is_empty()).cloned(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetail {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub description: String,
    pub content: String,
    pub origin_price: String,
    pub price: String,
    pub gallery: Vec<GallerySlot>,
}

impl ProductDetail {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            content: product.content.clone(),
            origin_price: format_price(product.origin_price),
            price: format_price(product.price),
            gallery: gallery_slots(&product.images_url),
        }
    }

    pub fn image_count(&self) -> usize {
        self.gallery.iter().filter(|slot| slot.url.is_some()).count()
    }
}

/// What the right-hand panel shows
#[derive(Clone, Debug, PartialEq)]
pub enum DetailPanel {
    Placeholder { prompt: String },
    Product(ProductDetail),
}

pub fn detail_panel(selected: Option<&Product>, lang: &str) -> DetailPanel {
    match selected {
        Some(product) => DetailPanel::Product(ProductDetail::from_product(product)),
        None => DetailPanel::Placeholder {
            prompt: t("select_product_prompt", lang),
        },
    }
}

/// Prices without a trailing ".0" for whole amounts
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

pub struct CatalogViewModel {
    state: AppState,
}

impl CatalogViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        product_rows(&self.state.catalog.products.borrow(), &self.state.language())
    }

    pub fn detail(&self) -> DetailPanel {
        detail_panel(
            self.state.catalog.selected_product().as_ref(),
            &self.state.language(),
        )
    }

    /// Local selection only; the full product is already in the collection
    pub fn select(&self, id: ProductId) {
        log::info!("👁️ [CATALOG] Selected product {}", id);
        self.state.catalog.select(id);
        self.state
            .notify_changes(UpdateType::Incremental(IncrementalUpdate::ProductDetail));
    }
}

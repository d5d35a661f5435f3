// ============================================================================
// CATALOG STATE - Product collection + selected product (by id)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Product, ProductId};

#[derive(Clone)]
pub struct CatalogState {
    pub products: Rc<RefCell<Vec<Product>>>,
    /// Resolved against `products` on every read, so a refresh never shows a stale snapshot
    pub selected_id: Rc<RefCell<Option<ProductId>>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            products: Rc::new(RefCell::new(Vec::new())),
            selected_id: Rc::new(RefCell::new(None)),
        }
    }

    /// Replace the whole collection
    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
    }

    pub fn get_products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.products.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.borrow().is_empty()
    }

    pub fn select(&self, id: ProductId) {
        *self.selected_id.borrow_mut() = Some(id);
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        self.selected_id.borrow().clone()
    }

    /// Selected product looked up in the current collection
    pub fn selected_product(&self) -> Option<Product> {
        let selected = self.selected_id.borrow();
        let id = selected.as_ref()?;
        self.products.borrow().iter().find(|p| &p.id == id).cloned()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str) -> Product {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    #[test]
    fn selection_resolves_against_current_collection() {
        let catalog = CatalogState::new();
        catalog.set_products(vec![product("a", "old title")]);
        catalog.select(ProductId::from("a"));

        catalog.set_products(vec![product("a", "new title"), product("b", "B")]);
        assert_eq!(catalog.selected_product().unwrap().title, "new title");
    }

    #[test]
    fn selection_of_removed_product_resolves_to_none() {
        let catalog = CatalogState::new();
        catalog.set_products(vec![product("a", "A")]);
        catalog.select(ProductId::from("a"));

        catalog.set_products(vec![product("b", "B")]);
        assert_eq!(catalog.selected_product(), None);
    }

    #[test]
    fn set_products_replaces_wholesale() {
        let catalog = CatalogState::new();
        catalog.set_products(vec![product("a", "A"), product("b", "B")]);
        catalog.set_products(vec![product("c", "C")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_products()[0].id, ProductId::from("c"));
    }
}

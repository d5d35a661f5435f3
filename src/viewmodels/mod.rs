pub mod auth_viewmodel;
pub mod catalog_viewmodel;

pub use auth_viewmodel::{AuthViewModel, LoginOutcome, SessionStatus};
pub use catalog_viewmodel::{CatalogViewModel, DetailPanel, GallerySlot, ProductDetail, ProductRow};

pub mod app;
pub mod login;
pub mod product_list;
pub mod product_detail;

pub use app::render_app;
pub use login::render_login;
pub use product_list::render_product_list;
pub use product_detail::{render_product_detail, update_product_detail};

// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + change notifications
// ============================================================================

pub mod auth_state;
pub mod catalog_state;
pub mod app_state;

pub use auth_state::*;
pub use catalog_state::*;
pub use app_state::*;

// ============================================================================
// PRODUCT ADMIN CONSOLE - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: UI logic, turn API errors into notices
// - Services: HTTP only + notices
// - Stores: session token persistence (cookie)
// - State: Rc<RefCell> state + change subscribers
// - Models: wire types shared with the API
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::UpdateType;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 [MAIN] Product admin console starting ({})", CONFIG.base_url);

    let app = App::new()?;
    app.render()?;
    app.restore_session();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let app_ref = app_cell.borrow();
        let Some(app) = app_ref.as_ref() else {
            log::warn!("⚠️ [UPDATE] App is not initialised");
            return;
        };

        match update_type {
            UpdateType::Incremental(update) => {
                if let Err(e) = app.update_incremental(update) {
                    log::warn!("🔄 [UPDATE] Incremental {:?} failed ({:?}), full render", update, e);
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] {:?}", e);
                    }
                }
            }
            UpdateType::FullRender => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] {:?}", e);
                }
            }
        }
    });
}

/// Re-render from JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

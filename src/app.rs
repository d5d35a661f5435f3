// ============================================================================
// APP - Root composer: mounts on #app, restores the session, re-renders
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{get_element_by_id, replace_children};
use crate::services::{AlertNotifier, ApiClient};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::stores::CookieTokenStore;
use crate::viewmodels::AuthViewModel;
use crate::views::{render_app, update_product_detail};

/// Auth viewmodel wired to the browser: fetch, cookies and alert()
pub type BrowserAuthViewModel = AuthViewModel<ApiClient, CookieTokenStore, AlertNotifier>;

pub fn auth_viewmodel(state: &AppState) -> BrowserAuthViewModel {
    AuthViewModel::new(
        ApiClient::new(&CONFIG),
        CookieTokenStore::new(&CONFIG.token_cookie),
        AlertNotifier::new(&state.language()),
        state.clone(),
    )
}

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        if !CONFIG.has_api_path() {
            log::warn!("⚠️ [APP] API_PATH is not set; product requests will fail");
        }

        let state = AppState::new(&CONFIG.language);

        // Batch updates to the next tick so a handler never re-renders its own element
        state.subscribe_to_changes(|update_type| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Startup: the login form is already on screen; it is replaced by the
    /// catalog only if the stored session checks out
    pub fn restore_session(&self) {
        let state = self.state.clone();
        spawn_local(async move {
            let restored = auth_viewmodel(&state).restore_session().await;
            log::info!("🚀 [APP] Startup restore finished (authenticated: {})", restored);
        });
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let view = render_app(&self.state)?;
        replace_children(&self.root, &view)
    }

    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::ProductDetail => update_product_detail(&self.state),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

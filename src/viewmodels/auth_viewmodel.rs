// ============================================================================
// AUTH VIEWMODEL - Login, startup restore and "check login"
// ============================================================================
// Every API error is caught here and turned into a notice. Nothing is
// retried. State is only written after the step that produces it succeeds.
// ============================================================================

use crate::models::SessionToken;
use crate::services::{Notice, Notifier, ProductApi};
use crate::state::{AppState, UpdateType};
use crate::stores::TokenStore;

/// How a login submission ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Signed in and the catalog was loaded
    Authenticated { products: usize },
    /// Signed in but the catalog fetch failed; previous collection kept
    AuthenticatedWithoutCatalog,
    /// Server rejected the credentials (or was unreachable)
    Rejected,
    /// A newer submission was applied while this one was in flight
    Superseded,
}

/// Answer to the "check login" action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    LoggedIn,
    NotLoggedIn,
    CheckFailed,
}

pub struct AuthViewModel<A, S, N> {
    api: A,
    store: S,
    notifier: N,
    state: AppState,
}

impl<A, S, N> AuthViewModel<A, S, N>
where
    A: ProductApi,
    S: TokenStore,
    N: Notifier,
{
    pub fn new(api: A, store: S, notifier: N, state: AppState) -> Self {
        Self {
            api,
            store,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Keystroke handler: merge one named field into the credentials
    pub fn update_field(&self, name: &str, value: &str) {
        if !self.state.auth.update_field(name, value) {
            log::warn!("⚠️ [AUTH] Ignoring unknown form field '{}'", name);
        }
    }

    /// Submit the login form: sign in, load the catalog, then persist the
    /// token and flip the auth flag
    pub async fn login(&self) -> LoginOutcome {
        let generation = self.state.auth.begin_login();
        let credentials = self.state.auth.get_credentials();
        log::info!("🔐 [AUTH] Login #{} for {}", generation, credentials.username);

        let grant = match self.api.sign_in(&credentials).await {
            Ok(grant) => grant,
            Err(e) => {
                log::warn!("❌ [AUTH] Login #{} rejected: {}", generation, e);
                self.notifier.notify(Notice::SignInFailed);
                return LoginOutcome::Rejected;
            }
        };

        let token = grant.token;
        let fetched = self.api.list_products(&token).await;

        // Token, catalog and flag change together or not at all
        if !self.state.auth.can_apply_login(generation) {
            log::info!("⏭️ [AUTH] Login #{} superseded by a newer login", generation);
            return LoginOutcome::Superseded;
        }
        self.state.auth.mark_login_applied(generation);
        self.store.write(&token);
        self.state.auth.set_token(Some(token));

        let outcome = match fetched {
            Ok(products) => {
                let count = products.len();
                self.state.catalog.set_products(products);
                LoginOutcome::Authenticated { products: count }
            }
            Err(e) => {
                // Signed in but no catalog: the view opens with the previous (or empty) list
                log::error!("❌ [AUTH] Catalog fetch after login failed: {}", e);
                self.notifier.notify(Notice::ProductsFetchFailed);
                LoginOutcome::AuthenticatedWithoutCatalog
            }
        };

        self.state.auth.clear_credentials();
        self.state.auth.set_authenticated(true);
        self.state.notify_changes(UpdateType::FullRender);
        log::info!("✅ [AUTH] Login #{} finished: {:?}", generation, outcome);
        outcome
    }

    /// Startup: restore a stored session. Every failure falls back to the
    /// login form without a notice. Returns whether the app is now authenticated.
    pub async fn restore_session(&self) -> bool {
        let Some(token) = self.store.read() else {
            log::info!("🔓 [AUTH] No stored token, showing login form");
            return false;
        };

        match self.api.check_session(&token).await {
            Ok(true) => {}
            Ok(false) => {
                log::info!("🔓 [AUTH] Stored token no longer valid");
                return false;
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Session check at startup failed: {}", e);
                return false;
            }
        }

        let products = match self.api.list_products(&token).await {
            Ok(products) => products,
            Err(e) => {
                log::warn!("⚠️ [AUTH] Catalog fetch at startup failed: {}", e);
                return false;
            }
        };

        // A login submitted while restoring owns the state now
        if self.state.auth.is_authenticated() {
            log::info!("⏭️ [AUTH] Already authenticated, dropping restored session");
            return true;
        }

        log::info!("✅ [AUTH] Session restored with {} products", products.len());
        self.state.catalog.set_products(products);
        self.state.auth.set_token(Some(token));
        self.state.auth.set_authenticated(true);
        self.state.notify_changes(UpdateType::FullRender);
        true
    }

    /// "Check login" button: report the session status; read-only on state
    pub async fn check_login(&self) -> SessionStatus {
        let status = match self.current_token() {
            None => SessionStatus::NotLoggedIn,
            Some(token) => match self.api.check_session(&token).await {
                Ok(true) => SessionStatus::LoggedIn,
                Ok(false) => SessionStatus::NotLoggedIn,
                Err(e) => {
                    log::warn!("⚠️ [AUTH] Session check failed: {}", e);
                    SessionStatus::CheckFailed
                }
            },
        };

        self.notifier.notify(match status {
            SessionStatus::LoggedIn => Notice::LoggedIn,
            SessionStatus::NotLoggedIn => Notice::NotLoggedIn,
            SessionStatus::CheckFailed => Notice::SessionCheckFailed,
        });
        status
    }

    fn current_token(&self) -> Option<SessionToken> {
        self.state.auth.get_token().or_else(|| self.store.read())
    }
}

// ============================================================================
// NOTICES - Blocking user-facing messages (window.alert)
// ============================================================================

use crate::utils::i18n::t;

/// Messages shown to the operator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    SignInFailed,
    ProductsFetchFailed,
    SessionCheckFailed,
    LoggedIn,
    NotLoggedIn,
}

impl Notice {
    pub fn key(self) -> &'static str {
        match self {
            Notice::SignInFailed => "sign_in_failed",
            Notice::ProductsFetchFailed => "products_fetch_failed",
            Notice::SessionCheckFailed => "session_check_failed",
            Notice::LoggedIn => "logged_in",
            Notice::NotLoggedIn => "not_logged_in",
        }
    }

    pub fn text(self, lang: &str) -> String {
        t(self.key(), lang)
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Shows notices with the browser's blocking `alert`
#[derive(Clone, Debug)]
pub struct AlertNotifier {
    lang: String,
}

impl AlertNotifier {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
        }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        let message = notice.text(&self.lang);
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(&message).is_err() {
                    log::warn!("⚠️ [NOTICE] alert() failed: {}", message);
                }
            }
            None => log::warn!("⚠️ [NOTICE] No window, dropping notice: {}", message),
        }
    }
}

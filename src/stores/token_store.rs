// ============================================================================
// TOKEN STORE - Session token persisted in a cookie
// ============================================================================
// read() never fails: a missing, empty or malformed cookie reads as None.
// There is no delete; expired tokens are dropped by the browser or rejected
// by the server.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::models::SessionToken;

pub trait TokenStore {
    fn read(&self) -> Option<SessionToken>;
    fn write(&self, token: &SessionToken);
}

/// Extract the value of cookie `name` from a `document.cookie` string
pub fn token_from_cookie(cookie: &str, name: &str) -> Option<String> {
    cookie
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Serialized `document.cookie` assignment for `token`
pub fn cookie_assignment(name: &str, token: &SessionToken) -> String {
    match token.cookie_expires() {
        Some(expires) => format!("{}={}; expires={}; path=/", name, token.value, expires),
        None => format!("{}={}; path=/", name, token.value),
    }
}

/// Browser cookie jar (`document.cookie`)
#[derive(Clone, Debug)]
pub struct CookieTokenStore {
    cookie_name: String,
}

impl CookieTokenStore {
    pub fn new(cookie_name: &str) -> Self {
        Self {
            cookie_name: cookie_name.to_string(),
        }
    }

    fn html_document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl TokenStore for CookieTokenStore {
    fn read(&self) -> Option<SessionToken> {
        let cookie = Self::html_document()?.cookie().ok()?;
        token_from_cookie(&cookie, &self.cookie_name).map(|value| SessionToken::new(value, None))
    }

    fn write(&self, token: &SessionToken) {
        let Some(document) = Self::html_document() else {
            log::warn!("⚠️ [TOKEN] No document, token not persisted");
            return;
        };
        if let Err(e) = document.set_cookie(&cookie_assignment(&self.cookie_name, token)) {
            log::error!("❌ [TOKEN] Could not write cookie: {:?}", e);
        }
    }
}

/// In-memory store; expired tokens read as absent
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<SessionToken>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<SessionToken> {
        self.slot
            .borrow()
            .as_ref()
            .filter(|token| !token.value.is_empty() && !token.is_expired(Utc::now()))
            .cloned()
    }

    fn write(&self, token: &SessionToken) {
        *self.slot.borrow_mut() = Some(token.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn finds_named_cookie_among_others() {
        let cookie = "theme=dark; hexToken=abc.def.ghi; lang=zh";
        assert_eq!(token_from_cookie(cookie, "hexToken").as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_or_empty_cookie_reads_as_none() {
        assert_eq!(token_from_cookie("", "hexToken"), None);
        assert_eq!(token_from_cookie("theme=dark", "hexToken"), None);
        assert_eq!(token_from_cookie("hexToken=; theme=dark", "hexToken"), None);
        assert_eq!(token_from_cookie("garbage;;;", "hexToken"), None);
    }

    #[test]
    fn similar_names_do_not_match() {
        assert_eq!(token_from_cookie("myhexToken=x", "hexToken"), None);
    }

    #[test]
    fn assignment_includes_expiry() {
        let token = SessionToken::new("abc", Some(Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap()));
        assert_eq!(
            cookie_assignment("hexToken", &token),
            "hexToken=abc; expires=Wed, 02 Jan 2030 03:04:05 GMT; path=/"
        );
    }

    #[test]
    fn memory_store_round_trip_and_expiry() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.read(), None);

        let live = SessionToken::new("live", Some(Utc::now() + Duration::days(1)));
        store.write(&live);
        assert_eq!(store.read(), Some(live));

        store.write(&SessionToken::new("old", Some(Utc::now() - Duration::days(1))));
        assert_eq!(store.read(), None);
    }
}

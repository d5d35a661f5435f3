// ============================================================================
// AUTH STATE - Authentication flag, token and login form fields
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{Credentials, SessionToken};

/// Authentication state
#[derive(Clone)]
pub struct AuthState {
    pub is_authenticated: Rc<RefCell<bool>>,
    pub token: Rc<RefCell<Option<SessionToken>>>,
    pub credentials: Rc<RefCell<Credentials>>,
    /// Bumped on every login submission
    pub login_generation: Rc<Cell<u64>>,
    /// Newest submission whose result reached the state
    pub applied_generation: Rc<Cell<u64>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            is_authenticated: Rc::new(RefCell::new(false)),
            token: Rc::new(RefCell::new(None)),
            credentials: Rc::new(RefCell::new(Credentials::default())),
            login_generation: Rc::new(Cell::new(0)),
            applied_generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        *self.is_authenticated.borrow_mut() = authenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        *self.is_authenticated.borrow()
    }

    pub fn set_token(&self, token: Option<SessionToken>) {
        *self.token.borrow_mut() = token;
    }

    pub fn get_token(&self) -> Option<SessionToken> {
        self.token.borrow().clone()
    }

    /// Merge one form field into the credentials
    pub fn update_field(&self, name: &str, value: &str) -> bool {
        self.credentials.borrow_mut().set_field(name, value)
    }

    pub fn get_credentials(&self) -> Credentials {
        self.credentials.borrow().clone()
    }

    pub fn clear_credentials(&self) {
        *self.credentials.borrow_mut() = Credentials::default();
    }

    /// Start a new login attempt and return its generation
    pub fn begin_login(&self) -> u64 {
        let next = self.login_generation.get() + 1;
        self.login_generation.set(next);
        next
    }

    /// A successful login may apply unless a newer one already has;
    /// newer submissions that were rejected do not count
    pub fn can_apply_login(&self, generation: u64) -> bool {
        self.applied_generation.get() < generation
    }

    pub fn mark_login_applied(&self, generation: u64) {
        if generation > self.applied_generation.get() {
            self.applied_generation.set(generation);
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

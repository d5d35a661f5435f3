// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AuthState, CatalogState};

/// Kind of DOM update a state change requires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Only specific elements change
    Incremental(IncrementalUpdate),
    /// Full re-render (login, startup restore)
    FullRender,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Re-render the detail panel after a selection
    ProductDetail,
}

type ChangeCallback = Rc<dyn Fn(UpdateType)>;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub catalog: CatalogState,
    pub language: Rc<RefCell<String>>,

    pub change_subscribers: Rc<RefCell<Vec<ChangeCallback>>>,
}

impl AppState {
    pub fn new(language: &str) -> Self {
        Self {
            auth: AuthState::new(),
            catalog: CatalogState::new(),
            language: Rc::new(RefCell::new(language.to_string())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notify every subscriber; the subscriber list is copied first so a
    /// callback may subscribe again without a double borrow
    pub fn notify_changes(&self, update_type: UpdateType) {
        let subscribers: Vec<ChangeCallback> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_receive_update_type() {
        let state = AppState::new("ZH");
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe_to_changes(move |update| seen.borrow_mut().push(update));
        }

        state.notify_changes(UpdateType::FullRender);
        state.notify_changes(UpdateType::Incremental(IncrementalUpdate::ProductDetail));

        assert_eq!(
            *seen.borrow(),
            vec![
                UpdateType::FullRender,
                UpdateType::Incremental(IncrementalUpdate::ProductDetail)
            ]
        );
    }

    #[test]
    fn clones_share_subscribers() {
        let state = AppState::new("ZH");
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe_to_changes(move |_| hits.set(hits.get() + 1));
        }
        state.clone().notify_changes(UpdateType::FullRender);
        assert_eq!(hits.get(), 1);
    }
}

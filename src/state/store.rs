// ============================================================================
// STORE - AppState compartido + dispatch + subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{Action, AppState};

type Callback = Rc<dyn Fn()>;

/// Store de la app. Se clona barato (Rc) y se pasa a quien lo necesite.
#[derive(Clone)]
pub struct Store {
    state: Rc<RefCell<AppState>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Rc::new(RefCell::new(initial)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Aplica la acción y notifica. El borrow se suelta antes de notificar
    /// para que los subscribers puedan leer el estado.
    pub fn dispatch(&self, action: Action) {
        log::debug!("📨 [STORE] {:?}", action);
        self.state.borrow_mut().reduce(action);
        self.notify();
    }

    pub fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        selector(&self.state.borrow())
    }

    /// Copia completa del estado (para renderizar)
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::state::UsersAction;

    #[test]
    fn dispatch_reduces_then_notifies() {
        let store = Store::new(AppState::default());
        let seen = Rc::new(Cell::new(None));

        {
            let store_clone = store.clone();
            let seen = seen.clone();
            store.subscribe(move || {
                seen.set(Some(store_clone.select(|s| s.users.is_loading)));
            });
        }

        store.dispatch(Action::Users(UsersAction::UsersRequested));
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new(AppState::default());
        let other = store.clone();
        other.dispatch(Action::Users(UsersAction::AuthRequestSuccess { user_id: "u1".to_string() }));

        assert!(store.select(|s| s.users.is_logged_in()));
        assert_eq!(store.snapshot().users.current_user_id(), Some("u1"));
    }
}

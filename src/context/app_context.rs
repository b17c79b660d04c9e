// ============================================================================
// APP CONTEXT - Dependencias compartidas que se pasan a viewmodels y vistas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::{ApiClient, Backend, BrowserNavigator, Navigator, TokenStorage};
use crate::state::{AppState, Store};

/// Valores del formulario de login, sobreviven a los re-renders
#[derive(Debug, Clone, Default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AppContext {
    pub store: Store,
    pub backend: Rc<dyn Backend>,
    pub tokens: TokenStorage,
    pub navigator: Rc<dyn Navigator>,
    pub login_draft: Rc<RefCell<LoginDraft>>,
}

impl AppContext {
    pub fn new(backend: Rc<dyn Backend>, tokens: TokenStorage, navigator: Rc<dyn Navigator>) -> Self {
        let store = Store::new(AppState::new(&tokens));
        Self {
            store,
            backend,
            tokens,
            navigator,
            login_draft: Rc::new(RefCell::new(LoginDraft::default())),
        }
    }

    /// Contexto real: localStorage + HTTP + History API
    pub fn browser() -> Self {
        let tokens = TokenStorage::browser();
        let backend = Rc::new(ApiClient::new(tokens.clone()));
        Self::new(backend, tokens, Rc::new(BrowserNavigator))
    }
}

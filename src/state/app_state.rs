// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::models::{Profession, Quality};
use crate::services::TokenStorage;
use crate::state::{CatalogAction, CatalogState, UsersAction, UsersState};

/// Mensaje que llega al store; cada slice maneja el suyo
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Users(UsersAction),
    Professions(CatalogAction<Profession>),
    Qualities(CatalogAction<Quality>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub users: UsersState,
    pub professions: CatalogState<Profession>,
    pub qualities: CatalogState<Quality>,
}

impl AppState {
    /// Estado inicial: la sesión se restaura desde los tokens persistidos
    pub fn new(tokens: &TokenStorage) -> Self {
        Self {
            users: UsersState::from_storage(tokens),
            professions: CatalogState::new(),
            qualities: CatalogState::new(),
        }
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Users(action) => self.users.reduce(action),
            Action::Professions(action) => self.professions.reduce(action),
            Action::Qualities(action) => self.qualities.reduce(action),
        }
    }
}

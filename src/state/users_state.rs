// ============================================================================
// USERS STATE - Sesión de auth + lista de usuarios
// ============================================================================

use crate::models::{AuthInfo, UserRecord};
use crate::services::TokenStorage;
use crate::state::LoadStatus;

/// Comandos que acepta el slice de usuarios
#[derive(Debug, Clone, PartialEq)]
pub enum UsersAction {
    UsersRequested,
    UsersReceived(Vec<UserRecord>),
    UsersRequestFailed(String),
    AuthRequested,
    AuthRequestSuccess { user_id: String },
    AuthRequestFailed(String),
    UserCreateRequested,
    UserCreated(UserRecord),
    CreateUserFailed(String),
    UserLoggedOut,
    UserUpdateRequested,
    UserUpdateSuccess(UserRecord),
    UserUpdateFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsersState {
    /// `None` hasta la primera carga correcta
    pub entities: Option<Vec<UserRecord>>,
    pub is_loading: bool,
    pub is_updating: bool,
    pub error: Option<String>,
    pub auth: Option<AuthInfo>,
    pub is_logged_in: bool,
    pub data_loaded: bool,
}

impl UsersState {
    /// Estado vacío (sin sesión)
    pub fn logged_out() -> Self {
        Self {
            entities: None,
            is_loading: false,
            is_updating: false,
            error: None,
            auth: None,
            is_logged_in: false,
            data_loaded: false,
        }
    }

    /// Sesión restaurada: la lista de usuarios arranca como "cargando"
    pub fn restored(user_id: String) -> Self {
        Self {
            is_loading: true,
            auth: Some(AuthInfo { user_id }),
            is_logged_in: true,
            ..Self::logged_out()
        }
    }

    /// Estado inicial según los tokens persistidos. Un token sin user id
    /// no cuenta como sesión.
    pub fn from_storage(tokens: &TokenStorage) -> Self {
        match (tokens.access_token(), tokens.user_id()) {
            (Some(_), Some(user_id)) => {
                log::info!("💾 [USERS] Sesión encontrada en storage para {}", user_id);
                Self::restored(user_id)
            }
            (Some(_), None) => {
                log::warn!("⚠️ [USERS] Token sin user id en storage, se ignora");
                Self::logged_out()
            }
            _ => Self::logged_out(),
        }
    }

    pub fn reduce(&mut self, action: UsersAction) {
        match action {
            UsersAction::UsersRequested => {
                self.is_loading = true;
            }
            UsersAction::UsersReceived(users) => {
                self.entities = Some(users);
                self.data_loaded = true;
                self.is_loading = false;
            }
            UsersAction::UsersRequestFailed(error) => {
                self.error = Some(error);
                self.is_loading = false;
            }
            UsersAction::AuthRequested => {
                self.error = None;
            }
            UsersAction::AuthRequestSuccess { user_id } => {
                self.auth = Some(AuthInfo { user_id });
                self.is_logged_in = true;
            }
            UsersAction::AuthRequestFailed(error) => {
                self.error = Some(error);
            }
            UsersAction::UserCreateRequested | UsersAction::UserUpdateRequested => {
                self.is_updating = true;
            }
            UsersAction::UserCreated(user) => {
                // Tras un registro puede llegar antes que la primera carga
                self.entities.get_or_insert_with(Vec::new).push(user);
                self.is_updating = false;
            }
            UsersAction::CreateUserFailed(error) | UsersAction::UserUpdateFailed(error) => {
                self.error = Some(error);
                self.is_updating = false;
            }
            UsersAction::UserLoggedOut => {
                self.entities = None;
                self.is_logged_in = false;
                self.auth = None;
                self.data_loaded = false;
                self.is_loading = false;
                self.is_updating = false;
            }
            UsersAction::UserUpdateSuccess(user) => {
                let slot = self
                    .entities
                    .as_mut()
                    .and_then(|users| users.iter_mut().find(|u| u.id == user.id));
                match slot {
                    Some(existing) => *existing = user,
                    None => log::warn!("⚠️ [USERS] Usuario actualizado {} no está en la lista", user.id),
                }
                self.is_updating = false;
            }
        }
    }

    pub fn users_list(&self) -> Option<&[UserRecord]> {
        self.entities.as_deref()
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.user_id.as_str())
    }

    pub fn current_user_data(&self) -> Option<&UserRecord> {
        let user_id = self.current_user_id()?;
        self.user_by_id(user_id)
    }

    pub fn user_by_id(&self, user_id: &str) -> Option<&UserRecord> {
        self.entities.as_ref()?.iter().find(|u| u.id == user_id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn data_status(&self) -> bool {
        self.data_loaded
    }

    pub fn loading_status(&self) -> bool {
        self.is_loading
    }

    pub fn auth_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> LoadStatus {
        LoadStatus::from_flags(self.is_loading, self.data_loaded)
    }
}

impl Default for UsersState {
    fn default() -> Self {
        Self::logged_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{memory_tokens, user};

    #[test]
    fn persisted_token_restores_session() {
        let tokens = memory_tokens();
        tokens.set_tokens(&crate::testing::auth_tokens("u42"), 0).unwrap();

        let state = UsersState::from_storage(&tokens);

        assert!(state.is_logged_in());
        assert_eq!(state.current_user_id(), Some("u42"));
        assert!(state.loading_status());
        assert!(state.users_list().is_none());
    }

    #[test]
    fn no_token_starts_logged_out() {
        let state = UsersState::from_storage(&memory_tokens());
        assert_eq!(state, UsersState::logged_out());
        assert_eq!(state.current_user_id(), None);
        assert_eq!(state.status(), LoadStatus::Idle);
    }

    #[test]
    fn request_failure_stores_payload() {
        let mut state = UsersState::restored("u1".to_string());
        state.reduce(UsersAction::UsersRequestFailed("boom".to_string()));

        assert_eq!(state.auth_error(), Some("boom"));
        assert!(!state.loading_status());
        assert!(state.users_list().is_none());
    }

    #[test]
    fn logout_resets_from_any_state() {
        let mut state = UsersState::restored("u1".to_string());
        state.reduce(UsersAction::UsersReceived(vec![user("u1"), user("u2")]));
        state.reduce(UsersAction::UserLoggedOut);

        assert!(state.users_list().is_none());
        assert!(!state.is_logged_in());
        assert!(state.auth.is_none());
        assert!(!state.data_status());

        let mut fresh = UsersState::logged_out();
        fresh.reduce(UsersAction::UserLoggedOut);
        assert_eq!(fresh, UsersState::logged_out());
    }

    #[test]
    fn update_replaces_only_matching_record() {
        let mut state = UsersState::restored("u1".to_string());
        state.reduce(UsersAction::UsersReceived(vec![user("u1"), user("u2"), user("u3")]));

        let mut changed = user("u2");
        changed.name = "Renamed".to_string();
        state.reduce(UsersAction::UserUpdateRequested);
        assert!(state.is_updating);
        state.reduce(UsersAction::UserUpdateSuccess(changed.clone()));

        let users = state.users_list().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0], user("u1"));
        assert_eq!(users[1], changed);
        assert_eq!(users[2], user("u3"));
        assert!(!state.is_updating);
    }

    #[test]
    fn update_for_unknown_id_changes_nothing() {
        let mut state = UsersState::restored("u1".to_string());
        state.reduce(UsersAction::UsersReceived(vec![user("u1")]));
        state.reduce(UsersAction::UserUpdateSuccess(user("ghost")));

        assert_eq!(state.users_list().unwrap(), &[user("u1")]);
    }

    #[test]
    fn created_user_appends_even_before_first_load() {
        let mut state = UsersState::logged_out();
        state.reduce(UsersAction::UserCreated(user("u9")));
        assert_eq!(state.users_list().unwrap(), &[user("u9")]);

        state.reduce(UsersAction::UserCreated(user("u10")));
        assert_eq!(state.users_list().unwrap().len(), 2);
        assert!(!state.data_status());

        state.reduce(UsersAction::UsersReceived(vec![user("u1")]));
        assert_eq!(state.users_list().unwrap(), &[user("u1")]);
        assert!(state.data_status());
    }

    #[test]
    fn current_user_data_resolves_through_auth() {
        let mut state = UsersState::logged_out();
        assert!(state.current_user_data().is_none());

        state.reduce(UsersAction::AuthRequestSuccess { user_id: "u2".to_string() });
        assert!(state.current_user_data().is_none());

        state.reduce(UsersAction::UsersReceived(vec![user("u1"), user("u2")]));
        assert_eq!(state.current_user_data().map(|u| u.id.as_str()), Some("u2"));
        assert_eq!(state.status(), LoadStatus::Loaded);
    }

    #[test]
    fn auth_requested_clears_previous_error() {
        let mut state = UsersState::logged_out();
        state.reduce(UsersAction::AuthRequestFailed("bad".to_string()));
        assert_eq!(state.auth_error(), Some("bad"));

        state.reduce(UsersAction::AuthRequested);
        assert_eq!(state.auth_error(), None);
    }
}

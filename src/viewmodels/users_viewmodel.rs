// ============================================================================
// USERS VIEWMODEL - Login, registro, logout y CRUD de usuarios
// ============================================================================
// Cada flujo despacha acciones al store; los errores quedan en el estado
// para la UI y además se devuelven al llamador
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::context::{AppContext, LoginDraft};
use crate::models::{Credentials, SignUpData, UserRecord};
use crate::services::{ApiError, Backend, Navigator, TokenStorage};
use crate::state::{Action, Store, UsersAction};

pub const HOME_PATH: &str = "/";
pub const USERS_PATH: &str = "/users";

#[derive(Clone)]
pub struct UsersViewModel {
    store: Store,
    backend: Rc<dyn Backend>,
    tokens: TokenStorage,
    navigator: Rc<dyn Navigator>,
    login_draft: Rc<RefCell<LoginDraft>>,
}

impl UsersViewModel {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            store: ctx.store.clone(),
            backend: ctx.backend.clone(),
            tokens: ctx.tokens.clone(),
            navigator: ctx.navigator.clone(),
            login_draft: ctx.login_draft.clone(),
        }
    }

    fn dispatch(&self, action: UsersAction) {
        self.store.dispatch(Action::Users(action));
    }

    /// El formulario de login no debe conservar la contraseña
    fn clear_login_draft(&self) {
        *self.login_draft.borrow_mut() = LoginDraft::default();
    }

    fn persist_tokens(&self, tokens: &crate::models::AuthTokens) {
        let now = chrono::Utc::now().timestamp_millis();
        if let Err(e) = self.tokens.set_tokens(tokens, now) {
            log::error!("❌ Error guardando tokens: {}", e);
        }
    }

    /// Login; con éxito guarda tokens y navega a `redirect`
    pub async fn login(&self, credentials: Credentials, redirect: &str) -> Result<(), ApiError> {
        log::info!("🔐 Iniciando login para {}", credentials.email);
        self.dispatch(UsersAction::AuthRequested);

        match self.backend.sign_in(&credentials).await {
            Ok(tokens) => {
                self.dispatch(UsersAction::AuthRequestSuccess {
                    user_id: tokens.local_id.clone(),
                });
                self.persist_tokens(&tokens);
                self.clear_login_draft();
                log::info!("✅ Login correcto: {}", tokens.local_id);
                self.navigator.push(redirect);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Login fallido: {}", e);
                self.dispatch(UsersAction::AuthRequestFailed(e.auth_message()));
                Err(e)
            }
        }
    }

    /// Registro: tokens, sesión y alta del perfil por defecto en el backend
    pub async fn sign_up(&self, data: SignUpData) -> Result<(), ApiError> {
        log::info!("📝 Registrando {}", data.email);
        self.dispatch(UsersAction::AuthRequested);

        let tokens = match self.backend.sign_up(&data.credentials()).await {
            Ok(tokens) => tokens,
            Err(e) => {
                log::error!("❌ Registro fallido: {}", e);
                self.dispatch(UsersAction::AuthRequestFailed(e.to_string()));
                return Err(e);
            }
        };

        // Los tokens se guardan solo si el perfil es válido
        let user = UserRecord::with_defaults(
            &tokens.local_id,
            &data.email,
            data.profile,
            &mut rand::thread_rng(),
        )
        .map_err(ApiError::from);
        let user = match user {
            Ok(user) => user,
            Err(e) => {
                self.dispatch(UsersAction::AuthRequestFailed(e.to_string()));
                return Err(e);
            }
        };

        self.persist_tokens(&tokens);
        self.dispatch(UsersAction::AuthRequestSuccess {
            user_id: tokens.local_id.clone(),
        });
        // Un alta fallida queda en el estado pero la sesión ya es válida
        let _ = self.create_user(user).await;
        Ok(())
    }

    /// Alta del usuario en el backend; navega a la lista si sale bien
    pub async fn create_user(&self, user: UserRecord) -> Result<(), ApiError> {
        self.dispatch(UsersAction::UserCreateRequested);
        match self.backend.create_user(&user).await {
            Ok(created) => {
                log::info!("✅ Usuario creado: {}", created.id);
                self.dispatch(UsersAction::UserCreated(created));
                self.navigator.push(USERS_PATH);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error creando usuario: {}", e);
                self.dispatch(UsersAction::CreateUserFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn log_out(&self) {
        log::info!("👋 Logout - limpiando sesión");
        self.tokens.remove_auth_data();
        self.clear_login_draft();
        self.dispatch(UsersAction::UserLoggedOut);
        self.navigator.push(HOME_PATH);
    }

    pub async fn load_users_list(&self) -> Result<(), ApiError> {
        log::info!("👥 Cargando lista de usuarios...");
        self.dispatch(UsersAction::UsersRequested);
        match self.backend.fetch_users().await {
            Ok(users) => {
                log::info!("✅ {} usuarios cargados", users.len());
                self.dispatch(UsersAction::UsersReceived(users));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error cargando usuarios: {}", e);
                self.dispatch(UsersAction::UsersRequestFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn update_user_data(&self, payload: UserRecord, redirect: &str) -> Result<(), ApiError> {
        log::info!("📝 Actualizando usuario {}", payload.id);
        self.dispatch(UsersAction::UserUpdateRequested);
        match self.backend.update_user(&payload).await {
            Ok(updated) => {
                self.dispatch(UsersAction::UserUpdateSuccess(updated));
                self.navigator.push(redirect);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error actualizando usuario: {}", e);
                self.dispatch(UsersAction::UserUpdateFailed(e.to_string()));
                Err(e)
            }
        }
    }
}

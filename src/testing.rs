// Fakes para tests: storage en memoria, navegador que graba y backend con
// respuestas preparadas.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use async_trait::async_trait;
use serde_json::Map;
use crate::context::AppContext;
use crate::models::{AuthTokens, Credentials, Profession, Quality, UserRecord};
use crate::services::{ApiError, Backend, KeyValueStore, Navigator, TokenStorage};

#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.visited.borrow().last().cloned().unwrap_or_else(|| "/".to_string())
    }
}

type Probe = Box<dyn Fn(&'static str)>;

/// Backend con respuestas fijas; `None` en create/update devuelve el payload
pub struct FakeBackend {
    pub sign_in_result: RefCell<Result<AuthTokens, ApiError>>,
    pub sign_up_result: RefCell<Result<AuthTokens, ApiError>>,
    pub users_result: RefCell<Result<Vec<UserRecord>, ApiError>>,
    pub create_result: RefCell<Option<Result<UserRecord, ApiError>>>,
    pub update_result: RefCell<Option<Result<UserRecord, ApiError>>>,
    pub professions_result: RefCell<Result<Vec<Profession>, ApiError>>,
    pub qualities_result: RefCell<Result<Vec<Quality>, ApiError>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub created: RefCell<Vec<UserRecord>>,
    /// Se ejecuta al inicio de cada llamada (para mirar el store "en vuelo")
    pub probe: RefCell<Option<Probe>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            sign_in_result: RefCell::new(Ok(auth_tokens("u1"))),
            sign_up_result: RefCell::new(Ok(auth_tokens("new-user"))),
            users_result: RefCell::new(Ok(vec![user("u1"), user("u2")])),
            create_result: RefCell::new(None),
            update_result: RefCell::new(None),
            professions_result: RefCell::new(Ok(vec![profession("p1", "Doctor")])),
            qualities_result: RefCell::new(Ok(vec![quality("q1", "Nerd")])),
            calls: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
            probe: RefCell::new(None),
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    fn call(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
        if let Some(probe) = self.probe.borrow().as_ref() {
            probe(name);
        }
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        self.call("sign_in");
        self.sign_in_result.borrow().clone()
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        self.call("sign_up");
        self.sign_up_result.borrow().clone()
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.call("fetch_users");
        self.users_result.borrow().clone()
    }

    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord, ApiError> {
        self.call("create_user");
        self.created.borrow_mut().push(user.clone());
        self.create_result.borrow().clone().unwrap_or_else(|| Ok(user.clone()))
    }

    async fn update_user(&self, user: &UserRecord) -> Result<UserRecord, ApiError> {
        self.call("update_user");
        self.update_result.borrow().clone().unwrap_or_else(|| Ok(user.clone()))
    }

    async fn fetch_professions(&self) -> Result<Vec<Profession>, ApiError> {
        self.call("fetch_professions");
        self.professions_result.borrow().clone()
    }

    async fn fetch_qualities(&self) -> Result<Vec<Quality>, ApiError> {
        self.call("fetch_qualities");
        self.qualities_result.borrow().clone()
    }
}

pub struct TestHarness {
    pub ctx: AppContext,
    pub backend: Rc<FakeBackend>,
    pub navigator: Rc<RecordingNavigator>,
}

/// Contexto de test; con `user_id` arranca con sesión persistida
pub fn harness(user_id: Option<&str>) -> TestHarness {
    let tokens = memory_tokens();
    if let Some(user_id) = user_id {
        tokens
            .set_tokens(&auth_tokens(user_id), chrono::Utc::now().timestamp_millis())
            .unwrap();
    }
    let backend = Rc::new(FakeBackend::new());
    let navigator = Rc::new(RecordingNavigator::default());
    let ctx = AppContext::new(backend.clone(), tokens, navigator.clone());
    TestHarness { ctx, backend, navigator }
}

pub fn memory_tokens() -> TokenStorage {
    TokenStorage::new(Rc::new(MemoryStorage::default()))
}

pub fn auth_tokens(user_id: &str) -> AuthTokens {
    AuthTokens {
        id_token: format!("id-{}", user_id),
        refresh_token: format!("refresh-{}", user_id),
        expires_in: "3600".to_string(),
        local_id: user_id.to_string(),
    }
}

pub fn user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        name: format!("User {}", id),
        rate: 3,
        completed_meetings: 10,
        image: format!("https://avatars.example.com/{}.svg", id),
        profession: Some("p1".to_string()),
        qualities: vec!["q1".to_string()],
        extra: Map::new(),
    }
}

pub fn profession(id: &str, name: &str) -> Profession {
    Profession {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn quality(id: &str, name: &str) -> Quality {
    Quality {
        id: id.to_string(),
        name: name.to_string(),
        color: "primary".to_string(),
    }
}

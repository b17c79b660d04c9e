pub mod api_error;
pub mod auth_errors;
pub mod backend;
pub mod api_client;
pub mod token_storage;
pub mod navigation;

pub use api_error::ApiError;
pub use auth_errors::generate_auth_error;
pub use backend::Backend;
pub use api_client::ApiClient;
pub use token_storage::{BrowserStorage, KeyValueStore, TokenStorage};
pub use navigation::{BrowserNavigator, Navigator, NAVIGATE_EVENT};

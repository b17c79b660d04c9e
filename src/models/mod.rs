pub mod auth;
pub mod user;
pub mod catalog;

pub use auth::{AuthInfo, AuthTokens, Credentials, SignUpData};
pub use user::UserRecord;
pub use catalog::{CatalogEntry, Profession, Quality};

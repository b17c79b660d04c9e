pub mod users_viewmodel;
pub mod catalog_viewmodel;
pub mod app_loader;

pub use users_viewmodel::{UsersViewModel, HOME_PATH, USERS_PATH};
pub use catalog_viewmodel::CatalogViewModel;
pub use app_loader::{AppLoader, LoaderView};

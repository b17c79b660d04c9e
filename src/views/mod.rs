pub mod app;
pub mod app_loader;
pub mod lookup;
pub mod profession;
pub mod quality;
pub mod login;
pub mod users;

pub use app::{render_app, Route};
pub use app_loader::render_app_loader;
pub use lookup::{lookup_label, LookupLabel};
pub use profession::render_profession;
pub use quality::render_qualities;
pub use login::{render_login, render_register};
pub use users::{render_edit_user, render_user_page, render_users_list};

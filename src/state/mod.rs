// ============================================================================
// STATE MODULE - Slices + reducers + store
// ============================================================================

pub mod load_status;
pub mod users_state;
pub mod catalog_state;
pub mod app_state;
pub mod store;

pub use load_status::*;
pub use users_state::*;
pub use catalog_state::*;
pub use app_state::*;
pub use store::*;

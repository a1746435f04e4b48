pub mod error;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

pub use error::{Result, ServerError};
pub use routes::build_router;
pub use session::{CurrentUser, SessionStore};
pub use state::AppState;

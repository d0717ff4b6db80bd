pub mod auth;
pub mod router;
pub mod state;

pub use auth::require_api_key;
pub use router::build_router;
pub use state::AppState;

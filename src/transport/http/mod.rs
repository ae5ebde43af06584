pub mod router;
pub mod types;
pub mod handlers {
    pub mod chat;
    pub mod health;
    pub mod properties;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;

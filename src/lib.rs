pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::store::PropertyStore;
pub use domain::chat::{classify, Intent};
pub use domain::error::DomainError;
pub use domain::property::{Operation, Property, PropertyStatus, PropertyType};
pub use transport::http::AppState;

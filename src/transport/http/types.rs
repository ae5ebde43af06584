use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use utoipa::{IntoParams, ToSchema};

use crate::app::store::PropertyStore;
use crate::domain::chat::ChatMetrics;
use crate::domain::error::DomainError;
use crate::domain::property::{Operation, Property, PropertyFilter, PropertyType, SortKey};

/// Shared application state injected into every handler.
///
/// Reads take the store's read guard; every mutation (create, update,
/// soft-delete, view increment) takes the write guard, so writers are
/// serialized and lost updates cannot occur.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<PropertyStore>>,
    pub chat_rng: Arc<Mutex<StdRng>>,
    pub chat_metrics: Arc<Mutex<ChatMetrics>>,
}

impl AppState {
    /// Wraps a store. `rng_seed` pins the chatbot's template selection for
    /// reproducible runs; `None` seeds from entropy.
    pub fn new(store: PropertyStore, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            store: Arc::new(RwLock::new(store)),
            chat_rng: Arc::new(Mutex::new(rng)),
            chat_metrics: Arc::new(Mutex::new(ChatMetrics::default())),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

fn default_similar_limit() -> u32 {
    4
}

/// Query parameters of `GET /api/properties`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Exact property type match.
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    /// Exact operation match.
    pub operation: Option<Operation>,
    /// Case-insensitive substring match on the location field.
    pub location: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// Minimum room count.
    pub rooms: Option<u32>,
    /// Minimum bathroom count.
    pub bathrooms: Option<u32>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub featured: Option<bool>,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size, 1 to 100.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sort: SortKey,
}

impl ListQuery {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.page < 1 {
            return Err(DomainError::validation("page must be at least 1"));
        }
        if !(1..=100).contains(&self.page_size) {
            return Err(DomainError::validation(
                "page_size must be between 1 and 100",
            ));
        }
        Ok(())
    }

    pub fn filter(&self) -> PropertyFilter {
        PropertyFilter {
            property_type: self.property_type,
            operation: self.operation,
            location: self.location.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            area_min: self.area_min,
            area_max: self.area_max,
            featured: self.featured,
        }
    }
}

/// Query parameters of `GET /api/properties/{id}/similar`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SimilarQuery {
    /// Maximum results, 1 to 10.
    #[serde(default = "default_similar_limit")]
    pub limit: u32,
}

/// Query parameters of `POST /api/properties/{id}/favorite`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FavoriteQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Stateless acknowledgment; no favorite state is persisted.
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub message: String,
    pub property_id: u64,
    pub user_id: String,
    pub favorited: bool,
}

/// Body of `POST /api/chat/message`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatMessageRequest {
    /// Free text, 1 to 500 characters.
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatMessageResponse {
    pub reply: String,
    pub timestamp: DateTime<Utc>,
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Error body shared by every failure response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Transport wrapper for [`DomainError`]: NotFound maps to 404, Validation
/// to 400, both with the JSON error body.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ErrorBody {
                success: false,
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

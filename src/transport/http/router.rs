use crate::domain::chat::{ChatStats, Intent, IntentCount};
use crate::domain::property::{
    Agent, Coordinates, Operation, Property, PropertyDraft, PropertyStats, PropertyStatus,
    PropertyType, SortKey,
};
use crate::transport::http::handlers::{chat, health, properties};
use crate::transport::http::types::{
    ChatMessageRequest, ChatMessageResponse, ErrorBody, FavoriteResponse, HealthResponse,
    MessageResponse, PropertyListResponse, ServiceInfo,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root_handler,
        health::healthcheck_handler,
        properties::list_properties_handler,
        properties::property_stats_handler,
        properties::get_property_handler,
        properties::create_property_handler,
        properties::update_property_handler,
        properties::delete_property_handler,
        properties::similar_properties_handler,
        properties::favorite_property_handler,
        chat::chat_message_handler,
        chat::chat_suggestions_handler,
        chat::chat_stats_handler
    ),
    components(schemas(
        Property,
        PropertyDraft,
        PropertyType,
        Operation,
        PropertyStatus,
        Coordinates,
        Agent,
        SortKey,
        PropertyStats,
        PropertyListResponse,
        MessageResponse,
        FavoriteResponse,
        ChatMessageRequest,
        ChatMessageResponse,
        ChatStats,
        IntentCount,
        Intent,
        ServiceInfo,
        HealthResponse,
        ErrorBody
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/properties",
            get(properties::list_properties_handler).post(properties::create_property_handler),
        )
        // Static segment; takes precedence over the `:id` capture below.
        .route("/api/properties/stats", get(properties::property_stats_handler))
        .route(
            "/api/properties/:id",
            get(properties::get_property_handler)
                .put(properties::update_property_handler)
                .delete(properties::delete_property_handler),
        )
        .route(
            "/api/properties/:id/similar",
            get(properties::similar_properties_handler),
        )
        .route(
            "/api/properties/:id/favorite",
            post(properties::favorite_property_handler),
        )
        .route("/api/chat/message", post(chat::chat_message_handler))
        .route("/api/chat/suggestions", get(chat::chat_suggestions_handler))
        .route("/api/chat/stats", get(chat::chat_stats_handler))
        .with_state(app_state)
}

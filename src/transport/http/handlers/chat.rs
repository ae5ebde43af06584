use axum::extract::State;
use axum::Json;
use chrono::Utc;
use tracing::info;

use crate::domain::chat::{classify, respond, ChatStats};
use crate::domain::error::DomainError;
use crate::transport::http::types::{
    ApiError, AppState, ChatMessageRequest, ChatMessageResponse, ErrorBody,
};

#[utoipa::path(
    post,
    path = "/api/chat/message",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, description = "Classified reply with confidence and follow-up suggestions", body = ChatMessageResponse),
        (status = 400, description = "Empty or oversized message", body = ErrorBody)
    )
)]
pub async fn chat_message_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, ApiError> {
    let text = request.message.trim();
    if text.is_empty() {
        return Err(DomainError::validation("message must not be empty").into());
    }
    if request.message.chars().count() > 500 {
        return Err(DomainError::validation("message must be at most 500 characters").into());
    }

    let intent = classify(text);
    let reply = {
        let mut rng = state.chat_rng.lock().await;
        respond(intent, &mut *rng)
    };
    state.chat_metrics.lock().await.record(intent);
    info!(
        intent = intent.as_str(),
        confidence = reply.confidence,
        "chat message classified"
    );

    Ok(Json(ChatMessageResponse {
        reply: reply.reply,
        timestamp: Utc::now(),
        confidence: reply.confidence,
        suggestions: reply.suggestions,
    }))
}

#[utoipa::path(
    get,
    path = "/api/chat/suggestions",
    responses(
        (status = 200, description = "Example questions to show the user", body = [String])
    )
)]
pub async fn chat_suggestions_handler() -> Json<Vec<String>> {
    Json(
        crate::domain::chat::frequent_questions()
            .iter()
            .map(|q| q.to_string())
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/chat/stats",
    responses(
        (status = 200, description = "Chat usage counters for this server lifetime", body = ChatStats)
    )
)]
pub async fn chat_stats_handler(State(state): State<AppState>) -> Json<ChatStats> {
    Json(state.chat_metrics.lock().await.snapshot())
}

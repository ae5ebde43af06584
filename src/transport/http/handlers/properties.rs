use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use crate::domain::error::DomainError;
use crate::domain::property::{
    filter_properties, paginate, sort_properties, Property, PropertyDraft, PropertyStats,
};
use crate::transport::http::types::{
    ApiError, AppState, ErrorBody, FavoriteQuery, FavoriteResponse, ListQuery, MessageResponse,
    PropertyListResponse, SimilarQuery,
};

#[utoipa::path(
    get,
    path = "/api/properties",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered, sorted, paginated listing", body = PropertyListResponse),
        (status = 400, description = "Invalid pagination or filter parameters", body = ErrorBody)
    )
)]
pub async fn list_properties_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PropertyListResponse>, ApiError> {
    query.validate()?;

    let snapshot = state.store.read().await.list();
    let mut matched = filter_properties(&snapshot, &query.filter());
    sort_properties(&mut matched, query.sort);
    debug!(
        matched = matched.len(),
        page = query.page,
        sort = ?query.sort,
        "property search"
    );

    let page = paginate(matched, query.page, query.page_size);
    Ok(Json(PropertyListResponse {
        properties: page.items,
        total: page.total as u64,
        page: query.page,
        page_size: query.page_size,
        total_pages: page.total_pages,
    }))
}

#[utoipa::path(
    get,
    path = "/api/properties/stats",
    responses(
        (status = 200, description = "Aggregate statistics over available properties", body = PropertyStats)
    )
)]
pub async fn property_stats_handler(State(state): State<AppState>) -> Json<PropertyStats> {
    Json(state.store.read().await.stats())
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    params(("id" = u64, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property detail (increments the view counter)", body = Property),
        (status = 404, description = "Unknown property id", body = ErrorBody)
    )
)]
pub async fn get_property_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Property>, ApiError> {
    // The view increment mutates the record, so the read path takes the
    // write guard.
    let property = state.store.write().await.get_and_count_view(id)?;
    Ok(Json(property))
}

#[utoipa::path(
    post,
    path = "/api/properties",
    request_body = PropertyDraft,
    responses(
        (status = 201, description = "Created property with assigned id", body = Property),
        (status = 400, description = "Draft failed validation", body = ErrorBody)
    )
)]
pub async fn create_property_handler(
    State(state): State<AppState>,
    Json(draft): Json<PropertyDraft>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    draft.validate()?;
    let property = state.store.write().await.create(draft);
    info!(id = property.id, "property created");
    Ok((StatusCode::CREATED, Json(property)))
}

#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    params(("id" = u64, Path, description = "Property id")),
    request_body = PropertyDraft,
    responses(
        (status = 200, description = "Updated property", body = Property),
        (status = 400, description = "Draft failed validation", body = ErrorBody),
        (status = 404, description = "Unknown property id", body = ErrorBody)
    )
)]
pub async fn update_property_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<PropertyDraft>,
) -> Result<Json<Property>, ApiError> {
    draft.validate()?;
    let property = state.store.write().await.update(id, draft)?;
    info!(id, "property updated");
    Ok(Json(property))
}

#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    params(("id" = u64, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property soft-deleted (status set to inactive)", body = MessageResponse),
        (status = 404, description = "Unknown property id", body = ErrorBody)
    )
)]
pub async fn delete_property_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.write().await.soft_delete(id)?;
    info!(id, "property soft-deleted");
    Ok(Json(MessageResponse {
        message: "property deleted".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}/similar",
    params(("id" = u64, Path, description = "Reference property id"), SimilarQuery),
    responses(
        (status = 200, description = "Available properties of the same kind within the price band", body = [Property]),
        (status = 400, description = "Limit out of range", body = ErrorBody),
        (status = 404, description = "Unknown reference id", body = ErrorBody)
    )
)]
pub async fn similar_properties_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<SimilarQuery>,
) -> Result<Json<Vec<Property>>, ApiError> {
    if !(1..=10).contains(&query.limit) {
        return Err(DomainError::validation("limit must be between 1 and 10").into());
    }
    let similar = state.store.read().await.similar(id, query.limit as usize)?;
    Ok(Json(similar))
}

#[utoipa::path(
    post,
    path = "/api/properties/{id}/favorite",
    params(("id" = u64, Path, description = "Property id"), FavoriteQuery),
    responses(
        (status = 200, description = "Toggle acknowledged (no favorite state is persisted)", body = FavoriteResponse),
        (status = 404, description = "Unknown property id", body = ErrorBody)
    )
)]
pub async fn favorite_property_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<FavoriteQuery>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    // Existence check only; favorites live client-side in this deployment.
    state.store.read().await.get(id)?;
    Ok(Json(FavoriteResponse {
        message: "favorite toggled".to_string(),
        property_id: id,
        user_id: query.user_id,
        favorited: true,
    }))
}

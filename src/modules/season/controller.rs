use super::application::{CreateSeasonRequest, SeasonDto, SeasonService, UpdateSeasonRequest};
use crate::shared::domain::SeasonId;
use crate::shared::errors::ApiError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRef, Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<SeasonService>: FromRef<S>,
{
    Router::new()
        .route("/seasons", post(create_season).get(list_seasons))
        .route(
            "/seasons/{id}",
            get(get_season)
                .patch(update_season)
                .put(update_season)
                .delete(delete_season),
        )
}

async fn create_season(
    State(service): State<Arc<SeasonService>>,
    body: Result<Json<CreateSeasonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SeasonDto>), ApiError> {
    let Json(request) = body?;
    let season = service.create_season(request).await?;
    Ok((StatusCode::CREATED, Json(season)))
}

async fn list_seasons(
    State(service): State<Arc<SeasonService>>,
) -> Result<Json<Vec<SeasonDto>>, ApiError> {
    Ok(Json(service.get_all_seasons().await?))
}

async fn get_season(
    State(service): State<Arc<SeasonService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<SeasonDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(service.get_season_by_id(&SeasonId::from(id)).await?))
}

async fn update_season(
    State(service): State<Arc<SeasonService>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateSeasonRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    service.update_season(&SeasonId::from(id), request).await?;
    Ok(StatusCode::OK)
}

async fn delete_season(
    State(service): State<Arc<SeasonService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    service.delete_season(&SeasonId::from(id)).await?;
    Ok(StatusCode::OK)
}

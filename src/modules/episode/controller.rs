use super::application::{CreateEpisodeRequest, EpisodeDto, EpisodeService, UpdateEpisodeRequest};
use crate::shared::domain::EpisodeId;
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
    Arc<EpisodeService>: FromRef<S>,
{
    Router::new()
        .route("/episodes", post(create_episode).get(list_episodes))
        .route(
            "/episodes/{id}",
            get(get_episode)
                .patch(update_episode)
                .put(update_episode)
                .delete(delete_episode),
        )
}

async fn create_episode(
    State(service): State<Arc<EpisodeService>>,
    body: Result<Json<CreateEpisodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EpisodeDto>), ApiError> {
    let Json(request) = body?;
    let episode = service.create_episode(request).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

async fn list_episodes(
    State(service): State<Arc<EpisodeService>>,
) -> Result<Json<Vec<EpisodeDto>>, ApiError> {
    Ok(Json(service.get_all_episodes().await?))
}

async fn get_episode(
    State(service): State<Arc<EpisodeService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<EpisodeDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(service.get_episode_by_id(&EpisodeId::from(id)).await?))
}

async fn update_episode(
    State(service): State<Arc<EpisodeService>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateEpisodeRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    service.update_episode(&EpisodeId::from(id), request).await?;
    Ok(StatusCode::OK)
}

async fn delete_episode(
    State(service): State<Arc<EpisodeService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    service.delete_episode(&EpisodeId::from(id)).await?;
    Ok(StatusCode::OK)
}

use crate::modules::episode::{
    controller as episode_controller, EpisodeRepositoryImpl, EpisodeService,
};
use crate::modules::season::{controller as season_controller, SeasonRepositoryImpl, SeasonService};
use crate::modules::show::{controller as show_controller, ShowRepositoryImpl, ShowService};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::Database;
use axum::{
    extract::{FromRef, Request},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::sync::Arc;

const SLOW_REQUEST_MS: u64 = 500;

/// Services shared by every handler
#[derive(Clone, FromRef)]
pub struct AppState {
    pub shows: Arc<ShowService>,
    pub seasons: Arc<SeasonService>,
    pub episodes: Arc<EpisodeService>,
}

impl AppState {
    /// Wire each service to its SQLite repository over the shared pool
    pub fn from_database(db: Arc<Database>) -> Self {
        Self {
            shows: Arc::new(ShowService::new(Arc::new(ShowRepositoryImpl::new(
                Arc::clone(&db),
            )))),
            seasons: Arc::new(SeasonService::new(Arc::new(SeasonRepositoryImpl::new(
                Arc::clone(&db),
            )))),
            episodes: Arc::new(EpisodeService::new(Arc::new(EpisodeRepositoryImpl::new(
                db,
            )))),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(show_controller::routes::<AppState>())
        .merge(season_controller::routes::<AppState>())
        .merge(episode_controller::routes::<AppState>())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let timer = TimedOperation::new(&format!("{} {}", method, path));

    let response = next.run(request).await;

    LogContext::http_request(method.as_str(), &path, response.status().as_u16());
    timer.finish_if_slower_than(SLOW_REQUEST_MS);
    response
}

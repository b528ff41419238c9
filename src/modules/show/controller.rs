use super::application::{CreateShowRequest, ShowDto, ShowService, UpdateShowRequest};
use crate::shared::domain::ShowId;
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

/// HTTP routes for `/shows`
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<ShowService>: FromRef<S>,
{
    Router::new()
        .route("/shows", post(create_show).get(list_shows))
        .route(
            "/shows/{id}",
            get(get_show)
                .patch(update_show)
                .put(update_show)
                .delete(delete_show),
        )
}

async fn create_show(
    State(service): State<Arc<ShowService>>,
    body: Result<Json<CreateShowRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShowDto>), ApiError> {
    let Json(request) = body?;
    let show = service.create_show(request).await?;
    Ok((StatusCode::CREATED, Json(show)))
}

async fn list_shows(
    State(service): State<Arc<ShowService>>,
) -> Result<Json<Vec<ShowDto>>, ApiError> {
    Ok(Json(service.get_all_shows().await?))
}

async fn get_show(
    State(service): State<Arc<ShowService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ShowDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(service.get_show_by_id(&ShowId::from(id)).await?))
}

async fn update_show(
    State(service): State<Arc<ShowService>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateShowRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    service.update_show(&ShowId::from(id), request).await?;
    Ok(StatusCode::OK)
}

async fn delete_show(
    State(service): State<Arc<ShowService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    service.delete_show(&ShowId::from(id)).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::show::domain::errors::show_not_found;
    use crate::modules::show::domain::repository::MockShowRepository;
    use crate::modules::show::domain::Show;
    use crate::shared::errors::AppError;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server(repo: MockShowRepository) -> TestServer {
        let service = Arc::new(ShowService::new(Arc::new(repo)));
        let app = routes::<Arc<ShowService>>().with_state(service);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_null_year() {
        let mut repo = MockShowRepository::new();
        repo.expect_save().times(1).returning(|_| Ok(()));

        let response = server(repo)
            .post("/shows")
            .json(&json!({ "title": "X" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["title"], "X");
        assert!(body["year"].is_null());
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_bodies() {
        let mut repo = MockShowRepository::new();
        repo.expect_save().never();
        let server = server(repo);

        for body in [
            json!({ "title": "X", "year": null }),
            json!({ "title": 5 }),
            json!({ "title": "X", "rating": 10 }),
            json!({}),
        ] {
            let response = server.post("/shows").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "message": "Invalid request body" }));
        }
    }

    #[tokio::test]
    async fn test_blank_title_is_a_bad_request() {
        let mut repo = MockShowRepository::new();
        repo.expect_save().never();

        let response = server(repo)
            .post("/shows")
            .json(&json!({ "title": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Show title cannot be blank" }));
    }

    #[tokio::test]
    async fn test_get_missing_show_is_404() {
        let mut repo = MockShowRepository::new();
        repo.expect_find().returning(|id| Err(show_not_found(id)));

        let response = server(repo).get("/shows/missing").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "message": "Show not found" }));
    }

    #[tokio::test]
    async fn test_update_returns_empty_200() {
        let mut repo = MockShowRepository::new();
        repo.expect_find()
            .returning(|id| Show::new(id.clone(), "Dark", Some(2017)));
        repo.expect_save()
            .withf(|show: &Show| show.year().is_none())
            .times(1)
            .returning(|_| Ok(()));

        let response = server(repo)
            .patch("/shows/abc")
            .json(&json!({ "year": null }))
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_is_masked() {
        let mut repo = MockShowRepository::new();
        repo.expect_find_all()
            .returning(|| Err(AppError::DatabaseError("disk I/O error".to_string())));

        let response = server(repo).get("/shows").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "message": "Unknown server error" }));
    }
}

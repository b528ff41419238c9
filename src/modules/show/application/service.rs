use super::dto::{CreateShowRequest, ShowDto, UpdateShowRequest};
use crate::modules::show::domain::{Show, ShowRepository};
use crate::shared::domain::ShowId;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct ShowService {
    show_repo: Arc<dyn ShowRepository>,
}

impl ShowService {
    pub fn new(show_repo: Arc<dyn ShowRepository>) -> Self {
        Self { show_repo }
    }

    pub async fn create_show(&self, request: CreateShowRequest) -> AppResult<ShowDto> {
        let show = Show::create(request.title, request.year)?;

        self.show_repo.save(&show).await?;

        log_info!("Created show {} ({})", show.title(), show.id());
        Ok(ShowDto::from(&show))
    }

    pub async fn get_show_by_id(&self, id: &ShowId) -> AppResult<ShowDto> {
        let show = self.show_repo.find(id).await?;

        Ok(ShowDto::from(&show))
    }

    pub async fn get_all_shows(&self) -> AppResult<Vec<ShowDto>> {
        let shows = self.show_repo.find_all().await?;

        Ok(shows.iter().map(ShowDto::from).collect())
    }

    /// Apply the supplied fields to an existing show; omitted fields keep their values
    pub async fn update_show(&self, id: &ShowId, request: UpdateShowRequest) -> AppResult<()> {
        let mut show = self.show_repo.find(id).await?;

        show.apply(request.into())?;
        self.show_repo.save(&show).await?;

        log_debug!("Updated show {}", id);
        Ok(())
    }

    pub async fn delete_show(&self, id: &ShowId) -> AppResult<()> {
        self.show_repo.delete(id).await?;

        log_info!("Deleted show {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::show::domain::errors::show_not_found;
    use crate::modules::show::domain::repository::MockShowRepository;
    use crate::shared::errors::{AppError, ErrorCode};
    use mockall::predicate::eq;

    fn service(repo: MockShowRepository) -> ShowService {
        ShowService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_show_saves_and_returns_minted_id() {
        let mut repo = MockShowRepository::new();
        repo.expect_save()
            .withf(|show: &Show| show.title() == "X" && show.year().is_none())
            .times(1)
            .returning(|_| Ok(()));

        let dto = service(repo)
            .create_show(CreateShowRequest {
                title: "X".to_string(),
                year: None,
            })
            .await
            .unwrap();

        assert!(!dto.id.is_empty());
        assert_eq!(dto.title, "X");
        assert_eq!(dto.year, None);
    }

    #[tokio::test]
    async fn test_create_show_with_blank_title_never_saves() {
        let mut repo = MockShowRepository::new();
        repo.expect_save().never();

        let err = service(repo)
            .create_show(CreateShowRequest {
                title: String::new(),
                year: Some(2026),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::ShowDomain));
    }

    #[tokio::test]
    async fn test_get_show_propagates_not_found() {
        let mut repo = MockShowRepository::new();
        repo.expect_find()
            .with(eq(ShowId::from("missing")))
            .returning(|id| Err(show_not_found(id)));

        let err = service(repo)
            .get_show_by_id(&ShowId::from("missing"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::not_found(ErrorCode::ShowNotFound, "Show not found", "missing")
        );
    }

    #[tokio::test]
    async fn test_update_show_clears_year_and_keeps_title() {
        let existing = Show::new(ShowId::from("s1"), "Dark", Some(2026)).unwrap();

        let mut repo = MockShowRepository::new();
        repo.expect_find()
            .times(1)
            .returning(move |_| Ok(existing.clone()));
        repo.expect_save()
            .withf(|show: &Show| show.title() == "Dark" && show.year().is_none())
            .times(1)
            .returning(|_| Ok(()));

        service(repo)
            .update_show(
                &ShowId::from("s1"),
                UpdateShowRequest {
                    title: None,
                    year: Some(None),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_show_rejects_blank_title() {
        let existing = Show::new(ShowId::from("s1"), "Dark", None).unwrap();

        let mut repo = MockShowRepository::new();
        repo.expect_find().returning(move |_| Ok(existing.clone()));
        repo.expect_save().never();

        let err = service(repo)
            .update_show(
                &ShowId::from("s1"),
                UpdateShowRequest {
                    title: Some(String::new()),
                    year: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain { .. }));
    }

    #[tokio::test]
    async fn test_get_all_shows_maps_every_row() {
        let mut repo = MockShowRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                Show::new(ShowId::from("a"), "A", None).unwrap(),
                Show::new(ShowId::from("b"), "B", Some(1999)).unwrap(),
            ])
        });

        let shows = service(repo).get_all_shows().await.unwrap();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[1].year, Some(1999));
    }

    #[tokio::test]
    async fn test_delete_show_delegates() {
        let mut repo = MockShowRepository::new();
        repo.expect_delete()
            .with(eq(ShowId::from("s1")))
            .times(1)
            .returning(|_| Ok(()));

        service(repo)
            .delete_show(&ShowId::from("s1"))
            .await
            .unwrap();
    }
}

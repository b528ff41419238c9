/// Season repository tests - uniqueness and references enforced by SQLite
mod utils;

use show_catalog::modules::season::{SeasonNumber, SeasonRepository};
use show_catalog::modules::show::{Show, ShowRepository};
use show_catalog::shared::domain::{SeasonId, ShowId};
use show_catalog::shared::errors::{AppError, ErrorCode};
use tokio_test::{assert_err, assert_ok};
use utils::{factories, test_db::TestDb};

async fn seeded_show(db: &TestDb) -> Show {
    let show = factories::show("Dark", Some(2017));
    assert_ok!(db.show_repo().save(&show).await);
    show
}

#[tokio::test]
async fn save_and_find_season() {
    let db = TestDb::new();
    let show = seeded_show(&db).await;
    let repo = db.season_repo();
    let season = factories::season(show.id(), 0);

    assert_ok!(repo.save(&season).await);

    let found = assert_ok!(repo.find(season.id()).await);
    assert_eq!(found, season);
    assert_eq!(found.season_number().value(), 0);
}

#[tokio::test]
async fn duplicate_season_number_for_show_fails() {
    let db = TestDb::new();
    let show = seeded_show(&db).await;
    let repo = db.season_repo();

    assert_ok!(repo.save(&factories::season(show.id(), 1)).await);

    let err = assert_err!(repo.save(&factories::season(show.id(), 1)).await);
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    assert_eq!(assert_ok!(repo.find_all().await).len(), 1);
}

#[tokio::test]
async fn same_number_on_different_shows_is_allowed() {
    let db = TestDb::new();
    let first = seeded_show(&db).await;
    let second = seeded_show(&db).await;
    let repo = db.season_repo();

    assert_ok!(repo.save(&factories::season(first.id(), 1)).await);
    assert_ok!(repo.save(&factories::season(second.id(), 1)).await);

    assert_eq!(assert_ok!(repo.find_all().await).len(), 2);
}

#[tokio::test]
async fn season_for_unknown_show_fails() {
    let db = TestDb::new();

    let err = assert_err!(
        db.season_repo()
            .save(&factories::season(&ShowId::from("no-such-show"), 1))
            .await
    );
    assert!(matches!(err, AppError::ConstraintViolation(_)));
}

#[tokio::test]
async fn save_updates_existing_season() {
    let db = TestDb::new();
    let show = seeded_show(&db).await;
    let repo = db.season_repo();
    let mut season = factories::season(show.id(), 1);
    assert_ok!(repo.save(&season).await);

    season.set_season_number(SeasonNumber::new(2).unwrap());
    assert_ok!(repo.save(&season).await);

    let found = assert_ok!(repo.find(season.id()).await);
    assert_eq!(found.season_number().value(), 2);
}

#[tokio::test]
async fn find_and_delete_missing_season() {
    let db = TestDb::new();
    let repo = db.season_repo();
    let missing = SeasonId::from("missing");

    let err = assert_err!(repo.find(&missing).await);
    assert_eq!(err.code(), Some(ErrorCode::SeasonNotFound));

    let err = assert_err!(repo.delete(&missing).await);
    assert_eq!(
        err,
        AppError::not_found(ErrorCode::SeasonNotFound, "Season not found", "missing")
    );
}

#[tokio::test]
async fn delete_then_find_is_not_found() {
    let db = TestDb::new();
    let show = seeded_show(&db).await;
    let repo = db.season_repo();
    let season = factories::season(show.id(), 1);
    assert_ok!(repo.save(&season).await);

    assert_ok!(repo.delete(season.id()).await);

    assert!(assert_err!(repo.find(season.id()).await).is_not_found());
}

#[tokio::test]
async fn storage_rejects_negative_season_numbers() {
    let db = TestDb::new();
    let show = seeded_show(&db).await;

    let err = assert_err!(db.execute_sql(&format!(
        "INSERT INTO seasons (id, show_id, season_number) VALUES ('s1', '{}', -3)",
        show.id()
    )));

    assert!(matches!(err, AppError::ConstraintViolation(_)));
}

#[tokio::test]
async fn corrupt_stored_season_is_a_database_error() {
    let db = TestDb::new();
    let show = seeded_show(&db).await;
    assert_ok!(db.execute_sql(&format!(
        "PRAGMA ignore_check_constraints = ON; \
         INSERT INTO seasons (id, show_id, season_number) VALUES ('s1', '{}', -3); \
         PRAGMA ignore_check_constraints = OFF;",
        show.id()
    )));
    let repo = db.season_repo();

    let err = assert_err!(repo.find(&SeasonId::from("s1")).await);
    assert!(matches!(err, AppError::DatabaseError(_)));

    let err = assert_err!(repo.find_all().await);
    assert!(matches!(err, AppError::DatabaseError(_)));
}

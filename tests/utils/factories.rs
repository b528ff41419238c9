/// Test data factories with sensible defaults
use show_catalog::modules::episode::{Episode, EpisodeNumber};
use show_catalog::modules::season::{Season, SeasonNumber};
use show_catalog::modules::show::Show;
use show_catalog::shared::domain::{SeasonId, ShowId};

pub fn show(title: &str, year: Option<i32>) -> Show {
    Show::create(title, year).expect("valid show")
}

pub fn season(show_id: &ShowId, number: i32) -> Season {
    Season::create(
        show_id.clone(),
        SeasonNumber::new(number).expect("valid season number"),
    )
}

pub fn episode(show_id: &ShowId, season_id: &SeasonId, number: i32) -> Episode {
    Episode::create(
        show_id.clone(),
        season_id.clone(),
        EpisodeNumber::new(number).expect("valid episode number"),
    )
}

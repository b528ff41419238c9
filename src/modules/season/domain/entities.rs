use super::value_objects::SeasonNumber;
use crate::shared::domain::{SeasonId, ShowId};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    id: SeasonId,
    show_id: ShowId,
    season_number: SeasonNumber,
}

/// Partial update for a season. The number arrives raw and is validated by `apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonChanges {
    pub show_id: Option<ShowId>,
    pub season_number: Option<i32>,
}

impl Season {
    pub fn new(id: SeasonId, show_id: ShowId, season_number: SeasonNumber) -> Self {
        Self {
            id,
            show_id,
            season_number,
        }
    }

    pub fn create(show_id: ShowId, season_number: SeasonNumber) -> Self {
        Self::new(SeasonId::generate(), show_id, season_number)
    }

    pub fn id(&self) -> &SeasonId {
        &self.id
    }

    pub fn show_id(&self) -> &ShowId {
        &self.show_id
    }

    pub fn season_number(&self) -> SeasonNumber {
        self.season_number
    }

    pub fn set_show_id(&mut self, show_id: ShowId) {
        self.show_id = show_id;
    }

    pub fn set_season_number(&mut self, season_number: SeasonNumber) {
        self.season_number = season_number;
    }

    pub fn apply(&mut self, changes: SeasonChanges) -> AppResult<()> {
        let season_number = changes.season_number.map(SeasonNumber::new).transpose()?;

        if let Some(show_id) = changes.show_id {
            self.show_id = show_id;
        }
        if let Some(season_number) = season_number {
            self.season_number = season_number;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(number: i32) -> Season {
        Season::create(ShowId::from("show-1"), SeasonNumber::new(number).unwrap())
    }

    #[test]
    fn test_create_mints_distinct_ids() {
        let first = season(1);
        let second = season(1);

        assert_ne!(first.id(), second.id());
        assert_eq!(first.show_id().as_str(), "show-1");
        assert_eq!(first.season_number().value(), 1);
    }

    #[test]
    fn test_apply_updates_supplied_fields_only() {
        let mut season = season(1);

        season
            .apply(SeasonChanges {
                show_id: None,
                season_number: Some(0),
            })
            .unwrap();

        assert_eq!(season.show_id().as_str(), "show-1");
        assert_eq!(season.season_number().value(), 0);
    }

    #[test]
    fn test_apply_with_invalid_number_changes_nothing() {
        let mut season = season(3);

        let result = season.apply(SeasonChanges {
            show_id: Some(ShowId::from("show-2")),
            season_number: Some(-2),
        });

        assert!(result.is_err());
        assert_eq!(season.show_id().as_str(), "show-1");
        assert_eq!(season.season_number().value(), 3);
    }
}

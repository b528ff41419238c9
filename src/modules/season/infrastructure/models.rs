use crate::modules::season::domain::{Season, SeasonNumber};
use crate::schema::seasons;
use crate::shared::domain::{SeasonId, ShowId};
use crate::shared::errors::AppError;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = seasons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SeasonModel {
    pub id: String,
    pub show_id: String,
    pub season_number: i32,
}

impl From<&Season> for SeasonModel {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id().to_string(),
            show_id: season.show_id().to_string(),
            season_number: season.season_number().value(),
        }
    }
}

impl TryFrom<SeasonModel> for Season {
    type Error = AppError;

    fn try_from(model: SeasonModel) -> Result<Self, Self::Error> {
        let season_number = SeasonNumber::new(model.season_number)
            .map_err(|e| AppError::invalid_row("seasons", &model.id, e))?;

        Ok(Season::new(
            SeasonId::from(model.id),
            ShowId::from(model.show_id),
            season_number,
        ))
    }
}

/// Diesel model for the shows table
use crate::modules::show::domain::Show;
use crate::schema::shows;
use crate::shared::domain::ShowId;
use crate::shared::errors::AppError;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = shows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ShowModel {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
}

impl From<&Show> for ShowModel {
    fn from(show: &Show) -> Self {
        Self {
            id: show.id().to_string(),
            title: show.title().to_string(),
            year: show.year(),
        }
    }
}

impl TryFrom<ShowModel> for Show {
    type Error = AppError;

    fn try_from(model: ShowModel) -> Result<Self, Self::Error> {
        let id = ShowId::from(model.id);
        Show::new(id.clone(), model.title, model.year)
            .map_err(|e| AppError::invalid_row("shows", id.as_str(), e))
    }
}

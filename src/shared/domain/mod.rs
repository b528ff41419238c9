pub mod ids;

pub use ids::{EpisodeId, SeasonId, ShowId};

pub mod application;
pub mod controller;
pub mod domain;
pub mod infrastructure;

pub use application::{EpisodeDto, EpisodeService};
pub use domain::{Episode, EpisodeNumber, EpisodeRepository};
pub use infrastructure::EpisodeRepositoryImpl;

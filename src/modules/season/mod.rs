pub mod application;
pub mod controller;
pub mod domain;
pub mod infrastructure;

pub use application::{SeasonDto, SeasonService};
pub use domain::{Season, SeasonNumber, SeasonRepository};
pub use infrastructure::SeasonRepositoryImpl;

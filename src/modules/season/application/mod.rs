pub mod dto;
pub mod service;

pub use dto::{CreateSeasonRequest, SeasonDto, UpdateSeasonRequest};
pub use service::SeasonService;

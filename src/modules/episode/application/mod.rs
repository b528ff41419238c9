pub mod dto;
pub mod service;

pub use dto::{CreateEpisodeRequest, EpisodeDto, UpdateEpisodeRequest};
pub use service::EpisodeService;

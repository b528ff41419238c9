pub mod entities;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use entities::{Episode, EpisodeChanges};
pub use repository::EpisodeRepository;
pub use value_objects::EpisodeNumber;

pub mod entities;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use entities::{Season, SeasonChanges};
pub use repository::SeasonRepository;
pub use value_objects::SeasonNumber;

pub mod entities;
pub mod errors;
pub mod repository;

pub use entities::{Show, ShowChanges};
pub use repository::ShowRepository;

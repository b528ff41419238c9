pub mod application;
pub mod controller;
pub mod domain;
pub mod infrastructure;

pub use application::{ShowDto, ShowService};
pub use domain::{Show, ShowRepository};
pub use infrastructure::ShowRepositoryImpl;

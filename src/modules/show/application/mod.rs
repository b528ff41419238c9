pub mod dto;
pub mod service;

pub use dto::{CreateShowRequest, ShowDto, UpdateShowRequest};
pub use service::ShowService;

// Bounded contexts, one per catalog entity

pub mod episode;
pub mod season;
pub mod show;

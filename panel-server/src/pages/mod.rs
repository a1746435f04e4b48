pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod documents;
pub mod entity;
pub mod error;
pub mod evaluations;
pub mod knowledge;
pub mod messages;
pub mod notices;
pub mod professors;
pub mod schedules;
pub mod students;

pub use entity::{Column, EntityScreen, Field, Listing};
pub use error::PageError;

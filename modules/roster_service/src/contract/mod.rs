//! Contract layer - transport-agnostic models and errors
//!
//! Models carry no serde derives; the REST layer maps them to DTOs.

pub mod error;
pub mod model;

pub use error::RosterError;
pub use model::{Group, NewGroup, NewStudent, Page, Student};

//! Roster Service
//!
//! Students and groups over HTTP. A student belongs to at most one group;
//! a group's member list is always derived from the students' `group_id`.

// Public exports
pub mod contract;
pub use contract::{Group, NewGroup, NewStudent, Page, RosterError, Student};

pub mod config;
pub mod logging;
pub mod module;
pub mod server;
pub use module::RosterModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

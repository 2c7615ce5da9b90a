//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Every method runs as one storage transaction. Lookups by id report a
//! missing record as `None`/`false`, never as an error.

use crate::contract::{Group, NewGroup, NewStudent, Page, Student};
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

/// A write rejected by a storage constraint.
///
/// Repositories wrap this in the returned `anyhow::Error` so the service can
/// tell constraint failures apart from connectivity or other storage faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// A unique column already holds the value
    #[error("duplicate {resource} {field}")]
    Duplicate {
        resource: &'static str,
        field: &'static str,
    },
    /// A foreign key points at a row that does not exist
    #[error("{resource} references a missing {target}")]
    MissingReference {
        resource: &'static str,
        target: &'static str,
    },
}

/// Repository for students
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find a student by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>>;

    /// List students ordered by id
    async fn list(&self, page: Page) -> Result<Vec<Student>>;

    /// Insert a new student referencing `group_id`
    async fn create(&self, student: &NewStudent, group_id: Option<i32>) -> Result<Student>;

    /// Set or clear the group reference of an existing student
    async fn set_group(&self, id: i32, group_id: Option<i32>) -> Result<Option<Student>>;

    /// Delete a student, returning whether a row was removed
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Students whose group reference equals `group_id`, ordered by id
    async fn find_by_group(&self, group_id: i32) -> Result<Vec<Student>>;
}

/// Repository for groups
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find a group by id, including its members
    async fn find_by_id(&self, id: i32) -> Result<Option<Group>>;

    /// List groups ordered by id, each including its members
    async fn list(&self, page: Page) -> Result<Vec<Group>>;

    /// Insert a new group
    async fn create(&self, group: &NewGroup) -> Result<Group>;

    /// Clear the group reference of all members, then delete the group.
    /// Returns whether a group row was removed.
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Check if a group exists
    async fn exists(&self, id: i32) -> Result<bool>;
}

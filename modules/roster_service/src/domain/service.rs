//! Domain service - business logic orchestration

use super::repository::{ConstraintViolation, GroupRepository, StudentRepository};
use super::validation;
use crate::contract::{Group, NewGroup, NewStudent, Page, RosterError, Student};
use std::sync::Arc;

/// Domain service for students, groups and group membership
pub struct Service {
    student_repo: Arc<dyn StudentRepository>,
    group_repo: Arc<dyn GroupRepository>,
    max_page_size: u64,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        student_repo: Arc<dyn StudentRepository>,
        group_repo: Arc<dyn GroupRepository>,
        max_page_size: u64,
    ) -> Self {
        Self {
            student_repo,
            group_repo,
            max_page_size,
        }
    }

    // ===== Student Operations =====

    /// Get a student by id
    pub async fn get_student(&self, id: i32) -> Result<Student, RosterError> {
        self.student_repo
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or_else(|| RosterError::student_not_found(id))
    }

    /// List students ordered by id
    pub async fn list_students(&self, page: Page) -> Result<Vec<Student>, RosterError> {
        let page = validation::validate_page(page, self.max_page_size)?;
        self.student_repo.list(page).await.map_err(map_repo_error)
    }

    /// Create a student in an existing group
    pub async fn create_student(
        &self,
        student: NewStudent,
        group_id: i32,
    ) -> Result<Student, RosterError> {
        let student = validation::validate_new_student(&student)?;
        self.ensure_group_exists(group_id).await?;

        let created = self
            .student_repo
            .create(&student, Some(group_id))
            .await
            .map_err(map_repo_error)?;

        tracing::debug!(student_id = created.id, group_id, "student created");
        Ok(created)
    }

    /// Delete a student
    pub async fn delete_student(&self, id: i32) -> Result<(), RosterError> {
        let deleted = self.student_repo.delete(id).await.map_err(map_repo_error)?;
        if !deleted {
            return Err(RosterError::student_not_found(id));
        }
        tracing::debug!(student_id = id, "student deleted");
        Ok(())
    }

    // ===== Group Operations =====

    /// Get a group by id, with its members
    pub async fn get_group(&self, id: i32) -> Result<Group, RosterError> {
        self.group_repo
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or_else(|| RosterError::group_not_found(id))
    }

    /// List groups ordered by id, each with its members
    pub async fn list_groups(&self, page: Page) -> Result<Vec<Group>, RosterError> {
        let page = validation::validate_page(page, self.max_page_size)?;
        self.group_repo.list(page).await.map_err(map_repo_error)
    }

    /// Create a group
    pub async fn create_group(&self, group: NewGroup) -> Result<Group, RosterError> {
        let group = validation::validate_new_group(&group)?;
        let created = self
            .group_repo
            .create(&group)
            .await
            .map_err(map_repo_error)?;

        tracing::debug!(group_id = created.id, "group created");
        Ok(created)
    }

    /// Delete a group. Its members stay, with no group.
    pub async fn delete_group(&self, id: i32) -> Result<(), RosterError> {
        let deleted = self.group_repo.delete(id).await.map_err(map_repo_error)?;
        if !deleted {
            return Err(RosterError::group_not_found(id));
        }
        tracing::debug!(group_id = id, "group deleted");
        Ok(())
    }

    // ===== Membership Operations =====

    /// Students currently in a group
    pub async fn list_group_students(&self, group_id: i32) -> Result<Vec<Student>, RosterError> {
        self.ensure_group_exists(group_id).await?;
        self.student_repo
            .find_by_group(group_id)
            .await
            .map_err(map_repo_error)
    }

    /// Put an existing student into a group, replacing any previous group
    pub async fn assign_student_to_group(
        &self,
        student_id: i32,
        group_id: i32,
    ) -> Result<Student, RosterError> {
        self.ensure_group_exists(group_id).await?;
        self.student_repo
            .set_group(student_id, Some(group_id))
            .await
            .map_err(map_repo_error)?
            .ok_or_else(|| RosterError::student_not_found(student_id))
    }

    /// Remove a student from its current group.
    ///
    /// The student's group reference is cleared whatever group it pointed at;
    /// `group_id` only has to name an existing group.
    pub async fn remove_student_from_group(
        &self,
        student_id: i32,
        group_id: i32,
    ) -> Result<Student, RosterError> {
        self.ensure_group_exists(group_id).await?;
        self.clear_student_group(student_id).await
    }

    /// Move a student to another group.
    ///
    /// Runs as two separate steps (clear, then assign). If the second step
    /// fails the student is left without a group.
    pub async fn transfer_student(
        &self,
        student_id: i32,
        new_group_id: i32,
    ) -> Result<Student, RosterError> {
        let student = self.get_student(student_id).await?;
        self.ensure_group_exists(new_group_id).await?;

        self.clear_student_group(student_id).await?;
        let moved = self
            .assign_student_to_group(student_id, new_group_id)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    student_id,
                    new_group_id,
                    error = %e,
                    "transfer interrupted after clearing group; student has no group"
                );
            })?;

        tracing::info!(
            student_id,
            from_group_id = ?student.group_id,
            to_group_id = new_group_id,
            "student transferred"
        );
        Ok(moved)
    }

    async fn clear_student_group(&self, student_id: i32) -> Result<Student, RosterError> {
        self.student_repo
            .set_group(student_id, None)
            .await
            .map_err(map_repo_error)?
            .ok_or_else(|| RosterError::student_not_found(student_id))
    }

    async fn ensure_group_exists(&self, group_id: i32) -> Result<(), RosterError> {
        let exists = self
            .group_repo
            .exists(group_id)
            .await
            .map_err(map_repo_error)?;
        if exists {
            Ok(())
        } else {
            Err(RosterError::group_not_found(group_id))
        }
    }
}

/// Map a repository failure to a domain error.
///
/// Constraint violations become `Conflict`; anything else is logged and
/// hidden behind `Internal`.
fn map_repo_error(error: anyhow::Error) -> RosterError {
    match error.downcast_ref::<ConstraintViolation>() {
        Some(ConstraintViolation::Duplicate { resource, field }) => {
            tracing::warn!(resource, field, "write rejected by unique constraint");
            RosterError::Conflict {
                reason: format!("{} with this {} already exists", resource, field),
            }
        }
        Some(ConstraintViolation::MissingReference { resource, target }) => {
            tracing::warn!(resource, target, "write rejected by foreign key");
            RosterError::Conflict {
                reason: format!("{} references a {} that does not exist", resource, target),
            }
        }
        None => {
            tracing::error!("Storage error: {:?}", error);
            RosterError::Internal
        }
    }
}

//! REST DTOs with serde derives for HTTP API

use crate::contract::Page;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ===== Student DTOs =====

/// Student response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Bob")]
    pub name: String,

    #[schema(example = "bob@x.com")]
    pub email: String,

    /// Owning group, null when the student is in no group
    #[schema(example = 1)]
    pub group_id: Option<i32>,
}

/// Student creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    #[schema(example = "Bob")]
    pub name: String,

    #[schema(example = "bob@x.com")]
    pub email: String,
}

// ===== Group DTOs =====

/// Group response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "A")]
    pub name: String,

    /// Current members, ordered by id
    pub students: Vec<StudentDto>,
}

/// Group creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    #[schema(example = "A")]
    pub name: String,
}

// ===== Generic responses =====

/// Plain acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Student deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

// ===== Query parameters =====

/// Offset pagination
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Number of records to skip
    #[serde(default)]
    pub skip: u64,

    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    #[param(default = 100)]
    pub limit: u64,
}

fn default_limit() -> u64 {
    Page::DEFAULT_LIMIT
}

impl From<PaginationQuery> for Page {
    fn from(query: PaginationQuery) -> Self {
        Page::new(query.skip, query.limit)
    }
}

/// Group the new student joins
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateStudentQuery {
    pub group_id: i32,
}

/// Student to add to a group
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssignStudentQuery {
    pub student_id: i32,
}

/// Destination of a transfer
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransferQuery {
    pub new_group_id: i32,
}

//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

// ===== Student Handlers =====

/// Create a student in an existing group
#[utoipa::path(
    post,
    path = "/students/",
    tag = "students",
    params(CreateStudentQuery),
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentDto),
        (status = 400, description = "Invalid name or email", body = Problem),
        (status = 404, description = "Group not found", body = Problem),
        (status = 409, description = "Email already in use", body = Problem),
    )
)]
pub async fn create_student(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<CreateStudentQuery>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentDto>), Problem> {
    let student = service
        .create_student(req.into(), query.group_id)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = StudentDto),
        (status = 404, description = "Student not found", body = Problem),
    )
)]
pub async fn get_student(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<StudentDto>, Problem> {
    let student = service.get_student(id).await.map_err(map_domain_error)?;
    Ok(Json(student.into()))
}

/// List students ordered by id
#[utoipa::path(
    get,
    path = "/students/",
    tag = "students",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of students", body = [StudentDto]),
        (status = 400, description = "Invalid limit", body = Problem),
    )
)]
pub async fn list_students(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<StudentDto>>, Problem> {
    let students = service
        .list_students(query.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(students.into_iter().map(StudentDto::from).collect()))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = Problem),
    )
)]
pub async fn delete_student(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, Problem> {
    service.delete_student(id).await.map_err(map_domain_error)?;
    Ok(Json(MessageResponse::new("Student deleted")))
}

/// Move a student to another group
#[utoipa::path(
    post,
    path = "/students/{id}/transfer",
    tag = "students",
    params(("id" = i32, Path, description = "Student id"), TransferQuery),
    responses(
        (status = 200, description = "Student transferred", body = MessageResponse),
        (status = 404, description = "Student or group not found", body = Problem),
    )
)]
pub async fn transfer_student(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Query(query): Query<TransferQuery>,
) -> Result<Json<MessageResponse>, Problem> {
    service
        .transfer_student(id, query.new_group_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse::new(format!(
        "Student {} transferred to group {}",
        id, query.new_group_id
    ))))
}

// ===== Group Handlers =====

/// Create a group
#[utoipa::path(
    post,
    path = "/groups/",
    tag = "groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid name", body = Problem),
        (status = 409, description = "Name already in use", body = Problem),
    )
)]
pub async fn create_group(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupDto>), Problem> {
    let group = service
        .create_group(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(group.into())))
}

/// Get a group by id, with its members
#[utoipa::path(
    get,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group found", body = GroupDto),
        (status = 404, description = "Group not found", body = Problem),
    )
)]
pub async fn get_group(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<GroupDto>, Problem> {
    let group = service.get_group(id).await.map_err(map_domain_error)?;
    Ok(Json(group.into()))
}

/// List groups ordered by id
#[utoipa::path(
    get,
    path = "/groups/",
    tag = "groups",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of groups", body = [GroupDto]),
        (status = 400, description = "Invalid limit", body = Problem),
    )
)]
pub async fn list_groups(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<GroupDto>>, Problem> {
    let groups = service
        .list_groups(query.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(groups.into_iter().map(GroupDto::from).collect()))
}

/// Delete a group; its members remain without a group
#[utoipa::path(
    delete,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group deleted", body = MessageResponse),
        (status = 404, description = "Group not found", body = Problem),
    )
)]
pub async fn delete_group(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, Problem> {
    service.delete_group(id).await.map_err(map_domain_error)?;
    Ok(Json(MessageResponse::new("Group deleted")))
}

// ===== Membership Handlers =====

/// Add an existing student to a group
#[utoipa::path(
    post,
    path = "/groups/{id}/students/",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id"), AssignStudentQuery),
    responses(
        (status = 200, description = "Student assigned", body = StudentDto),
        (status = 404, description = "Group or student not found", body = Problem),
    )
)]
pub async fn add_student_to_group(
    Extension(service): Extension<Arc<Service>>,
    Path(group_id): Path<i32>,
    Query(query): Query<AssignStudentQuery>,
) -> Result<Json<StudentDto>, Problem> {
    let student = service
        .assign_student_to_group(query.student_id, group_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(student.into()))
}

/// Remove a student from its current group
#[utoipa::path(
    delete,
    path = "/groups/{id}/students/{student_id}",
    tag = "groups",
    params(
        ("id" = i32, Path, description = "Group id"),
        ("student_id" = i32, Path, description = "Student id"),
    ),
    responses(
        (status = 200, description = "Student removed from group", body = StudentDto),
        (status = 404, description = "Group or student not found", body = Problem),
    )
)]
pub async fn remove_student_from_group(
    Extension(service): Extension<Arc<Service>>,
    Path((group_id, student_id)): Path<(i32, i32)>,
) -> Result<Json<StudentDto>, Problem> {
    let student = service
        .remove_student_from_group(student_id, group_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(student.into()))
}

/// List the members of a group
#[utoipa::path(
    get,
    path = "/groups/{id}/students/",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group members", body = [StudentDto]),
        (status = 404, description = "Group not found", body = Problem),
    )
)]
pub async fn list_group_students(
    Extension(service): Extension<Arc<Service>>,
    Path(group_id): Path<i32>,
) -> Result<Json<Vec<StudentDto>>, Problem> {
    let students = service
        .list_group_students(group_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(students.into_iter().map(StudentDto::from).collect()))
}

// ===== Service Handlers =====

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

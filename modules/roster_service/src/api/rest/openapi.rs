//! OpenAPI document for the REST API

use super::{dto::*, error::Problem, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Students API",
        description = "API for managing students and groups"
    ),
    paths(
        handlers::create_student,
        handlers::get_student,
        handlers::list_students,
        handlers::delete_student,
        handlers::transfer_student,
        handlers::create_group,
        handlers::get_group,
        handlers::list_groups,
        handlers::delete_group,
        handlers::add_student_to_group,
        handlers::remove_student_from_group,
        handlers::list_group_students,
        handlers::health,
    ),
    components(schemas(
        StudentDto,
        CreateStudentRequest,
        GroupDto,
        CreateGroupRequest,
        MessageResponse,
        HealthResponse,
        Problem,
    )),
    tags(
        (name = "students", description = "Student records"),
        (name = "groups", description = "Groups and membership"),
        (name = "service", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

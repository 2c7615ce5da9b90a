//! Route registration

use super::{handlers, openapi::ApiDoc};
use crate::domain::Service;
use axum::{
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Build the router with all REST endpoints
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // Student endpoints
        .route(
            "/students/",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/{id}",
            get(handlers::get_student).delete(handlers::delete_student),
        )
        .route("/students/{id}/transfer", post(handlers::transfer_student))
        // Group endpoints
        .route(
            "/groups/",
            get(handlers::list_groups).post(handlers::create_group),
        )
        .route(
            "/groups/{id}",
            get(handlers::get_group).delete(handlers::delete_group),
        )
        // Membership endpoints
        .route(
            "/groups/{id}/students/",
            get(handlers::list_group_students).post(handlers::add_student_to_group),
        )
        .route(
            "/groups/{id}/students/{student_id}",
            delete(handlers::remove_student_from_group),
        )
        // Service endpoints
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        // Add service as extension for handlers
        .layer(Extension(service))
}

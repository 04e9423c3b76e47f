use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::accounts::create_account;
use super::handlers::children::children_by_classroom;
use super::handlers::children::create_child;
use super::handlers::children::delete_child;
use super::handlers::children::get_child;
use super::handlers::children::list_children;
use super::handlers::children::patch_child;
use super::handlers::children::update_child;
use super::handlers::classrooms::classrooms_by_child;
use super::handlers::classrooms::create_classroom;
use super::handlers::classrooms::delete_classroom;
use super::handlers::classrooms::get_classroom;
use super::handlers::classrooms::list_classrooms;
use super::handlers::classrooms::patch_classroom;
use super::handlers::classrooms::update_classroom;
use super::handlers::login::current_identity;
use super::handlers::login::login;
use super::handlers::teachers::create_teacher;
use super::handlers::teachers::delete_teacher;
use super::handlers::teachers::get_teacher;
use super::handlers::teachers::list_teachers;
use super::handlers::teachers::patch_teacher;
use super::handlers::teachers::update_teacher;
use super::middleware::authenticate_request;
use super::policy;
use super::policy::AccessPolicy;
use crate::domain::child::service::ChildService;
use crate::domain::classroom::service::ClassroomService;
use crate::domain::identity::service::AuthService;
use crate::domain::teacher::service::TeacherService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub teacher_service: Arc<TeacherService>,
    pub classroom_service: Arc<ClassroomService>,
    pub child_service: Arc<ChildService>,
    pub access_policy: Arc<AccessPolicy>,
}

async fn health() -> &'static str {
    "ok"
}

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(current_identity))
        .route("/api/accounts", post(create_account))
        .route("/api/teachers", get(list_teachers).post(create_teacher))
        .route(
            "/api/teachers/:id",
            get(get_teacher)
                .put(update_teacher)
                .patch(patch_teacher)
                .delete(delete_teacher),
        )
        .route(
            "/api/classrooms",
            get(list_classrooms).post(create_classroom),
        )
        .route(
            "/api/classrooms/:id",
            get(get_classroom)
                .put(update_classroom)
                .patch(patch_classroom)
                .delete(delete_classroom),
        )
        .route(
            "/api/classrooms/children/:child_id",
            get(classrooms_by_child),
        )
        .route("/api/children", get(list_children).post(create_child))
        .route(
            "/api/children/:id",
            get(get_child)
                .put(update_child)
                .patch(patch_child)
                .delete(delete_child),
        )
        .route(
            "/api/children/classroom/:classroom_id",
            get(children_by_classroom),
        )
        // Statically ordered pipeline, composed once at startup. Layers run
        // outside-in in reverse registration order: authentication attaches
        // the per-request result, then the policy stage enforces it.
        .layer(from_fn_with_state(state.clone(), policy::enforce))
        .layer(from_fn_with_state(state.clone(), authenticate_request))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

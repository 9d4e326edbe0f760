pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::config::{Config, CorsOrigin};
use crate::db::Repository;
use crate::error::AppError;
use crate::pagination::PageQuery;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{header, Method};
use axum::{
    routing::{delete, get, post},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

pub fn create_router(state: AppState, config: &Config) -> Router {
    let allow_origin = match &config.cors_origin {
        CorsOrigin::Any => AllowOrigin::any(),
        CorsOrigin::Exact(origin) => AllowOrigin::exact(origin.clone()),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/categories",
            get(categories::get_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/:category_id/questions",
            get(questions::get_questions_by_category).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(questions::get_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/add",
            post(questions::add_question).fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(questions::search_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/:question_id",
            delete(questions::delete_question).fallback(method_not_allowed),
        )
        .route(
            "/quizzes",
            post(quizzes::play_quiz).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".into())
}

async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(format!("Method {} not allowed on this resource", method))
}

/// The requested page; a query string that cannot be parsed at all
/// falls back to the first page, like a non-integer `page`.
pub(crate) fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    query.map(|Query(params)| params.page()).unwrap_or(1)
}

/// Parse a request body as JSON.
///
/// An empty body or a JSON `null` yields `None`.
pub(crate) fn parse_json_body(body: &Bytes) -> Result<Option<Value>, serde_json::Error> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(None);
    }
    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Ok(None),
        value => Ok(Some(value)),
    }
}

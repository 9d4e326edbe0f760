use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::{parse_json_body, requested_page, AppState};
use crate::db::QuestionFilter;
use crate::domain::question::AddQuestionBody;
use crate::domain::{CategoryMap, NewQuestion, Question};
use crate::error::AppError;
use crate::pagination::{paginate, PageQuery};

const NO_DATA: &str = "No data provided.";
const PAGINATION_FAILED: &str = "Pagination Failed";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
    pub total_questions: i64,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub total_questions: i64,
    pub questions: Vec<Question>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Integer path ids; anything else is treated as an unknown route.
fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound("Resource not found".into()))
}

/// Empty containers, `false`, `0` and `""` count as no data.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
    }
}

fn malformed_body(err: serde_json::Error) -> AppError {
    AppError::BadRequest(format!("Malformed JSON body: {}", err))
}

pub async fn get_questions(
    query: Result<Query<PageQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let questions = state.repo.list_questions().await?;
    let categories: CategoryMap = state.repo.list_categories().await?.into_iter().collect();

    if questions.is_empty() {
        return Err(AppError::NotFound("No questions found".into()));
    }

    let page = paginate(&questions, requested_page(query));
    if page.is_empty() {
        return Err(AppError::NotFound(PAGINATION_FAILED.into()));
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page.to_vec(),
        total_questions: questions.len(),
        categories,
        current_category: None,
    }))
}

pub async fn get_questions_by_category(
    query: Result<Query<PageQuery>, QueryRejection>,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let category_id = path_id(path)?;

    let questions = state
        .repo
        .filter_questions(&QuestionFilter::new().category(category_id))
        .await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "Category with ID {} not found. Or no questions for given category",
            category_id
        )));
    }

    let page = paginate(&questions, requested_page(query));
    if page.is_empty() {
        return Err(AppError::NotFound(PAGINATION_FAILED.into()));
    }

    let current_category = state
        .repo
        .get_category(category_id)
        .await?
        .map(|c| c.kind)
        .into_iter()
        .collect();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.to_vec(),
        total_questions: questions.len(),
        current_category,
    }))
}

pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let question_id = path_id(path)?;

    // An unknown id is a client error here, not a 404.
    if state.repo.get_question(question_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Question with ID {} not found.",
            question_id
        )));
    }

    state.repo.delete_question(question_id).await?;
    info!(question_id, "question deleted");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        total_questions: state.repo.count_questions().await?,
        current_category: None,
    }))
}

pub async fn add_question(
    query: Result<Query<PageQuery>, QueryRejection>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddQuestionResponse>), AppError> {
    let body = match parse_json_body(&body).map_err(malformed_body)? {
        Some(value) if !is_falsy(&value) => serde_json::from_value::<AddQuestionBody>(value)
            .map_err(|_| AppError::BadRequest("Request body must be a JSON object.".into()))?,
        _ => return Err(AppError::BadRequest(NO_DATA.into())),
    };

    let new_question =
        NewQuestion::from_body(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let created = state
        .repo
        .insert_question(&new_question)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    info!(question_id = created, "question created");

    let questions = state.repo.list_questions().await?;
    let page = paginate(&questions, requested_page(query)).to_vec();

    Ok((
        StatusCode::CREATED,
        Json(AddQuestionResponse {
            success: true,
            created,
            total_questions: state.repo.count_questions().await?,
            questions: page,
        }),
    ))
}

pub async fn search_questions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SearchResponse>), AppError> {
    let body = match parse_json_body(&body).map_err(malformed_body)? {
        None => SearchBody::default(),
        Some(value) => serde_json::from_value::<SearchBody>(value).map_err(|_| {
            AppError::BadRequest("searchTerm must be a string.".into())
        })?,
    };

    let questions = match body.search_term.as_deref() {
        Some(term) if !term.is_empty() => {
            state
                .repo
                .filter_questions(&QuestionFilter::new().search(term))
                .await?
        }
        _ => Vec::new(),
    };

    Ok((
        StatusCode::CREATED,
        Json(SearchResponse {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category: None,
        }),
    ))
}

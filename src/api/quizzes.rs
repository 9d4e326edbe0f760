use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{parse_json_body, AppState};
use crate::db::QuestionFilter;
use crate::domain::quiz::pick_question;
use crate::domain::{FlexibleId, Question};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: FlexibleId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
    pub quiz_category: QuizCategory,
    pub previous_questions: Option<Vec<FlexibleId>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exhausted: bool,
}

/// Serve one random question from the category that the player has not
/// seen yet. Any failure, malformed input included, is a 422.
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuizResponse>, AppError> {
    let body: QuizBody = parse_json_body(&body)
        .map_err(|e| AppError::Unprocessable(format!("Malformed quiz request: {}", e)))?
        .ok_or_else(|| AppError::Unprocessable("Missing quiz request body".into()))
        .and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| AppError::Unprocessable(format!("Invalid quiz request: {}", e)))
        })?;

    let category_id = body.quiz_category.id.get();
    let previous: Vec<i64> = body
        .previous_questions
        .unwrap_or_default()
        .into_iter()
        .map(FlexibleId::get)
        .collect();

    debug!(
        category_id,
        category = ?body.quiz_category.kind,
        previous = previous.len(),
        "selecting quiz question"
    );

    // Category 0 ("all categories" in the frontend) is not special-cased.
    let filter = QuestionFilter::new()
        .category(category_id)
        .excluding(previous);
    let candidates = state
        .repo
        .filter_questions(&filter)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let question = pick_question(&candidates, &mut rand::thread_rng()).cloned();
    let exhausted = question.is_none();

    Ok(Json(QuizResponse {
        success: true,
        question,
        exhausted,
    }))
}

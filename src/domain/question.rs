//! Question records and write-boundary validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::ids::parse_id_value;

/// A stored quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Raw add-question request body.
///
/// Fields stay untyped so that validation can apply truthiness rules
/// instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct AddQuestionBody {
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub difficulty: Option<Value>,
    pub category: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields. Provide non-empty question, answer, difficulty, and category.")]
    MissingFields,
}

/// A validated question ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        NewQuestion {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Validate an add-question body.
    ///
    /// `question` and `answer` must be strings that are non-empty after
    /// trimming; `difficulty` and `category` must be truthy integers.
    /// The text is stored as sent.
    pub fn from_body(body: &AddQuestionBody) -> Result<Self, ValidationError> {
        let question = non_blank_text(body.question.as_ref())?;
        let answer = non_blank_text(body.answer.as_ref())?;
        let difficulty = truthy_integer(body.difficulty.as_ref())?;
        let category = truthy_integer(body.category.as_ref())?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn non_blank_text(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ValidationError::MissingFields),
    }
}

fn truthy_integer(value: Option<&Value>) -> Result<i64, ValidationError> {
    match value.and_then(parse_id_value) {
        Some(n) if n != 0 => Ok(n),
        _ => Err(ValidationError::MissingFields),
    }
}

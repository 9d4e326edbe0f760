//! Domain types for the trivia API.
//!
//! This module provides:
//! - Category and Question records with their JSON shape
//! - Write-boundary validation for new questions
//! - Lenient id parsing for browser-sent request bodies
//! - Random quiz question selection

pub mod category;
pub mod ids;
pub mod question;
pub mod quiz;

pub use category::{Category, CategoryMap};
pub use ids::{parse_id_value, FlexibleId};
pub use question::{NewQuestion, Question, ValidationError};

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::domain::CategoryMap;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories: CategoryMap = state.repo.list_categories().await?.into_iter().collect();

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories found".into()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

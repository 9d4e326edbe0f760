//! Fixed-size, 1-indexed pagination over ordered result sets.

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=` query parameter.
///
/// Kept as a raw string so that a missing or non-integer value falls
/// back to the first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Slice `items` to `[(page - 1) * 10, page * 10)`.
///
/// Pages past the end, and pages below 1, yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

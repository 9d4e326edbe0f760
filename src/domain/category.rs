//! Category record and the id → label map served to clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A labeled grouping for questions (e.g. "Science").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Category {
            id,
            kind: kind.into(),
        }
    }
}

/// Categories keyed by id, ordered by id.
///
/// Serializes as a JSON object; integer keys become string keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<i64, String>);

impl CategoryMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.0.get(&id).map(|s| s.as_str())
    }
}

impl FromIterator<Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        CategoryMap(iter.into_iter().map(|c| (c.id, c.kind)).collect())
    }
}

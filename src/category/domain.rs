//! Core category domain types.

use serde::{Deserialize, Serialize};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A product category (e.g., 'Dairy', 'Bakery').
///
/// Categories are seeded once and never modified afterwards, so there are no
/// update or delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

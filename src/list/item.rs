use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Random v4 id, unique for the life of the list
    pub id: String,
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

impl ShoppingListItem {
    pub fn new(count: f64, unit: impl Into<String>, ingredient: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        }
    }
}

mod item;


pub use item::ShoppingListItem;

use crate::parser::IngredientEntry;
use thiserror::Error;
use tracing::debug;

/// Count given to list items whose ingredient had no quantity
pub const DEFAULT_ITEM_COUNT: f64 = 1.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    #[error("Invalid count {0}: must be a finite, non-negative number")]
    InvalidCount(f64),
}

/// Ordered shopping list. Every added item gets a fresh id; identical
/// items are not merged.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item and return it
    pub fn add_item(
        &mut self,
        count: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> &ShoppingListItem {
        let item = ShoppingListItem::new(count, unit, ingredient);
        debug!(id = %item.id, ingredient = %item.ingredient, "shopping list item added");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Append one item per ingredient and return copies of the new items
    pub fn add_ingredients(&mut self, ingredients: &[IngredientEntry]) -> Vec<ShoppingListItem> {
        ingredients
            .iter()
            .map(|entry| {
                self.add_item(
                    entry.count.unwrap_or(DEFAULT_ITEM_COUNT),
                    entry.unit.as_str(),
                    entry.ingredient.as_str(),
                )
                .clone()
            })
            .collect()
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Set an item's count. Returns `Ok(false)` if no item has `id`.
    pub fn update_count(&mut self, id: &str, count: f64) -> Result<bool, ListError> {
        if !count.is_finite() || count < 0.0 {
            return Err(ListError::InvalidCount(count));
        }

        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = count;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

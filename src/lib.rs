// Public API exports
pub mod catalog;
pub mod config;
pub mod likes;
pub mod list;
pub mod parser;
pub mod recipe;
pub mod search;
pub mod state;

// Re-export main types for convenience
pub use catalog::{Catalog, FetchError, HttpCatalog, RecipeDetail, RecipeSummary};
pub use config::Config;
pub use likes::{KeyValueStore, LikeError, LikeRecord, LikedRecipes, MemoryStore, SqliteStore, StorageError};
pub use list::{ListError, ShoppingList, ShoppingListItem};
pub use parser::{IngredientEntry, parse_line};
pub use recipe::{Recipe, RecipeError, ServingsDirection};
pub use search::Search;
pub use state::{AppState, FetchSlot, FetchTicket};

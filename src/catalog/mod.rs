pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{Catalog, HttpCatalog};
pub use error::FetchError;
pub use types::{RecipeDetail, RecipeSummary};

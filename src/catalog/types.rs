// wire contract of the forkify catalog API
use serde::{Deserialize, Serialize};

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub recipe_id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_rank: Option<f64>,
}

/// Full recipe as returned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub recipe_id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub source_url: String,
    /// Raw ingredient lines, unparsed
    pub ingredients: Vec<String>,
    /// Optional servings hint; the public API usually omits it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeResponse {
    pub recipe: RecipeDetail,
}

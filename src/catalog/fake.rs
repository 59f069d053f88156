use super::{Catalog, FetchError, RecipeDetail, RecipeSummary};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process catalog for tests
#[derive(Default)]
pub struct FakeCatalog {
    pub recipes: HashMap<String, RecipeDetail>,
    pub results: HashMap<String, Vec<RecipeSummary>>,
    pub fail_status: Option<u16>,
    pub calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_recipe(mut self, detail: RecipeDetail) -> Self {
        self.recipes.insert(detail.recipe_id.clone(), detail);
        self
    }

    pub fn with_results(mut self, query: &str, results: Vec<RecipeSummary>) -> Self {
        self.results.insert(query.to_string(), results);
        self
    }

    fn check(&self) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_status {
            Some(status) => Err(FetchError::ServerError {
                status,
                body: "unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        self.check()?;
        Ok(self.results.get(query).cloned().unwrap_or_default())
    }

    async fn fetch_recipe(&self, id: &str) -> Result<RecipeDetail, FetchError> {
        self.check()?;
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.to_string()))
    }
}

pub fn summary(id: &str, title: &str) -> RecipeSummary {
    RecipeSummary {
        recipe_id: id.to_string(),
        title: title.to_string(),
        publisher: "Closet Cooking".to_string(),
        image_url: format!("http://img.example/{}.jpg", id),
        source_url: None,
        social_rank: Some(99.9),
    }
}

pub fn detail(id: &str, ingredients: &[&str]) -> RecipeDetail {
    RecipeDetail {
        recipe_id: id.to_string(),
        title: "Basil Pesto Pasta".to_string(),
        publisher: "Closet Cooking".to_string(),
        image_url: format!("http://img.example/{}.jpg", id),
        source_url: format!("http://recipes.example/{}", id),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        servings: None,
    }
}

mod error;


pub use error::RecipeError;

use crate::catalog::{Catalog, FetchError};
use crate::likes::LikeRecord;
use crate::parser::{parse_line, IngredientEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Servings used when the catalog gives no hint
pub const DEFAULT_SERVINGS: u32 = 4;

/// Estimated minutes per group of ingredients
pub const MINUTES_PER_PERIOD: u32 = 15;

/// Ingredients per estimated time period
pub const INGREDIENTS_PER_PERIOD: usize = 3;

/// Direction of a single serving adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingsDirection {
    Inc,
    Dec,
}

impl FromStr for ServingsDirection {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inc" | "+" => Ok(Self::Inc),
            "dec" | "-" => Ok(Self::Dec),
            other => Err(RecipeError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for ServingsDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inc => write!(f, "inc"),
            Self::Dec => write!(f, "dec"),
        }
    }
}

/// A single recipe: fetched fields, parsed ingredients and the current
/// serving size those ingredients are scaled to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    raw_ingredients: Vec<String>,
    servings_hint: Option<u32>,
    ingredients: Option<Vec<IngredientEntry>>,
    /// Divisor of the last rescale; 0 until `calc_servings` runs
    servings: u32,
    /// Estimated minutes; 0 until `calc_time` runs
    time: u32,
}

impl Recipe {
    /// Create an empty recipe that only knows its id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            author: String::new(),
            img: String::new(),
            url: String::new(),
            raw_ingredients: Vec::new(),
            servings_hint: None,
            ingredients: None,
            servings: 0,
            time: 0,
        }
    }

    /// Populate the recipe from the catalog.
    ///
    /// On failure the recipe is left as it was and the error is returned.
    pub async fn get_recipe<C: Catalog + ?Sized>(&mut self, catalog: &C) -> Result<(), FetchError> {
        let detail = catalog.fetch_recipe(&self.id).await.map_err(|e| {
            warn!(id = %self.id, error = %e, "failed to load recipe");
            e
        })?;

        self.title = detail.title;
        self.author = detail.publisher;
        self.img = detail.image_url;
        self.url = detail.source_url;
        self.raw_ingredients = detail.ingredients;
        self.servings_hint = detail.servings;

        debug!(id = %self.id, lines = self.raw_ingredients.len(), "recipe loaded");
        Ok(())
    }

    /// Parse every raw ingredient line. Blank lines are skipped.
    ///
    /// Re-parsing restores the unscaled quantities, so servings go back to
    /// their initial value as well.
    pub fn parse_ingredients(&mut self) -> &[IngredientEntry] {
        let parsed: Vec<IngredientEntry> = self
            .raw_ingredients
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| parse_line(line))
            .collect();

        self.ingredients = Some(parsed);
        if self.servings != 0 {
            self.servings = self.initial_servings();
        }
        self.ingredients()
    }

    /// Estimate preparation time: 15 minutes for every 3 ingredients
    pub fn calc_time(&mut self) -> u32 {
        let count = self
            .ingredients
            .as_ref()
            .map_or(self.raw_ingredients.len(), Vec::len);
        let periods = count.div_ceil(INGREDIENTS_PER_PERIOD) as u32;

        self.time = periods * MINUTES_PER_PERIOD;
        self.time
    }

    /// Set servings to the catalog hint, or the default when absent.
    ///
    /// If servings were already set, ingredients are rescaled to match.
    pub fn calc_servings(&mut self) -> u32 {
        let initial = self.initial_servings();
        if self.servings != 0 && self.servings != initial {
            self.rescale(self.servings, initial);
        }

        self.servings = initial;
        self.servings
    }

    /// Adjust servings by one and rescale every counted ingredient.
    ///
    /// Decreasing below one serving, or past `u32::MAX`, is refused and
    /// leaves the recipe unchanged.
    pub fn update_servings(&mut self, direction: ServingsDirection) -> Result<u32, RecipeError> {
        let current = self.current_servings()?;
        let next = match direction {
            ServingsDirection::Inc => current
                .checked_add(1)
                .ok_or(RecipeError::ServingsCeiling(current))?,
            ServingsDirection::Dec if current <= 1 => return Err(RecipeError::ServingsFloor),
            ServingsDirection::Dec => current - 1,
        };

        self.rescale(current, next);
        self.servings = next;
        Ok(next)
    }

    /// Jump directly to `servings`, rescaling once
    pub fn set_servings(&mut self, servings: u32) -> Result<u32, RecipeError> {
        if servings == 0 {
            return Err(RecipeError::InvalidServings(servings));
        }
        let current = self.current_servings()?;

        if servings != current {
            self.rescale(current, servings);
            self.servings = servings;
        }
        Ok(servings)
    }

    /// Parsed ingredients, empty before `parse_ingredients`
    pub fn ingredients(&self) -> &[IngredientEntry] {
        self.ingredients.as_deref().unwrap_or(&[])
    }

    /// Raw ingredient lines as fetched
    pub fn raw_ingredients(&self) -> &[String] {
        &self.raw_ingredients
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    /// Whether ingredients have been parsed
    pub fn is_loaded(&self) -> bool {
        self.ingredients.is_some()
    }

    /// Record for the liked-recipes list
    pub fn summary(&self) -> LikeRecord {
        LikeRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            img: self.img.clone(),
        }
    }

    fn initial_servings(&self) -> u32 {
        self.servings_hint
            .filter(|&hint| hint >= 1)
            .unwrap_or(DEFAULT_SERVINGS)
    }

    fn current_servings(&self) -> Result<u32, RecipeError> {
        match self.servings {
            0 => Err(RecipeError::ServingsUnset),
            n => Ok(n),
        }
    }

    fn rescale(&mut self, from: u32, to: u32) {
        if let Some(ingredients) = self.ingredients.as_mut() {
            for entry in ingredients.iter_mut() {
                entry.rescale(f64::from(from), f64::from(to));
            }
        }
    }
}

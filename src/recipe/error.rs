use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Servings cannot go below 1")]
    ServingsFloor,

    #[error("Servings cannot go above {0}")]
    ServingsCeiling(u32),

    #[error("Invalid servings: {0} (must be at least 1)")]
    InvalidServings(u32),

    #[error("Servings have not been calculated yet")]
    ServingsUnset,

    #[error("Unknown servings direction: {0}")]
    UnknownDirection(String),
}

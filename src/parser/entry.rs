use serde::{Deserialize, Serialize};

/// One normalized ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Parsed quantity, `None` when the line carries no leading number
    pub count: Option<f64>,
    /// Canonical unit abbreviation, or empty when no unit was recognized
    pub unit: String,
    /// Remaining descriptive text (e.g. "chopped fresh basil")
    pub ingredient: String,
}

impl IngredientEntry {
    pub fn new(count: Option<f64>, unit: impl Into<String>, ingredient: impl Into<String>) -> Self {
        Self {
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        }
    }

    /// Entry that keeps the raw text as the ingredient name
    pub fn unparsed(raw: impl Into<String>) -> Self {
        Self::new(None, "", raw)
    }

    /// Whether a unit was recognized for this line
    pub fn has_unit(&self) -> bool {
        !self.unit.is_empty()
    }

    /// Rescale the quantity in place from `from` servings to `to` servings.
    /// Entries without a count are untouched. Results that would overflow
    /// saturate at `f64::MAX` so counts stay finite.
    pub fn rescale(&mut self, from: f64, to: f64) {
        if let Some(count) = self.count.as_mut() {
            let mut scaled = *count * to / from;
            if !scaled.is_finite() {
                scaled = *count / from * to;
            }
            *count = scaled.clamp(f64::MIN, f64::MAX);
        }
    }
}

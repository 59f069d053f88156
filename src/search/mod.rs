
use crate::catalog::{Catalog, FetchError, RecipeSummary};
use tracing::{debug, warn};

/// Results shown per page when no size is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A query and the results it produced
#[derive(Debug, Clone)]
pub struct Search {
    pub query: String,
    results: Option<Vec<RecipeSummary>>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: None,
        }
    }

    /// Fetch results for the query. Errors are returned to the caller and
    /// leave `results` untouched.
    pub async fn get_results<C: Catalog + ?Sized>(&mut self, catalog: &C) -> Result<(), FetchError> {
        match catalog.search_recipes(&self.query).await {
            Ok(results) => {
                debug!(query = %self.query, hits = results.len(), "search results stored");
                self.results = Some(results);
                Ok(())
            }
            Err(e) => {
                warn!(query = %self.query, error = %e, "search failed");
                Err(e)
            }
        }
    }

    /// Results, or `None` if no fetch has succeeded
    pub fn results(&self) -> Option<&[RecipeSummary]> {
        self.results.as_deref()
    }

    /// One 1-based page of results. Out of range pages are empty.
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        let results = self.results().unwrap_or(&[]);
        if page == 0 || per_page == 0 {
            return &[];
        }

        let start = (page - 1).saturating_mul(per_page);
        if start >= results.len() {
            return &[];
        }
        let end = start.saturating_add(per_page).min(results.len());
        &results[start..end]
    }

    /// Number of pages needed to show every result
    pub fn page_count(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.results().map_or(0, |r| r.len().div_ceil(per_page))
    }
}

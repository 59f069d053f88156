use super::error::FetchError;
use super::types::{RecipeDetail, RecipeResponse, RecipeSummary, SearchResponse};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Source of recipe search results and recipe details
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search recipes by free-text query
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError>;

    /// Fetch one recipe by id
    async fn fetch_recipe(&self, id: &str) -> Result<RecipeDetail, FetchError>;
}

/// Catalog backed by the forkify HTTP API
pub struct HttpCatalog {
    http: Client,
    endpoint: String,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }

    /// Turn a non-success response into a `ServerError`
    async fn check_status(response: Response) -> Result<Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(FetchError::ServerError {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        debug!(query, "searching catalog");
        let response = self
            .http
            .get(self.url("search"))
            .query(&[("q", query)])
            .send()
            .await?;

        let res: SearchResponse = Self::check_status(response).await?.json().await?;
        debug!(query, hits = res.recipes.len(), "search complete");
        Ok(res.recipes)
    }

    async fn fetch_recipe(&self, id: &str) -> Result<RecipeDetail, FetchError> {
        debug!(id, "fetching recipe");
        let response = self
            .http
            .get(self.url("get"))
            .query(&[("rId", id)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id.to_string()));
        }

        let res: RecipeResponse = Self::check_status(response).await?.json().await?;
        Ok(res.recipe)
    }
}

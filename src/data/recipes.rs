//! Recipe Puppy search API client
//!
//! Fetches the full, unfiltered recipe list for a query. Allergen filtering
//! and caching happen one layer up in [`crate::hunter`].

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::Recipe;

/// Base URL for the Recipe Puppy search API
const RECIPE_PUPPY_BASE_URL: &str = "http://www.recipepuppy.com/api/";

/// Errors that can occur when fetching recipes
#[derive(Debug, Error)]
pub enum RecipeError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("Recipe API returned HTTP {0}")]
    Status(u16),

    /// The response body did not have the expected `{ results: [...] }` shape
    #[error("Malformed recipe API response: {0}")]
    MalformedResponse(String),
}

/// Response envelope from the search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Recipe>,
}

/// Anything that can produce the full recipe list for a query.
///
/// [`RecipeClient`] is the production implementation; tests substitute
/// in-memory sources to count or fail requests.
pub trait RecipeSource: Send + Sync {
    /// Fetches every recipe the source has for `query`, unfiltered and in
    /// source order. Each call is a single attempt.
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Recipe>, RecipeError>>;
}

/// Client for the Recipe Puppy search API
#[derive(Debug, Clone)]
pub struct RecipeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl Default for RecipeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeClient {
    /// Creates a new RecipeClient pointed at the public Recipe Puppy API
    pub fn new() -> Self {
        Self::with_base_url(RECIPE_PUPPY_BASE_URL)
    }

    /// Creates a new RecipeClient with a custom base URL
    ///
    /// The query is appended as the `q` parameter, so the URL should name
    /// the search endpoint itself (e.g. `http://localhost:8080/api/`).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the search endpoint this client sends requests to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full recipe list for a query
    ///
    /// # Returns
    /// * `Ok(Vec<Recipe>)` - Every recipe in the response, in response order
    /// * `Err(RecipeError)` - On transport failure, non-2xx status, or a body
    ///   without a `results` array of recipes with `ingredients`
    pub async fn fetch_recipes(&self, query: &str) -> Result<Vec<Recipe>, RecipeError> {
        debug!(query, url = %self.base_url, "requesting recipes");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

impl RecipeSource for RecipeClient {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Recipe>, RecipeError>> {
        self.fetch_recipes(query).boxed()
    }
}

/// Parses a search response body into its recipe list
fn parse_response(body: &str) -> Result<Vec<Recipe>, RecipeError> {
    serde_json::from_str::<SearchResponse>(body)
        .map(|response| response.results)
        .map_err(|e| RecipeError::MalformedResponse(e.to_string()))
}

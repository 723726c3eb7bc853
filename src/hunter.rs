//! Cached, allergen-filtered recipe search
//!
//! `RecipeHunter` ties a [`RecipeSource`] to a [`RecipeCache`]: the first
//! request for a query goes to the source and its full result set is cached,
//! later requests for the same query are filtered from the cached set.

use tracing::{debug, warn};

use crate::cache::RecipeCache;
use crate::data::{Recipe, RecipeError, RecipeSource};
use crate::filter::filter_recipes;

/// Fetches recipes for a query and filters out allergen matches
pub struct RecipeHunter<S> {
    /// Where uncached queries are fetched from
    source: S,
    /// Unfiltered results of every query fetched so far
    cache: RecipeCache,
}

impl<S: RecipeSource> RecipeHunter<S> {
    /// Creates a hunter with an empty cache
    pub fn new(source: S) -> Self {
        Self::with_cache(source, RecipeCache::new())
    }

    /// Creates a hunter around an existing cache
    pub fn with_cache(source: S, cache: RecipeCache) -> Self {
        Self { source, cache }
    }

    /// The cache of unfiltered results
    pub fn cache(&self) -> &RecipeCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the recipes for `query` that contain none of `allergens`
    ///
    /// # Behavior
    /// - Cached queries are filtered without contacting the source
    /// - Uncached queries are fetched once; the full result set is cached
    ///   before filtering, so later calls with other allergens stay correct
    /// - Failed fetches are returned as errors and nothing is cached
    ///
    /// Concurrent calls for the same uncached query each fetch independently.
    pub async fn fetch_filtered_recipes<A: AsRef<str>>(
        &self,
        query: &str,
        allergens: &[A],
    ) -> Result<Vec<Recipe>, RecipeError> {
        let recipes = match self.cache.lookup(query) {
            Some(recipes) => {
                debug!(query, count = recipes.len(), "recipe cache hit");
                recipes
            }
            None => {
                debug!(query, "recipe cache miss");
                let recipes = self.source.search(query).await.map_err(|e| {
                    warn!(query, error = %e, "recipe fetch failed");
                    e
                })?;
                self.cache.store(query, recipes.clone());
                recipes
            }
        };

        let filtered = filter_recipes(&recipes, allergens);
        debug!(
            query,
            total = recipes.len(),
            kept = filtered.len(),
            "filtered recipes"
        );

        Ok(filtered)
    }
}

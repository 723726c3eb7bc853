//! In-memory recipe cache keyed by query
//!
//! Provides a `RecipeCache` that holds the full, unfiltered recipe list for
//! every query fetched during the life of the process.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::data::Recipe;

/// A stored query result
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The unfiltered recipes for the query
    recipes: Vec<Recipe>,
    /// When the entry was stored
    cached_at: DateTime<Utc>,
}

/// Caches unfiltered recipe lists by exact query string
///
/// Keys are compared as-is: `"Candy"` and `"candy"` are different entries.
/// Entries are never evicted. The map sits behind an `RwLock` so a single
/// cache can be shared by concurrent callers.
#[derive(Debug, Default)]
pub struct RecipeCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl RecipeCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are plain values, so a poisoned lock still guards a consistent map.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the unfiltered recipes stored for `query`, or `None` if the
    /// query has never been stored
    pub fn lookup(&self, query: &str) -> Option<Vec<Recipe>> {
        self.read_entries()
            .get(query)
            .map(|entry| entry.recipes.clone())
    }

    /// Stores the unfiltered recipes for `query`, replacing any existing entry
    pub fn store(&self, query: &str, recipes: Vec<Recipe>) {
        let entry = CacheEntry {
            recipes,
            cached_at: Utc::now(),
        };
        self.write_entries().insert(query.to_string(), entry);
    }

    /// Returns when `query` was last stored
    pub fn cached_at(&self, query: &str) -> Option<DateTime<Utc>> {
        self.read_entries().get(query).map(|entry| entry.cached_at)
    }

    /// Returns true if an entry exists for `query`
    pub fn contains(&self, query: &str) -> bool {
        self.read_entries().contains_key(query)
    }

    /// Number of cached queries
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }
}

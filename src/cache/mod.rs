//! Cache module for reusing recipe search results
//!
//! This module provides an in-memory cache that keeps the unfiltered recipe
//! list for each query, so a repeated query with a different allergen list
//! is filtered locally instead of hitting the API again.

mod manager;

pub use manager::RecipeCache;

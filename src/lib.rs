//! Recipe Hunt Library
//!
//! Searches a recipe API, caches each query's full result set in memory, and
//! filters out recipes whose ingredients contain a given allergen.

pub mod cache;
pub mod cli;
pub mod data;
pub mod filter;
pub mod hunter;

pub use cache::RecipeCache;
pub use data::{Recipe, RecipeClient, RecipeError, RecipeSource};
pub use hunter::RecipeHunter;

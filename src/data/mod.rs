//! Core data models for Recipe Hunt
//!
//! This module contains the recipe type returned by the upstream search API
//! and the client used to fetch it.

pub mod recipes;

pub use recipes::{RecipeClient, RecipeError, RecipeSource};

use serde::{Deserialize, Serialize};

/// A single recipe as returned by the upstream search API
///
/// Recipes are never modified after they are fetched; filtering and caching
/// only ever clone or drop them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Human-readable recipe name
    #[serde(default)]
    pub title: String,
    /// Link to the full recipe
    #[serde(default)]
    pub href: String,
    /// Comma-separated free text list of ingredient phrases
    pub ingredients: String,
    /// Thumbnail image URL, empty when the recipe has none
    #[serde(default)]
    pub thumbnail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_upstream_shape() {
        let json = r#"{
            "title": "Hard Candy",
            "href": "http://allrecipes.com/Recipe/Hard-Candy/Detail.aspx",
            "ingredients": "powdered sugar, food coloring, corn syrup, orange, water, sugar",
            "thumbnail": "http://img.recipepuppy.com/18924.jpg"
        }"#;

        let recipe: Recipe = serde_json::from_str(json).expect("Failed to deserialize Recipe");

        assert_eq!(recipe.title, "Hard Candy");
        assert_eq!(
            recipe.href,
            "http://allrecipes.com/Recipe/Hard-Candy/Detail.aspx"
        );
        assert!(recipe.ingredients.starts_with("powdered sugar"));
        assert_eq!(recipe.thumbnail, "http://img.recipepuppy.com/18924.jpg");
    }

    #[test]
    fn test_recipe_missing_thumbnail_defaults_to_empty() {
        let json = r#"{"title": "Toffee", "href": "http://x", "ingredients": "sugar, butter"}"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.thumbnail, "");
    }

    #[test]
    fn test_recipe_missing_ingredients_is_rejected() {
        let json = r#"{"title": "Toffee", "href": "http://x", "thumbnail": ""}"#;

        let result: Result<Recipe, _> = serde_json::from_str(json);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ingredients"));
    }

    #[test]
    fn test_recipe_null_ingredients_is_rejected() {
        let json = r#"{"title": "Toffee", "ingredients": null}"#;

        let result: Result<Recipe, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}

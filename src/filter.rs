//! Allergen filtering
//!
//! Ingredients arrive as one comma-separated string per recipe. Matching is
//! done on whole whitespace tokens of each ingredient phrase, so the allergen
//! `egg` excludes "egg whites" but not "eggplant".

use crate::data::Recipe;

/// Splits an ingredient list into trimmed phrases on commas
pub fn split_phrases(ingredients: &str) -> impl Iterator<Item = &str> {
    ingredients.split(',').map(str::trim)
}

/// Splits an ingredient phrase into whitespace-separated tokens
pub fn split_tokens(phrase: &str) -> impl Iterator<Item = &str> {
    phrase.split_whitespace().map(str::trim)
}

/// Returns true if any ingredient token of the recipe equals an allergen.
///
/// Comparison is exact and case-sensitive; callers are expected to supply
/// lowercase allergens.
pub fn contains_allergen<S: AsRef<str>>(recipe: &Recipe, allergens: &[S]) -> bool {
    if allergens.is_empty() {
        return false;
    }

    split_phrases(&recipe.ingredients).any(|phrase| {
        split_tokens(phrase).any(|token| allergens.iter().any(|a| a.as_ref() == token))
    })
}

/// Returns the recipes with no allergen-matching ingredient token
///
/// The filter is stable: surviving recipes keep their relative order and
/// duplicates are preserved.
pub fn filter_recipes<S: AsRef<str>>(recipes: &[Recipe], allergens: &[S]) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| !contains_allergen(recipe, allergens))
        .cloned()
        .collect()
}

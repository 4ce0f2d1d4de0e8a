use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    cookbook::value_objects::{SaveRecipeOutcome, SavedRecipe},
    recipe::entities::Recipe,
};

/// Repository trait for the saved-recipe collection.
///
/// Every operation reads and writes the whole collection.
#[cfg_attr(test, mockall::automock)]
pub trait CookbookRepository: Send + Sync {
    /// Saved recipes in insertion order; empty when nothing usable is stored.
    fn list(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn add(&self, recipe: Recipe)
    -> impl Future<Output = Result<SaveRecipeOutcome, CoreError>> + Send;

    /// Removing an unknown id still rewrites the unchanged collection.
    fn remove(&self, recipe_id: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for cookbook business logic
#[cfg_attr(test, mockall::automock)]
pub trait CookbookService: Send + Sync {
    fn list_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn save_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    cookbook::{ports::CookbookRepository, value_objects::SaveRecipeOutcome},
    recipe::entities::Recipe,
};

/// Cookbook kept in process memory. Lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCookbookRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryCookbookRepository {
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }
}

impl CookbookRepository for InMemoryCookbookRepository {
    async fn list(&self) -> Result<Vec<Recipe>, CoreError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn add(&self, recipe: Recipe) -> Result<SaveRecipeOutcome, CoreError> {
        let mut recipes = self.recipes.write().await;
        if recipes.iter().any(|stored| stored.id == recipe.id) {
            return Ok(SaveRecipeOutcome::AlreadyPresent);
        }
        recipes.push(recipe);
        Ok(SaveRecipeOutcome::Added)
    }

    async fn remove(&self, recipe_id: String) -> Result<(), CoreError> {
        self.recipes
            .write()
            .await
            .retain(|recipe| recipe.id != recipe_id);
        Ok(())
    }
}

use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cookbook::{
        ports::{CookbookRepository, CookbookService},
        value_objects::{SaveRecipeOutcome, SavedRecipe},
    },
    export::ports::DocumentRenderer,
    recipe::{entities::Recipe, ports::ChatCompletionClient},
};

impl<CB, LLM, DR> CookbookService for Service<CB, LLM, DR>
where
    CB: CookbookRepository,
    LLM: ChatCompletionClient,
    DR: DocumentRenderer,
{
    async fn list_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.cookbook_repository.list().await
    }

    async fn get_recipe(&self, recipe_id: String) -> Result<Recipe, CoreError> {
        self.cookbook_repository
            .list()
            .await?
            .into_iter()
            .find(|recipe| recipe.id == recipe_id)
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, recipe), fields(recipe_id = %recipe.id))]
    async fn save_recipe(&self, recipe: Recipe) -> Result<SavedRecipe, CoreError> {
        let outcome = self.cookbook_repository.add(recipe.clone()).await?;

        match outcome {
            SaveRecipeOutcome::Added => {
                tracing::info!("Recipe saved to cookbook");
                Ok(SavedRecipe { outcome, recipe })
            }
            SaveRecipeOutcome::AlreadyPresent => {
                tracing::info!("Recipe already in cookbook");
                let stored = self
                    .cookbook_repository
                    .list()
                    .await?
                    .into_iter()
                    .find(|stored| stored.id == recipe.id)
                    .unwrap_or(recipe);
                Ok(SavedRecipe {
                    outcome,
                    recipe: stored,
                })
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete_recipe(&self, recipe_id: String) -> Result<(), CoreError> {
        self.cookbook_repository.remove(recipe_id).await?;
        tracing::info!("Recipe removed from cookbook");
        Ok(())
    }
}

use crate::domain::{
    common::{CookbookConfig, entities::app_errors::CoreError},
    cookbook::{ports::CookbookRepository, value_objects::SaveRecipeOutcome},
    recipe::entities::Recipe,
};

pub mod file_repository;
pub mod memory_repository;

pub use file_repository::FileCookbookRepository;
pub use memory_repository::InMemoryCookbookRepository;

/// Cookbook backend picked at startup.
#[derive(Debug)]
pub enum CookbookStore {
    File(FileCookbookRepository),
    InMemory(InMemoryCookbookRepository),
}

impl CookbookStore {
    pub fn from_config(config: &CookbookConfig) -> Self {
        if config.in_memory {
            CookbookStore::InMemory(InMemoryCookbookRepository::default())
        } else {
            CookbookStore::File(FileCookbookRepository::new(config.path.clone()))
        }
    }
}

impl CookbookRepository for CookbookStore {
    async fn list(&self) -> Result<Vec<Recipe>, CoreError> {
        match self {
            CookbookStore::File(repository) => repository.list().await,
            CookbookStore::InMemory(repository) => repository.list().await,
        }
    }

    async fn add(&self, recipe: Recipe) -> Result<SaveRecipeOutcome, CoreError> {
        match self {
            CookbookStore::File(repository) => repository.add(recipe).await,
            CookbookStore::InMemory(repository) => repository.add(recipe).await,
        }
    }

    async fn remove(&self, recipe_id: String) -> Result<(), CoreError> {
        match self {
            CookbookStore::File(repository) => repository.remove(recipe_id).await,
            CookbookStore::InMemory(repository) => repository.remove(recipe_id).await,
        }
    }
}

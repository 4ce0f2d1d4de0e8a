use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SaveRecipeOutcome {
    Added,
    AlreadyPresent,
}

impl SaveRecipeOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, SaveRecipeOutcome::Added)
    }
}

/// Result of saving a recipe, echoing what is stored under its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecipe {
    pub outcome: SaveRecipeOutcome,
    pub recipe: Recipe,
}

use std::borrow::Cow;

use ferrischef_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::recipe::validators::validate_recipe_title;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRecipeRequest {
    #[validate(custom(function = "validate_saved_recipe"))]
    pub recipe: Recipe,
}

fn validate_saved_recipe(recipe: &Recipe) -> Result<(), ValidationError> {
    if recipe.id.trim().is_empty() {
        return Err(ValidationError::new("missing_id")
            .with_message(Cow::Borrowed("recipe id is required")));
    }
    validate_recipe_title(recipe)
}

use std::borrow::Cow;

use ferrischef_core::domain::recipe::{
    entities::{MealType, Recipe},
    value_objects::GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_generation_constraints"))]
pub struct GenerateRecipeRequest {
    pub meal_type: MealType,

    #[serde(default)]
    #[validate(length(max = 200, message = "ingredient is too long"))]
    pub ingredient: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200, message = "dietary is too long"))]
    pub dietary: Option<String>,

    #[serde(default)]
    pub surprise_me: bool,
}

impl From<GenerateRecipeRequest> for GenerateRecipeInput {
    fn from(request: GenerateRecipeRequest) -> Self {
        GenerateRecipeInput {
            meal_type: request.meal_type,
            ingredient: request.ingredient,
            dietary: request.dietary,
            surprise_me: request.surprise_me,
        }
    }
}

fn validate_generation_constraints(
    request: &GenerateRecipeRequest,
) -> Result<(), ValidationError> {
    let blank = |value: &Option<String>| value.as_deref().is_none_or(|v| v.trim().is_empty());

    if !request.surprise_me && blank(&request.ingredient) && blank(&request.dietary) {
        return Err(ValidationError::new("missing_constraints").with_message(
            Cow::Borrowed("Please enter an ingredient or dietary preference"),
        ));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExportRecipeRequest {
    #[validate(custom(function = "validate_recipe_title"))]
    pub recipe: Recipe,
}

pub(crate) fn validate_recipe_title(recipe: &Recipe) -> Result<(), ValidationError> {
    if recipe.title.trim().is_empty() {
        return Err(ValidationError::new("missing_title")
            .with_message(Cow::Borrowed("recipe title is required")));
    }
    Ok(())
}

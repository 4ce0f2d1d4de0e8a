use axum::extract::State;
use ferrischef_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeResponse {
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Asks the language model for a recipe matching the meal type and optional ingredient or dietary constraint.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 402, body = ApiErrorResponse),
        (status = 429, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
    request_body = GenerateRecipeRequest
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeRequest>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse { recipe }))
}

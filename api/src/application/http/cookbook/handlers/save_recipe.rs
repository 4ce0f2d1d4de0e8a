use axum::extract::State;
use ferrischef_core::domain::{cookbook::ports::CookbookService, recipe::entities::Recipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    cookbook::validators::SaveRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveRecipeResponse {
    /// False when a recipe with the same id was already saved.
    pub saved: bool,
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "cookbook",
    summary = "Save a recipe",
    description = "Adds a recipe to the cookbook. Saving an id that is already present changes nothing.",
    responses(
        (status = 201, body = SaveRecipeResponse),
        (status = 200, description = "Recipe was already saved", body = SaveRecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
    request_body = SaveRecipeRequest
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveRecipeRequest>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let saved = state
        .service
        .save_recipe(payload.recipe)
        .await
        .map_err(ApiError::from)?;

    let response = SaveRecipeResponse {
        saved: saved.outcome.is_added(),
        recipe: saved.recipe,
    };

    if response.saved {
        Ok(Response::Created(response))
    } else {
        Ok(Response::OK(response))
    }
}

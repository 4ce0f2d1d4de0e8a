use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use ferrischef_core::domain::cookbook::ports::CookbookService;

use crate::application::http::server::{
    api_entities::api_error::{ApiError, ApiErrorResponse},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "cookbook",
    summary = "Remove a saved recipe",
    description = "Removes the recipe from the cookbook. Unknown ids are ignored.",
    responses(
        (status = 204, description = "Recipe removed"),
        (status = 500, body = ApiErrorResponse),
    ),
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

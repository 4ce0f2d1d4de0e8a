use axum::extract::State;
use ferrischef_core::domain::{cookbook::ports::CookbookService, recipe::entities::Recipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "cookbook",
    summary = "List saved recipes",
    description = "Returns the cookbook in the order recipes were saved.",
    responses(
        (status = 200, body = ListRecipesResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_recipes()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRecipesResponse { data: recipes }))
}

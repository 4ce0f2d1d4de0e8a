use axum::{
    extract::{Path, State},
    response::Response,
};
use ferrischef_core::domain::{cookbook::ports::CookbookService, export::ports::RecipeExportService};

use crate::application::http::{
    recipe::handlers::export_recipe::attachment,
    server::{
        api_entities::api_error::{ApiError, ApiErrorResponse},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{recipe_id}/pdf",
    tag = "cookbook",
    summary = "Download a saved recipe as PDF",
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 404, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
)]
pub async fn get_recipe_pdf(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    let document = state
        .service
        .export_recipe(&recipe)
        .map_err(ApiError::from)?;

    Ok(attachment(document))
}

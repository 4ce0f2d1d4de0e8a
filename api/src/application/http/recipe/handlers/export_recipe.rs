use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use ferrischef_core::domain::export::{entities::ExportedDocument, ports::RecipeExportService};

use crate::application::http::{
    recipe::validators::ExportRecipeRequest,
    server::{
        api_entities::api_error::{ApiError, ApiErrorResponse, ValidateJson},
        app_state::AppState,
    },
};

/// File download response for an exported recipe.
pub fn attachment(document: ExportedDocument) -> Response {
    (
        [
            (header::CONTENT_TYPE, document.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ),
        ],
        document.bytes,
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/recipes/export",
    tag = "recipe",
    summary = "Export a recipe as PDF",
    description = "Lays the given recipe out on A4 pages and returns it as a PDF download.",
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
    request_body = ExportRecipeRequest
)]
pub async fn export_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExportRecipeRequest>,
) -> Result<Response, ApiError> {
    let document = state
        .service
        .export_recipe(&payload.recipe)
        .map_err(ApiError::from)?;

    Ok(attachment(document))
}

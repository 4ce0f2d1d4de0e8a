use super::handlers::{export_recipe::export_recipe, generate_recipe::generate_recipe};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-recipe", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/recipes/export", state.args.server.root_path),
            post(export_recipe),
        )
}

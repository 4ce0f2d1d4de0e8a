use super::handlers::{
    delete_recipe::{__path_delete_recipe, delete_recipe},
    get_recipe_pdf::{__path_get_recipe_pdf, get_recipe_pdf},
    list_recipes::{__path_list_recipes, list_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_recipes, save_recipe, delete_recipe, get_recipe_pdf))]
pub struct CookbookApiDoc;

pub fn cookbook_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/cookbook", state.args.server.root_path),
            get(list_recipes).post(save_recipe),
        )
        .route(
            &format!("{}/cookbook/{{recipe_id}}", state.args.server.root_path),
            delete(delete_recipe),
        )
        .route(
            &format!("{}/cookbook/{{recipe_id}}/pdf", state.args.server.root_path),
            get(get_recipe_pdf),
        )
}

use crate::application::http::{
    cookbook::router::CookbookApiDoc,
    health::HealthApiDoc,
    recipe::handlers::{
        export_recipe::__path_export_recipe, generate_recipe::__path_generate_recipe,
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FerrisChef API"
    ),
    paths(generate_recipe, export_recipe),
    nest(
        (path = "/cookbook", api = CookbookApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{HeaderValue, Method, StatusCode, header};
use axum_test::TestServer;
use ferrischef_api::{
    application::http::server::http_server::{router, state},
    args::{Args, CookbookArgs, LlmArgs, LogArgs, ServerArgs},
};
use ferrischef_core::domain::common::DEFAULT_LLM_MODEL;
use serde_json::{Value, json};
use tempfile::TempDir;
use test_context::{AsyncTestContext, test_context};

struct ApiContext {
    server: TestServer,
    cookbook_path: PathBuf,
    _cookbook_dir: TempDir,
}

fn test_args(cookbook_path: PathBuf) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["*".to_string()],
            metrics_enabled: false,
        },
        llm: LlmArgs {
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_string(),
            endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            temperature: 0.8,
            timeout_secs: 1,
            max_retries: 0,
        },
        cookbook: CookbookArgs {
            path: cookbook_path,
            in_memory: false,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let cookbook_dir = tempfile::tempdir().unwrap();
        let cookbook_path = cookbook_dir.path().join("savedRecipes.json");

        let state = state(Arc::new(test_args(cookbook_path.clone())))
            .await
            .unwrap();
        let server = TestServer::new(router(state).unwrap()).unwrap();

        ApiContext {
            server,
            cookbook_path,
            _cookbook_dir: cookbook_dir,
        }
    }
}

fn lentil_stew() -> Value {
    json!({
        "id": "0192f7a4-8c1e-7b3a-9d2e-4f5a6b7c8d9e",
        "title": "Lentil Stew",
        "description": "Warm and filling",
        "ingredients": ["1 cup lentils", "2 carrots"],
        "instructions": ["Simmer for 30 minutes", "Serve hot"],
        "cookingTime": "40 minutes",
        "servings": "4 servings",
        "nutritionalInfo": { "calories": "320 kcal" },
        "mealType": "dinner",
        "imageUrl": "/images/meal-dinner.jpg"
    })
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_preflight_allows_any_origin(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .method(Method::OPTIONS, "/generate-recipe")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:5173"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type,apikey"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("*"))
    );
    let allowed_headers = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    for name in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed_headers.contains(name), "missing {name}");
    }
    assert!(response.as_bytes().is_empty());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_generate_without_credential_is_a_server_error(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/generate-recipe")
        .json(&json!({
            "mealType": "breakfast",
            "ingredient": "oats",
            "dietary": "",
            "surpriseMe": false
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "LLM API key is not configured" })
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_generate_rejects_unconstrained_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/generate-recipe")
        .json(&json!({
            "mealType": "lunch",
            "ingredient": "  ",
            "surpriseMe": false
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Please enter an ingredient or dietary preference"
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_generate_accepts_capitalized_meal_type(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/generate-recipe")
        .json(&json!({ "mealType": "Breakfast", "ingredient": "oats" }))
        .await;

    // Gets past request validation and stops at the missing credential.
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "LLM API key is not configured" })
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_generate_rejects_unknown_meal_type(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/generate-recipe")
        .json(&json!({ "mealType": "brunch", "surpriseMe": true }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_cookbook_flow(ctx: &mut ApiContext) {
    let listed = ctx.server.get("/cookbook").await;
    listed.assert_status_ok();
    assert_eq!(listed.json::<Value>(), json!({ "data": [] }));

    let saved = ctx
        .server
        .post("/cookbook")
        .json(&json!({ "recipe": lentil_stew() }))
        .await;
    saved.assert_status(StatusCode::CREATED);
    assert_eq!(
        saved.json::<Value>(),
        json!({ "saved": true, "recipe": lentil_stew() })
    );

    let again = ctx
        .server
        .post("/cookbook")
        .json(&json!({ "recipe": lentil_stew() }))
        .await;
    again.assert_status_ok();
    assert_eq!(again.json::<Value>()["saved"], false);

    let listed = ctx.server.get("/cookbook").await;
    assert_eq!(listed.json::<Value>(), json!({ "data": [lentil_stew()] }));
    assert!(ctx.cookbook_path.exists());

    let recipe_id = lentil_stew()["id"].as_str().unwrap().to_string();

    let pdf = ctx.server.get(&format!("/cookbook/{recipe_id}/pdf")).await;
    pdf.assert_status_ok();
    assert_eq!(
        pdf.headers().get(header::CONTENT_TYPE),
        Some(&HeaderValue::from_static("application/pdf"))
    );
    assert_eq!(
        pdf.headers().get(header::CONTENT_DISPOSITION),
        Some(&HeaderValue::from_static(
            "attachment; filename=\"lentil-stew.pdf\""
        ))
    );
    assert!(pdf.as_bytes().starts_with(b"%PDF"));

    let deleted = ctx.server.delete(&format!("/cookbook/{recipe_id}")).await;
    deleted.assert_status(StatusCode::NO_CONTENT);
    let deleted_again = ctx.server.delete(&format!("/cookbook/{recipe_id}")).await;
    deleted_again.assert_status(StatusCode::NO_CONTENT);

    let listed = ctx.server.get("/cookbook").await;
    assert_eq!(listed.json::<Value>(), json!({ "data": [] }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_save_rejects_recipe_without_title(ctx: &mut ApiContext) {
    let mut recipe = lentil_stew();
    recipe["title"] = json!("");

    let response = ctx
        .server
        .post("/cookbook")
        .json(&json!({ "recipe": recipe }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "recipe title is required");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_pdf_of_unknown_recipe_is_not_found(ctx: &mut ApiContext) {
    let response = ctx.server.get("/cookbook/does-not-exist/pdf").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Recipe not found" })
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_export_returns_pdf_attachment(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes/export")
        .json(&json!({ "recipe": lentil_stew() }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION),
        Some(&HeaderValue::from_static(
            "attachment; filename=\"lentil-stew.pdf\""
        ))
    );
    assert!(response.as_bytes().starts_with(b"%PDF"));
    assert!(!ctx.cookbook_path.exists());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health_and_docs(ctx: &mut ApiContext) {
    let health = ctx.server.get("/health/live").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>(), json!({ "status": "ok" }));

    let docs = ctx.server.get("/api-docs/openapi.json").await;
    docs.assert_status_ok();
    let paths = docs.json::<Value>()["paths"].clone();
    assert!(paths.get("/generate-recipe").is_some());
    assert!(paths.get("/recipes/export").is_some());
    assert!(paths.get("/health/live").is_some());
}

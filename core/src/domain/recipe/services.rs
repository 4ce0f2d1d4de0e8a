use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cookbook::ports::CookbookRepository,
    export::ports::DocumentRenderer,
    recipe::{
        entities::{ChatCompletionRequest, ChatMessage, Recipe},
        helpers::{extract_message_content, interpret_upstream_status, parse_recipe_draft},
        ports::{ChatCompletionClient, RecipeService},
        prompt::{CHEF_SYSTEM_PROMPT, build_recipe_prompt},
        value_objects::GenerateRecipeInput,
    },
};

impl<CB, LLM, DR> RecipeService for Service<CB, LLM, DR>
where
    CB: CookbookRepository,
    LLM: ChatCompletionClient,
    DR: DocumentRenderer,
{
    #[instrument(skip(self), fields(meal_type = %input.meal_type, surprise_me = input.surprise_me))]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        // 1. Upstream credential
        if !self.chat_client.has_credential() {
            tracing::error!("LLM API key is not configured");
            return Err(CoreError::ConfigurationError(
                "LLM API key is not configured".to_string(),
            ));
        }

        // 2. Build prompt
        let prompt = build_recipe_prompt(&input);

        // 3. Call the chat-completion endpoint
        let request = ChatCompletionRequest {
            model: self.generation.model.clone(),
            messages: vec![
                ChatMessage::system(CHEF_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            temperature: self.generation.temperature,
        };
        let reply = self.chat_client.create_chat_completion(request).await?;

        // 4. Interpret status
        interpret_upstream_status(&reply)?;

        // 5. Extract assistant text
        let content = extract_message_content(&reply.body)?;

        // 6. Parse recipe payload
        let draft = parse_recipe_draft(&content)?;

        // 7. Normalize
        let recipe = Recipe::from_draft(draft, input.meal_type);

        tracing::info!(recipe_id = %recipe.id, title = %recipe.title, "Recipe generated");

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{
        common::services::GenerationSettings,
        recipe::entities::{ChatCompletionReply, ChatRole, MealType},
    };
    use crate::infrastructure::{
        cookbook::memory_repository::InMemoryCookbookRepository,
        export::pdf_renderer::PdfDocumentRenderer,
    };

    /// Replays a canned upstream reply and records what was sent.
    struct FakeChatClient {
        credential: bool,
        reply: Result<ChatCompletionReply, CoreError>,
        requests: Mutex<Vec<ChatCompletionRequest>>,
    }

    impl FakeChatClient {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                credential: true,
                reply: Ok(ChatCompletionReply {
                    status,
                    body: body.to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn with_content(content: &str) -> Self {
            let body = serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            });
            Self::replying(200, &body.to_string())
        }
    }

    impl ChatCompletionClient for FakeChatClient {
        fn has_credential(&self) -> bool {
            self.credential
        }

        async fn create_chat_completion(
            &self,
            request: ChatCompletionRequest,
        ) -> Result<ChatCompletionReply, CoreError> {
            self.requests.lock().unwrap().push(request);
            self.reply.clone()
        }
    }

    type TestService = Service<InMemoryCookbookRepository, FakeChatClient, PdfDocumentRenderer>;

    fn service(client: FakeChatClient) -> TestService {
        Service::new(
            InMemoryCookbookRepository::default(),
            client,
            PdfDocumentRenderer,
            GenerationSettings {
                model: "google/gemini-2.5-flash".to_string(),
                temperature: 0.8,
            },
        )
    }

    fn oats_breakfast() -> GenerateRecipeInput {
        GenerateRecipeInput {
            meal_type: MealType::Breakfast,
            ingredient: Some("oats".to_string()),
            dietary: Some(String::new()),
            surprise_me: false,
        }
    }

    const OAT_BOWL: &str = r#"{"title":"Oat Bowl","ingredients":["oats","milk"],"instructions":["mix","serve"],"cookingTime":"5 minutes","servings":"1"}"#;

    #[tokio::test]
    async fn test_generate_recipe_from_valid_reply() {
        let service = service(FakeChatClient::with_content(OAT_BOWL));

        let recipe = service.generate_recipe(oats_breakfast()).await.unwrap();

        assert!(!recipe.id.is_empty());
        assert_eq!(recipe.title, "Oat Bowl");
        assert_eq!(recipe.meal_type, MealType::Breakfast);
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("/images/meal-breakfast.jpg")
        );
        assert_eq!(recipe.ingredients, vec!["oats", "milk"]);
        assert_eq!(recipe.instructions, vec!["mix", "serve"]);
        assert_eq!(recipe.cooking_time, "5 minutes");
        assert_eq!(recipe.servings, "1");
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.nutritional_info, None);
    }

    #[tokio::test]
    async fn test_generate_recipe_sends_persona_prompt_and_temperature() {
        let service = service(FakeChatClient::with_content(OAT_BOWL));

        service.generate_recipe(oats_breakfast()).await.unwrap();

        let requests = service.chat_client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "google/gemini-2.5-flash");
        assert_eq!(request.temperature, 0.8);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert!(request.messages[0].content.contains("expert chef and nutritionist"));
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert!(request.messages[1].content.contains("featuring oats"));
    }

    #[tokio::test]
    async fn test_fenced_reply_parses_like_unfenced() {
        let fenced = format!("```json\n{}\n```", OAT_BOWL);

        let plain = service(FakeChatClient::with_content(OAT_BOWL))
            .generate_recipe(oats_breakfast())
            .await
            .unwrap();
        let from_fence = service(FakeChatClient::with_content(&fenced))
            .generate_recipe(oats_breakfast())
            .await
            .unwrap();

        assert_ne!(plain.id, from_fence.id);
        assert_eq!(
            Recipe {
                id: String::new(),
                ..plain
            },
            Recipe {
                id: String::new(),
                ..from_fence
            }
        );
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_calling_upstream() {
        let mut client = FakeChatClient::with_content(OAT_BOWL);
        client.credential = false;
        let service = service(client);

        let result = service.generate_recipe(oats_breakfast()).await;

        assert!(matches!(result, Err(CoreError::ConfigurationError(_))));
        assert!(service.chat_client.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_ignores_body() {
        for body in ["", OAT_BOWL, "{\"error\":\"slow down\"}"] {
            let result = service(FakeChatClient::replying(429, body))
                .generate_recipe(oats_breakfast())
                .await;
            assert_eq!(result, Err(CoreError::RateLimited));
        }
    }

    #[tokio::test]
    async fn test_quota_and_upstream_errors() {
        let result = service(FakeChatClient::replying(402, ""))
            .generate_recipe(oats_breakfast())
            .await;
        assert_eq!(result, Err(CoreError::QuotaExhausted));

        let result = service(FakeChatClient::replying(500, "boom"))
            .generate_recipe(oats_breakfast())
            .await;
        assert_eq!(result, Err(CoreError::Upstream { status: 500 }));
    }

    #[tokio::test]
    async fn test_empty_and_malformed_replies() {
        let result = service(FakeChatClient::replying(200, r#"{"choices":[]}"#))
            .generate_recipe(oats_breakfast())
            .await;
        assert_eq!(result, Err(CoreError::EmptyResponse));

        let result = service(FakeChatClient::with_content("Sorry, I cannot help with that."))
            .generate_recipe(oats_breakfast())
            .await;
        assert_eq!(result, Err(CoreError::MalformedRecipe));
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced() {
        let mut client = FakeChatClient::with_content(OAT_BOWL);
        client.reply = Err(CoreError::ExternalServiceError("connection refused".to_string()));

        let result = service(client).generate_recipe(oats_breakfast()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}

use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{ChatCompletionReply, ChatCompletionRequest, Recipe},
        value_objects::GenerateRecipeInput,
    },
};

/// Client for an OpenAI-compatible chat-completion endpoint
#[cfg_attr(test, mockall::automock)]
pub trait ChatCompletionClient: Send + Sync {
    /// Whether an upstream credential is configured.
    fn has_credential(&self) -> bool;

    /// Sends one completion request and returns the upstream status and body
    /// untouched. Only transport failures are reported as errors.
    fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> impl Future<Output = Result<ChatCompletionReply, CoreError>> + Send;
}

/// Service trait for recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

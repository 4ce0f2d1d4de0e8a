use std::sync::Arc;

use crate::domain::{
    cookbook::ports::CookbookRepository, export::ports::DocumentRenderer,
    recipe::ports::ChatCompletionClient,
};

/// Model settings forwarded on every generation call.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
}

pub struct Service<CB, LLM, DR>
where
    CB: CookbookRepository,
    LLM: ChatCompletionClient,
    DR: DocumentRenderer,
{
    pub(crate) cookbook_repository: Arc<CB>,
    pub(crate) chat_client: Arc<LLM>,
    pub(crate) document_renderer: Arc<DR>,
    pub(crate) generation: GenerationSettings,
}

impl<CB, LLM, DR> Service<CB, LLM, DR>
where
    CB: CookbookRepository,
    LLM: ChatCompletionClient,
    DR: DocumentRenderer,
{
    pub fn new(
        cookbook_repository: CB,
        chat_client: LLM,
        document_renderer: DR,
        generation: GenerationSettings,
    ) -> Self {
        Self {
            cookbook_repository: Arc::new(cookbook_repository),
            chat_client: Arc::new(chat_client),
            document_renderer: Arc::new(document_renderer),
            generation,
        }
    }
}

impl<CB, LLM, DR> Clone for Service<CB, LLM, DR>
where
    CB: CookbookRepository,
    LLM: ChatCompletionClient,
    DR: DocumentRenderer,
{
    fn clone(&self) -> Self {
        Self {
            cookbook_repository: Arc::clone(&self.cookbook_repository),
            chat_client: Arc::clone(&self.chat_client),
            document_renderer: Arc::clone(&self.document_renderer),
            generation: self.generation.clone(),
        }
    }
}

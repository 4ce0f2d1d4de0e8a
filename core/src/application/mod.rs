use crate::{
    domain::common::{
        FerrischefConfig,
        services::{GenerationSettings, Service},
    },
    infrastructure::{
        cookbook::CookbookStore, export::PdfDocumentRenderer, llm::ChatCompletionHttpClient,
    },
};

pub type ChefService = Service<CookbookStore, ChatCompletionHttpClient, PdfDocumentRenderer>;

pub async fn create_service(config: FerrischefConfig) -> Result<ChefService, anyhow::Error> {
    let chat_client = ChatCompletionHttpClient::new(&config.llm)?;
    let cookbook = CookbookStore::from_config(&config.cookbook);

    match &cookbook {
        CookbookStore::File(repository) => tracing::info!(
            path = %repository.path().display(),
            "Cookbook persisted to file"
        ),
        CookbookStore::InMemory(_) => tracing::info!("Cookbook kept in memory"),
    }

    Ok(Service::new(
        cookbook,
        chat_client,
        PdfDocumentRenderer,
        GenerationSettings {
            model: config.llm.model,
            temperature: config.llm.temperature,
        },
    ))
}

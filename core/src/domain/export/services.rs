use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cookbook::ports::CookbookRepository,
    export::{
        entities::{ExportedDocument, PDF_CONTENT_TYPE},
        layout::{export_filename, layout_recipe},
        ports::{DocumentRenderer, RecipeExportService},
    },
    recipe::{entities::Recipe, ports::ChatCompletionClient},
};

impl<CB, LLM, DR> RecipeExportService for Service<CB, LLM, DR>
where
    CB: CookbookRepository,
    LLM: ChatCompletionClient,
    DR: DocumentRenderer,
{
    fn export_recipe(&self, recipe: &Recipe) -> Result<ExportedDocument, CoreError> {
        let layout = layout_recipe(recipe);
        let bytes = self.document_renderer.render(&layout)?;

        tracing::info!(
            recipe_id = %recipe.id,
            pages = layout.pages.len(),
            size = bytes.len(),
            "Recipe exported"
        );

        Ok(ExportedDocument {
            filename: export_filename(&recipe.title),
            content_type: PDF_CONTENT_TYPE.to_string(),
            bytes,
        })
    }
}

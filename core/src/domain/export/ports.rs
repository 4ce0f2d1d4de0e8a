use crate::domain::{
    common::entities::app_errors::CoreError,
    export::entities::{DocumentLayout, ExportedDocument},
    recipe::entities::Recipe,
};

/// Turns a laid-out document into file bytes
#[cfg_attr(test, mockall::automock)]
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, CoreError>;
}

/// Service trait for recipe export
#[cfg_attr(test, mockall::automock)]
pub trait RecipeExportService: Send + Sync {
    fn export_recipe(&self, recipe: &Recipe) -> Result<ExportedDocument, CoreError>;
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("{0}")]
    ConfigurationError(String),

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("AI credits exhausted. Please contact support.")]
    QuotaExhausted,

    #[error("AI gateway error: {status}")]
    Upstream { status: u16 },

    #[error("LLM API error: {0}")]
    ExternalServiceError(String),

    #[error("No content received from AI")]
    EmptyResponse,

    #[error("Failed to parse recipe data")]
    MalformedRecipe,

    #[error("Cookbook storage error: {0}")]
    StorageError(String),

    #[error("Failed to export recipe: {0}")]
    ExportError(String),

    #[error("Internal server error")]
    InternalServerError,
}

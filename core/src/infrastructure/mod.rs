pub mod cookbook;
pub mod export;
pub mod llm;

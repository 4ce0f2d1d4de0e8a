pub mod common;
pub mod cookbook;
pub mod export;
pub mod recipe;

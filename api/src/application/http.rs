pub mod cookbook;
pub mod health;
pub mod recipe;
pub mod server;

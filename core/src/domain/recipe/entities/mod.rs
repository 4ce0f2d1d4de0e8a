pub mod chat_completion;
pub mod recipe;

pub use chat_completion::*;
pub use recipe::*;

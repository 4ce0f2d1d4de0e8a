pub mod export_recipe;
pub mod generate_recipe;

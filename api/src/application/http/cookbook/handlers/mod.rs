pub mod delete_recipe;
pub mod get_recipe_pdf;
pub mod list_recipes;
pub mod save_recipe;

//! レシピAPIクライアント

mod recipes;

pub use recipes::{fetch_recipe_by_id, fetch_recipes, search_recipes};

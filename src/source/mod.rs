mod meal_db;

pub use meal_db::{MealDbClient, MealDbClientBuilder};

use async_trait::async_trait;

use crate::model::Recipe;

/// Anything that can answer a recipe search.
///
/// `search` never fails: transport and parse errors resolve to an empty list.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &str) -> Vec<Recipe>;
}

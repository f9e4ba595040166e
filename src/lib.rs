//! # recipe-finder
//!
//! Search TheMealDB for recipes, mark favorites, expand details and filter to
//! vegetarian dishes from the terminal.
//!
//! ```text
//! input → Command → Controller → reduce(ViewState, Action) → View → render
//!                       ↑                          │
//!                       └── Completion ← RecipeSource (tokio task)
//! ```
//!
//! The library half is usable on its own: [`MealDbClient`] performs searches,
//! [`state::reduce`] is the pure update function, and [`View`] derives what
//! to display.

pub mod command;
pub mod config;
pub mod controller;
pub mod derive;
pub mod error;
pub mod model;
pub mod render;
pub mod source;
pub mod state;

pub use command::Command;
pub use config::FinderConfig;
pub use controller::{Completion, Controller, Reply};
pub use derive::{Card, Status, View};
pub use error::FinderError;
pub use model::Recipe;
pub use source::{MealDbClient, MealDbClientBuilder, RecipeSource};
pub use state::{reduce, Action, FetchRequest, RequestId, ViewState};

/// Search TheMealDB with default settings
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_finder::search_recipes("chicken").await?;
/// for recipe in recipes {
///     println!("{} ({})", recipe.name, recipe.category);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, FinderError> {
    MealDbClient::builder().build()?.try_search(query).await
}

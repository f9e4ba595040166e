use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch recipes: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe API returned status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape
    #[error("Failed to parse recipes: {0}")]
    Parse(#[from] serde_json::Error),

    /// Search query was empty after trimming
    #[error("Search query cannot be empty")]
    InvalidQuery,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

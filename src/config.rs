use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::FinderError;

/// Recipe finder configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of the TheMealDB API (without trailing `/search.php`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query issued automatically on start
    #[serde(default = "default_query")]
    pub default_query: String,
    /// Category label that counts as vegetarian
    #[serde(default = "default_vegetarian_category")]
    pub vegetarian_category: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_query: default_query(),
            vegetarian_category: default_vegetarian_category(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_query() -> String {
    "chicken".to_string()
}

fn default_vegetarian_category() -> String {
    "Vegetarian".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("recipe-finder/", env!("CARGO_PKG_VERSION")).to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__DEFAULT_QUERY
    pub fn load() -> Result<Self, FinderError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_FINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

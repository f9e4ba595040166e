use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::model::{Recipe, SearchResponse};
use crate::source::RecipeSource;
use crate::FinderError;

/// HTTP client for the TheMealDB `search.php` endpoint
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        Self::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()
    }

    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    /// Search without swallowing errors
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - The query is blank
    /// - The request fails or the API answers with a non-success status
    /// - The body is not a `{"meals": ...}` object
    pub async fn try_search(&self, query: &str) -> Result<Vec<Recipe>, FinderError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FinderError::InvalidQuery);
        }

        let response = self
            .client
            .get(format!("{}/search.php", self.base_url))
            .query(&[("s", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let recipes = serde_json::from_str::<SearchResponse>(&body)?.into_recipes();
        debug!("Search for {:?} returned {} recipes", query, recipes.len());
        Ok(recipes)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search(&self, query: &str) -> Vec<Recipe> {
        match self.try_search(query).await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("Recipe search for {:?} failed: {}", query, e);
                Vec::new()
            }
        }
    }
}

/// Builder for [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbClientBuilder {
    /// Point the client at a different API root, e.g. a mock server
    ///
    /// # Example
    /// ```
    /// use recipe_finder::MealDbClient;
    ///
    /// let client = MealDbClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<MealDbClient, FinderError> {
        let defaults = FinderConfig::default();
        let client = Client::builder()
            .timeout(self.timeout.unwrap_or_else(|| defaults.timeout()))
            .user_agent(self.user_agent.unwrap_or(defaults.user_agent))
            .build()?;

        let base_url = self.base_url.unwrap_or(defaults.base_url);

        Ok(MealDbClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = MealDbClient::builder()
            .base_url("http://localhost:1234/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://localhost:1234/api");
    }

    #[test]
    fn test_builder_defaults_to_meal_db() {
        let client = MealDbClient::builder().build().unwrap();
        assert_eq!(client.base_url, "https://www.themealdb.com/api/json/v1/1");
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_without_request() {
        let client = MealDbClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let result = client.try_search("   ").await;
        assert!(matches!(result, Err(FinderError::InvalidQuery)));
    }
}

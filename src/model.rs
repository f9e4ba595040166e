use serde::{Deserialize, Deserializer, Serialize};

/// A recipe as returned by the TheMealDB search endpoint.
///
/// Two recipes are the same recipe when their `id` matches; the other fields
/// are never consulted for identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
    #[serde(rename = "strCategory", default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(rename = "strInstructions", default, deserialize_with = "null_as_empty")]
    pub instructions: String,
}

impl Recipe {
    pub fn same_recipe(&self, other: &Recipe) -> bool {
        self.id == other.id
    }
}

/// Body of a `search.php` response. `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<Recipe>>,
}

impl SearchResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.meals.unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meal_fields() {
        let body = r#"{
            "meals": [{
                "idMeal": "52795",
                "strMeal": "Chicken Handi",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/wyxwsp1486979827.jpg",
                "strCategory": "Chicken",
                "strInstructions": "Take a large pot or wok.",
                "strArea": "Indian"
            }]
        }"#;

        let recipes = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_recipes();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "52795");
        assert_eq!(recipes[0].name, "Chicken Handi");
        assert_eq!(recipes[0].category, "Chicken");
        assert!(recipes[0].thumbnail.ends_with(".jpg"));
    }

    #[test]
    fn test_null_meals_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.into_recipes().is_empty());
    }

    #[test]
    fn test_missing_meals_key_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_recipes().is_empty());
    }

    #[test]
    fn test_null_category_becomes_empty() {
        let body = r#"{"idMeal": "1", "strMeal": "Soup", "strCategory": null}"#;
        let recipe: Recipe = serde_json::from_str(body).unwrap();
        assert_eq!(recipe.category, "");
        assert_eq!(recipe.instructions, "");
    }

    #[test]
    fn test_same_recipe_compares_id_only() {
        let a = Recipe {
            id: "7".to_string(),
            name: "Old name".to_string(),
            ..Default::default()
        };
        let b = Recipe {
            id: "7".to_string(),
            name: "New name".to_string(),
            ..Default::default()
        };
        assert!(a.same_recipe(&b));
    }
}

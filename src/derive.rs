use crate::model::Recipe;
use crate::state::ViewState;

/// What the result area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    /// The last search produced no recipes at all
    Empty,
    Results,
}

impl Status {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Status::Loading => Some("Loading tasty recipes..."),
            Status::Empty => Some("No recipes found. Try searching for something else!"),
            Status::Results => None,
        }
    }
}

/// One displayed recipe with its per-card flags
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub recipe: &'a Recipe,
    pub is_favorite: bool,
    pub is_expanded: bool,
}

/// Derives displayable data from a [`ViewState`]
#[derive(Debug, Clone)]
pub struct View<'a> {
    state: &'a ViewState,
    vegetarian_category: &'a str,
}

impl<'a> View<'a> {
    pub fn new(state: &'a ViewState, vegetarian_category: &'a str) -> Self {
        View {
            state,
            vegetarian_category,
        }
    }

    pub fn status(&self) -> Status {
        if self.state.is_loading {
            Status::Loading
        } else if self.state.recipes.is_empty() {
            Status::Empty
        } else {
            Status::Results
        }
    }

    /// Recipes after the vegetarian filter, in fetch order
    pub fn displayed(&self) -> impl Iterator<Item = &'a Recipe> + 'a {
        let state = self.state;
        let veg_only = state.veg_only;
        let category = self.vegetarian_category;
        state
            .recipes
            .iter()
            .filter(move |recipe| !veg_only || recipe.category == category)
    }

    pub fn cards(&self) -> Vec<Card<'a>> {
        let state = self.state;
        self.displayed()
            .map(|recipe| Card {
                recipe,
                is_favorite: state.is_favorite(&recipe.id),
                is_expanded: state.is_expanded(&recipe.id),
            })
            .collect()
    }

    pub fn favorite_count(&self) -> usize {
        self.state.favorites.len()
    }

    /// Resolve a card reference typed by the user: a 1-based position in the
    /// displayed list, or a recipe id among the displayed recipes.
    pub fn resolve(&self, reference: &str) -> Option<&'a Recipe> {
        let reference = reference.trim();
        if let Some(recipe) = self.displayed().find(|recipe| recipe.id == reference) {
            return Some(recipe);
        }
        match reference.parse::<usize>() {
            Ok(position) if position > 0 => self.displayed().nth(position - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, Action};

    fn recipe(id: &str, category: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {}", id),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn state_with(recipes: Vec<Recipe>) -> ViewState {
        let started = reduce(ViewState::new(), Action::Search("any".to_string()));
        let request = started.fetch.unwrap().id;
        reduce(started.state, Action::Completed { request, recipes }).state
    }

    fn ids(view: &View<'_>) -> Vec<String> {
        view.displayed().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_unfiltered_displays_recipes_in_order() {
        let state = state_with(vec![
            recipe("3", "Beef"),
            recipe("1", "Vegetarian"),
            recipe("2", ""),
        ]);
        let view = View::new(&state, "Vegetarian");
        assert_eq!(ids(&view), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_veg_only_keeps_vegetarian_subset_in_order() {
        let state = state_with(vec![
            recipe("1", "Vegetarian"),
            recipe("2", "Beef"),
            recipe("3", "Vegetarian"),
            recipe("4", "vegetarian"),
        ]);
        let state = reduce(state, Action::SetVegOnly(true)).state;
        let view = View::new(&state, "Vegetarian");

        assert_eq!(ids(&view), vec!["1", "3"]);
        assert!(view.displayed().all(|r| r.category == "Vegetarian"));
    }

    #[test]
    fn test_status_follows_loading_and_results() {
        let loading = reduce(ViewState::new(), Action::Search("chicken".to_string())).state;
        assert_eq!(View::new(&loading, "Vegetarian").status(), Status::Loading);

        let empty = state_with(Vec::new());
        let view = View::new(&empty, "Vegetarian");
        assert_eq!(view.status(), Status::Empty);
        assert!(view.status().message().unwrap().starts_with("No recipes found"));

        let full = state_with(vec![recipe("1", "Beef")]);
        assert_eq!(View::new(&full, "Vegetarian").status(), Status::Results);
    }

    #[test]
    fn test_filter_hiding_everything_is_not_empty_status() {
        let state = state_with(vec![recipe("1", "Beef")]);
        let state = reduce(state, Action::SetVegOnly(true)).state;
        let view = View::new(&state, "Vegetarian");

        assert_eq!(view.status(), Status::Results);
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_cards_flags_follow_state() {
        let state = state_with(vec![recipe("1", "Beef"), recipe("2", "Beef")]);
        let state = reduce(state, Action::ToggleFavorite(recipe("2", "Beef"))).state;
        let state = reduce(state, Action::ToggleExpanded("1".to_string())).state;

        let view = View::new(&state, "Vegetarian");
        let cards = view.cards();
        assert!(!cards[0].is_favorite && cards[0].is_expanded);
        assert!(cards[1].is_favorite && !cards[1].is_expanded);
        assert_eq!(view.favorite_count(), 1);
    }

    #[test]
    fn test_resolve_by_position_or_id() {
        let state = state_with(vec![recipe("52795", "Chicken"), recipe("52796", "Chicken")]);
        let view = View::new(&state, "Vegetarian");

        assert_eq!(view.resolve("2").unwrap().id, "52796");
        assert_eq!(view.resolve("52795").unwrap().id, "52795");
        assert!(view.resolve("0").is_none());
        assert!(view.resolve("3").is_none());
        assert!(view.resolve("soup").is_none());
    }
}

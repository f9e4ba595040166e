//! View state and the pure update function driving it.
//!
//! Every user event and every finished fetch is an [`Action`]. [`reduce`]
//! takes the current [`ViewState`] by value and returns the next one, plus a
//! [`FetchRequest`] when the action needs the network. Nothing here performs
//! I/O; the controller runs the fetch and feeds the result back as
//! [`Action::Completed`].
//!
//! Fetches are tagged with a [`RequestId`]. Only the completion of the most
//! recently issued request is applied, so a slow response can never overwrite
//! the results of a newer search.

use log::debug;
use std::fmt;

use crate::model::Recipe;

/// Monotonically increasing tag of an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    fn next(previous: Option<RequestId>) -> RequestId {
        RequestId(previous.map_or(1, |id| id.0 + 1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A search the controller must run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub query: String,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the search term; does not search
    SetSearchTerm(String),
    /// Search for the current search term
    SubmitSearch,
    /// Search for an explicit query, leaving the search term alone
    Search(String),
    /// A fetch finished (empty on failure)
    Completed {
        request: RequestId,
        recipes: Vec<Recipe>,
    },
    ToggleFavorite(Recipe),
    ToggleExpanded(String),
    SetVegOnly(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub recipes: Vec<Recipe>,
    /// Insertion ordered, unique by recipe id
    pub favorites: Vec<Recipe>,
    pub expanded_id: Option<String>,
    pub is_loading: bool,
    pub veg_only: bool,
    latest_request: Option<RequestId>,
}

/// Result of applying one action
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: ViewState,
    pub fetch: Option<FetchRequest>,
}

impl Transition {
    fn settled(state: ViewState) -> Self {
        Transition { state, fetch: None }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|fav| fav.id == id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }

    /// The request whose completion will be accepted, if any was issued
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    fn begin_fetch(mut self, query: &str) -> Transition {
        let query = query.trim();
        if query.is_empty() {
            return Transition::settled(self);
        }

        let id = RequestId::next(self.latest_request);
        self.latest_request = Some(id);
        self.is_loading = true;

        Transition {
            state: self,
            fetch: Some(FetchRequest {
                id,
                query: query.to_string(),
            }),
        }
    }

    fn complete(mut self, request: RequestId, recipes: Vec<Recipe>) -> ViewState {
        if self.latest_request != Some(request) {
            debug!(
                "Discarding stale results of request {} ({} recipes)",
                request,
                recipes.len()
            );
            return self;
        }

        self.recipes = recipes;
        self.is_loading = false;
        self
    }

    fn toggle_favorite(mut self, recipe: Recipe) -> ViewState {
        if self.is_favorite(&recipe.id) {
            self.favorites.retain(|fav| !fav.same_recipe(&recipe));
        } else {
            self.favorites.push(recipe);
        }
        self
    }

    fn toggle_expanded(mut self, id: String) -> ViewState {
        self.expanded_id = if self.is_expanded(&id) { None } else { Some(id) };
        self
    }
}

/// Apply `action` to `state`
pub fn reduce(state: ViewState, action: Action) -> Transition {
    match action {
        Action::SetSearchTerm(text) => Transition::settled(ViewState {
            search_term: text,
            ..state
        }),
        Action::SubmitSearch => {
            let term = state.search_term.clone();
            state.begin_fetch(&term)
        }
        Action::Search(query) => state.begin_fetch(&query),
        Action::Completed { request, recipes } => {
            Transition::settled(state.complete(request, recipes))
        }
        Action::ToggleFavorite(recipe) => Transition::settled(state.toggle_favorite(recipe)),
        Action::ToggleExpanded(id) => Transition::settled(state.toggle_expanded(id)),
        Action::SetVegOnly(flag) => Transition::settled(ViewState {
            veg_only: flag,
            ..state
        }),
    }
}

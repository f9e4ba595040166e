use log::{debug, info};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::command::Command;
use crate::config::FinderConfig;
use crate::derive::View;
use crate::model::Recipe;
use crate::source::RecipeSource;
use crate::state::{reduce, Action, FetchRequest, RequestId, ViewState};

/// A fetch that finished, waiting to be applied
#[derive(Debug)]
pub struct Completion {
    pub request: RequestId,
    pub recipes: Vec<Recipe>,
}

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Redraw,
    ShowFavorites,
    ShowHelp,
    Quit,
    /// A card reference matched nothing on screen
    Unresolved(String),
}

/// Owns the view state and runs the fetches it asks for.
///
/// Fetches run on spawned tokio tasks; their results come back through
/// [`Controller::next_completion`] and are applied with
/// [`Controller::apply_completion`]. State is only ever touched from the task
/// holding the controller.
pub struct Controller {
    source: Arc<dyn RecipeSource>,
    config: FinderConfig,
    state: ViewState,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl Controller {
    pub fn new(source: Arc<dyn RecipeSource>, config: FinderConfig) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Controller {
            source,
            config,
            state: ViewState::new(),
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> View<'_> {
        View::new(&self.state, &self.config.vegetarian_category)
    }

    /// Issue the default search so the first screen is not empty
    pub fn start(&mut self) {
        let query = self.config.default_query.clone();
        info!("Loading default search {:?}", query);
        self.dispatch(Action::Search(query));
    }

    pub fn dispatch(&mut self, action: Action) {
        let transition = reduce(std::mem::take(&mut self.state), action);
        self.state = transition.state;
        if let Some(fetch) = transition.fetch {
            self.spawn_fetch(fetch);
        }
    }

    fn spawn_fetch(&self, fetch: FetchRequest) {
        debug!("Starting request {} for {:?}", fetch.id, fetch.query);
        let source = Arc::clone(&self.source);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let recipes = source.search(&fetch.query).await;
            // The receiver lives as long as the controller
            let _ = tx.send(Completion {
                request: fetch.id,
                recipes,
            });
        });
    }

    /// Wait for the next finished fetch, in completion order
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    pub fn apply_completion(&mut self, completion: Completion) {
        self.dispatch(Action::Completed {
            request: completion.request,
            recipes: completion.recipes,
        });
    }

    /// Apply completions until no accepted fetch is outstanding
    pub async fn settle(&mut self) {
        while self.state.is_loading {
            match self.next_completion().await {
                Some(completion) => self.apply_completion(completion),
                None => break,
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Search(text) => {
                self.dispatch(Action::SetSearchTerm(text));
                self.dispatch(Action::SubmitSearch);
                Reply::Redraw
            }
            Command::Term(text) => {
                self.dispatch(Action::SetSearchTerm(text));
                Reply::Redraw
            }
            Command::Submit => {
                self.dispatch(Action::SubmitSearch);
                Reply::Redraw
            }
            Command::Favorite(reference) => {
                let recipe = self.view().resolve(&reference).cloned();
                match recipe {
                    Some(recipe) => {
                        self.dispatch(Action::ToggleFavorite(recipe));
                        Reply::Redraw
                    }
                    None => Reply::Unresolved(reference),
                }
            }
            Command::Details(reference) => {
                let id = self.view().resolve(&reference).map(|r| r.id.clone());
                match id {
                    Some(id) => {
                        self.dispatch(Action::ToggleExpanded(id));
                        Reply::Redraw
                    }
                    None => Reply::Unresolved(reference),
                }
            }
            Command::Vegetarian(flag) => {
                self.dispatch(Action::SetVegOnly(flag));
                Reply::Redraw
            }
            Command::Favorites => Reply::ShowFavorites,
            Command::Help => Reply::ShowHelp,
            Command::Quit => Reply::Quit,
        }
    }
}

use std::fmt::Write;

use crate::derive::{Card, View};
use crate::model::Recipe;

const RULE: &str = "------------------------------------------------------------";

/// Render the whole screen: header, filter line, then status or cards
pub fn render(view: &View<'_>, search_term: &str, veg_only: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recipe Finder    Favorites: {}", view.favorite_count());
    let _ = writeln!(
        out,
        "Search: {:?}    Vegetarian only: {}",
        search_term,
        if veg_only { "on" } else { "off" }
    );
    out.push_str(RULE);
    out.push('\n');

    if let Some(message) = view.status().message() {
        let _ = writeln!(out, "{}", message);
        return out;
    }

    for (position, card) in view.cards().iter().enumerate() {
        render_card(&mut out, position + 1, card);
    }
    out
}

fn render_card(out: &mut String, position: usize, card: &Card<'_>) {
    let recipe = card.recipe;
    let _ = writeln!(out, "[{}] {}  (id {})", position, recipe.name, recipe.id);
    let _ = writeln!(out, "    {}", recipe.thumbnail);
    let _ = writeln!(
        out,
        "    [{}]  [{}]",
        if card.is_favorite { "Unfavorite" } else { "Favorite" },
        if card.is_expanded {
            "Hide Details"
        } else {
            "Show Details"
        }
    );

    if card.is_expanded {
        let _ = writeln!(out, "    Category: {}", recipe.category);
        let _ = writeln!(out, "    Instructions:");
        for line in recipe.instructions.lines().filter(|l| !l.trim().is_empty()) {
            let _ = writeln!(out, "      {}", line.trim());
        }
    }
    out.push('\n');
}

pub fn render_favorites(favorites: &[Recipe]) -> String {
    if favorites.is_empty() {
        return "No favorites yet.\n".to_string();
    }
    let mut out = String::new();
    for recipe in favorites {
        let _ = writeln!(out, "* {}  (id {})", recipe.name, recipe.id);
    }
    out
}

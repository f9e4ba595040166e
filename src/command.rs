/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the search term and submit it
    Search(String),
    /// Set the search term only
    Term(String),
    Submit,
    /// Toggle favorite on a card, by position or recipe id
    Favorite(String),
    /// Toggle details on a card, by position or recipe id
    Details(String),
    Vegetarian(bool),
    Favorites,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  search <text>   search recipes by name or ingredient
  term <text>     set the search term without searching
  submit          search for the current term
  fav <n|id>      toggle favorite on a card
  details <n|id>  show or hide a card's details
  veg on|off      only show vegetarian recipes
  favorites       list favorite recipes
  help            show this help
  quit            exit";

impl Command {
    /// Parse one input line. Returns `None` for blank or unrecognized input.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word.to_lowercase().as_str(), rest) {
            ("search" | "s", text) => Command::Search(text.to_string()),
            ("term" | "t", text) => Command::Term(text.to_string()),
            ("submit", "") => Command::Submit,
            ("fav" | "f", reference) if !reference.is_empty() => {
                Command::Favorite(reference.to_string())
            }
            ("details" | "d", reference) if !reference.is_empty() => {
                Command::Details(reference.to_string())
            }
            ("veg" | "v", flag) => Command::Vegetarian(parse_flag(flag)?),
            ("favorites" | "favs", "") => Command::Favorites,
            ("help" | "?", "") => Command::Help,
            ("quit" | "exit" | "q", "") => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

fn parse_flag(flag: &str) -> Option<bool> {
    match flag.to_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Some(true),
        "off" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

use log::debug;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_finder::command::HELP;
use recipe_finder::render::{render, render_favorites};
use recipe_finder::{Command, Controller, FinderConfig, MealDbClient, Reply};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = FinderConfig::load()?;
    debug!("{:#?}", config);

    let client = MealDbClient::new(&config)?;
    let mut controller = Controller::new(Arc::new(client), config);
    controller.start();
    redraw(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    prompt();
                    continue;
                }
                let Some(command) = Command::parse(&line) else {
                    println!("{}", HELP);
                    prompt();
                    continue;
                };
                match controller.execute(command) {
                    Reply::Redraw => redraw(&controller),
                    Reply::ShowFavorites => {
                        print!("{}", render_favorites(&controller.state().favorites));
                        prompt();
                    }
                    Reply::ShowHelp => {
                        println!("{}", HELP);
                        prompt();
                    }
                    Reply::Unresolved(reference) => {
                        debug!("Unresolved card reference {:?}", reference);
                        println!("No recipe on screen matches {:?}", reference);
                        prompt();
                    }
                    Reply::Quit => break,
                }
            }
            Some(completion) = controller.next_completion() => {
                controller.apply_completion(completion);
                redraw(&controller);
            }
        }
    }

    Ok(())
}

fn redraw(controller: &Controller) {
    let state = controller.state();
    print!(
        "\n{}",
        render(&controller.view(), &state.search_term, state.veg_only)
    );
    prompt();
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

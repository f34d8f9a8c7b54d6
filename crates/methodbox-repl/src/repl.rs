//! The interactive read loop

use anyhow::Result;
use methodbox::{Catalog, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands::{self, Command};
use crate::render;

const PROMPT: &str = "methodbox> ";

/// Run the interactive loop until the user quits.
pub fn run(catalog: &Catalog, session: &mut Session) -> Result<()> {
    render::banner(catalog);

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match commands::parse(line) {
                    Ok(command) => {
                        if !dispatch(command, catalog, session) {
                            break;
                        }
                    }
                    Err(message) => println!("{message}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Handle one command. Returns `false` when the loop should end.
fn dispatch(command: Command, catalog: &Catalog, session: &mut Session) -> bool {
    debug!(?command, "dispatch");
    match command {
        Command::List => render::zones(catalog),
        Command::Select(id) => {
            if session.select(catalog, &id) {
                render::detail(catalog, session);
            } else {
                println!("No method with id `{id}`. Try `list` to see what is available.");
            }
        }
        Command::Current => render::detail(catalog, session),
        Command::Clear => {
            session.clear();
            println!("Selection cleared.");
        }
        Command::Recommend(criteria) => render::recommendations(catalog, &criteria),
        Command::Help => commands::print_help(),
        Command::Quit => {
            println!("Bye.");
            return false;
        }
    }
    true
}

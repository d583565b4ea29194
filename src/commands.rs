//! REPL Commands
//!
//! Input parsing and dispatch for the interactive prompt. Each command
//! is thin glue over the API client and the caught-creature registry;
//! all caching happens below the client's request methods.

use rand::Rng;

use crate::api::ApiClient;
use crate::dex::Dex;
use crate::error::{PokedexError, Result};

/// What the main loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Prompt for the next command
    Continue,
    /// Leave the REPL
    Exit,
}

/// One entry in the command table, for `help` output.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command the prompt understands.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Prints a help message",
    },
    CommandSpec {
        name: "exit",
        description: "Exits the program",
    },
    CommandSpec {
        name: "map",
        description: "Get the next page of locations",
    },
    CommandSpec {
        name: "mapb",
        description: "Get the previous page of locations",
    },
    CommandSpec {
        name: "explore",
        description: "List the creatures in a location",
    },
    CommandSpec {
        name: "catch",
        description: "Attempt to catch a creature",
    },
    CommandSpec {
        name: "inspect",
        description: "Inspect a creature in your pokedex",
    },
    CommandSpec {
        name: "pokedex",
        description: "List the creatures in your pokedex",
    },
];

// == Input Parsing ==
/// Splits an input line into a command word and an optional argument.
///
/// Returns `None` for a blank line (the loop just re-prompts). More
/// than one argument is an error.
pub fn parse_input(line: &str) -> Result<Option<(&str, Option<&str>)>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let extra = words.count();
    if extra > 0 {
        return Err(PokedexError::TooManyArguments(1 + extra));
    }

    Ok(Some((command, arg)))
}

// == Dispatch ==
/// Executes one parsed command, printing its output to stdout.
pub async fn execute(
    command: &str,
    arg: Option<&str>,
    client: &ApiClient,
    dex: &Dex,
) -> Result<Outcome> {
    match command {
        "help" => {
            println!("Welcome to pokedex!");
            println!();
            println!("Usage:");
            println!();
            for spec in COMMANDS {
                println!("{}: {}", spec.name, spec.description);
            }
            Ok(Outcome::Continue)
        }
        "exit" => {
            println!("Now exiting pokedex...");
            Ok(Outcome::Exit)
        }
        "map" => list_locations(client, false).await,
        "mapb" => list_locations(client, true).await,
        "explore" => {
            let area = require_arg(arg, "explore", "the name of a location to explore")?;
            let encounters = client.location_encounters(area).await?;
            for encounter in &encounters.pokemon_encounters {
                println!("{}", encounter.pokemon.name);
            }
            Ok(Outcome::Continue)
        }
        "catch" => {
            let name = require_arg(arg, "catch", "the name of the creature you want to catch")?;
            println!("Throwing a Pokeball at {}...", name);

            let details = client.pokemon(name).await?;
            if catch_roll(details.base_experience) {
                dex.add(name, details);
                println!("You caught {}!", name);
                println!("You may now inspect it with the `inspect` command");
            } else {
                println!("You didn't catch {}!", name);
            }
            Ok(Outcome::Continue)
        }
        "inspect" => {
            let name = require_arg(arg, "inspect", "the name of the creature to inspect")?;
            let details = dex
                .get(name)
                .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
            print!("{}", details.inspection());
            Ok(Outcome::Continue)
        }
        "pokedex" => {
            println!("Your Pokedex:");
            for name in dex.names() {
                println!("  - {}", name);
            }
            Ok(Outcome::Continue)
        }
        other => Err(PokedexError::UnknownCommand(other.to_string())),
    }
}

async fn list_locations(client: &ApiClient, back: bool) -> Result<Outcome> {
    let page = client.locations(back).await?;
    for area in &page.results {
        println!("{}", area.name);
    }
    Ok(Outcome::Continue)
}

fn require_arg<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str> {
    arg.ok_or(PokedexError::MissingArgument { command, expected })
}

// == Catch Roll ==
/// Decides a catch attempt: roll uniformly in `0..base_experience` and
/// succeed when the roll reaches half the creature's base experience.
/// Stronger creatures are harder to catch. A zero-experience creature
/// is always caught (and avoids an empty roll range).
fn catch_roll(base_experience: u32) -> bool {
    if base_experience == 0 {
        return true;
    }
    let threshold = base_experience / 2;
    let roll = rand::thread_rng().gen_range(0..base_experience);
    roll >= threshold
}

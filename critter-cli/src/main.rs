//! Critter CLI - construct a named animal and invoke its capabilities.

use anyhow::Result;
use clap::{Parser, Subcommand};
use critter_core::{Dog, Species, Speaks, Walkable};
use tracing_subscriber::EnvFilter;

/// Critter - construct a named animal and make it walk or speak.
///
/// Builds the requested animal variant and invokes one of its behavioral
/// capabilities. Capability output goes to stdout; diagnostics go to
/// stderr.
#[derive(Parser, Debug)]
#[command(name = "critter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name for the constructed animal.
    ///
    /// Any value is accepted, including an empty string. The name does
    /// not change what the capabilities emit.
    #[arg(short = 'n', long = "name", default_value = "Rex", env = "CRITTER_NAME")]
    pub name: String,

    /// Which animal variant to construct.
    #[arg(short = 's', long = "species", default_value = "dog")]
    pub species: String,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The capability to invoke.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Emit the locomotion description.
    Walk,
    /// Emit the sound description.
    Speak,
    /// Speak, then walk.
    Greet,
}

/// Dispatch a command against any animal satisfying both capabilities.
fn dispatch<T: Walkable + Speaks>(animal: &T, command: Command) {
    match command {
        Command::Walk => animal.walk(),
        Command::Speak => animal.speak(),
        Command::Greet => {
            animal.speak();
            animal.walk();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let species: Species = cli.species.parse()?;
    tracing::debug!(%species, name = %cli.name, "constructing animal");

    match species {
        Species::Dog => {
            let dog = Dog::new(cli.name.clone());
            tracing::debug!(command = ?cli.command, "dispatching");
            dispatch(&dog, cli.command);
        }
    }

    Ok(())
}

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::Direction;

/// Fahrenheit/Celsius temperature conversion: web form and command line
#[derive(Parser, Debug)]
#[command(name = "tempconv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (overrides the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a single temperature
    Convert {
        /// Temperature to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target scale
        #[arg(short, long, value_enum)]
        to: Target,
    },

    /// Serve the conversion form over HTTP
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Scale to convert into.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Read the value as Celsius, print Fahrenheit
    #[value(alias = "f")]
    Fahrenheit,
    /// Read the value as Fahrenheit, print Celsius
    #[value(alias = "c")]
    Celsius,
}

impl From<Target> for Direction {
    fn from(target: Target) -> Self {
        match target {
            Target::Fahrenheit => Direction::ToFahrenheit,
            Target::Celsius => Direction::ToCelsius,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}

//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Data file inside the data directory
    pub filename: String,

    /// The departure point of the train
    #[arg(long = "departure_point", visible_alias = "dep")]
    pub departure_point: String,

    /// The train number
    #[arg(short, long = "number_train")]
    pub number_train: String,

    /// The departure time of the train (HH:MM)
    #[arg(short, long = "time_departure")]
    pub time_departure: String,

    /// The destination of the train
    #[arg(long = "destination", visible_alias = "des")]
    pub destination: String,
}

/// Select command arguments.
#[derive(Debug, Args)]
pub struct SelectCommand {
    /// Data file inside the data directory
    pub filename: String,

    /// Destination to select trains for
    #[arg(short, long = "point_user")]
    pub point_user: String,
}

/// Display command arguments.
#[derive(Debug, Args)]
pub struct DisplayCommand {
    /// Data file inside the data directory
    pub filename: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Check a configuration file without running a command
    Validate {
        /// Path to config file (defaults to standard location)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

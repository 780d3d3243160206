use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Overlook configuration front-end CLI
#[derive(Parser)]
#[command(name = "overlook")]
#[command(version, about = "Overlook dashboard configuration tooling", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the configuration, then report the effective
    /// poll schedule and screen layout
    Check {
        /// Hosts to poll, replacing the `servers` statements in the file
        #[arg(value_name = "HOST")]
        hosts: Vec<String>,

        /// Path to the configuration file (default: ~/.overlook.conf)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Development tools for debugging and testing
    Dev {
        #[command(subcommand)]
        command: DevCommands,
    },
}

#[derive(Subcommand)]
pub enum DevCommands {
    /// Print the parsed configuration tree
    PrintConfig {
        /// Hosts to poll, replacing the `servers` statements in the file
        #[arg(value_name = "HOST")]
        hosts: Vec<String>,

        /// Path to the configuration file (default: ~/.overlook.conf)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
}

//! Command-line front-end for the overlook dashboard configuration.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anstream::{eprintln, println};
use clap::Parser as _;
use overlook_config::Config;

use crate::{
    command::{CliCommand, Commands, DevCommands},
    stylesheet::Stylesheet,
};

mod command;
mod print_config;
mod print_error;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    match cli.command {
        Commands::Check {
            hosts,
            config,
            no_colors,
        } => {
            let styles = Stylesheet::new(!no_colors);
            let path = config.unwrap_or_else(default_config_path);

            let Some(config) = load_or_report(&path, &hosts, &styles) else {
                return ExitCode::FAILURE;
            };

            if config.servers().is_empty() {
                eprintln!(
                    "{}: no hosts to poll; declare a `servers` statement in {} or pass hosts \
                     on the command line",
                    styles.error.style("error"),
                    path.display()
                );
                return ExitCode::FAILURE;
            }

            print_config::print_report(&config, &styles);
            ExitCode::SUCCESS
        }

        Commands::Dev { command } => match command {
            DevCommands::PrintConfig {
                hosts,
                config,
                print_debug,
                no_colors,
            } => {
                let styles = Stylesheet::new(!no_colors);
                let path = config.unwrap_or_else(default_config_path);

                let Some(config) = load_or_report(&path, &hosts, &styles) else {
                    return ExitCode::FAILURE;
                };

                if print_debug {
                    println!("{config:#?}");
                } else {
                    print_config::print_report(&config, &styles);
                }
                ExitCode::SUCCESS
            }
        },
    }
}

/// Loads the configuration, printing a diagnostic on failure
fn load_or_report(path: &Path, hosts: &[String], styles: &Stylesheet) -> Option<Config> {
    match overlook_config_loader::load_config(path, hosts) {
        Ok(config) => Some(config),
        Err(error) => {
            print_error::print(&error.to_report(), styles);
            None
        }
    }
}

/// `~/.overlook.conf`, or `.overlook.conf` when no home directory is
/// known
fn default_config_path() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from(".overlook.conf"),
        |home| home.join(".overlook.conf"),
    )
}

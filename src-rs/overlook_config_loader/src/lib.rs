//! Configuration loading for the overlook dashboard.
//!
//! This crate owns the entry contract of the configuration front-end:
//! it reads the configuration file, runs the parser, and applies the
//! command-line override rule. Two independent construction paths are
//! unified behind one entry point:
//!
//! - **File path**: the file is read and parsed. Hosts given on the
//!   command line then replace the file's server list, while the layout
//!   and global waittime from the file are kept.
//! - **Fallback path**: when the file does not exist, the configuration
//!   is built directly from the command-line hosts. This is not an
//!   error condition; any other read failure is.
//!
//! The whole load is synchronous and runs to completion (or first
//! failure) before any other component observes the configuration.

use std::{fs, io, path::Path};

use overlook_config::{Config, ServerEntry};

pub mod error;
pub use error::LoadError;

/// Loads the configuration from `path`, with `hosts` from the command
/// line
///
/// Behavior matrix:
///
/// | file             | hosts | result                                    |
/// |------------------|-------|-------------------------------------------|
/// | missing          | any   | built from `hosts` (may have no servers)  |
/// | parses           | none  | the parsed configuration as-is            |
/// | parses           | some  | file layout and waittime, `hosts` servers |
/// | parse fails      | any   | [`LoadError::Parse`]                      |
/// | unreadable       | any   | [`LoadError::Io`]                         |
///
/// A configuration with no servers is returned as-is; rejecting it is
/// the caller's responsibility.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if its
/// content is rejected by the parser.
pub fn load_config(path: impl AsRef<Path>, hosts: &[String]) -> Result<Config, LoadError> {
    let path = path.as_ref();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(config_from_hosts(hosts));
        }
        Err(error) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source: error,
            });
        }
    };

    match overlook_parser::parse_config(&source) {
        Ok(mut config) => {
            if !hosts.is_empty() {
                // Command-line hosts always win over file-declared
                // hosts; the layout and global waittime are kept.
                config.replace_servers(host_entries(hosts));
            }
            Ok(config)
        }
        Err(error) => Err(LoadError::Parse {
            path: path.to_path_buf(),
            source_text: source,
            error,
        }),
    }
}

/// Builds a configuration directly from command-line hosts
///
/// One entry per host, in order, with no cadence overrides and no
/// layout; the global waittime keeps its default.
#[must_use]
pub fn config_from_hosts(hosts: &[String]) -> Config {
    let mut config = Config::new();
    for entry in host_entries(hosts) {
        config.add_server(entry);
    }
    config
}

fn host_entries(hosts: &[String]) -> Vec<ServerEntry> {
    hosts.iter().cloned().map(ServerEntry::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlook_config::config::DEFAULT_WAITTIME;
    use overlook_parser::error::reason::ParserErrorReason;

    fn hosts(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn missing_file_falls_back_to_command_line_hosts() {
        let dir = tempfile::tempdir().expect("should create a temp dir");
        let path = dir.path().join("no-such-file.conf");

        let config =
            load_config(&path, &hosts(&["h1", "h2"])).expect("missing file should fall back");

        let addresses: Vec<_> = config.servers().iter().map(|s| s.address()).collect();
        assert_eq!(addresses, vec!["h1", "h2"]);
        assert!(config.servers().iter().all(|s| s.waittime().is_none()));
        assert!(config.layout().is_none());
        assert_eq!(config.waittime(), DEFAULT_WAITTIME);
    }

    #[test]
    fn missing_file_and_no_hosts_yields_an_empty_configuration() {
        let dir = tempfile::tempdir().expect("should create a temp dir");
        let path = dir.path().join("no-such-file.conf");

        let config = load_config(&path, &[]).expect("missing file should fall back");
        assert!(config.servers().is_empty());
    }

    #[test]
    fn parsed_file_is_used_as_is_without_hosts() {
        let dir = tempfile::tempdir().expect("should create a temp dir");
        let path = dir.path().join("overlook.conf");
        fs::write(&path, "waittime 120 ;\nservers x y ;\n").expect("should write config");

        let config = load_config(&path, &[]).expect("file should parse");

        assert_eq!(config.waittime(), 120);
        let addresses: Vec<_> = config.servers().iter().map(|s| s.address()).collect();
        assert_eq!(addresses, vec!["x", "y"]);
    }

    #[test]
    fn command_line_hosts_replace_file_servers_but_keep_the_rest() {
        let dir = tempfile::tempdir().expect("should create a temp dir");
        let path = dir.path().join("overlook.conf");
        fs::write(
            &path,
            "waittime 120 ;\nservers x y { waittime 30 ; } ;\nlayout { header ; } ;\n",
        )
        .expect("should write config");

        let config = load_config(&path, &hosts(&["z"])).expect("file should parse");

        let addresses: Vec<_> = config.servers().iter().map(|s| s.address()).collect();
        assert_eq!(addresses, vec!["z"]);
        assert_eq!(config.servers()[0].waittime(), None);
        assert_eq!(config.waittime(), 120);
        assert!(config.layout().expect("layout should be kept").header());
    }

    #[test]
    fn parse_failure_is_fatal_even_with_hosts() {
        let dir = tempfile::tempdir().expect("should create a temp dir");
        let path = dir.path().join("overlook.conf");
        fs::write(&path, "servers ;\n").expect("should write config");

        let error = load_config(&path, &hosts(&["z"])).expect_err("parse failure should be fatal");

        match error {
            LoadError::Parse { error, .. } => {
                assert_eq!(*error.reason(), ParserErrorReason::EmptyServerList);
            }
            LoadError::Io { .. } => panic!("expected a parse error, have an I/O error"),
        }
    }

    #[test]
    fn unreadable_path_is_fatal() {
        let dir = tempfile::tempdir().expect("should create a temp dir");

        // Reading a directory fails with something other than NotFound,
        // so the fallback must not trigger.
        let error =
            load_config(dir.path(), &hosts(&["z"])).expect_err("directory should not be readable");

        assert!(matches!(error, LoadError::Io { .. }));
    }

    #[test]
    fn fallback_constructor_builds_plain_entries() {
        let config = config_from_hosts(&hosts(&["a", "b", "c"]));
        assert_eq!(config.servers().len(), 3);
        assert_eq!(config.servers()[2].address(), "c");
        assert_eq!(config.servers()[2].effective_waittime(config.waittime()), 60);
    }
}

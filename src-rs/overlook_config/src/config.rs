//! The root configuration value

use crate::{draw::Layout, server::ServerEntry};

/// Poll cadence in seconds applied when the configuration does not
/// declare one
pub const DEFAULT_WAITTIME: u32 = 60;

/// Smallest poll cadence the configuration accepts, in seconds
pub const MIN_WAITTIME: u32 = 15;

/// A complete overlook configuration
///
/// One instance exists per process, built by the configuration
/// front-end before any polling or rendering begins. The poller reads
/// the server list, the renderer reads the layout; neither mutates the
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    waittime: u32,
    servers: Vec<ServerEntry>,
    layout: Option<Layout>,
}

impl Config {
    /// Creates a configuration with the default poll cadence, no
    /// servers, and no layout
    #[must_use]
    pub const fn new() -> Self {
        Self {
            waittime: DEFAULT_WAITTIME,
            servers: Vec::new(),
            layout: None,
        }
    }

    /// Returns the global poll cadence in seconds
    #[must_use]
    pub const fn waittime(&self) -> u32 {
        self.waittime
    }

    /// Sets the global poll cadence in seconds
    pub const fn set_waittime(&mut self, waittime: u32) {
        self.waittime = waittime;
    }

    /// Returns the polled servers in declaration order
    #[must_use]
    pub fn servers(&self) -> &[ServerEntry] {
        &self.servers
    }

    /// Appends a server to the end of the server list
    pub fn add_server(&mut self, server: ServerEntry) {
        self.servers.push(server);
    }

    /// Discards the current server list and installs a new one
    ///
    /// This is the command-line override path: hosts given as process
    /// arguments always win over hosts declared in the file, while the
    /// layout and global cadence are kept.
    pub fn replace_servers(&mut self, servers: Vec<ServerEntry>) {
        self.servers = servers;
    }

    /// Applies a per-host cadence override to the `count` most recently
    /// appended servers
    ///
    /// This implements retroactive propagation from a trailing
    /// `{ waittime … }` block: the override reaches exactly the hosts
    /// declared by the same `servers` statement, never earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `count` servers have been appended.
    pub fn apply_waittime_to_last(&mut self, count: usize, waittime: u32) {
        assert!(
            count <= self.servers.len(),
            "override cannot reach more servers than were declared"
        );

        let start = self.servers.len() - count;
        for server in &mut self.servers[start..] {
            server.set_waittime(waittime);
        }
    }

    /// Returns the layout, if one was declared
    #[must_use]
    pub const fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Returns whether a layout statement has been seen
    ///
    /// An empty `layout { }` counts: it is distinguished from a missing
    /// layout so that a second occurrence can be rejected.
    #[must_use]
    pub const fn has_layout(&self) -> bool {
        self.layout.is_some()
    }

    /// Installs the layout
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

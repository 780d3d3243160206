//! Polled server entries

/// One remote status-reporting host to poll
///
/// The address is an owned copy of the configuration token it came
/// from, so entries stay valid after the parse buffer is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    address: String,
    waittime: Option<u32>,
}

impl ServerEntry {
    /// Creates an entry with no per-host cadence override
    #[must_use]
    pub const fn new(address: String) -> Self {
        Self {
            address,
            waittime: None,
        }
    }

    /// Returns the host address
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the per-host cadence override, if one was declared
    #[must_use]
    pub const fn waittime(&self) -> Option<u32> {
        self.waittime
    }

    /// Sets the per-host cadence override
    pub const fn set_waittime(&mut self, waittime: u32) {
        self.waittime = Some(waittime);
    }

    /// Returns the cadence the poller should use for this host
    ///
    /// The per-host override supersedes the global value for this host
    /// only.
    #[must_use]
    pub const fn effective_waittime(&self, global: u32) -> u32 {
        match self.waittime {
            Some(waittime) => waittime,
            None => global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_waittime_prefers_the_override() {
        let mut server = ServerEntry::new("status.example.com".to_string());
        assert_eq!(server.effective_waittime(60), 60);

        server.set_waittime(15);
        assert_eq!(server.effective_waittime(60), 15);
    }
}

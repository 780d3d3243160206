//! Configuration tree definitions for the overlook dashboard.
//!
//! This crate contains the data structures the configuration parser
//! produces and the rest of the system consumes: which remote hosts to
//! poll and at what cadence, and how to lay out the metric boxes on
//! screen. The tree is built once at startup and treated as read-only
//! by every downstream consumer.

pub mod config;
pub mod draw;
pub mod server;

pub use config::Config;
pub use draw::{DrawArgs, DrawBox, DrawCategory, Layout};
pub use server::ServerEntry;

//! Shared utilities for the overlook monitoring dashboard
//!
//! This crate holds the types that every other overlook crate agrees on:
//! source locations and spans for the configuration parser, and the
//! unified error-reporting surface consumed by the command-line front-end.

pub mod error;
pub mod span;

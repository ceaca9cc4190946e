//! Sandbox filesystem helpers.
//!
//! Zellij mounts the host filesystem under `/host`; everything here maps
//! user-facing paths onto that mount.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};

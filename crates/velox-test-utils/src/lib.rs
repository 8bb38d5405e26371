//! Shared test utilities for the velox-params workspace.
//!
//! Dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`root`] - [`TestParamRoot`] builder for parameter directory trees
//! - [`fixtures`] - path to the checked-in fixture tree

pub mod fixtures;
pub mod root;

pub use root::TestParamRoot;

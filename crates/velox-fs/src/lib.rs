//! Filesystem layer for velox vehicle parameters
//!
//! Knows where parameter documents live beneath a configuration root and how
//! to turn one into a generic YAML tree. Nothing here knows which keys a
//! document is expected to contain.

pub mod constants;
pub mod document;
pub mod error;
pub mod io;
pub mod layout;

pub use constants::{DEFAULT_PARAM_ROOT, DocumentKind, TIRE_FILE_NAME, vehicle_file_name};
pub use document::DocumentStore;
pub use error::{Error, Result};
pub use layout::ParamLayout;

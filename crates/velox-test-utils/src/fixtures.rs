//! Checked-in parameter fixtures under `test-fixtures/parameters/`.

use std::path::PathBuf;

/// Root of the fixture parameter tree shipped with the workspace.
///
/// Contains documents for vehicles 1 to 4 and a nested-schema tire document.
pub fn fixture_param_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test-fixtures")
        .join("parameters")
}

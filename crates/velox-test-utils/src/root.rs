//! [`TestParamRoot`] builder for parameter resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary configuration root with helpers to lay out vehicle and tire
/// documents in the expected sub-directories.
///
/// # Example
///
/// ```rust,no_run
/// use velox_test_utils::TestParamRoot;
///
/// let root = TestParamRoot::new();
/// root.write_vehicle(1, "m: 1000\n");
/// root.write_tire("p_cx1: 1.6\n");
/// root.assert_file_exists("vehicle/parameters_vehicle1.yaml");
/// ```
pub struct TestParamRoot {
    temp_dir: TempDir,
}

impl Default for TestParamRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestParamRoot {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a root holding an empty vehicle document for `vehicle_id` and an
    /// empty tire document.
    pub fn with_empty_documents(vehicle_id: i32) -> Self {
        let root = Self::new();
        root.write_vehicle(vehicle_id, "");
        root.write_tire("");
        root
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `vehicle/parameters_vehicle<id>.yaml` and return its path.
    pub fn write_vehicle(&self, vehicle_id: i32, content: &str) -> PathBuf {
        self.write(
            &format!("vehicle/parameters_vehicle{vehicle_id}.yaml"),
            content,
        )
    }

    /// Write `tire/parameters_tire.yaml` and return its path.
    pub fn write_tire(&self, content: &str) -> PathBuf {
        self.write("tire/parameters_tire.yaml", content)
    }

    /// Write `content` to `path` relative to the root, creating parents.
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}

//! Parameter directory layout
//!
//! ```text
//! <root>/
//!   vehicle/
//!     parameters_vehicle1.yaml
//!     parameters_vehicle2.yaml
//!     ...
//!   tire/
//!     parameters_tire.yaml
//! ```

use std::path::{Path, PathBuf};

use crate::{DocumentKind, TIRE_FILE_NAME, vehicle_file_name};

/// Maps document kinds to concrete paths beneath a configuration root.
///
/// Pure path construction; nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamLayout {
    root: PathBuf,
}

impl ParamLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/vehicle/parameters_vehicle<id>.yaml`
    pub fn vehicle_document(&self, vehicle_id: i32) -> PathBuf {
        self.root
            .join(DocumentKind::Vehicle)
            .join(vehicle_file_name(vehicle_id))
    }

    /// `<root>/tire/parameters_tire.yaml`, the same for every vehicle.
    pub fn tire_document(&self) -> PathBuf {
        self.root.join(DocumentKind::Tire).join(TIRE_FILE_NAME)
    }
}

//! Constants and enums for the parameter directory layout.

use std::path::Path;

/// Configuration root used when the caller supplies none.
pub const DEFAULT_PARAM_ROOT: &str = "parameters";

/// File name of the shared tire document inside [`DocumentKind::Tire`]'s directory.
pub const TIRE_FILE_NAME: &str = "parameters_tire.yaml";

/// File name of the vehicle document for `vehicle_id`.
///
/// The identifier is formatted as a plain integer: no zero-padding and no
/// bounds check, so `vehicle_file_name(7)` is `parameters_vehicle7.yaml`.
pub fn vehicle_file_name(vehicle_id: i32) -> String {
    format!("parameters_vehicle{vehicle_id}.yaml")
}

/// The two documents read for every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Per-vehicle geometry, mass, suspension and envelope parameters
    Vehicle,
    /// Tire force-model coefficients shared by all vehicles
    Tire,
}

impl DocumentKind {
    /// Name of the sub-directory of the configuration root holding this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Tire => "tire",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Tire => "Tire",
        }
    }
}

impl AsRef<Path> for DocumentKind {
    fn as_ref(&self) -> &Path {
        Path::new(self.dir_name())
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

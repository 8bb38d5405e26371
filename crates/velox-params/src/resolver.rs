//! Parameter resolution
//!
//! The `ParameterResolver` maps a vehicle identifier and an optional
//! configuration root to two documents, loads both and populates a fresh
//! [`VehicleParameters`] from them:
//!
//! 1. compiled-in zero defaults
//! 2. vehicle document (`<root>/vehicle/parameters_vehicle<id>.yaml`)
//! 3. shared tire document (`<root>/tire/parameters_tire.yaml`)
//!
//! Documents override the defaults field by field; a key that no document
//! mentions keeps its default. Tire coefficients come only from the tire
//! document.

use std::path::{Path, PathBuf};

use velox_fs::{DEFAULT_PARAM_ROOT, DocumentKind, DocumentStore, ParamLayout};

use crate::populate::{populate_tire, populate_vehicle};
use crate::{Result, VehicleParameters};

/// Settings of a [`ParameterResolver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Root used when the caller passes no (or an empty) parameter directory
    pub default_root: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_root: PathBuf::from(DEFAULT_PARAM_ROOT),
        }
    }
}

/// The two documents read for one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    pub vehicle: PathBuf,
    pub tire: PathBuf,
}

/// Resolves vehicle parameters from YAML documents.
///
/// Holds no state between calls; every [`ParameterResolver::resolve`] reads
/// both documents again and builds a new value, so one resolver can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ParameterResolver {
    config: ResolverConfig,
    store: DocumentStore,
}

impl ParameterResolver {
    /// Create a resolver using [`DEFAULT_PARAM_ROOT`] as the fallback root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            store: DocumentStore::new(),
        }
    }

    /// Create a resolver with a custom fallback root.
    ///
    /// Mostly useful for tests, which need a root they control without
    /// passing it to every call.
    pub fn with_default_root(default_root: impl Into<PathBuf>) -> Self {
        Self::with_config(ResolverConfig {
            default_root: default_root.into(),
        })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Compute the document paths for `vehicle_id` without touching the filesystem.
    ///
    /// `dir_params` of `None` or an empty path selects the configured default
    /// root. The identifier is not validated; an unknown one simply names a
    /// document that will not be found.
    pub fn document_paths(&self, vehicle_id: i32, dir_params: Option<&Path>) -> DocumentPaths {
        let root = match dir_params {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => self.config.default_root.as_path(),
        };
        let layout = ParamLayout::new(root);
        DocumentPaths {
            vehicle: layout.vehicle_document(vehicle_id),
            tire: layout.tire_document(),
        }
    }

    /// Resolve the parameters of `vehicle_id`.
    ///
    /// Both documents must exist; their existence is checked (vehicle first)
    /// before either is parsed. A malformed document, or a recognized key whose
    /// value is not a number, fails the whole call.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use velox_params::ParameterResolver;
    ///
    /// let resolver = ParameterResolver::with_default_root("/etc/velox/parameters");
    /// let params = resolver.resolve(1, None)?;
    /// println!("wheelbase: {} m", params.a + params.b);
    /// ```
    pub fn resolve(&self, vehicle_id: i32, dir_params: Option<&Path>) -> Result<VehicleParameters> {
        let paths = self.document_paths(vehicle_id, dir_params);
        tracing::debug!(
            vehicle_id,
            vehicle = %paths.vehicle.display(),
            tire = %paths.tire.display(),
            "Resolving vehicle parameters"
        );

        self.store.ensure_exists(DocumentKind::Vehicle, &paths.vehicle)?;
        self.store.ensure_exists(DocumentKind::Tire, &paths.tire)?;

        let vehicle_doc = self.store.parse(&paths.vehicle)?;
        let tire_doc = self.store.parse(&paths.tire)?;

        let mut params = VehicleParameters::default();
        populate_vehicle(&vehicle_doc, &paths.vehicle, &mut params)?;
        populate_tire(&tire_doc, &paths.tire, &mut params.tire)?;

        Ok(params)
    }
}

/// Resolve the parameters of `vehicle_id` with a default [`ParameterResolver`].
///
/// `dir_params` is the configuration root containing `vehicle/` and `tire/`;
/// `None` falls back to [`DEFAULT_PARAM_ROOT`] relative to the working
/// directory.
pub fn setup_vehicle_parameters(
    vehicle_id: i32,
    dir_params: Option<&Path>,
) -> Result<VehicleParameters> {
    ParameterResolver::new().resolve(vehicle_id, dir_params)
}

//! Mapping parsed documents onto [`VehicleParameters`]

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::fields::{ParameterGroup, populate, yaml_kind};
use crate::{
    Error, LongitudinalParameters, Result, SteeringParameters, TireParameters, TrailerParameters,
    VehicleParameters,
};

/// Keys of the vehicle document that hold nested groups rather than scalars.
const VEHICLE_GROUPS: &[&str] = &[
    SteeringParameters::GROUP,
    LongitudinalParameters::GROUP,
    TrailerParameters::GROUP,
];

/// Where the tire coefficients of a tire document live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TireSource<'a> {
    /// `{tire: {p_cx1: ..., ...}}`
    Nested(&'a Mapping),
    /// `{p_cx1: ..., ...}`
    Flat(&'a Mapping),
    /// Neither shape yields a mapping
    Absent,
}

impl<'a> TireSource<'a> {
    /// The nested `tire` mapping wins when both shapes could apply.
    pub(crate) fn select(document: &'a Value) -> Self {
        if let Some(nested) = document
            .get(TireParameters::GROUP)
            .and_then(Value::as_mapping)
        {
            return Self::Nested(nested);
        }
        match document.as_mapping() {
            Some(flat) => Self::Flat(flat),
            None => Self::Absent,
        }
    }

    fn mapping(self) -> Option<&'a Mapping> {
        match self {
            Self::Nested(mapping) | Self::Flat(mapping) => Some(mapping),
            Self::Absent => None,
        }
    }
}

/// Top-level mapping of a vehicle document.
///
/// Empty documents and sequences have no keys to look up; a scalar at the top
/// level cannot be subscripted and is rejected.
fn vehicle_root<'a>(document: &'a Value, empty: &'a Mapping, path: &Path) -> Result<&'a Mapping> {
    match document {
        Value::Null | Value::Sequence(_) => Ok(empty),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(Error::InvalidDocument {
            path: path.to_path_buf(),
            message: format!(
                "expected a mapping of parameters at the top level, found {}",
                yaml_kind(other)
            ),
        }),
    }
}

/// Populate a nested group from `root[G::GROUP]`; a missing or non-mapping
/// entry leaves the whole group untouched.
fn populate_group<G: ParameterGroup>(root: &Mapping, target: &mut G, path: &Path) -> Result<usize> {
    match root.get(G::GROUP).and_then(Value::as_mapping) {
        Some(group) => populate(group, target, path, &[]),
        None => Ok(0),
    }
}

/// Apply the vehicle document: top-level scalars, then the steering,
/// longitudinal and trailer groups.
pub(crate) fn populate_vehicle(
    document: &Value,
    path: &Path,
    params: &mut VehicleParameters,
) -> Result<()> {
    let empty = Mapping::new();
    let root = vehicle_root(document, &empty, path)?;

    let scalars = populate(root, &mut *params, path, VEHICLE_GROUPS)?;
    let steering = populate_group(root, &mut params.steering, path)?;
    let longitudinal = populate_group(root, &mut params.longitudinal, path)?;
    let trailer = populate_group(root, &mut params.trailer, path)?;

    tracing::debug!(
        path = %path.display(),
        scalars,
        steering,
        longitudinal,
        trailer,
        "Applied vehicle document"
    );
    Ok(())
}

/// Apply the shared tire document in either of its two shapes.
pub(crate) fn populate_tire(document: &Value, path: &Path, tire: &mut TireParameters) -> Result<()> {
    let source = TireSource::select(document);
    let assigned = match source.mapping() {
        Some(mapping) => populate(mapping, tire, path, &[TireParameters::GROUP])?,
        None => 0,
    };

    tracing::debug!(
        path = %path.display(),
        nested = matches!(source, TireSource::Nested(_)),
        assigned,
        "Applied tire document"
    );
    Ok(())
}

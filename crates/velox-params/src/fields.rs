//! Declarative field tables
//!
//! Each parameter structure lists the document keys it accepts together with
//! the field each key writes. Population walks that table once per group
//! instead of branching per field.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::{Error, Result};

/// A structure whose `f64` fields are addressable by their document key.
pub trait ParameterGroup: Default {
    /// Group label; for nested groups also the key they live under.
    const GROUP: &'static str;

    /// Document keys in declaration order.
    const KEYS: &'static [&'static str];

    /// Mutable slot for `key`, or `None` if the key is not part of the group.
    fn field_mut(&mut self, key: &str) -> Option<&mut f64>;

    /// Current value of `key`, or `None` if the key is not part of the group.
    fn get(&self, key: &str) -> Option<f64>;
}

/// Implements [`ParameterGroup`] from a `"key" => field` table.
macro_rules! parameter_group {
    ($ty:ty, $group:literal, { $($key:literal => $field:ident),* $(,)? }) => {
        impl $crate::fields::ParameterGroup for $ty {
            const GROUP: &'static str = $group;
            const KEYS: &'static [&'static str] = &[$($key),*];

            fn field_mut(&mut self, key: &str) -> Option<&mut f64> {
                match key {
                    $($key => Some(&mut self.$field),)*
                    _ => None,
                }
            }

            fn get(&self, key: &str) -> Option<f64> {
                match key {
                    $($key => Some(self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use parameter_group;

/// Convert a YAML scalar to `f64`, or name the YAML kind that was found instead.
///
/// Quoted scalars convert from their text, so `"1000"` is 1000.0.
pub(crate) fn yaml_number(value: &Value) -> std::result::Result<f64, &'static str> {
    match value {
        Value::Number(number) => number.as_f64().ok_or("number out of range"),
        Value::String(text) => text.trim().parse::<f64>().map_err(|_| "string"),
        other => Err(yaml_kind(other)),
    }
}

pub(crate) fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Assign every key of `G` present in `source`; absent keys keep their value.
///
/// Keys in `source` that are neither fields of `G` nor listed in `nested`
/// are ignored. Returns the number of fields assigned.
pub(crate) fn populate<G: ParameterGroup>(
    source: &Mapping,
    target: &mut G,
    path: &Path,
    nested: &[&str],
) -> Result<usize> {
    let mut assigned = 0;
    for &key in G::KEYS {
        let Some(value) = source.get(key) else {
            continue;
        };
        let number = yaml_number(value).map_err(|found| Error::FieldType {
            path: path.to_path_buf(),
            group: G::GROUP,
            key,
            found,
        })?;
        if let Some(slot) = target.field_mut(key) {
            tracing::trace!(group = G::GROUP, key, value = number, "Assigned parameter");
            *slot = number;
            assigned += 1;
        }
    }

    let ignored: Vec<&str> = source
        .keys()
        .filter_map(Value::as_str)
        .filter(|key| !G::KEYS.contains(key) && !nested.contains(key))
        .collect();
    if !ignored.is_empty() {
        tracing::debug!(group = G::GROUP, ?ignored, "Ignoring unrecognized parameter keys");
    }

    Ok(assigned)
}

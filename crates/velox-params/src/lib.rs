//! Vehicle parameter resolution for velox vehicle-dynamics models.
//!
//! Builds a [`VehicleParameters`] set from two YAML documents beneath a
//! configuration root: a per-vehicle document and a tire document shared by
//! every vehicle. Every field starts at zero and is overridden only by keys
//! present in the documents.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use velox_params::{VehicleId, setup_vehicle_parameters};
//!
//! let params = setup_vehicle_parameters(2, Some(Path::new("config/parameters")))?;
//! println!("mass: {} kg", params.m);
//!
//! // Same thing through the closed identifier
//! let params = VehicleId::Bmw320i.parameters(Some(Path::new("config/parameters")))?;
//! println!("max steering angle: {} rad", params.steering.max);
//! # Ok::<(), velox_params::Error>(())
//! ```

pub mod error;
pub mod fields;
pub mod logging;
pub mod params;
mod populate;
pub mod resolver;
pub mod vehicle_id;

pub use error::{Error, Result};
pub use fields::ParameterGroup;
pub use params::{
    LongitudinalParameters, SteeringParameters, TireParameters, TrailerParameters,
    VehicleParameters,
};
pub use resolver::{DocumentPaths, ParameterResolver, ResolverConfig, setup_vehicle_parameters};
pub use vehicle_id::{
    VehicleId, parameters_vehicle1, parameters_vehicle2, parameters_vehicle3, parameters_vehicle4,
};

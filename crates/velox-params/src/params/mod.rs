//! Parameter structures
//!
//! Field names follow Rust conventions; the document keys (the physical
//! quantity symbols configuration authors write, such as `I_z` or `K_sf`)
//! are kept in each structure's field table and as serde names.

mod longitudinal;
mod steering;
mod tire;
mod trailer;
mod vehicle;

pub use longitudinal::LongitudinalParameters;
pub use steering::SteeringParameters;
pub use tire::TireParameters;
pub use trailer::TrailerParameters;
pub use vehicle::VehicleParameters;

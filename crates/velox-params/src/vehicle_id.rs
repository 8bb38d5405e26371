//! Known vehicle types
//!
//! The resolver accepts any integer; [`VehicleId`] closes the set to the four
//! vehicles that ship parameter documents, so an unknown vehicle is rejected
//! before any file is looked up.

use std::fmt;
use std::path::Path;

use crate::{Error, Result, VehicleParameters, setup_vehicle_parameters};

/// Identifier of a vehicle with a parameter document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleId {
    FordEscort = 1,
    Bmw320i = 2,
    VwVanagon = 3,
    SemiTrailerTruck = 4,
}

impl VehicleId {
    pub const ALL: [VehicleId; 4] = [
        Self::FordEscort,
        Self::Bmw320i,
        Self::VwVanagon,
        Self::SemiTrailerTruck,
    ];

    /// Numeric identifier used in the vehicle document name.
    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FordEscort => "Ford Escort",
            Self::Bmw320i => "BMW 320i",
            Self::VwVanagon => "VW Vanagon",
            Self::SemiTrailerTruck => "semi-trailer truck",
        }
    }

    /// Resolve this vehicle's parameters; see [`setup_vehicle_parameters`].
    pub fn parameters(self, dir_params: Option<&Path>) -> Result<VehicleParameters> {
        setup_vehicle_parameters(self.id(), dir_params)
    }
}

impl TryFrom<i32> for VehicleId {
    type Error = Error;

    fn try_from(id: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|vehicle| vehicle.id() == id)
            .ok_or(Error::UnknownVehicle { id })
    }
}

impl From<VehicleId> for i32 {
    fn from(vehicle: VehicleId) -> Self {
        vehicle.id()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle {} ({})", self.id(), self.name())
    }
}

/// Parameters of vehicle 1 (Ford Escort).
pub fn parameters_vehicle1(dir_params: Option<&Path>) -> Result<VehicleParameters> {
    VehicleId::FordEscort.parameters(dir_params)
}

/// Parameters of vehicle 2 (BMW 320i).
pub fn parameters_vehicle2(dir_params: Option<&Path>) -> Result<VehicleParameters> {
    VehicleId::Bmw320i.parameters(dir_params)
}

/// Parameters of vehicle 3 (VW Vanagon).
pub fn parameters_vehicle3(dir_params: Option<&Path>) -> Result<VehicleParameters> {
    VehicleId::VwVanagon.parameters(dir_params)
}

/// Parameters of vehicle 4 (semi-trailer truck).
pub fn parameters_vehicle4(dir_params: Option<&Path>) -> Result<VehicleParameters> {
    VehicleId::SemiTrailerTruck.parameters(dir_params)
}

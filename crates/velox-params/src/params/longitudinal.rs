use serde::Serialize;

use crate::fields::parameter_group;

/// Longitudinal velocity, acceleration and jerk envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LongitudinalParameters {
    /// minimum velocity [m/s]
    pub v_min: f64,
    /// maximum velocity [m/s]
    pub v_max: f64,
    /// velocity above which acceleration is power limited [m/s]
    pub v_switch: f64,
    /// maximum absolute acceleration [m/s^2]
    pub a_max: f64,
    /// maximum longitudinal jerk [m/s^3]
    pub j_max: f64,
    /// maximum longitudinal jerk rate [m/s^4]
    pub j_dot_max: f64,
}

parameter_group!(LongitudinalParameters, "longitudinal", {
    "v_min" => v_min,
    "v_max" => v_max,
    "v_switch" => v_switch,
    "a_max" => a_max,
    "j_max" => j_max,
    "j_dot_max" => j_dot_max,
});

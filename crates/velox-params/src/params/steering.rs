use serde::Serialize;

use crate::fields::parameter_group;

/// Steering angle bounds and steering rate limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SteeringParameters {
    /// minimum steering angle [rad]
    pub min: f64,
    /// maximum steering angle [rad]
    pub max: f64,
    /// minimum steering velocity [rad/s]
    pub v_min: f64,
    /// maximum steering velocity [rad/s]
    pub v_max: f64,
    /// maximum curvature rate
    pub kappa_dot_max: f64,
    /// maximum curvature rate of change
    pub kappa_dot_dot_max: f64,
}

parameter_group!(SteeringParameters, "steering", {
    "min" => min,
    "max" => max,
    "v_min" => v_min,
    "v_max" => v_max,
    "kappa_dot_max" => kappa_dot_max,
    "kappa_dot_dot_max" => kappa_dot_dot_max,
});

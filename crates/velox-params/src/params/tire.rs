use serde::Serialize;

use crate::fields::parameter_group;

/// Coefficients of the semi-empirical ("Magic Formula") tire force model.
///
/// `p_*x*`/`r_*x*` shape the longitudinal force, `p_*y*`/`r_*y*` the lateral
/// force. All coefficients are dimensionless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TireParameters {
    pub p_cx1: f64,
    pub p_dx1: f64,
    pub p_dx3: f64,
    pub p_ex1: f64,
    pub p_kx1: f64,
    pub p_hx1: f64,
    pub p_vx1: f64,
    pub r_bx1: f64,
    pub r_bx2: f64,
    pub r_cx1: f64,
    pub r_ex1: f64,
    pub r_hx1: f64,

    pub p_cy1: f64,
    pub p_dy1: f64,
    pub p_dy3: f64,
    pub p_ey1: f64,
    pub p_ky1: f64,
    pub p_hy1: f64,
    pub p_hy3: f64,
    pub p_vy1: f64,
    pub p_vy3: f64,
    pub r_by1: f64,
    pub r_by2: f64,
    pub r_by3: f64,
    pub r_cy1: f64,
    pub r_ey1: f64,
    pub r_hy1: f64,
    pub r_vy1: f64,
    pub r_vy3: f64,
    pub r_vy4: f64,
    pub r_vy5: f64,
    pub r_vy6: f64,
}

parameter_group!(TireParameters, "tire", {
    "p_cx1" => p_cx1,
    "p_dx1" => p_dx1,
    "p_dx3" => p_dx3,
    "p_ex1" => p_ex1,
    "p_kx1" => p_kx1,
    "p_hx1" => p_hx1,
    "p_vx1" => p_vx1,
    "r_bx1" => r_bx1,
    "r_bx2" => r_bx2,
    "r_cx1" => r_cx1,
    "r_ex1" => r_ex1,
    "r_hx1" => r_hx1,
    "p_cy1" => p_cy1,
    "p_dy1" => p_dy1,
    "p_dy3" => p_dy3,
    "p_ey1" => p_ey1,
    "p_ky1" => p_ky1,
    "p_hy1" => p_hy1,
    "p_hy3" => p_hy3,
    "p_vy1" => p_vy1,
    "p_vy3" => p_vy3,
    "r_by1" => r_by1,
    "r_by2" => r_by2,
    "r_by3" => r_by3,
    "r_cy1" => r_cy1,
    "r_ey1" => r_ey1,
    "r_hy1" => r_hy1,
    "r_vy1" => r_vy1,
    "r_vy3" => r_vy3,
    "r_vy4" => r_vy4,
    "r_vy5" => r_vy5,
    "r_vy6" => r_vy6,
});

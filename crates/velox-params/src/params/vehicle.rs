use serde::Serialize;

use super::{LongitudinalParameters, SteeringParameters, TireParameters, TrailerParameters};
use crate::fields::parameter_group;

/// All parameters of a vehicle model.
///
/// Scalars and groups default to zero. A value built by the resolver is plain
/// data: it is never updated after it is returned.
///
/// Serializes under the document key names, so a resolved set can be written
/// back out in the same shape it was read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VehicleParameters {
    // body dimensions
    /// vehicle length [m]
    pub l: f64,
    /// vehicle width [m]
    pub w: f64,

    pub steering: SteeringParameters,
    pub longitudinal: LongitudinalParameters,

    // masses
    /// total mass [kg]
    pub m: f64,
    /// sprung mass [kg]
    pub m_s: f64,
    /// unsprung mass, front [kg]
    pub m_uf: f64,
    /// unsprung mass, rear [kg]
    pub m_ur: f64,

    /// distance from the sprung-mass center of gravity to the front axle [m]
    pub a: f64,
    /// distance from the sprung-mass center of gravity to the rear axle [m]
    pub b: f64,

    // sprung-mass moments of inertia [kg m^2]
    #[serde(rename = "I_Phi_s")]
    pub i_phi_s: f64,
    #[serde(rename = "I_y_s")]
    pub i_y_s: f64,
    #[serde(rename = "I_z")]
    pub i_z: f64,
    #[serde(rename = "I_xz_s")]
    pub i_xz_s: f64,

    // suspension spring [N/m] and damping [N s/m] rates
    #[serde(rename = "K_sf")]
    pub k_sf: f64,
    #[serde(rename = "K_sdf")]
    pub k_sdf: f64,
    #[serde(rename = "K_sr")]
    pub k_sr: f64,
    #[serde(rename = "K_sdr")]
    pub k_sdr: f64,

    /// track width, front [m]
    #[serde(rename = "T_f")]
    pub t_f: f64,
    /// track width, rear [m]
    #[serde(rename = "T_r")]
    pub t_r: f64,
    /// lateral spring rate at the compliant pin joint between sprung and unsprung mass [N/m]
    #[serde(rename = "K_ras")]
    pub k_ras: f64,

    /// auxiliary torsion roll stiffness per axle, front [N m/rad]
    #[serde(rename = "K_tsf")]
    pub k_tsf: f64,
    /// auxiliary torsion roll stiffness per axle, rear [N m/rad]
    #[serde(rename = "K_tsr")]
    pub k_tsr: f64,
    /// damping rate at the compliant pin joint [N s/m]
    #[serde(rename = "K_rad")]
    pub k_rad: f64,
    /// vertical tire spring rate [N/m]
    #[serde(rename = "K_zt")]
    pub k_zt: f64,

    /// center of gravity height of the total mass [m]
    pub h_cg: f64,
    /// roll axis height, front [m]
    pub h_raf: f64,
    /// roll axis height, rear [m]
    pub h_rar: f64,
    /// sprung-mass center of gravity height [m]
    pub h_s: f64,

    /// unsprung-mass roll inertia, front [kg m^2]
    #[serde(rename = "I_uf")]
    pub i_uf: f64,
    /// unsprung-mass roll inertia, rear [kg m^2]
    #[serde(rename = "I_ur")]
    pub i_ur: f64,
    /// wheel inertia [kg m^2]
    #[serde(rename = "I_y_w")]
    pub i_y_w: f64,

    /// lateral compliance of tire, wheel and suspension per tire [m/N]
    #[serde(rename = "K_lt")]
    pub k_lt: f64,
    /// effective wheel radius [m]
    #[serde(rename = "R_w")]
    pub r_w: f64,

    /// share of brake torque on the front axle [0..1]
    #[serde(rename = "T_sb")]
    pub t_sb: f64,
    /// share of engine torque on the front axle [0..1]
    #[serde(rename = "T_se")]
    pub t_se: f64,

    // suspension camber coefficients
    #[serde(rename = "D_f")]
    pub d_f: f64,
    #[serde(rename = "D_r")]
    pub d_r: f64,
    #[serde(rename = "E_f")]
    pub e_f: f64,
    #[serde(rename = "E_r")]
    pub e_r: f64,

    pub tire: TireParameters,
    pub trailer: TrailerParameters,
}

parameter_group!(VehicleParameters, "vehicle", {
    "l" => l,
    "w" => w,
    "m" => m,
    "m_s" => m_s,
    "m_uf" => m_uf,
    "m_ur" => m_ur,
    "a" => a,
    "b" => b,
    "I_Phi_s" => i_phi_s,
    "I_y_s" => i_y_s,
    "I_z" => i_z,
    "I_xz_s" => i_xz_s,
    "K_sf" => k_sf,
    "K_sdf" => k_sdf,
    "K_sr" => k_sr,
    "K_sdr" => k_sdr,
    "T_f" => t_f,
    "T_r" => t_r,
    "K_ras" => k_ras,
    "K_tsf" => k_tsf,
    "K_tsr" => k_tsr,
    "K_rad" => k_rad,
    "K_zt" => k_zt,
    "h_cg" => h_cg,
    "h_raf" => h_raf,
    "h_rar" => h_rar,
    "h_s" => h_s,
    "I_uf" => i_uf,
    "I_ur" => i_ur,
    "I_y_w" => i_y_w,
    "K_lt" => k_lt,
    "R_w" => r_w,
    "T_sb" => t_sb,
    "T_se" => t_se,
    "D_f" => d_f,
    "D_r" => d_r,
    "E_f" => e_f,
    "E_r" => e_r,
});

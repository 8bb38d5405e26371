use serde::Serialize;

use crate::fields::parameter_group;

/// Trailer geometry, meaningful only for articulated vehicles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrailerParameters {
    /// trailer length [m]
    pub l: f64,
    /// trailer width [m]
    pub w: f64,
    /// hitch length [m]
    pub l_hitch: f64,
    /// total length of the vehicle combination [m]
    pub l_total: f64,
    /// trailer wheelbase [m]
    pub l_wb: f64,
}

parameter_group!(TrailerParameters, "trailer", {
    "l" => l,
    "w" => w,
    "l_hitch" => l_hitch,
    "l_total" => l_total,
    "l_wb" => l_wb,
});

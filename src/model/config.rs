//! Routing configuration

use serde::{Deserialize, Serialize};

/// Coefficients of the multicriteria impedance model.
///
/// The defaults are the published calibration of the methodology. A
/// network is weighted once per configuration; changing coefficients
/// requires rebuilding the network rather than mutating edges in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Reserved safety weighting coefficient. The safety contribution of
    /// the impedance formula comes from the fixed per-infrastructure
    /// band, not from this coefficient.
    pub safety_coef: f64,
    /// Weight of absolute slope, per percent
    pub slope_coef: f64,
    /// Weight of motor traffic volume, per vehicle
    pub traffic_coef: f64,
    /// Weight of vehicle speed excess over 30 km/h, per km/h
    pub speed_coef: f64,
    /// Average cycling speed, km/h (> 0)
    pub bike_speed_kph: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            safety_coef: 0.3,
            slope_coef: 0.05,
            traffic_coef: 0.0001,
            speed_coef: 0.01,
            bike_speed_kph: 15.0,
        }
    }
}

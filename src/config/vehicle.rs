use crate::constants::{PI, STANDARD_GRAVITY};
use crate::models::vehicle::AeroProperties;
use crate::models::RocketParams;
use crate::physics::drag::atmospheric_drag;

/// Small single-stage sounding rocket used by the demo and tests.
#[derive(Debug, Clone, Copy)]
pub struct DemoRocket;

impl DemoRocket {
    pub const THRUST: f64 = 15_000.0; // N
    pub const MDOT: f64 = 5.0; // kg/s
    pub const WET_MASS: f64 = 500.0; // kg
    pub const ISP: f64 = Self::THRUST / (Self::MDOT * STANDARD_GRAVITY); // s
    pub const C_D: f64 = 0.5;
    pub const R_BODY: f64 = 0.25; // meters

    pub fn params() -> RocketParams {
        RocketParams::new(Self::THRUST, STANDARD_GRAVITY, Self::MDOT)
    }

    pub fn params_with_drag() -> RocketParams {
        Self::params().with_drag(atmospheric_drag(DemoRocket))
    }
}

impl AeroProperties for DemoRocket {
    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn reference_area(&self) -> f64 {
        PI * Self::R_BODY.powi(2)
    }
}

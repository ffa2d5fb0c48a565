use nalgebra as na;

/// Vertical flight state ordered as [altitude, velocity, mass].
pub type RocketState = na::Vector3<f64>;

pub trait VerticalState {
    fn altitude(&self) -> f64;
    fn velocity(&self) -> f64;
    fn mass(&self) -> f64;
}

impl VerticalState for RocketState {
    fn altitude(&self) -> f64 {
        self[0]
    }

    fn velocity(&self) -> f64 {
        self[1]
    }

    fn mass(&self) -> f64 {
        self[2]
    }
}

pub fn rocket_state(altitude: f64, velocity: f64, mass: f64) -> RocketState {
    na::Vector3::new(altitude, velocity, mass)
}

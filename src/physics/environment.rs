use crate::constants::*;

pub struct Environment {
    pub altitude: f64,
    pub density: f64,
}

impl Environment {
    pub fn new(altitude: f64) -> Self {
        // Simple exponential atmospheric model
        let density = SEA_LEVEL_DENSITY * (-altitude / SCALE_HEIGHT).exp();

        Environment { altitude, density }
    }
}

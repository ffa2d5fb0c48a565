use super::vehicle::DemoRocket;
use crate::errors::Result;
use crate::integrators::integrate_vertical_rocket;
use crate::models::{RocketParams, Trajectory};

/// Initial conditions and time grid for one integration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchScenario {
    pub t0: f64,
    pub t_end: f64,
    pub dt: f64,
    pub h0: f64,
    pub v0: f64,
    pub m0: f64,
}

impl Default for LaunchScenario {
    /// Pad launch of `DemoRocket` for one minute.
    fn default() -> Self {
        Self {
            t0: 0.0,
            t_end: 60.0,
            dt: 0.1,
            h0: 0.0,
            v0: 0.0,
            m0: DemoRocket::WET_MASS,
        }
    }
}

impl LaunchScenario {
    pub fn until(mut self, t_end: f64) -> Self {
        self.t_end = t_end;
        self
    }

    pub fn integrate(&self, params: &RocketParams) -> Result<Trajectory> {
        integrate_vertical_rocket(
            self.t0, self.t_end, self.dt, self.h0, self.v0, self.m0, params,
        )
    }
}

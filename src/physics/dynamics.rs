use crate::models::{RocketParams, RocketState, VerticalState};
use nalgebra as na;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, t: f64, state: &Self::State) -> Self::State;
}

/// 1D vertical rocket: dh/dt = v, dv/dt = (T - D - m g) / m, dm/dt = -mdot.
pub struct VerticalRocketDynamics<'a> {
    params: &'a RocketParams,
    mass_floor: f64,
}

impl<'a> VerticalRocketDynamics<'a> {
    pub fn new(params: &'a RocketParams) -> Self {
        Self {
            params,
            mass_floor: 0.0,
        }
    }

    /// Masses at or below `mass_floor` are treated as burnt out.
    pub fn with_mass_floor(params: &'a RocketParams, mass_floor: f64) -> Self {
        Self { params, mass_floor }
    }

    pub fn params(&self) -> &RocketParams {
        self.params
    }

    pub fn mass_floor(&self) -> f64 {
        self.mass_floor
    }
}

impl EquationsOfMotion for VerticalRocketDynamics<'_> {
    type State = RocketState;

    fn compute_derivative(&self, t: f64, state: &RocketState) -> RocketState {
        let h = state.altitude();
        let v = state.velocity();
        let m = state.mass();

        // No acceleration without mass; keeps the quotient away from m = 0
        let dvdt = if m <= self.mass_floor {
            0.0
        } else {
            let drag = self.params.eval_drag(t, h, v, m);
            (self.params.thrust - drag - m * self.params.g) / m
        };

        na::Vector3::new(v, dvdt, -self.params.mdot)
    }
}

/// Right-hand side of the vertical rocket ODE at time `t`.
pub fn rocket_rhs(t: f64, state: &RocketState, params: &RocketParams) -> RocketState {
    VerticalRocketDynamics::new(params).compute_derivative(t, state)
}

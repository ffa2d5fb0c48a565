use super::grid::TimeGrid;
use super::rk4::RK4;
use crate::constants::DEPLETION_TOLERANCE;
use crate::errors::{Result, RocketError};
use crate::models::state::rocket_state;
use crate::models::{RocketParams, Trajectory, VerticalState};
use crate::physics::dynamics::VerticalRocketDynamics;
use log::debug;

/// Integrates the 1D vertical rocket with fixed-step RK4 on the grid
/// `t0, t0 + dt, ..., t0 + round((t_end - t0) / dt) * dt`.
///
/// Once the mass reaches zero the state is frozen: every remaining grid
/// point repeats the burnout state. Mass within accumulated rounding error
/// of zero (`m0 * DEPLETION_TOLERANCE` per step) is clamped to exactly 0.0,
/// so mass is never negative.
///
/// Fails fast on non-finite inputs, `dt <= 0`, `t_end < t0`, `m0 <= 0` or a
/// grid longer than `MAX_GRID_STEPS`.
pub fn integrate_vertical_rocket(
    t0: f64,
    t_end: f64,
    dt: f64,
    h0: f64,
    v0: f64,
    m0: f64,
    params: &RocketParams,
) -> Result<Trajectory> {
    let grid = TimeGrid::new(t0, t_end, dt)?;

    if !h0.is_finite() {
        return Err(RocketError::NonFinite("h0"));
    }
    if !v0.is_finite() {
        return Err(RocketError::NonFinite("v0"));
    }
    if !m0.is_finite() {
        return Err(RocketError::NonFinite("m0"));
    }
    if m0 <= 0.0 {
        return Err(RocketError::InvalidInitialMass(m0));
    }

    let mass_floor = m0 * DEPLETION_TOLERANCE * grid.steps().max(1) as f64;
    let integrator = RK4::new(VerticalRocketDynamics::with_mass_floor(params, mass_floor));

    let mut trajectory = Trajectory::with_capacity(grid.len());
    let mut state = rocket_state(h0, v0, m0);
    trajectory.push(grid.time(0), &state);

    for i in 0..grid.steps() {
        let t = grid.time(i);

        // Burnt out: hold the last state for the rest of the grid
        if state.mass() > 0.0 {
            state = integrator.integrate(t, &state, dt);

            if state.mass() <= mass_floor {
                state[2] = 0.0;
                debug!(
                    "propellant depleted at t={:.3}s (step {}), h={:.3}m, v={:.3}m/s",
                    grid.time(i + 1),
                    i + 1,
                    state.altitude(),
                    state.velocity()
                );
            }
        }

        trajectory.push(grid.time(i + 1), &state);
    }

    Ok(trajectory)
}

pub mod config;
pub mod constants;
pub mod errors;
pub mod integrators;
pub mod models;
pub mod physics;
pub mod plotting;
pub mod symbolic;

pub use errors::{Result, RocketError};
pub use integrators::integrate_vertical_rocket;
pub use models::{RocketParams, Trajectory};
pub use physics::dynamics::rocket_rhs;
pub use plotting::{plot_altitude, plot_altitude_and_velocity, plot_velocity, PlotOptions};
pub use symbolic::{tsiolkovsky_delta_v, vertical_rocket_equations, VerticalRocketModel};

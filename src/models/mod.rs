pub mod params;
pub mod state;
pub mod trajectory;
pub mod vehicle;

pub use params::{DragFn, RocketParams};
pub use state::{RocketState, VerticalState};
pub use trajectory::{Trajectory, TrajectoryRow};

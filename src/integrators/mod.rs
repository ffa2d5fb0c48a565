pub mod grid;
pub mod rk4;
pub mod vertical;

pub use grid::TimeGrid;
pub use rk4::RK4;
pub use vertical::integrate_vertical_rocket;

use super::environment::Environment;
use crate::models::vehicle::AeroProperties;

/// Quadratic drag along the vertical axis, signed with the velocity so it
/// always opposes motion.
pub fn drag_force<T: AeroProperties>(vehicle: &T, altitude: f64, velocity: f64) -> f64 {
    let rho: f64 = Environment::new(altitude).density;

    0.5 * vehicle.drag_coefficient() * vehicle.reference_area() * rho * velocity * velocity.abs()
}

/// Drag closure in the (t, h, v, m) form expected by `RocketParams::with_drag`.
pub fn atmospheric_drag<T>(vehicle: T) -> impl Fn(f64, f64, f64, f64) -> f64
where
    T: AeroProperties + 'static,
{
    move |_t, h, v, _m| drag_force(&vehicle, h, v)
}

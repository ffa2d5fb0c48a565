/// Aerodynamic description of a vehicle, used by the drag model.
pub trait AeroProperties {
    fn drag_coefficient(&self) -> f64;
    fn reference_area(&self) -> f64;
}

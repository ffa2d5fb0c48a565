pub mod equation;
pub mod expr;
pub mod vertical;

pub use equation::Equation;
pub use expr::{Bindings, Domain, Expr, Symbol};
pub use vertical::{tsiolkovsky_delta_v, vertical_rocket_equations, VerticalRocketModel};

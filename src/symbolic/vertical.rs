use super::equation::Equation;
use super::expr::{Expr, Symbol};
use std::collections::BTreeMap;

pub const H_DOT: &str = "h_dot";
pub const V_DOT: &str = "v_dot";
pub const M_DOT: &str = "m_dot";

/// Symbols and equations of motion for a point-mass rocket in vertical
/// flight. Every instance owns freshly built symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalRocketModel {
    /// Time
    pub t: Symbol,
    /// Altitude h(t)
    pub h: Expr,
    /// Vertical velocity v(t)
    pub v: Expr,
    /// Mass m(t)
    pub m: Expr,
    /// Gravitational acceleration, positive
    pub g: Expr,
    /// Thrust T
    pub thrust: Expr,
    /// Drag D(t)
    pub drag: Expr,
    /// Mass flow rate, positive
    pub mdot: Expr,
    pub equations: BTreeMap<&'static str, Equation>,
}

impl VerticalRocketModel {
    pub fn new() -> Self {
        let t = Symbol::real("t");

        let h = Expr::function("h", &t);
        let v = Expr::function("v", &t);
        let m = Expr::function("m", &t);

        let g: Expr = Symbol::positive("g").into();
        let thrust: Expr = Symbol::real("T").into();
        let drag = Expr::function("D", &t);
        let mdot: Expr = Symbol::positive("mdot").into();

        let mut equations = BTreeMap::new();
        equations.insert(H_DOT, Equation::new(h.diff(&t), v.clone()));
        equations.insert(
            V_DOT,
            Equation::new(
                v.diff(&t),
                (thrust.clone() - drag.clone() - m.clone() * g.clone()) / m.clone(),
            ),
        );
        equations.insert(M_DOT, Equation::new(m.diff(&t), -mdot.clone()));

        Self {
            t,
            h,
            v,
            m,
            g,
            thrust,
            drag,
            mdot,
            equations,
        }
    }

    pub fn equation(&self, name: &str) -> Option<&Equation> {
        self.equations.get(name)
    }
}

impl Default for VerticalRocketModel {
    fn default() -> Self {
        Self::new()
    }
}

/// The 1D vertical rocket equations keyed "h_dot", "v_dot", "m_dot":
///
/// ```text
/// dh/dt = v
/// dv/dt = (T - D(t) - m*g) / m
/// dm/dt = -mdot
/// ```
pub fn vertical_rocket_equations() -> BTreeMap<&'static str, Equation> {
    VerticalRocketModel::new().equations
}

/// Ideal delta-v `Isp * g0 * ln(m0 / mf)`.
///
/// Arguments may be numbers or expressions. All-numeric input folds to a
/// number when `m0 / mf` is positive; otherwise the logarithm stays
/// unevaluated and `eval` reports the domain error.
pub fn tsiolkovsky_delta_v<A, B, C, D>(isp: A, g0: B, m0: C, mf: D) -> Expr
where
    A: Into<Expr>,
    B: Into<Expr>,
    C: Into<Expr>,
    D: Into<Expr>,
{
    isp.into() * g0.into() * Expr::ln(m0.into() / mf.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STANDARD_GRAVITY;
    use crate::errors::{Result, RocketError};
    use crate::symbolic::expr::Bindings;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    #[test]
    fn test_exactly_three_equations() {
        let equations = vertical_rocket_equations();
        let keys: Vec<&str> = equations.keys().copied().collect();
        assert_eq!(keys, vec!["h_dot", "m_dot", "v_dot"]);
    }

    #[test]
    fn test_equation_structure() {
        let model = VerticalRocketModel::new();
        let t = &model.t;

        let h_dot = model.equation(H_DOT).unwrap();
        assert_eq!(h_dot.lhs, Expr::derivative(model.h.clone(), t));
        assert_eq!(h_dot.rhs, model.v);

        let v_dot = model.equation(V_DOT).unwrap();
        assert_eq!(v_dot.lhs, Expr::derivative(model.v.clone(), t));
        let expected = (model.thrust.clone() - model.drag.clone() - model.m.clone() * model.g.clone())
            / model.m.clone();
        assert_eq!(v_dot.rhs, expected);

        let m_dot = model.equation(M_DOT).unwrap();
        assert_eq!(m_dot.lhs, Expr::derivative(model.m.clone(), t));
        assert_eq!(m_dot.rhs, -model.mdot.clone());
    }

    #[test]
    fn test_printed_form() {
        let equations = vertical_rocket_equations();
        assert_eq!(equations[H_DOT].to_string(), "dh(t)/dt = v(t)");
        assert_eq!(equations[V_DOT].to_string(), "dv(t)/dt = (T - D(t) - m(t)*g)/m(t)");
        assert_eq!(equations[M_DOT].to_string(), "dm(t)/dt = -mdot");
    }

    #[test]
    fn test_newton_form_holds_at_random_points() -> Result<()> {
        // m * dv/dt = T - D - m g
        let model = VerticalRocketModel::new();
        let rhs = &model.equation(V_DOT).unwrap().rhs;
        let newton = model.thrust.clone() - model.drag.clone() - model.m.clone() * model.g.clone();

        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let bindings = Bindings::new()
                .with(&model.thrust, rng.gen_range(0.0..2.0e4))?
                .with(&model.drag, rng.gen_range(0.0..1.0e3))?
                .with(&model.m, rng.gen_range(1.0..1.0e3))?
                .with(&model.g, rng.gen_range(1.0..20.0))?;
            let m = model.m.eval(&bindings)?;
            assert_relative_eq!(
                m * rhs.eval(&bindings)?,
                newton.eval(&bindings)?,
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        }
        Ok(())
    }

    #[test]
    fn test_fresh_symbols_per_model() {
        let mut first = VerticalRocketModel::new();
        let second = VerticalRocketModel::new();
        assert_eq!(first, second);

        first.equations.clear();
        first.g = Expr::from(9.81);
        assert_eq!(second.equations.len(), 3);
        assert_eq!(second.g, Expr::from(Symbol::positive("g")));
        assert_eq!(vertical_rocket_equations().len(), 3);
    }

    #[test_case(300.0, STANDARD_GRAVITY, 500.0, 200.0; "upper stage")]
    #[test_case(450.0, STANDARD_GRAVITY, 1.0e5, 1.0e4; "hydrolox")]
    #[test_case(1.0, 1.0, 1.0 + 1e-6, 1.0; "tiny burn")]
    fn test_delta_v_numeric(isp: f64, g0: f64, m0: f64, mf: f64) {
        let dv = tsiolkovsky_delta_v(isp, g0, m0, mf).evalf().unwrap();
        let expected = isp * g0 * (m0 / mf).ln();
        assert_relative_eq!(dv, expected, max_relative = 1e-9);
        assert!(dv > 0.0);
    }

    #[test]
    fn test_delta_v_symbolic() -> Result<()> {
        let isp: Expr = Symbol::positive("Isp").into();
        let g0: Expr = Symbol::positive("g0").into();
        let m0: Expr = Symbol::positive("m0").into();
        let mf: Expr = Symbol::positive("mf").into();

        let dv = tsiolkovsky_delta_v(isp.clone(), g0.clone(), m0.clone(), mf.clone());
        assert_eq!(dv.to_string(), "Isp*g0*ln(m0/mf)");

        let bindings = Bindings::new()
            .with(&isp, 300.0)?
            .with(&g0, STANDARD_GRAVITY)?
            .with(&m0, 500.0)?
            .with(&mf, 200.0)?;
        assert_relative_eq!(
            dv.eval(&bindings)?,
            300.0 * STANDARD_GRAVITY * 2.5_f64.ln(),
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_delta_v_partial_substitution() {
        let mf: Expr = Symbol::positive("mf").into();
        let dv = tsiolkovsky_delta_v(300.0, STANDARD_GRAVITY, 500.0, mf.clone());
        let folded = dv.subs(&mf, &Expr::from(200.0));
        assert!(folded.as_number().is_some());
    }

    #[test_case(STANDARD_GRAVITY, -100.0; "negative final mass")]
    #[test_case(STANDARD_GRAVITY, 0.0; "zero final mass")]
    #[test_case(0.0, 0.0; "zero gravity and zero final mass")]
    fn test_delta_v_invalid_masses(g0: f64, mf: f64) {
        let dv = tsiolkovsky_delta_v(300.0, g0, 500.0, mf);
        assert!(matches!(dv.evalf(), Err(RocketError::Domain(_))));
    }

    #[test]
    fn test_delta_v_at_random_points() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let isp = rng.gen_range(1.0..500.0);
            let g0 = rng.gen_range(0.1..30.0);
            let mf = rng.gen_range(1.0..1.0e5);
            let m0 = mf * rng.gen_range(1.0001..50.0);

            let dv = tsiolkovsky_delta_v(isp, g0, m0, mf).evalf().unwrap();
            assert_relative_eq!(dv, isp * g0 * (m0 / mf).ln(), max_relative = 1e-9);
            assert!(dv > 0.0);
        }
    }
}

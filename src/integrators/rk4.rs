use crate::physics::dynamics::EquationsOfMotion;

pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    pub fn dynamics(&self) -> &T {
        &self.eom
    }

    /// Advances `state` from `t` to `t + dt` with one classical RK4 step.
    pub fn integrate(&self, t: f64, state: &T::State, dt: f64) -> T::State {
        let half = dt / 2.0;

        let k1 = self.eom.compute_derivative(t, state);

        let state2 = state.clone() + k1.clone() * half;
        let k2 = self.eom.compute_derivative(t + half, &state2);

        let state3 = state.clone() + k2.clone() * half;
        let k3 = self.eom.compute_derivative(t + half, &state3);

        let state4 = state.clone() + k3.clone() * dt;
        let k4 = self.eom.compute_derivative(t + dt, &state4);

        state.clone() + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    struct Decay;

    impl EquationsOfMotion for Decay {
        type State = f64;

        fn compute_derivative(&self, _t: f64, state: &f64) -> f64 {
            -state
        }
    }

    struct Quartic;

    impl EquationsOfMotion for Quartic {
        type State = f64;

        fn compute_derivative(&self, t: f64, _state: &f64) -> f64 {
            4.0 * t.powi(3)
        }
    }

    struct Recorder {
        times: RefCell<Vec<f64>>,
    }

    impl EquationsOfMotion for Recorder {
        type State = f64;

        fn compute_derivative(&self, t: f64, _state: &f64) -> f64 {
            self.times.borrow_mut().push(t);
            0.0
        }
    }

    #[test]
    fn test_single_step_matches_taylor_series() {
        // One RK4 step of y' = -y reproduces exp(-h) through the h^4 term
        let h: f64 = 0.1;
        let rk4 = RK4::new(Decay);
        let expected = 1.0 - h + h.powi(2) / 2.0 - h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(rk4.integrate(0.0, &1.0, h), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_exact_for_quartic_in_time() {
        let rk4 = RK4::new(Quartic);
        let mut y = 0.0;
        let dt = 0.25;
        for i in 0..8 {
            y = rk4.integrate(i as f64 * dt, &y, dt);
        }
        // Simpson's rule is exact for cubics, so y(2) = 2^4
        assert_relative_eq!(y, 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stage_times() {
        let rk4 = RK4::new(Recorder {
            times: RefCell::new(Vec::new()),
        });
        rk4.integrate(1.0, &0.0, 0.5);
        assert_eq!(*rk4.dynamics().times.borrow(), vec![1.0, 1.25, 1.25, 1.5]);
    }

    #[test]
    fn test_global_error_is_fourth_order() {
        let rk4 = RK4::new(Decay);
        let error = |steps: usize| {
            let dt = 1.0 / steps as f64;
            let mut y = 1.0;
            for i in 0..steps {
                y = rk4.integrate(i as f64 * dt, &y, dt);
            }
            (y - (-1.0_f64).exp()).abs()
        };
        let ratio = error(10) / error(20);
        assert!(ratio > 14.0 && ratio < 18.0, "error ratio {}", ratio);
    }
}

use std::fmt;

/// Drag model D(t, h, v, m) in newtons, positive when opposing upward motion.
pub type DragFn = Box<dyn Fn(f64, f64, f64, f64) -> f64>;

/// Numeric parameters for one vertical rocket integration run.
pub struct RocketParams {
    /// Thrust (N), positive upward
    pub thrust: f64,
    /// Gravitational acceleration (m/s²), applied downward
    pub g: f64,
    /// Mass flow rate (kg/s); dm/dt = -mdot
    pub mdot: f64,
    drag: Option<DragFn>,
}

impl RocketParams {
    pub fn new(thrust: f64, g: f64, mdot: f64) -> Self {
        Self {
            thrust,
            g,
            mdot,
            drag: None,
        }
    }

    pub fn with_drag<F>(mut self, drag: F) -> Self
    where
        F: Fn(f64, f64, f64, f64) -> f64 + 'static,
    {
        self.drag = Some(Box::new(drag));
        self
    }

    pub fn has_drag(&self) -> bool {
        self.drag.is_some()
    }

    /// Evaluates the drag term, or 0.0 when no drag model is configured.
    pub fn eval_drag(&self, t: f64, h: f64, v: f64, m: f64) -> f64 {
        match &self.drag {
            Some(drag) => drag(t, h, v, m),
            None => 0.0,
        }
    }
}

impl fmt::Debug for RocketParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RocketParams")
            .field("thrust", &self.thrust)
            .field("g", &self.g)
            .field("mdot", &self.mdot)
            .field("drag", &self.drag.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_drag_is_zero() {
        let params = RocketParams::new(1000.0, 9.81, 1.0);
        assert!(!params.has_drag());
        assert_eq!(params.eval_drag(1.0, 100.0, 50.0, 10.0), 0.0);
    }

    #[test]
    fn test_drag_receives_state() {
        let params = RocketParams::new(1000.0, 9.81, 1.0).with_drag(|t, h, v, m| t + h + v + m);
        assert!(params.has_drag());
        assert_eq!(params.eval_drag(1.0, 2.0, 3.0, 4.0), 10.0);
    }

    #[test]
    fn test_debug_hides_closure() {
        let params = RocketParams::new(1.0, 2.0, 3.0).with_drag(|_, _, _, _| 0.0);
        let text = format!("{:?}", params);
        assert!(text.contains("thrust: 1.0"));
        assert!(text.contains("<fn>"));
    }
}

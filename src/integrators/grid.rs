use crate::constants::MAX_GRID_STEPS;
use crate::errors::{Result, RocketError};

/// Uniform time grid `t0 + i * dt` for `i` in `0..=steps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t0: f64,
    dt: f64,
    steps: usize,
}

impl TimeGrid {
    /// The step count is `round((t_end - t0) / dt)`, so the last point lands
    /// within half a step of `t_end`. Grids above `MAX_GRID_STEPS` steps are
    /// rejected.
    pub fn new(t0: f64, t_end: f64, dt: f64) -> Result<Self> {
        if !t0.is_finite() {
            return Err(RocketError::NonFinite("t0"));
        }
        if !t_end.is_finite() {
            return Err(RocketError::NonFinite("t_end"));
        }
        if !dt.is_finite() {
            return Err(RocketError::NonFinite("dt"));
        }
        if dt <= 0.0 {
            return Err(RocketError::InvalidTimeStep(dt));
        }
        if t_end < t0 {
            return Err(RocketError::InvalidTimeSpan { t0, t_end });
        }

        let steps = ((t_end - t0) / dt).round();
        // A finite span over a tiny dt can still overflow to infinity
        if !steps.is_finite() || steps > MAX_GRID_STEPS as f64 {
            return Err(RocketError::TooManySteps {
                t0,
                t_end,
                dt,
                max: MAX_GRID_STEPS,
            });
        }
        Ok(Self {
            t0,
            dt,
            steps: steps as usize,
        })
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of grid points, one more than the number of steps.
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    pub fn time(&self, index: usize) -> f64 {
        self.t0 + index as f64 * self.dt
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.time(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0.0, 60.0, 0.1 => 601; "reference burn")]
    #[test_case(0.0, 10.0, 0.01 => 1001; "fine free fall")]
    #[test_case(2.0, 2.0, 0.5 => 1; "zero span")]
    #[test_case(0.0, 1.0, 0.3 => 4; "rounds down")]
    #[test_case(0.0, 1.0, 0.35 => 4; "rounds up")]
    fn test_grid_length(t0: f64, t_end: f64, dt: f64) -> usize {
        TimeGrid::new(t0, t_end, dt).unwrap().len()
    }

    #[test]
    fn test_grid_points() {
        let grid = TimeGrid::new(1.0, 2.0, 0.25).unwrap();
        let times: Vec<f64> = grid.iter().collect();
        assert_eq!(times, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
        assert_eq!(grid.steps(), 4);
        assert_eq!(grid.t0(), 1.0);
        assert_eq!(grid.dt(), 0.25);
    }

    #[test]
    fn test_last_point_near_end() {
        let grid = TimeGrid::new(0.0, 60.0, 0.1).unwrap();
        assert_relative_eq!(grid.time(grid.steps()), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(matches!(
            TimeGrid::new(0.0, 1.0, 0.0),
            Err(RocketError::InvalidTimeStep(_))
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 1.0, -0.1),
            Err(RocketError::InvalidTimeStep(_))
        ));
    }

    #[test]
    fn test_rejects_reversed_span() {
        assert!(matches!(
            TimeGrid::new(5.0, 1.0, 0.1),
            Err(RocketError::InvalidTimeSpan { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            TimeGrid::new(0.0, f64::INFINITY, 0.1),
            Err(RocketError::NonFinite("t_end"))
        ));
        assert!(matches!(
            TimeGrid::new(f64::NAN, 1.0, 0.1),
            Err(RocketError::NonFinite("t0"))
        ));
    }

    #[test_case(0.0, 1e300, 1e-300; "overflowing quotient")]
    #[test_case(0.0, 1e9, 1e-3; "huge but finite")]
    #[test_case(-1e200, 1e200, 1.0; "wide span")]
    fn test_rejects_oversized_grid(t0: f64, t_end: f64, dt: f64) {
        assert!(matches!(
            TimeGrid::new(t0, t_end, dt),
            Err(RocketError::TooManySteps { .. })
        ));
    }

    #[test]
    fn test_largest_grid_accepted() {
        let grid = TimeGrid::new(0.0, MAX_GRID_STEPS as f64, 1.0).unwrap();
        assert_eq!(grid.steps(), MAX_GRID_STEPS);
        assert_eq!(grid.len(), MAX_GRID_STEPS + 1);
    }
}

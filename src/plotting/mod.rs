pub mod figure;

pub use figure::{Figure, LegendPosition, Series};

use crate::errors::{Result, RocketError};

pub const TIME_LABEL: &str = "Time [s]";
pub const ALTITUDE_LABEL: &str = "Altitude [m]";
pub const VELOCITY_LABEL: &str = "Vertical velocity [m/s]";

/// Title and axis labelling for the plot helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Series names for the combined altitude/velocity figure
    pub altitude_label: String,
    pub velocity_label: String,
    pub legend: LegendPosition,
}

impl PlotOptions {
    pub fn altitude() -> Self {
        Self::with_axes("Vertical trajectory", ALTITUDE_LABEL)
    }

    pub fn velocity() -> Self {
        Self::with_axes("Velocity profile", VELOCITY_LABEL)
    }

    pub fn altitude_and_velocity() -> Self {
        Self::with_axes("Vertical rocket trajectory", "Value")
    }

    fn with_axes(title: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: TIME_LABEL.to_string(),
            y_label: y_label.to_string(),
            altitude_label: ALTITUDE_LABEL.to_string(),
            velocity_label: VELOCITY_LABEL.to_string(),
            legend: LegendPosition::UpperLeft,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn x_label(mut self, label: &str) -> Self {
        self.x_label = label.to_string();
        self
    }

    pub fn y_label(mut self, label: &str) -> Self {
        self.y_label = label.to_string();
        self
    }

    pub fn legend(mut self, legend: LegendPosition) -> Self {
        self.legend = legend;
        self
    }
}

fn check_series(t: &[f64], y: &[f64]) -> Result<()> {
    if t.is_empty() {
        return Err(RocketError::EmptySeries);
    }
    if t.len() != y.len() {
        return Err(RocketError::LengthMismatch {
            expected: t.len(),
            found: y.len(),
        });
    }
    Ok(())
}

fn single_series_figure(t: &[f64], y: &[f64], options: &PlotOptions) -> Result<Figure> {
    check_series(t, y)?;
    Ok(Figure::new(&options.title, &options.x_label, &options.y_label)
        .with_series(Series::new(None, t, y)))
}

/// Altitude against time.
pub fn plot_altitude(t: &[f64], h: &[f64], options: &PlotOptions) -> Result<Figure> {
    single_series_figure(t, h, options)
}

/// Vertical velocity against time.
pub fn plot_velocity(t: &[f64], v: &[f64], options: &PlotOptions) -> Result<Figure> {
    single_series_figure(t, v, options)
}

/// Altitude and velocity overlaid on a shared time axis, with a legend.
pub fn plot_altitude_and_velocity(
    t: &[f64],
    h: &[f64],
    v: &[f64],
    options: &PlotOptions,
) -> Result<Figure> {
    check_series(t, h)?;
    check_series(t, v)?;
    Ok(Figure::new(&options.title, &options.x_label, &options.y_label)
        .with_series(Series::new(Some(&options.altitude_label), t, h))
        .with_series(Series::new(Some(&options.velocity_label), t, v))
        .with_legend(options.legend))
}

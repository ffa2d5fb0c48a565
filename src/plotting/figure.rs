use crate::errors::{Result, RocketError};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const FONT: &str = "sans-serif";
pub const DEFAULT_SIZE: (u32, u32) = (1024, 640);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl LegendPosition {
    fn to_series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(label: Option<&str>, x: &[f64], y: &[f64]) -> Self {
        Self {
            label: label.map(str::to_string),
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A line plot description. Nothing touches the disk until `save_svg`.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub grid: bool,
    pub legend: Option<LegendPosition>,
}

impl Figure {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
            grid: true,
            legend: None,
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_legend(mut self, legend: LegendPosition) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Axis ranges covering every finite point, with a 5 % pad on y.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.points())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let mut x_range: Option<(f64, f64)> = None;
        let mut y_range: Option<(f64, f64)> = None;
        for (x, y) in finite {
            x_range = Some(x_range.map_or((x, x), |(lo, hi)| (lo.min(x), hi.max(x))));
            y_range = Some(y_range.map_or((y, y), |(lo, hi)| (lo.min(y), hi.max(y))));
        }

        let (x_min, x_max) = widen(x_range?, 0.0);
        let (y_min, y_max) = widen(y_range?, 0.05);
        Some(((x_min, x_max), (y_min, y_max)))
    }

    pub fn to_svg_string(&self, size: (u32, u32)) -> Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(buffer)
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P, size: (u32, u32)) -> Result<()> {
        let root = SVGBackend::new(path.as_ref(), size).into_drawing_area();
        self.draw(&root)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let ((x_min, x_max), (y_min, y_max)) = self
            .bounds()
            .ok_or_else(|| RocketError::Render(format!("'{}' has no finite data", self.title)))?;
        debug!(
            "rendering '{}' with {} series over t=[{}, {}]",
            self.title,
            self.series.len(),
            x_min,
            x_max
        );

        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, (FONT, 28).into_font())
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(72)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .axis_desc_style((FONT, 18).into_font());
        if !self.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_error)?;

        for (idx, series) in self.series.iter().enumerate() {
            let annotation = chart
                .draw_series(LineSeries::new(
                    series.points(),
                    ShapeStyle::from(&Palette99::pick(idx)).stroke_width(2),
                ))
                .map_err(render_error)?;

            if let Some(label) = &series.label {
                annotation.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        ShapeStyle::from(&Palette99::pick(idx)).stroke_width(2),
                    )
                });
            }
        }

        if let Some(position) = self.legend {
            chart
                .configure_series_labels()
                .position(position.to_series_label_position())
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
        Ok(())
    }
}

fn widen((lo, hi): (f64, f64), pad: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        let half = if lo == 0.0 { 1.0 } else { lo.abs() * 0.5 };
        return (lo - half, hi + half);
    }
    (lo - pad * span, hi + pad * span)
}

fn render_error<E: std::fmt::Display>(err: E) -> RocketError {
    RocketError::Render(err.to_string())
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RocketError {
    #[error("Time step must be positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("End time {t_end} is before start time {t0}")]
    InvalidTimeSpan { t0: f64, t_end: f64 },

    #[error("Grid from {t0} to {t_end} with step {dt} exceeds {max} steps")]
    TooManySteps { t0: f64, t_end: f64, dt: f64, max: usize },

    #[error("Initial mass must be positive, got {0}")]
    InvalidInitialMass(f64),

    #[error("Input `{0}` is not a finite number")]
    NonFinite(&'static str),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("No value bound for `{0}`")]
    UnboundSymbol(String),

    #[error("Series length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Cannot plot an empty series")]
    EmptySeries,

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RocketError>;

pub const STANDARD_GRAVITY: f64 = 9.80665; // Standard gravity g0 (m/s²)

// Environmental constants
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // Air density at sea level (kg/m³)
pub const SCALE_HEIGHT: f64 = 7200.0; // Atmospheric scale height (m)

// Per-step rounding allowance: mass at or below
// m0 * DEPLETION_TOLERANCE * steps counts as burnt out
pub const DEPLETION_TOLERANCE: f64 = 8.0 * f64::EPSILON;

// Largest time grid an integration run will allocate
pub const MAX_GRID_STEPS: usize = 100_000_000;

// Math
pub const PI: f64 = std::f64::consts::PI;

use thiserror::Error;

/// Everything the orbital formulas and the trend fit can reject.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("{quantity} of {value} is outside the supported range [{min}, {max}]")]
    OutOfDomain {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("orbit needs semi-major > semi-minor > 0 (got a = {semi_major}, b = {semi_minor})")]
    InvalidOrbit { semi_major: f64, semi_minor: f64 },

    #[error("{years} years is not a precession milestone (expected 0, 13000 or 26000)")]
    UnknownCyclePosition { years: u32 },

    #[error("the table needs a time column and a temperature column (found {found})")]
    MissingColumns { found: usize },

    #[error("the table has a header but no data rows")]
    EmptyTable,

    #[error("the table has {rows} rows, more than the {limit} supported")]
    TooManyRows { rows: usize, limit: usize },

    #[error("not enough data: {valid} valid time/temperature pairs, at least 2 are needed")]
    InsufficientData { valid: usize },

    #[error("every valid row has the same time value, so no trend can be fitted")]
    DegenerateTimeAxis,

    #[error("the values are too large to fit a trend without overflowing")]
    NumericOverflow,
}

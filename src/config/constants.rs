// Top Level Constants

/// Number of evenly spaced samples taken along the smoothed sales curve.
pub const SAMPLE_COUNT: usize = 300;

/// A cubic spline needs at least this many knots.
pub const CUBIC_MIN_POINTS: usize = 4;

/// Activates the trace_time macro.
pub const LOG_PERFORMANCE: bool = false;

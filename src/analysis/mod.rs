mod extrema;
mod smoothing;
mod summary;

pub use extrema::{ExtremaResult, extrema};
pub use smoothing::{CubicSpline, CurvePoint, SmoothedCurve, smooth};
pub use summary::SalesSummary;

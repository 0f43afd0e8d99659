//! Configuration module for the sales dashboard.

// Can all be private now because we have a public re-export.
mod debug;
mod demo;
mod persistence;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use constants::{CUBIC_MIN_POINTS, LOG_PERFORMANCE, SAMPLE_COUNT};
pub use debug::DF;
pub use demo::{DEMO, DemoCategory};
pub use persistence::PERSISTENCE;
pub use plot::{CHART_TEXT, PLOT_CONFIG};

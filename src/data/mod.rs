mod sample;

#[cfg(not(target_arch = "wasm32"))]
mod chart_export;

pub use sample::sample_inputs;

#[cfg(not(target_arch = "wasm32"))]
pub use chart_export::{ChartExport, export_charts, write_chart_json};

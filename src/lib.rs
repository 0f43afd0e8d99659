#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod charts;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs and analyze.rs)
pub use analysis::{ExtremaResult, SalesSummary, SmoothedCurve, extrema, smooth};
pub use app::{App, ChartView};
pub use charts::{build_line_chart, build_pie_chart};
pub use config::{PERSISTENCE, SAMPLE_COUNT};
pub use data::sample_inputs;
#[cfg(not(target_arch = "wasm32"))]
pub use data::export_charts;
pub use domain::{CategoryTotal, ChartError, SalesRecord, SalesSeries};
pub use engine::{Dashboard, DashboardInputs};
pub use models::ChartSpec;
pub use ui::UI_TEXT;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Initial chart view (overrides the one saved from the last session)
    #[arg(long, value_enum)]
    pub view: Option<ChartView>,

    /// Number of points sampled along the smoothed sales curve
    #[arg(long, default_value_t = SAMPLE_COUNT)]
    pub samples: usize,

    /// Write both chart descriptions as JSON to this file and exit
    #[arg(long, value_name = "PATH")]
    pub export: Option<std::path::PathBuf>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            view: None,
            samples: SAMPLE_COUNT,
            export: None,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

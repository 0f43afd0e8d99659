//! Assembles declarative chart descriptions. Nothing here draws.

mod line_chart;
mod pie_chart;

pub use line_chart::build_line_chart;
pub use pie_chart::build_pie_chart;

/// Sales figures print without decimals when they are whole numbers.
pub fn format_sales(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

//! Chart styling and text configuration

use crate::models::Rgb;

pub struct PlotConfig {
    // --- SALES CURVE ---
    pub curve_color: Rgb,
    pub curve_width: f32,
    /// Radius of the markers drawn on every smoothed sample (lines+markers)
    pub curve_marker_radius: f32,

    // --- EXTREMA ---
    pub max_marker_color: Rgb,
    pub min_marker_color: Rgb,
    pub extrema_marker_radius: f32,
    /// Text position relative to the max point, in (days, sales) units
    pub max_annotation_offset: [f64; 2],
    /// Text position relative to each min point, in (days, sales) units
    pub min_annotation_offset: [f64; 2],
    pub annotation_color: Rgb,

    // --- PER-DAY LABELS ---
    pub day_label_color: Rgb,
    /// Vertical gap between a data point and its value label, in sales units
    pub day_label_offset: f64,

    // --- PIE ---
    /// Donut hole as a fraction of the outer radius (0.0 = full pie)
    pub pie_hole_ratio: f64,
    /// How far the largest slice is pulled out, as a fraction of the radius
    pub pie_pull: f64,
    pub pie_gradient_colors: &'static [&'static str],
    /// Fallback when the gradient cannot be built
    pub pie_default_color: Rgb,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    curve_color: Rgb::new(65, 105, 225), // Royal blue
    curve_width: 2.0,
    curve_marker_radius: 1.5,

    max_marker_color: Rgb::new(0, 170, 0),
    min_marker_color: Rgb::new(230, 30, 30),
    extrema_marker_radius: 6.0,
    max_annotation_offset: [1.5, 40.0],
    min_annotation_offset: [0.8, -40.0],
    annotation_color: Rgb::new(230, 230, 230),

    day_label_color: Rgb::new(160, 160, 160),
    day_label_offset: 14.0,

    pie_hole_ratio: 0.3,
    pie_pull: 0.08,
    pie_gradient_colors: &[
        "#4169e1", // Royal blue
        "#2e8b57", // Sea green
        "#ffb703", // Amber
        "#ff4500", // Orange red
        "#b22222", // Firebrick
    ],
    pie_default_color: Rgb::new(255, 165, 0),
};

pub struct ChartText {
    pub line_chart_id: &'static str,
    pub line_title: &'static str,
    pub line_x_axis: &'static str,
    pub line_y_axis: &'static str,
    pub line_series_name: &'static str,
    pub max_label: &'static str,
    pub min_label: &'static str,

    pub pie_chart_id: &'static str,
    pub pie_title: &'static str,
}

pub const CHART_TEXT: ChartText = ChartText {
    line_chart_id: "daily-sales-chart",
    line_title: "Daily Sales over a Month",
    line_x_axis: "Day",
    line_y_axis: "Sales",
    line_series_name: "Sales",
    max_label: "Peak Sales",
    min_label: "Lowest Sales",

    pie_chart_id: "category-sales-chart",
    pie_title: "Sales by Category",
};

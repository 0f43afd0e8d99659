use std::sync::LazyLock;

pub const ICON_CHART: &str = "📈";
pub const ICON_PIE: &str = "🍰";
pub const ICON_OVERVIEW: &str = "🗖";
pub const ICON_WARNING: &str = "⚠";

pub struct UiText {
    pub app_title: String,
    pub window_title: String,

    // --- TOP TOOLBAR ---
    pub tb_view: String,
    pub tb_curve_markers: String,
    pub tb_day_labels: String,
    pub tb_annotations: String,
    pub tb_legend: String,
    pub tb_summary: String,

    // --- SIDE PANEL ---
    pub sp_heading: String,
    pub sp_days: String,
    pub sp_total: String,
    pub sp_mean: String,
    pub sp_median: String,
    pub sp_std_dev: String,
    pub sp_peak: String,
    pub sp_lowest: String,
    pub sp_categories: String,

    // --- CENTRAL PANEL ---
    pub cp_building: String,
    pub cp_building_body: String,
    pub cp_build_failed: String,

    // --- STATUS BAR ---
    pub sb_samples: String,
    pub sb_elements: String,

    // --- PLOT ---
    pub plot_hover_day: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Sales Analysis".to_string(),
    window_title: "Sales Lens - Sales Analysis".to_string(),

    tb_view: "View:".to_string(),
    tb_curve_markers: "Curve dots".to_string(),
    tb_day_labels: "Day values".to_string(),
    tb_annotations: "Annotations".to_string(),
    tb_legend: "Legend".to_string(),
    tb_summary: "Summary".to_string(),

    sp_heading: "Monthly Summary".to_string(),
    sp_days: "Days".to_string(),
    sp_total: "Total".to_string(),
    sp_mean: "Mean".to_string(),
    sp_median: "Median".to_string(),
    sp_std_dev: "Std dev".to_string(),
    sp_peak: "Peak".to_string(),
    sp_lowest: "Lowest".to_string(),
    sp_categories: "Categories".to_string(),

    cp_building: "Building charts...".to_string(),
    cp_building_body: "Fitting curve and assembling charts".to_string(),
    cp_build_failed: "Could not build charts".to_string(),

    sb_samples: "curve samples".to_string(),
    sb_elements: "chart elements".to_string(),

    plot_hover_day: "Day".to_string(),
});

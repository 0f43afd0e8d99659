//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log each Dashboard::build pass (inputs, extrema found, element counts).
    pub log_dashboard_build: bool,

    /// Log every chart view switch raised by the toolbar.
    pub log_view_selection: bool,

    /// Log spline fit details (knot count, solve result).
    pub log_spline: bool,

    /// Log pie slice fractions as they are assembled.
    pub log_pie_slices: bool,
}

pub const DF: LogFlags = LogFlags {
    log_dashboard_build: true,
    log_view_selection: true,

    log_spline: false,
    log_pie_slices: false,
};

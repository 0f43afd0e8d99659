mod chart_spec;

pub use chart_spec::{
    Annotation, ChartElement, ChartLayout, ChartSpec, CurveSeries, LegendEntry, Marker,
    MarkerRole, PieSlice, Rgb, ValueLabel,
};

use {
    crate::{
        analysis::{ExtremaResult, extrema},
        domain::{ChartError, SalesSeries},
    },
    serde::Serialize,
    statrs::statistics::{Data, Median, Statistics},
};

/// Descriptive statistics for the side panel and the `analyze` report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub days: usize,
    pub total: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation. NaN for a single-day series.
    pub std_dev: f64,
    pub extrema: ExtremaResult,
}

impl SalesSummary {
    pub fn from_series(series: &SalesSeries) -> Result<Self, ChartError> {
        let values = series.values();
        let extrema = extrema(series)?;

        Ok(Self {
            days: values.len(),
            total: values.iter().sum(),
            mean: values.iter().mean(),
            median: Data::new(values.clone()).median(),
            std_dev: values.iter().std_dev(),
            extrema,
        })
    }
}

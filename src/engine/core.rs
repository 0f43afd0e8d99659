use crate::{
    analysis::{ExtremaResult, SalesSummary, SmoothedCurve, smooth},
    charts::{build_line_chart, build_pie_chart},
    config::DF,
    domain::{CategoryTotal, ChartError, SalesSeries},
    models::ChartSpec,
};

/// Everything the dashboard is built from.
#[derive(Debug, Clone)]
pub struct DashboardInputs {
    pub series: SalesSeries,
    pub categories: Vec<CategoryTotal>,
}

/// The assembled, read-only result of one build pass.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub line_chart: ChartSpec,
    pub pie_chart: ChartSpec,
    pub summary: SalesSummary,
    pub curve: SmoothedCurve,
}

impl Dashboard {
    /// Runs extractor, smoother and assemblers once over `inputs`.
    /// Any failure aborts the whole pass and is returned to the caller.
    pub fn build(inputs: &DashboardInputs, sample_count: usize) -> Result<Self, ChartError> {
        crate::trace_time!("Dashboard::build", 2_000, {
            let summary = SalesSummary::from_series(&inputs.series)?;
            let extrema = &summary.extrema;
            let curve = smooth(&inputs.series, sample_count)?;
            let line_chart = build_line_chart(&inputs.series, &curve, extrema);
            let pie_chart = build_pie_chart(&inputs.categories)?;

            if DF.log_dashboard_build {
                log::info!(
                    "Dashboard built: {} days, max day {} ({}), min days {:?}, {} curve samples, {} slices",
                    inputs.series.len(),
                    extrema.max().day,
                    extrema.max().value,
                    extrema.min_days(),
                    curve.len(),
                    pie_chart.slices().count()
                );
            }

            Ok(Self {
                line_chart,
                pie_chart,
                summary,
                curve,
            })
        })
    }

    pub fn extrema(&self) -> &ExtremaResult {
        &self.summary.extrema
    }

    pub fn charts(&self) -> [&ChartSpec; 2] {
        [&self.line_chart, &self.pie_chart]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_inputs;

    #[test]
    fn builds_both_charts_from_sample_data() {
        let dashboard = Dashboard::build(&sample_inputs().unwrap(), 300).unwrap();
        assert_eq!(dashboard.curve.len(), 300);
        assert_eq!(dashboard.pie_chart.slices().count(), 4);
        assert_eq!(dashboard.extrema().max().day, 9);
        assert_eq!(dashboard.extrema().min_days(), vec![5, 15, 29]);
    }

    #[test]
    fn propagates_insufficient_data() {
        let inputs = DashboardInputs {
            series: SalesSeries::from_daily_values(&[1.0, 2.0]).unwrap(),
            categories: vec![CategoryTotal::new("A", 1.0)],
        };
        assert_eq!(
            Dashboard::build(&inputs, 300).unwrap_err(),
            ChartError::InsufficientData { needed: 4, got: 2 }
        );
    }

    #[test]
    fn propagates_empty_categories() {
        let inputs = DashboardInputs {
            series: SalesSeries::from_daily_values(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            categories: Vec::new(),
        };
        assert!(matches!(
            Dashboard::build(&inputs, 300),
            Err(ChartError::InvalidInput(_))
        ));
    }
}

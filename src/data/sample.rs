use crate::{
    config::DEMO,
    domain::{CategoryTotal, ChartError, SalesSeries},
    engine::DashboardInputs,
};

/// The compiled-in month of sales and the category totals.
pub fn sample_inputs() -> Result<DashboardInputs, ChartError> {
    let series = SalesSeries::from_daily_values(DEMO.resources.daily_sales)?;
    let categories = DEMO
        .resources
        .categories
        .iter()
        .map(|c| CategoryTotal::new(c.name, c.total))
        .collect();

    Ok(DashboardInputs { series, categories })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_thirty_days() {
        let inputs = sample_inputs().unwrap();
        assert_eq!(inputs.series.len(), 30);
        assert_eq!(inputs.series.day_range(), (1, 30));
        assert_eq!(inputs.categories.len(), 4);
    }
}

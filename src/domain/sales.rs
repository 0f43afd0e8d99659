use {
    crate::domain::ChartError,
    itertools::Itertools,
    serde::{Deserialize, Serialize},
    std::ops::Deref,
};

/// One day of sales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub day: u32,
    pub value: f64,
}

impl SalesRecord {
    pub const fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }
}

/// Ordered, validated sequence of daily sales.
///
/// Invariants (checked once in [`SalesSeries::new`], never mutated afterwards):
/// * at least one record
/// * days strictly increasing
/// * every value finite and non-negative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSeries {
    records: Vec<SalesRecord>,
}

impl SalesSeries {
    pub fn new(records: Vec<SalesRecord>) -> Result<Self, ChartError> {
        if records.is_empty() {
            return Err(ChartError::InvalidInput("sales series is empty".to_string()));
        }

        if let Some(bad) = records
            .iter()
            .find(|r| !r.value.is_finite() || r.value < 0.0)
        {
            return Err(ChartError::InvalidInput(format!(
                "day {} has invalid sales value {}",
                bad.day, bad.value
            )));
        }

        if let Some((a, b)) = records.iter().tuple_windows().find(|(a, b)| b.day <= a.day) {
            return Err(ChartError::InvalidInput(format!(
                "days must be strictly increasing (day {} follows day {})",
                b.day, a.day
            )));
        }

        Ok(Self { records })
    }

    /// Builds a series from consecutive values, numbering days from 1.
    pub fn from_daily_values(values: &[f64]) -> Result<Self, ChartError> {
        let records = values
            .iter()
            .enumerate()
            .map(|(i, &value)| SalesRecord::new(i as u32 + 1, value))
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// (first day, last day). Safe because the series is never empty.
    pub fn day_range(&self) -> (u32, u32) {
        (self.records[0].day, self.records[self.records.len() - 1].day)
    }
}

impl Deref for SalesSeries {
    type Target = [SalesRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

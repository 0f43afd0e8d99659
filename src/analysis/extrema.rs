use {
    crate::domain::{ChartError, SalesRecord},
    serde::Serialize,
};

/// Highest-selling day plus every day tied for the lowest sales.
/// Only [`extrema`] builds one, so `mins` always holds at least one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremaResult {
    max: SalesRecord,
    mins: Vec<SalesRecord>,
}

impl ExtremaResult {
    /// First record reaching the global maximum.
    pub fn max(&self) -> SalesRecord {
        self.max
    }

    /// All records equal to the global minimum, in day order.
    pub fn mins(&self) -> &[SalesRecord] {
        &self.mins
    }

    pub fn min_value(&self) -> f64 {
        self.mins.first().map_or(self.max.value, |r| r.value)
    }

    pub fn min_days(&self) -> Vec<u32> {
        self.mins.iter().map(|r| r.day).collect()
    }
}

/// Finds the maximum record (earliest wins ties) and all minimum records.
pub fn extrema(records: &[SalesRecord]) -> Result<ExtremaResult, ChartError> {
    let (first, rest) = records
        .split_first()
        .ok_or_else(|| ChartError::InvalidInput("cannot take extrema of an empty series".into()))?;

    if let Some(bad) = records.iter().find(|r| !r.value.is_finite()) {
        return Err(ChartError::InvalidInput(format!(
            "day {} has non-finite value {}",
            bad.day, bad.value
        )));
    }

    // Strictly greater replaces, so ties keep the earliest record
    let mut max = *first;
    let mut min_value = first.value;
    for r in rest {
        if r.value > max.value {
            max = *r;
        }
        if r.value < min_value {
            min_value = r.value;
        }
    }

    let mut mins: Vec<SalesRecord> = records
        .iter()
        .filter(|r| r.value == min_value)
        .copied()
        .collect();
    // Raw slices may be unsorted; stable sort keeps input order for equal days
    mins.sort_by_key(|r| r.day);

    Ok(ExtremaResult { max, mins })
}

use std::error::Error;
use std::fmt;

/// Precondition failures raised by the chart pipeline.
/// Both are fatal to the rendering pass that triggered them.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Empty series/categories, non-finite or negative values, bad ordering.
    InvalidInput(String),
    /// Not enough points for the requested fit.
    InsufficientData { needed: usize, got: usize },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            ChartError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ChartError::InsufficientData { needed, got } => write!(
                f,
                "Insufficient data: need at least {} points, got {}",
                needed, got
            ),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_point_counts() {
        let err = ChartError::InsufficientData { needed: 4, got: 2 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 4 points, got 2"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = ChartError::InvalidInput("empty series".to_string()).into();
        assert!(err.to_string().contains("empty series"));
        assert!(err.downcast_ref::<ChartError>().is_some());
    }
}

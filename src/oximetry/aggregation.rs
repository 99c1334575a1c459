use crate::error::EstimationError;

/// Trait for pluggable aggregation of repeated readings
///
/// A series of raw power readings for one (band, condition) pair is
/// reduced to a single representative value before the log-ratio, which
/// a single near-zero reading would otherwise dominate.
pub trait ReadingAggregator: Send + Sync {
    /// Reduce a non-empty series to one value
    fn aggregate(&self, values: &[f64]) -> Result<f64, EstimationError>;

    /// Name of the policy for logging/debugging
    fn name(&self) -> &'static str;
}

/// Median of the series; even-length series take the mean of the two
/// middle values after sorting
pub struct MedianAggregator;

impl ReadingAggregator for MedianAggregator {
    fn aggregate(&self, values: &[f64]) -> Result<f64, EstimationError> {
        if values.is_empty() {
            return Err(EstimationError::EmptyInput);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(sorted[mid])
        } else {
            Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }

    fn name(&self) -> &'static str {
        "median"
    }
}

/// Arithmetic mean of the series
pub struct MeanAggregator;

impl ReadingAggregator for MeanAggregator {
    fn aggregate(&self, values: &[f64]) -> Result<f64, EstimationError> {
        if values.is_empty() {
            return Err(EstimationError::EmptyInput);
        }

        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}

/// Configuration for the aggregation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationMethod {
    /// Median (default) - robust against single outlier readings
    #[default]
    Median,
    /// Arithmetic mean
    Mean,
}

impl AggregationMethod {
    /// Create an aggregator instance
    pub fn create(&self) -> Box<dyn ReadingAggregator> {
        match self {
            AggregationMethod::Median => Box::new(MedianAggregator),
            AggregationMethod::Mean => Box::new(MeanAggregator),
        }
    }
}

use thiserror::Error;

use crate::Value;

/// Errors produced when updating a metric.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// `y_pred` has no trailing class axis to take predictions from.
    #[error("y_pred has no trailing class axis")]
    NoClassAxis,
    /// The number of labels does not match the number of predictions.
    #[error("batch mismatch: {y_true} labels vs {y_pred} predictions")]
    BatchMismatch { y_true: usize, y_pred: usize },
    /// A required argument was not supplied at the call site.
    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },
    /// More positional values than declared parameters.
    #[error("too many positional arguments: {given} given, {declared} declared")]
    TooManyArguments { given: usize, declared: usize },
}

/// A running metric accumulated over batches.
pub trait Metric {
    type Output;

    /// Folds a batch into the running state and returns the current value.
    ///
    /// # Errors
    ///
    /// Returns a [`MetricError`] if the batch is malformed.
    fn update(&mut self, y_true: &Value, y_pred: &Value) -> Result<Self::Output, MetricError>;

    /// Clears accumulated state.
    fn reset(&mut self);

    /// Display name.
    fn name(&self) -> &str;
}

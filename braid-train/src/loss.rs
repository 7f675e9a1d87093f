use thiserror::Error;

use crate::{Reduction, Value};

/// Errors produced when evaluating a loss.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LossError {
    /// `y_true` and `y_pred` have different shapes.
    #[error("shape mismatch: y_true {y_true:?} vs y_pred {y_pred:?}")]
    ShapeMismatch {
        y_true: Vec<usize>,
        y_pred: Vec<usize>,
    },
    /// The inputs have no trailing axis to reduce over.
    #[error("inputs have no trailing axis to reduce over")]
    NoReduceAxis,
    /// `sample_weight` does not match the per-sample loss shape.
    #[error("sample weight shape {weight:?} does not match loss shape {values:?}")]
    WeightShapeMismatch {
        weight: Vec<usize>,
        values: Vec<usize>,
    },
    /// A required argument was not supplied at the call site.
    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },
    /// More positional values than declared parameters.
    #[error("too many positional arguments: {given} given, {declared} declared")]
    TooManyArguments { given: usize, declared: usize },
}

/// A training loss producing per-sample values before reduction.
///
/// Implementors define [`call`](Loss::call); the provided
/// [`evaluate`](Loss::evaluate) applies the full weighting pipeline a
/// trainer expects.
pub trait Loss {
    /// Per-sample loss values, reduced over the trailing axis of the inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`LossError`] if the inputs are incompatible.
    fn call(&self, y_true: &Value, y_pred: &Value) -> Result<Value, LossError>;

    /// The reduction applied by [`evaluate`](Loss::evaluate).
    fn reduction(&self) -> Reduction {
        Reduction::Mean
    }

    /// Contribution factor applied after reduction.
    fn weight(&self) -> f64 {
        1.0
    }

    /// Display name.
    fn name(&self) -> &str;

    /// The weighted, reduced loss.
    ///
    /// Per-sample values are scaled elementwise by `sample_weight` when
    /// given, reduced per [`reduction`](Loss::reduction), then scaled by
    /// [`weight`](Loss::weight).
    ///
    /// # Errors
    ///
    /// Returns [`LossError::WeightShapeMismatch`] if `sample_weight` does
    /// not match the per-sample shape, plus anything [`call`](Loss::call)
    /// returns.
    fn evaluate(
        &self,
        y_true: &Value,
        y_pred: &Value,
        sample_weight: Option<&Value>,
    ) -> Result<Value, LossError> {
        let mut values = self.call(y_true, y_pred)?;

        if let Some(weight) = sample_weight {
            if weight.shape() != values.shape() {
                return Err(LossError::WeightShapeMismatch {
                    weight: weight.shape().to_vec(),
                    values: values.shape().to_vec(),
                });
            }
            values = values * weight;
        }

        let factor = self.weight();
        Ok(self.reduction().apply(values).mapv_into(|v| v * factor))
    }
}

use ndarray::Axis;

use crate::{Loss, LossError, Reduction, Value};

/// Mean absolute percentage error over the trailing axis.
///
/// Computes `100 * mean(|(y_pred - y_true) / max(y_true, eps)|)` along the
/// trailing axis, where `eps` is [`f64::EPSILON`]. The floor keeps zero (and
/// negative-epsilon) true values from dividing the error by zero; a
/// prediction of exactly zero against a zero label still contributes zero.
///
/// The result has one fewer axis than the inputs.
///
/// # Errors
///
/// Returns [`LossError::ShapeMismatch`] if the inputs differ in shape, or
/// [`LossError::NoReduceAxis`] if they have no axes or an empty trailing
/// axis.
pub fn mean_absolute_percentage_error(y_true: &Value, y_pred: &Value) -> Result<Value, LossError> {
    if y_true.shape() != y_pred.shape() {
        return Err(LossError::ShapeMismatch {
            y_true: y_true.shape().to_vec(),
            y_pred: y_pred.shape().to_vec(),
        });
    }
    if y_pred.ndim() == 0 {
        return Err(LossError::NoReduceAxis);
    }

    let floored = y_true.mapv(|t| t.max(f64::EPSILON));
    let ratio = (y_pred - y_true) / floored;
    let trailing = Axis(ratio.ndim() - 1);
    let mean = ratio
        .mapv_into(f64::abs)
        .mean_axis(trailing)
        .ok_or(LossError::NoReduceAxis)?;

    Ok(mean * 100.0)
}

/// The mean absolute percentage error loss.
///
/// Wraps [`mean_absolute_percentage_error`] with a configurable
/// [`Reduction`] and contribution weight.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use braid_train::{Loss, Reduction, losses::MeanAbsolutePercentageError};
/// use ndarray::array;
///
/// let y_true = array![[1.0, 1.0], [0.9, 0.0]].into_dyn();
/// let y_pred = array![[1.0, 1.0], [1.0, 0.0]].into_dyn();
///
/// let mape = MeanAbsolutePercentageError::new();
/// let loss = mape.evaluate(&y_true, &y_pred, None).unwrap();
/// assert_relative_eq!(loss.sum(), 2.78, max_relative = 0.01);
///
/// let mape = MeanAbsolutePercentageError::with_reduction(Reduction::Sum);
/// let loss = mape.evaluate(&y_true, &y_pred, None).unwrap();
/// assert_relative_eq!(loss.sum(), 5.56, max_relative = 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MeanAbsolutePercentageError {
    reduction: Reduction,
    weight: f64,
}

impl MeanAbsolutePercentageError {
    /// Creates the loss with mean reduction and unit weight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reduction: Reduction::default(),
            weight: 1.0,
        }
    }

    /// Creates the loss with an explicit reduction.
    #[must_use]
    pub fn with_reduction(reduction: Reduction) -> Self {
        Self {
            reduction,
            weight: 1.0,
        }
    }

    /// Sets the contribution weight applied after reduction.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for MeanAbsolutePercentageError {
    fn default() -> Self {
        Self::new()
    }
}

impl Loss for MeanAbsolutePercentageError {
    fn call(&self, y_true: &Value, y_pred: &Value) -> Result<Value, LossError> {
        mean_absolute_percentage_error(y_true, y_pred)
    }

    fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn name(&self) -> &str {
        "mean_absolute_percentage_error"
    }
}

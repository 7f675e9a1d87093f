use ndarray::Axis;

use crate::{Metric, MetricError, Value};

/// Running accuracy of argmax predictions against integer labels.
///
/// `y_true` holds class indices (one per sample); `y_pred` holds per-class
/// scores with classes along the trailing axis. Each update folds the batch
/// into a running match/total count and returns the accuracy over every
/// batch seen since construction or [`reset`](Metric::reset).
///
/// # Examples
///
/// ```
/// use braid_train::{Metric, metrics::SparseCategoricalAccuracy};
/// use ndarray::array;
///
/// let mut accuracy = SparseCategoricalAccuracy::new();
///
/// let y_true = array![2.0, 1.0].into_dyn();
/// let y_pred = array![[0.1, 0.9, 0.8], [0.05, 0.95, 0.0]].into_dyn();
/// assert_eq!(accuracy.update(&y_true, &y_pred), Ok(0.5));
///
/// let y_true = array![1.0, 1.0].into_dyn();
/// let y_pred = array![[0.1, 0.9, 0.8], [0.05, 0.95, 0.0]].into_dyn();
/// assert_eq!(accuracy.update(&y_true, &y_pred), Ok(0.75));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SparseCategoricalAccuracy {
    matches: f64,
    count: f64,
}

impl SparseCategoricalAccuracy {
    /// Creates the metric with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current running accuracy, zero before any update.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.count == 0.0 {
            0.0
        } else {
            self.matches / self.count
        }
    }
}

impl Metric for SparseCategoricalAccuracy {
    type Output = f64;

    fn update(&mut self, y_true: &Value, y_pred: &Value) -> Result<f64, MetricError> {
        let Some(&classes) = y_pred.shape().last() else {
            return Err(MetricError::NoClassAxis);
        };
        if classes == 0 {
            return Err(MetricError::NoClassAxis);
        }

        let rows = y_pred.len() / classes;
        if rows != y_true.len() {
            return Err(MetricError::BatchMismatch {
                y_true: y_true.len(),
                y_pred: rows,
            });
        }

        let trailing = Axis(y_pred.ndim() - 1);
        for (label, scores) in y_true.iter().zip(y_pred.lanes(trailing)) {
            let mut best = 0;
            let mut best_score = f64::NEG_INFINITY;
            for (index, &score) in scores.iter().enumerate() {
                if score > best_score {
                    best = index;
                    best_score = score;
                }
            }
            if *label == best as f64 {
                self.matches += 1.0;
            }
            self.count += 1.0;
        }

        Ok(self.value())
    }

    fn reset(&mut self) {
        self.matches = 0.0;
        self.count = 0.0;
    }

    fn name(&self) -> &str {
        "sparse_categorical_accuracy"
    }
}

use ndarray::{ArrayD, arr0};
use serde::{Deserialize, Serialize};

/// How per-sample loss values are reduced to a reported loss.
///
/// `Sum` and `Mean` produce zero-dimensional arrays; `None` passes the
/// per-sample values through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reduction {
    /// No reduction: one value per sample.
    None,
    /// Sum of all values.
    Sum,
    /// Sum divided by the number of values.
    #[default]
    Mean,
}

impl Reduction {
    /// Reduces per-sample values.
    #[must_use]
    pub fn apply(self, values: ArrayD<f64>) -> ArrayD<f64> {
        match self {
            Reduction::None => values,
            Reduction::Sum => arr0(values.sum()).into_dyn(),
            Reduction::Mean => arr0(values.mean().unwrap_or(0.0)).into_dyn(),
        }
    }
}

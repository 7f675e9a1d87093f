//! Loss and metric components for training loops.
//!
//! Losses produce per-sample values that are weighted and reduced
//! ([`Reduction`]); metrics fold batches into running state. [`LossTarget`]
//! and [`MetricTarget`] expose both as [`braid_core`] invoker targets, so a
//! trainer can pass
//! one superset argument bag to every registered callable and let the
//! invoker narrow it.

mod adapt;
mod loss;
mod metric;
mod reduction;

pub mod losses;
pub mod metrics;

pub use adapt::{LossTarget, MetricTarget};
pub use loss::{Loss, LossError};
pub use metric::{Metric, MetricError};
pub use reduction::Reduction;

/// The argument value type flowing through training call sites.
pub type Value = ndarray::ArrayD<f64>;

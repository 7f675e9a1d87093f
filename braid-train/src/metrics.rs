//! Metric components.

mod sparse_categorical_accuracy;

pub use sparse_categorical_accuracy::SparseCategoricalAccuracy;

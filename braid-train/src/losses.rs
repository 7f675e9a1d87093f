//! Loss components.

mod mean_absolute_percentage_error;

pub use mean_absolute_percentage_error::{
    MeanAbsolutePercentageError, mean_absolute_percentage_error,
};

//! Adapters exposing losses and metrics as invoker targets.
//!
//! A trainer builds one named-argument bag per step (labels, predictions,
//! sample weights, auxiliary context) and dispatches it through an
//! [`Invoker`] to every registered callable. Each adapter declares the
//! parameters its callable accepts, so the invoker narrows the bag before
//! the call ever lands here.

use std::sync::{Mutex, PoisonError};

use braid_core::{
    Describe, Invoker, NamedArgs, Param, SelfDescribed, Signature, SignatureError, Target,
};

use crate::{Loss, LossError, Metric, MetricError, Value};

const LOSS_PARAMS: [&str; 3] = ["y_true", "y_pred", "sample_weight"];
const METRIC_PARAMS: [&str; 2] = ["y_true", "y_pred"];

/// Binds positional values to the leading parameter names, then fills the
/// remaining slots from the named bag.
///
/// Mirrors how a callee body receives bound arguments; a named entry for an
/// already-filled slot is ignored. Excess positional values are the callee's
/// failure, reported as `(given, declared)`.
fn bind<const N: usize>(
    names: [&'static str; N],
    positional: Vec<Value>,
    mut named: NamedArgs<Value>,
) -> Result<[Option<Value>; N], (usize, usize)> {
    if positional.len() > N {
        return Err((positional.len(), N));
    }

    let mut slots: [Option<Value>; N] = std::array::from_fn(|_| None);
    for (slot, value) in slots.iter_mut().zip(positional) {
        *slot = Some(value);
    }
    for (slot, name) in slots.iter_mut().zip(names) {
        if slot.is_none() {
            *slot = named.remove(name);
        }
    }

    Ok(slots)
}

/// Exposes a [`Loss`] as an invoker target.
///
/// Declares the keyword parameters `y_true`, `y_pred`, and `sample_weight`;
/// anything else in the bag is filtered out by the invoker before dispatch.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use braid_core::NamedArgs;
/// use braid_train::{LossTarget, Value, losses::MeanAbsolutePercentageError};
/// use ndarray::array;
///
/// let invoker = LossTarget::invoker(MeanAbsolutePercentageError::new()).unwrap();
///
/// let bag = NamedArgs::<Value>::from([
///     ("y_true".to_string(), array![[1.0, 1.0], [0.9, 0.0]].into_dyn()),
///     ("y_pred".to_string(), array![[1.0, 1.0], [1.0, 0.0]].into_dyn()),
///     // Extra context the loss never declares; dropped by the invoker.
///     ("step".to_string(), array![7.0].into_dyn()),
/// ]);
///
/// let loss = invoker.invoke(Vec::new(), bag).unwrap();
/// assert_relative_eq!(loss.sum(), 2.78, max_relative = 0.01);
/// ```
#[derive(Debug)]
pub struct LossTarget<L> {
    loss: L,
}

impl<L> LossTarget<L> {
    /// Wraps a loss.
    pub fn new(loss: L) -> Self {
        Self { loss }
    }

    /// Builds an invoker for `loss` from its declared parameters.
    ///
    /// # Errors
    ///
    /// Propagates the [`SignatureError`] from invoker construction.
    pub fn invoker(loss: L) -> Result<Invoker<Self>, SignatureError> {
        Invoker::create(Self::new(loss), &SelfDescribed)
    }

    /// The wrapped loss.
    pub fn loss(&self) -> &L {
        &self.loss
    }
}

impl<L> Describe for LossTarget<L> {
    fn signature(&self) -> Result<Signature, SignatureError> {
        Signature::new(LOSS_PARAMS.map(Param::keyword))
    }
}

impl<L: Loss> Target<Value> for LossTarget<L> {
    type Output = Value;
    type Error = LossError;

    fn call(&self, positional: Vec<Value>, named: NamedArgs<Value>) -> Result<Value, LossError> {
        let [y_true, y_pred, sample_weight] = bind(LOSS_PARAMS, positional, named)
            .map_err(|(given, declared)| LossError::TooManyArguments { given, declared })?;

        let y_true = y_true.ok_or(LossError::MissingArgument { name: "y_true" })?;
        let y_pred = y_pred.ok_or(LossError::MissingArgument { name: "y_pred" })?;

        self.loss.evaluate(&y_true, &y_pred, sample_weight.as_ref())
    }
}

/// Exposes a [`Metric`] as an invoker target.
///
/// Declares the keyword parameters `y_true` and `y_pred`. The metric's
/// running state sits behind a mutex so dispatch works through `&self`; a
/// shared invoker therefore updates one accumulator.
#[derive(Debug)]
pub struct MetricTarget<M> {
    metric: Mutex<M>,
}

impl<M> MetricTarget<M> {
    /// Wraps a metric with fresh lock state.
    pub fn new(metric: M) -> Self {
        Self {
            metric: Mutex::new(metric),
        }
    }

    /// Builds an invoker for `metric` from its declared parameters.
    ///
    /// # Errors
    ///
    /// Propagates the [`SignatureError`] from invoker construction.
    pub fn invoker(metric: M) -> Result<Invoker<Self>, SignatureError> {
        Invoker::create(Self::new(metric), &SelfDescribed)
    }

    /// Consumes the adapter, returning the metric and its accumulated state.
    pub fn into_metric(self) -> M {
        self.metric
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M> Describe for MetricTarget<M> {
    fn signature(&self) -> Result<Signature, SignatureError> {
        Signature::new(METRIC_PARAMS.map(Param::keyword))
    }
}

impl<M: Metric> Target<Value> for MetricTarget<M> {
    type Output = M::Output;
    type Error = MetricError;

    fn call(
        &self,
        positional: Vec<Value>,
        named: NamedArgs<Value>,
    ) -> Result<M::Output, MetricError> {
        let [y_true, y_pred] = bind(METRIC_PARAMS, positional, named)
            .map_err(|(given, declared)| MetricError::TooManyArguments { given, declared })?;

        let y_true = y_true.ok_or(MetricError::MissingArgument { name: "y_true" })?;
        let y_pred = y_pred.ok_or(MetricError::MissingArgument { name: "y_pred" })?;

        let mut metric = self
            .metric
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        metric.update(&y_true, &y_pred)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use crate::losses::MeanAbsolutePercentageError;
    use crate::metrics::SparseCategoricalAccuracy;

    use super::*;

    fn bag(entries: Vec<(&str, Value)>) -> NamedArgs<Value> {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn missing_labels_are_the_targets_failure() {
        let target = LossTarget::new(MeanAbsolutePercentageError::new());

        let result = target.call(
            Vec::new(),
            bag(vec![("y_pred", array![1.0, 2.0].into_dyn())]),
        );

        assert_eq!(
            result,
            Err(LossError::MissingArgument { name: "y_true" })
        );
    }

    #[test]
    fn excess_positional_values_are_the_targets_failure() {
        let target = MetricTarget::new(SparseCategoricalAccuracy::new());
        let value = array![0.0].into_dyn();

        let result = target.call(
            vec![value.clone(), value.clone(), value],
            NamedArgs::new(),
        );

        assert_eq!(
            result,
            Err(MetricError::TooManyArguments {
                given: 3,
                declared: 2,
            })
        );
    }

    #[test]
    fn positional_values_bind_in_declaration_order() {
        let target = LossTarget::new(MeanAbsolutePercentageError::new());
        let y_true = array![[1.0, 2.0]].into_dyn();
        let y_pred = array![[1.0, 2.0]].into_dyn();

        let loss = target.call(vec![y_true, y_pred], NamedArgs::new()).unwrap();

        assert_eq!(loss.sum(), 0.0);
    }

    #[test]
    fn adapter_returns_the_metric_with_its_state() {
        let target = MetricTarget::new(SparseCategoricalAccuracy::new());

        target
            .call(
                Vec::new(),
                bag(vec![
                    ("y_true", array![1.0].into_dyn()),
                    ("y_pred", array![[0.0, 1.0]].into_dyn()),
                ]),
            )
            .unwrap();

        let metric = target.into_metric();
        assert_eq!(metric.value(), 1.0);
    }
}

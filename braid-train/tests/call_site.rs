//! A trainer-style call site: one superset argument bag dispatched through
//! invokers to a loss and a metric, each receiving only what it declares.

use approx::assert_relative_eq;
use braid_core::{Invoker, MissingSignature, NamedArgs, Options, RenameMap, SelfDescribed};
use braid_train::{
    LossTarget, MetricTarget, Reduction, Value, losses::MeanAbsolutePercentageError,
    metrics::SparseCategoricalAccuracy,
};
use ndarray::array;

fn bag(entries: Vec<(&str, Value)>) -> NamedArgs<Value> {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Everything a trainer might publish for one step.
fn step_bag() -> NamedArgs<Value> {
    bag(vec![
        ("y_true", array![[1.0, 1.0], [0.9, 0.0]].into_dyn()),
        ("y_pred", array![[1.0, 1.0], [1.0, 0.0]].into_dyn()),
        ("sample_weight", array![0.1, 0.9].into_dyn()),
        ("learning_rate", array![0.001].into_dyn()),
        ("step", array![42.0].into_dyn()),
    ])
}

#[test]
fn loss_receives_only_its_declared_arguments() {
    let invoker = LossTarget::invoker(MeanAbsolutePercentageError::new()).unwrap();

    let loss = invoker.invoke(Vec::new(), step_bag()).unwrap();

    // Weighted mean over the batch; the extra bag entries never reach the loss.
    assert_relative_eq!(loss.sum(), 2.5, max_relative = 0.01);
}

#[test]
fn sum_reduction_flows_through_the_same_call_site() {
    let invoker =
        LossTarget::invoker(MeanAbsolutePercentageError::with_reduction(Reduction::Sum)).unwrap();

    let mut bag = step_bag();
    bag.remove("sample_weight");

    let loss = invoker.invoke(Vec::new(), bag).unwrap();

    assert_relative_eq!(loss.sum(), 5.56, max_relative = 0.01);
}

#[test]
fn metric_accumulates_across_dispatches() {
    let invoker = MetricTarget::invoker(SparseCategoricalAccuracy::new()).unwrap();
    let y_pred = array![[0.1, 0.9, 0.8], [0.05, 0.95, 0.0]].into_dyn();

    let first = invoker
        .invoke(
            Vec::new(),
            bag(vec![
                ("y_true", array![2.0, 1.0].into_dyn()),
                ("y_pred", y_pred.clone()),
                ("sample_weight", array![1.0, 1.0].into_dyn()),
            ]),
        )
        .unwrap();
    assert_eq!(first, 0.5);

    let second = invoker
        .invoke(
            Vec::new(),
            bag(vec![
                ("y_true", array![1.0, 1.0].into_dyn()),
                ("y_pred", y_pred),
            ]),
        )
        .unwrap();
    assert_eq!(second, 0.75);

    let metric = invoker.into_target().into_metric();
    assert_eq!(metric.value(), 0.75);
}

#[test]
fn rename_map_bridges_call_site_vocabulary() {
    let options = Options {
        renames: Some(RenameMap::new([("labels", "y_true"), ("logits", "y_pred")]).unwrap()),
        missing_signature: MissingSignature::Reject,
    };
    let invoker = Invoker::create_with(
        LossTarget::new(MeanAbsolutePercentageError::new()),
        &SelfDescribed,
        options,
    )
    .unwrap();

    let loss = invoker
        .invoke(
            Vec::new(),
            bag(vec![
                ("labels", array![[1.0, 1.0], [0.9, 0.0]].into_dyn()),
                ("logits", array![[1.0, 1.0], [1.0, 0.0]].into_dyn()),
            ]),
        )
        .unwrap();

    assert_relative_eq!(loss.sum(), 2.78, max_relative = 0.01);
}

#[test]
fn positional_labels_win_over_stale_bag_entries() {
    let invoker = LossTarget::invoker(MeanAbsolutePercentageError::new()).unwrap();

    // y_true arrives positionally; the bag's y_true is already satisfied
    // and silently dropped.
    let y_true = array![[1.0, 2.0]].into_dyn();
    let loss = invoker
        .invoke(
            vec![y_true],
            bag(vec![
                ("y_true", array![[5.0, 5.0]].into_dyn()),
                ("y_pred", array![[1.0, 2.0]].into_dyn()),
            ]),
        )
        .unwrap();

    assert_eq!(loss.sum(), 0.0);
}

use std::collections::BTreeMap;

/// Named arguments for a call, keyed by parameter name.
pub type NamedArgs<T> = BTreeMap<String, T>;

/// A callable that receives positional values and named values.
///
/// This is the shape the [`Invoker`](crate::Invoker) dispatches to. A target
/// receives the positional arguments untouched and a named-argument bag
/// already narrowed to the parameters it declares. Results and errors pass
/// through the invoker verbatim.
///
/// Targets are called through `&self`; stateful targets use interior
/// mutability and are responsible for their own synchronization.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use braid_core::{NamedArgs, Target};
///
/// struct WeightedSum;
///
/// impl Target<f64> for WeightedSum {
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, positional: Vec<f64>, named: NamedArgs<f64>) -> Result<f64, Infallible> {
///         let scale = named.get("scale").copied().unwrap_or(1.0);
///         Ok(positional.iter().sum::<f64>() * scale)
///     }
/// }
///
/// let named = NamedArgs::from([("scale".to_string(), 2.0)]);
/// assert_eq!(WeightedSum.call(vec![1.0, 2.0], named), Ok(6.0));
/// ```
pub trait Target<T> {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the target with positional values and a named-argument bag.
    ///
    /// # Errors
    ///
    /// Each target defines its own `Error` type; the invoker neither catches
    /// nor wraps it.
    fn call(&self, positional: Vec<T>, named: NamedArgs<T>) -> Result<Self::Output, Self::Error>;
}

mod options;
mod rename;

pub use options::{MissingSignature, Options};
pub use rename::{RenameError, RenameMap};

use crate::{
    provider::SignatureProvider,
    signature::{Signature, SignatureError},
    target::{NamedArgs, Target},
};

/// Adapts a fixed call-site argument bag to a target's declared parameters.
///
/// An `Invoker` wraps a target callable and caches its [`Signature`] at
/// construction. Each [`invoke`](Invoker::invoke) then:
///
/// 1. Treats the first `n` declared parameters as satisfied by the `n`
///    positional arguments; the remainder are keyword candidates. More
///    positional arguments than declared parameters is not an invoker error;
///    that failure, if any, belongs to the target.
/// 2. Applies the optional [`RenameMap`] to the named bag.
/// 3. If the signature declares a catch-all parameter, forwards the named
///    bag unfiltered. Otherwise keeps only entries naming a keyword
///    candidate: entries matching a positionally bound name and entries
///    naming no declared parameter are dropped silently.
/// 4. Calls the target and passes its result or error through verbatim.
///
/// The silent dropping is deliberate: call sites may pass a superset of
/// possible named arguments to every callable, and each callable receives
/// only what it declares — unless it opts into a catch-all to receive
/// everything.
///
/// An `Invoker` holds no mutable state, so a single instance may be called
/// concurrently; each call owns its argument bag outright.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
///
/// use braid_core::{Describe, Invoker, NamedArgs, Param, SelfDescribed, Signature, SignatureError, Target};
///
/// /// Computes `base + bonus`, declaring exactly those two parameters.
/// struct Payout;
///
/// impl Describe for Payout {
///     fn signature(&self) -> Result<Signature, SignatureError> {
///         Signature::new([Param::positional("base"), Param::keyword("bonus")])
///     }
/// }
///
/// impl Target<i64> for Payout {
///     type Output = i64;
///     type Error = Infallible;
///
///     fn call(&self, positional: Vec<i64>, named: NamedArgs<i64>) -> Result<i64, Infallible> {
///         let base = positional.first().copied().unwrap_or(0);
///         let bonus = named.get("bonus").copied().unwrap_or(0);
///         Ok(base + bonus)
///     }
/// }
///
/// let invoker = Invoker::create(Payout, &SelfDescribed).unwrap();
///
/// // The call site passes extra context; only `bonus` reaches the target.
/// let named = NamedArgs::from([
///     ("bonus".to_string(), 7),
///     ("audit_id".to_string(), 999),
/// ]);
/// assert_eq!(invoker.invoke(vec![100], named), Ok(107));
/// ```
#[derive(Debug, Clone)]
pub struct Invoker<C> {
    target: C,
    signature: Signature,
    renames: Option<RenameMap>,
}

impl<C> Invoker<C> {
    /// Wraps `target`, caching the signature reported by `provider`.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`SignatureError`].
    pub fn create<P>(target: C, provider: &P) -> Result<Self, SignatureError>
    where
        P: SignatureProvider<C>,
    {
        Self::create_with(target, provider, Options::default())
    }

    /// Wraps `target` with explicit [`Options`].
    ///
    /// Rename destinations are not checked against the target's parameter
    /// names; a rename onto an undeclared name is simply filtered out at
    /// call time.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`SignatureError`], except that
    /// [`SignatureError::Unavailable`] is replaced by the empty signature
    /// when [`MissingSignature::AssumeEmpty`] is selected.
    pub fn create_with<P>(target: C, provider: &P, options: Options) -> Result<Self, SignatureError>
    where
        P: SignatureProvider<C>,
    {
        let signature = match provider.signature_of(&target) {
            Ok(signature) => signature,
            Err(SignatureError::Unavailable { .. })
                if options.missing_signature == MissingSignature::AssumeEmpty =>
            {
                Signature::empty()
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            target,
            signature,
            renames: options.renames,
        })
    }

    /// The cached signature.
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The wrapped target.
    #[must_use]
    pub fn target(&self) -> &C {
        &self.target
    }

    /// Consumes the invoker, returning the wrapped target.
    pub fn into_target(self) -> C {
        self.target
    }

    /// Calls the target, narrowing `named` to the parameters it declares.
    ///
    /// The named bag is taken by value; renaming operates on this owned copy,
    /// never on caller-held state.
    ///
    /// # Errors
    ///
    /// Only what the target itself returns.
    pub fn invoke<T>(
        &self,
        positional: Vec<T>,
        mut named: NamedArgs<T>,
    ) -> Result<C::Output, C::Error>
    where
        C: Target<T>,
    {
        if let Some(renames) = &self.renames {
            renames.apply(&mut named);
        }

        if !self.signature.has_catch_all() {
            let bound = positional.len();
            named.retain(|name, _| {
                self.signature
                    .position_of(name)
                    .is_some_and(|index| index >= bound)
            });
        }

        self.target.call(positional, named)
    }
}

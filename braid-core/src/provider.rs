use crate::signature::{Signature, SignatureError};

/// A capability for inspecting a callable's declared parameter list.
///
/// Rust has no ambient reflection, so signatures come from an injected
/// provider: production code typically uses [`SelfDescribed`] with callables
/// that implement [`Describe`], while tests may supply synthetic providers
/// that fabricate or refuse signatures.
///
/// Providers must be pure: the reported signature is cached by the invoker
/// and assumed stable for the target's lifetime.
pub trait SignatureProvider<C> {
    /// Reports the declared parameter list of `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::Unavailable`] when the target cannot be
    /// inspected, and any validation error the signature itself carries.
    fn signature_of(&self, target: &C) -> Result<Signature, SignatureError>;
}

/// A callable that can report its own parameter list.
pub trait Describe {
    /// The callable's declared parameters, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`SignatureError`] if the parameter list cannot be built.
    fn signature(&self) -> Result<Signature, SignatureError>;
}

/// A provider that asks the callable to describe itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfDescribed;

impl<C: Describe> SignatureProvider<C> for SelfDescribed {
    fn signature_of(&self, target: &C) -> Result<Signature, SignatureError> {
        target.signature()
    }
}

//! Signature-adapting invocation.
//!
//! Framework call sites often pass a superset of possible named arguments to
//! every user callable. [`Invoker`] inspects a target's declared parameters
//! once, then narrows each call down to the arguments the target accepts, so
//! user code declares only what it needs.

mod invoker;
mod provider;
mod signature;
mod target;

pub use invoker::{Invoker, MissingSignature, Options, RenameError, RenameMap};
pub use provider::{Describe, SelfDescribed, SignatureProvider};
pub use signature::{Param, ParamKind, Signature, SignatureError};
pub use target::{NamedArgs, Target};

mod param;

pub use param::{Param, ParamKind};

use thiserror::Error;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when inspecting or building a [`Signature`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The callable's parameter list cannot be determined.
    #[error("signature unavailable: {reason}")]
    Unavailable {
        /// Why the provider could not inspect the callable.
        reason: String,
    },
    /// Two declared parameters share a name.
    #[error("duplicate parameter name: {name}")]
    DuplicateName { name: String },
    /// A catch-all parameter is declared before the end of the list.
    #[error("catch-all parameter `{name}` must be declared last")]
    CatchAllNotLast { name: String },
}

/// The ordered parameter list of a callable.
///
/// Declaration order is significant: position in the list determines how
/// positional arguments bind. Names are unique, and at most one catch-all
/// parameter is allowed, in last position. A `Signature` never changes after
/// construction.
///
/// # Examples
///
/// ```
/// use braid_core::{Param, Signature};
///
/// let signature = Signature::new([
///     Param::positional("a"),
///     Param::keyword("b"),
///     Param::catch_all("rest"),
/// ])
/// .unwrap();
///
/// assert_eq!(signature.len(), 3);
/// assert!(signature.has_catch_all());
/// assert_eq!(signature.position_of("b"), Some(1));
/// assert_eq!(signature.position_of("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Param>", into = "Vec<Param>")
)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    /// Creates a signature from parameters in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::DuplicateName`] if two parameters share a
    /// name, or [`SignatureError::CatchAllNotLast`] if a catch-all parameter
    /// is followed by other parameters.
    pub fn new<I>(params: I) -> Result<Self, SignatureError>
    where
        I: IntoIterator<Item = Param>,
    {
        let params: Vec<Param> = params.into_iter().collect();

        for (index, param) in params.iter().enumerate() {
            if params[..index].iter().any(|p| p.name() == param.name()) {
                return Err(SignatureError::DuplicateName {
                    name: param.name().to_string(),
                });
            }
            if param.kind() == ParamKind::VarKeyword && index + 1 != params.len() {
                return Err(SignatureError::CatchAllNotLast {
                    name: param.name().to_string(),
                });
            }
        }

        Ok(Self { params })
    }

    /// A signature with no declared parameters.
    ///
    /// Under an empty signature every named argument is filtered out.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The declared parameters, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no parameters are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns `true` if any declared parameter is a catch-all.
    #[must_use]
    pub fn has_catch_all(&self) -> bool {
        self.params
            .iter()
            .any(|param| param.kind() == ParamKind::VarKeyword)
    }

    /// The declaration position of `name`, if it is declared.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param.name() == name)
    }
}

impl From<Signature> for Vec<Param> {
    fn from(signature: Signature) -> Self {
        signature.params
    }
}

impl TryFrom<Vec<Param>> for Signature {
    type Error = SignatureError;

    fn try_from(params: Vec<Param>) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

use super::rename::RenameMap;

/// Construction options for an [`Invoker`](super::Invoker).
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Renames applied to incoming named arguments before filtering.
    pub renames: Option<RenameMap>,
    /// What to do when the provider cannot inspect the target.
    pub missing_signature: MissingSignature,
}

/// Policy for targets whose signature cannot be determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingSignature {
    /// Propagate [`SignatureError::Unavailable`](crate::SignatureError::Unavailable).
    #[default]
    Reject,
    /// Substitute the empty signature; every named argument is then
    /// filtered out at call time.
    AssumeEmpty,
}

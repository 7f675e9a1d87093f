use std::collections::BTreeMap;

use thiserror::Error;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::target::NamedArgs;

/// Errors that can occur when building a [`RenameMap`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// The same incoming name is renamed twice.
    #[error("duplicate rename source: {name}")]
    DuplicateSource { name: String },
    /// Two incoming names are renamed to the same parameter name.
    #[error("duplicate rename destination: {name}")]
    DuplicateDestination { name: String },
}

/// A static table translating incoming named-argument keys to a target's
/// parameter names.
///
/// Sources and destinations are both unique, so two incoming names can never
/// collide on one parameter name. Renames are applied in ascending source
/// order, which makes chained renames (`a → b` alongside `b → c`)
/// deterministic.
///
/// # Examples
///
/// ```
/// use braid_core::{RenameError, RenameMap};
///
/// let renames = RenameMap::new([("labels", "y_true"), ("logits", "y_pred")]).unwrap();
/// assert_eq!(renames.len(), 2);
///
/// let collision = RenameMap::new([("labels", "y_true"), ("targets", "y_true")]);
/// assert_eq!(
///     collision,
///     Err(RenameError::DuplicateDestination {
///         name: "y_true".to_string()
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")
)]
pub struct RenameMap {
    entries: BTreeMap<String, String>,
}

impl RenameMap {
    /// Creates a rename map from `(source, destination)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::DuplicateSource`] if a source name repeats, or
    /// [`RenameError::DuplicateDestination`] if two sources share a
    /// destination.
    pub fn new<I, K, V>(pairs: I) -> Result<Self, RenameError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = BTreeMap::new();

        for (source, destination) in pairs {
            let (source, destination) = (source.into(), destination.into());
            if entries.contains_key(&source) {
                return Err(RenameError::DuplicateSource { name: source });
            }
            if entries.values().any(|existing| *existing == destination) {
                return Err(RenameError::DuplicateDestination { name: destination });
            }
            entries.insert(source, destination);
        }

        Ok(Self { entries })
    }

    /// The number of rename pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no renames are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrites keys of `named` in ascending source order.
    ///
    /// A source absent from the bag is a no-op. A renamed entry replaces any
    /// existing entry under the destination name.
    pub(crate) fn apply<T>(&self, named: &mut NamedArgs<T>) {
        for (source, destination) in &self.entries {
            if let Some(value) = named.remove(source) {
                named.insert(destination.clone(), value);
            }
        }
    }
}

impl From<RenameMap> for BTreeMap<String, String> {
    fn from(renames: RenameMap) -> Self {
        renames.entries
    }
}

impl TryFrom<BTreeMap<String, String>> for RenameMap {
    type Error = RenameError;

    fn try_from(entries: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

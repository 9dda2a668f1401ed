//! Reference list splitting.
//!
//! ACS-formatted documents carry their reference lists as a single
//! semicolon-delimited string. This module splits such a string into its
//! individual, whitespace-trimmed reference fragments.

use serde::{Deserialize, Serialize};

/// An ordered list of reference fragments.
///
/// Serializes transparently as a JSON array of strings, in split order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceList(pub Vec<String>);

impl ReferenceList {
    /// Number of fragments in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the list holds no fragments.
    ///
    /// Note that splitting can never produce this: even an empty input
    /// yields one (empty) fragment. It exists for lists built by hand.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The fragments as string slices, in order.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Splits a semicolon-delimited reference list into trimmed fragments.
///
/// # Arguments
///
/// * `refs` - The raw reference list, e.g. `"Smith, A.; Jones, B."`
///
/// # Returns
///
/// A `ReferenceList` with one fragment per semicolon-delimited segment,
/// each stripped of leading and trailing whitespace. Order matches the
/// input. For an input containing `k` semicolons the list always holds
/// exactly `k + 1` fragments; adjacent or leading/trailing semicolons
/// produce empty-string fragments, and the empty input yields `[""]`.
///
/// The split is a literal one: semicolons inside quoted titles or
/// affiliations are not treated specially.
pub fn split_refs(refs: &str) -> ReferenceList {
    ReferenceList(refs.split(';').map(|s| s.trim().to_string()).collect())
}

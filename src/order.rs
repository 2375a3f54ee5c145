//! Derived value orders.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::value::ValueName;

/// One maximal chain of direct preference edges.
///
/// `[HONESTY, COURAGE, SELF_CONTROL]` reads HONESTY > COURAGE > SELF_CONTROL.
/// Only judged edges are followed; no transitive edge is ever synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivedOrder(Vec<ValueName>);

impl DerivedOrder {
    /// Wraps a path of values.
    #[must_use]
    pub fn new(values: Vec<ValueName>) -> Self {
        Self(values)
    }

    /// The most important value of the chain.
    #[must_use]
    pub fn head(&self) -> Option<ValueName> {
        self.0.first().copied()
    }

    /// The least important value of the chain.
    #[must_use]
    pub fn tail(&self) -> Option<ValueName> {
        self.0.last().copied()
    }

    /// Consecutive `(superior, inferior)` pairs of the chain.
    pub fn edges(&self) -> impl Iterator<Item = (ValueName, ValueName)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns the values as a vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<ValueName> {
        self.0
    }
}

impl Deref for DerivedOrder {
    type Target = [ValueName];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ValueName>> for DerivedOrder {
    fn from(values: Vec<ValueName>) -> Self {
        Self(values)
    }
}

impl fmt::Display for DerivedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_path(&self.0))
    }
}

/// Renders a path as `A > B > C`.
pub(crate) fn join_path(path: &[ValueName]) -> String {
    path.iter()
        .map(ValueName::as_str)
        .collect::<Vec<_>>()
        .join(" > ")
}

//! Contradictory preference cycles.
//!
//! Conflicts are surfaced, never resolved. When a walk finds A > B > C > A,
//! the resolver hands the path and the evidence index to a
//! [`ConflictReporter`]; the user settles it by rejecting a judgment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeEvidence, EvidenceIndex};
use crate::order::join_path;
use crate::value::ValueName;

/// Receives every cycle found during a derivation.
///
/// Any `FnMut(&[ValueName], &EvidenceIndex)` closure is a reporter. `path`
/// ends with a value that already appears earlier in it.
pub trait ConflictReporter {
    /// Called once per detected cycle.
    fn report_conflict(&mut self, path: &[ValueName], evidence: &EvidenceIndex);
}

impl<F> ConflictReporter for F
where
    F: FnMut(&[ValueName], &EvidenceIndex),
{
    fn report_conflict(&mut self, path: &[ValueName], evidence: &EvidenceIndex) {
        self(path, evidence);
    }
}

/// Stable identifier of a cycle, independent of where the walk entered it.
///
/// BLAKE3 over the cycle rotated to start at its smallest value, so
/// `A > B > C > A` and `B > C > A > B` share a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictFingerprint(String);

impl ConflictFingerprint {
    /// Fingerprints the ring of values that form a cycle.
    ///
    /// `ring` lists each cycle member once, without the closing repeat.
    #[must_use]
    pub fn of_ring(ring: &[ValueName]) -> Self {
        let start = ring
            .iter()
            .enumerate()
            .min_by_key(|(_, value)| **value)
            .map_or(0, |(i, _)| i);

        let mut hasher = blake3::Hasher::new();
        for value in ring[start..].iter().chain(&ring[..start]) {
            hasher.update(value.as_str().as_bytes());
            hasher.update(&[0]);
        }
        Self(hasher.finalize().to_hex().to_string())
    }

    /// Returns the hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConflictFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A detected cycle with the evidence for each of its edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// The walk that ran into the cycle, ending at the repeated value.
    pub path: Vec<ValueName>,

    /// The cycle itself: from the first occurrence of the repeated value to
    /// the end of `path`.
    pub cycle: Vec<ValueName>,

    /// Evidence for every edge of the cycle, in cycle order.
    pub evidence: Vec<EdgeEvidence>,

    /// Stable identifier shared by every walk that finds this cycle.
    pub fingerprint: ConflictFingerprint,
}

impl ConflictReport {
    /// Builds a report from a reporter callback's arguments.
    #[must_use]
    pub fn new(path: &[ValueName], index: &EvidenceIndex) -> Self {
        let start = match path.split_last() {
            Some((last, before)) => before.iter().position(|v| v == last).unwrap_or(0),
            None => 0,
        };
        let cycle = path[start..].to_vec();
        let ring = &cycle[..cycle.len().saturating_sub(1)];

        Self {
            path: path.to_vec(),
            evidence: index.for_path(&cycle),
            fingerprint: ConflictFingerprint::of_ring(ring),
            cycle,
        }
    }

    /// Returns true if the cycle is a single value judged above itself.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.cycle.len() == 2 && self.cycle[0] == self.cycle[1]
    }

    /// Number of judgments backing the cycle's edges.
    #[must_use]
    pub fn judgment_count(&self) -> usize {
        self.evidence.iter().map(|edge| edge.evidence.len()).sum()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conflict: {}", join_path(&self.path))
    }
}

/// Reporter that keeps a [`ConflictReport`] for every reported cycle.
#[derive(Debug, Clone, Default)]
pub struct ConflictCollector {
    reports: Vec<ConflictReport>,
}

impl ConflictCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order they were received.
    #[must_use]
    pub fn reports(&self) -> &[ConflictReport] {
        &self.reports
    }

    /// Consumes the collector, returning its reports.
    #[must_use]
    pub fn into_reports(self) -> Vec<ConflictReport> {
        self.reports
    }

    /// One report per distinct cycle, keeping the first seen.
    #[must_use]
    pub fn distinct(&self) -> Vec<&ConflictReport> {
        let mut seen = std::collections::HashSet::new();
        self.reports
            .iter()
            .filter(|report| seen.insert(report.fingerprint.clone()))
            .collect()
    }

    /// Number of reports received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ConflictReporter for ConflictCollector {
    fn report_conflict(&mut self, path: &[ValueName], evidence: &EvidenceIndex) {
        self.reports.push(ConflictReport::new(path, evidence));
    }
}

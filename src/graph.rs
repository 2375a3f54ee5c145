//! Preference graph builder.
//!
//! Converts a flat list of judgments into an adjacency list plus an
//! evidence index. Both are rebuilt from scratch on every call; nothing is
//! cached or shared between builds.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::judgment::{Evidence, Judgment};
use crate::value::ValueName;

/// Adjacency list from a value to the values it was judged superior to.
///
/// Keys iterate in the order they were first seen. Parallel edges are kept:
/// if `(A, B)` is judged twice, `B` appears twice among `A`'s successors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceGraph {
    nodes: Vec<ValueName>,
    adjacency: HashMap<ValueName, Vec<ValueName>>,
}

impl PreferenceGraph {
    /// Builds the graph and evidence index for a judgment set.
    #[must_use]
    pub fn build(judgments: &[Judgment]) -> (Self, EvidenceIndex) {
        build(judgments)
    }

    fn add_edge(&mut self, superior: ValueName, inferior: ValueName) {
        if !self.adjacency.contains_key(&superior) {
            self.nodes.push(superior);
        }
        self.adjacency.entry(superior).or_default().push(inferior);
    }

    /// Values with at least one outgoing edge, in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> &[ValueName] {
        &self.nodes
    }

    /// Values `value` was judged superior to, in judgment order.
    ///
    /// Empty for a value with no outgoing edge.
    #[must_use]
    pub fn successors(&self, value: ValueName) -> &[ValueName] {
        self.adjacency.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `value` has at least one outgoing edge.
    #[must_use]
    pub fn contains(&self, value: ValueName) -> bool {
        self.adjacency.contains_key(&value)
    }

    /// Number of values with outgoing edges.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// All evidence recorded for one directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEvidence {
    /// The value judged more important.
    pub superior: ValueName,
    /// The value judged less important.
    pub inferior: ValueName,
    /// Every judgment's evidence for this edge, in insertion order.
    pub evidence: Vec<Evidence>,
}

impl EdgeEvidence {
    /// Earliest parseable date among the evidence.
    #[must_use]
    pub fn first_seen(&self) -> Option<NaiveDate> {
        self.evidence.iter().filter_map(Evidence::parsed_date).min()
    }

    /// Latest parseable date among the evidence.
    #[must_use]
    pub fn last_seen(&self) -> Option<NaiveDate> {
        self.evidence.iter().filter_map(Evidence::parsed_date).max()
    }
}

/// Evidence keyed by directed edge `(superior, inferior)`.
///
/// Entries accumulate; a repeated edge appends rather than overwrites, so a
/// contested edge always shows its full history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<EdgeEvidence>", from = "Vec<EdgeEvidence>")]
pub struct EvidenceIndex {
    order: Vec<(ValueName, ValueName)>,
    entries: HashMap<(ValueName, ValueName), Vec<Evidence>>,
}

impl EvidenceIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends evidence for an edge.
    pub fn push(&mut self, superior: ValueName, inferior: ValueName, evidence: Evidence) {
        self.slot(superior, inferior).push(evidence);
    }

    fn slot(&mut self, superior: ValueName, inferior: ValueName) -> &mut Vec<Evidence> {
        let key = (superior, inferior);
        if !self.entries.contains_key(&key) {
            self.order.push(key);
        }
        self.entries.entry(key).or_default()
    }

    /// Evidence for an edge, empty if the edge was never judged.
    #[must_use]
    pub fn get(&self, superior: ValueName, inferior: ValueName) -> &[Evidence] {
        self.entries
            .get(&(superior, inferior))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates edges in first-seen order with their evidence.
    pub fn edges(&self) -> impl Iterator<Item = (ValueName, ValueName, &[Evidence])> + '_ {
        self.order
            .iter()
            .map(move |&(superior, inferior)| (superior, inferior, self.get(superior, inferior)))
    }

    /// Evidence for every consecutive edge along `path`.
    ///
    /// Edges with no recorded evidence are skipped.
    #[must_use]
    pub fn for_path(&self, path: &[ValueName]) -> Vec<EdgeEvidence> {
        path.windows(2)
            .filter_map(|pair| {
                let evidence = self.get(pair[0], pair[1]);
                if evidence.is_empty() {
                    return None;
                }
                Some(EdgeEvidence {
                    superior: pair[0],
                    inferior: pair[1],
                    evidence: evidence.to_vec(),
                })
            })
            .collect()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no evidence was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl From<EvidenceIndex> for Vec<EdgeEvidence> {
    fn from(index: EvidenceIndex) -> Self {
        let EvidenceIndex { order, mut entries } = index;
        order
            .into_iter()
            .map(|(superior, inferior)| EdgeEvidence {
                superior,
                inferior,
                evidence: entries.remove(&(superior, inferior)).unwrap_or_default(),
            })
            .collect()
    }
}

impl From<Vec<EdgeEvidence>> for EvidenceIndex {
    fn from(edges: Vec<EdgeEvidence>) -> Self {
        let mut index = Self::new();
        for edge in edges {
            // An edge listed with no evidence is still an edge.
            index
                .slot(edge.superior, edge.inferior)
                .extend(edge.evidence);
        }
        index
    }
}

/// Builds the preference graph and evidence index for a judgment set.
///
/// Every judgment contributes; callers filter to confirmed judgments first.
#[must_use]
pub fn build(judgments: &[Judgment]) -> (PreferenceGraph, EvidenceIndex) {
    let mut graph = PreferenceGraph::default();
    let mut index = EvidenceIndex::new();

    for judgment in judgments {
        graph.add_edge(judgment.superior, judgment.inferior);
        index.push(judgment.superior, judgment.inferior, judgment.evidence());
    }

    debug!(
        judgments = judgments.len(),
        nodes = graph.node_count(),
        edges = index.len(),
        "built preference graph"
    );

    (graph, index)
}

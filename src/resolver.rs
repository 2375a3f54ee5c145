//! Order and conflict resolver.
//!
//! Walks the preference graph depth-first from every value that has an
//! outgoing edge, recording each maximal chain as a [`DerivedOrder`] and
//! reporting each walk that runs back into its own path as a conflict.
//!
//! The enumeration is exhaustive by construction. There is no visited set
//! shared between start nodes, so a chain `A > B > C` is recorded from `A`
//! and its tail `B > C` again from `B`, and a cycle is reported once per
//! start node that reaches it. Callers render the results as a set of
//! partial-order edges rather than one canonical ranking.
//!
//! Only a value already on the *current* path counts as a cycle. A value
//! that shows up in two unrelated chains is not a conflict.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::conflict::{ConflictCollector, ConflictReport, ConflictReporter};
use crate::graph::{build, EvidenceIndex, PreferenceGraph};
use crate::judgment::Judgment;
use crate::order::{join_path, DerivedOrder};
use crate::value::ValueName;

/// Resolver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of derived orders to record. `None` records all.
    ///
    /// Reaching the limit stops recording orders only; the walk still runs
    /// to completion so every conflict is reported.
    pub max_orders: Option<usize>,
}

impl ResolverConfig {
    /// Caps the number of recorded orders.
    #[must_use]
    pub const fn with_max_orders(mut self, max_orders: usize) -> Self {
        self.max_orders = Some(max_orders);
        self
    }
}

/// Everything one derivation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    /// Maximal chains, in discovery order.
    pub orders: Vec<DerivedOrder>,

    /// One report per cycle encounter, in discovery order.
    pub conflicts: Vec<ConflictReport>,

    /// True if `max_orders` cut the order list short.
    pub truncated: bool,
}

impl Derivation {
    /// Returns true if at least one cycle was found.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Derives value orders and detects cycles.
///
/// Holds configuration only. Every call builds its own graph and evidence
/// index, so one resolver can serve any number of callers and calls.
///
/// ```
/// use dwell_values::{EvidenceIndex, Judgment, OrderResolver, ValueName};
/// use dwell_values::ValueName::{Courage, Honesty, SelfControl};
///
/// let judgments = vec![
///     Judgment::new(Honesty, Courage, "admitted the mistake", "2024-01-01"),
///     Judgment::new(Courage, SelfControl, "spoke up", "2024-01-02"),
/// ];
///
/// let mut conflicts = Vec::new();
/// let orders = OrderResolver::default().derive_orders(
///     &judgments,
///     &mut |path: &[ValueName], _: &EvidenceIndex| conflicts.push(path.to_vec()),
/// );
///
/// assert_eq!(orders[0].to_string(), "HONESTY > COURAGE > SELF_CONTROL");
/// assert!(conflicts.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderResolver {
    config: ResolverConfig,
}

impl OrderResolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Derives every maximal chain, reporting cycles to `reporter`.
    ///
    /// Never fails. Empty input yields no orders and no reports. A
    /// self-comparison `X > X` is reported as the cycle `[X, X]`.
    pub fn derive_orders<R>(&self, judgments: &[Judgment], reporter: &mut R) -> Vec<DerivedOrder>
    where
        R: ConflictReporter + ?Sized,
    {
        self.enumerate(judgments, reporter).0
    }

    /// Derives orders and collects a [`ConflictReport`] per cycle.
    #[must_use]
    pub fn derive(&self, judgments: &[Judgment]) -> Derivation {
        let mut collector = ConflictCollector::new();
        let (orders, truncated) = self.enumerate(judgments, &mut collector);
        Derivation {
            orders,
            conflicts: collector.into_reports(),
            truncated,
        }
    }

    /// Returns true as soon as some start node yields more than one
    /// completed path.
    ///
    /// This is a branching signal, not a cycle signal. A fork `A > B`,
    /// `A > C` answers true with no cycle anywhere, while a bare two-value
    /// cycle `A > B > A` answers false because every walk is pruned before
    /// it completes. Use [`OrderResolver::has_cycle`] to ask about cycles.
    #[must_use]
    pub fn has_conflict(&self, judgments: &[Judgment]) -> bool {
        let (graph, index) = build(judgments);
        let mut ignore = |_: &[ValueName], _: &EvidenceIndex| {};
        graph.nodes().iter().any(|&start| {
            let mut walk = Walk::new(&graph, &index, &mut ignore, Mode::Branching, None);
            walk.visit(start);
            walk.halted
        })
    }

    /// Returns true if deriving orders would report at least one cycle.
    ///
    /// Stops at the first cycle found.
    #[must_use]
    pub fn has_cycle(&self, judgments: &[Judgment]) -> bool {
        let (graph, index) = build(judgments);
        let mut ignore = |_: &[ValueName], _: &EvidenceIndex| {};
        let mut walk = Walk::new(&graph, &index, &mut ignore, Mode::FirstCycle, None);
        walk.run();
        walk.conflicts > 0
    }

    fn enumerate<R>(&self, judgments: &[Judgment], reporter: &mut R) -> (Vec<DerivedOrder>, bool)
    where
        R: ConflictReporter + ?Sized,
    {
        let (graph, index) = build(judgments);
        let mut walk = Walk::new(&graph, &index, reporter, Mode::Derive, self.config.max_orders);
        walk.run();

        debug!(
            orders = walk.orders.len(),
            conflicts = walk.conflicts,
            truncated = walk.truncated,
            "derivation finished"
        );
        (walk.orders, walk.truncated)
    }
}

/// What a walk is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Record orders up to the cap and report every conflict.
    Derive,
    /// Halt at the first conflict.
    FirstCycle,
    /// Count completed paths without storing them; halt at the second.
    Branching,
}

/// State of one derivation: the active path plus what has been recorded.
struct Walk<'a, R: ?Sized> {
    graph: &'a PreferenceGraph,
    index: &'a EvidenceIndex,
    reporter: &'a mut R,
    mode: Mode,
    path: Vec<ValueName>,
    orders: Vec<DerivedOrder>,
    max_orders: Option<usize>,
    truncated: bool,
    completed: usize,
    conflicts: usize,
    halted: bool,
}

impl<'a, R> Walk<'a, R>
where
    R: ConflictReporter + ?Sized,
{
    fn new(
        graph: &'a PreferenceGraph,
        index: &'a EvidenceIndex,
        reporter: &'a mut R,
        mode: Mode,
        max_orders: Option<usize>,
    ) -> Self {
        Self {
            graph,
            index,
            reporter,
            mode,
            path: Vec::new(),
            orders: Vec::new(),
            max_orders,
            truncated: false,
            completed: 0,
            conflicts: 0,
            halted: false,
        }
    }

    fn run(&mut self) {
        let graph = self.graph;
        for &start in graph.nodes() {
            if self.halted {
                break;
            }
            trace!(start = %start, "walking from start node");
            self.visit(start);
        }
    }

    fn visit(&mut self, node: ValueName) {
        self.path.push(node);

        let graph = self.graph;
        let successors = graph.successors(node);
        if successors.is_empty() {
            self.record();
        }
        for &next in successors {
            if self.halted {
                break;
            }
            if self.path.contains(&next) {
                self.path.push(next);
                self.report();
                self.path.pop();
                continue;
            }
            self.visit(next);
        }

        self.path.pop();
    }

    fn report(&mut self) {
        self.conflicts += 1;
        match self.mode {
            Mode::Derive => {
                warn!(path = %join_path(&self.path), "conflict detected");
            }
            Mode::FirstCycle => self.halted = true,
            Mode::Branching => {}
        }
        self.reporter.report_conflict(&self.path, self.index);
    }

    fn record(&mut self) {
        self.completed += 1;
        match self.mode {
            Mode::Derive => {}
            Mode::FirstCycle => return,
            Mode::Branching => {
                self.halted = self.completed > 1;
                return;
            }
        }

        if let Some(max) = self.max_orders {
            if self.orders.len() >= max {
                if !self.truncated {
                    warn!(max_orders = max, "derived orders truncated");
                }
                self.truncated = true;
                return;
            }
        }
        self.orders.push(DerivedOrder::new(self.path.clone()));
    }
}

/// Derives orders with the default configuration, calling `on_conflict`
/// once per cycle encounter.
pub fn derive_orders<F>(judgments: &[Judgment], mut on_conflict: F) -> Vec<DerivedOrder>
where
    F: FnMut(&[ValueName], &EvidenceIndex),
{
    OrderResolver::default().derive_orders(judgments, &mut on_conflict)
}

/// Branching check with the default configuration.
///
/// See [`OrderResolver::has_conflict`]; this does not detect cycles.
#[must_use]
pub fn has_conflict(judgments: &[Judgment]) -> bool {
    OrderResolver::default().has_conflict(judgments)
}

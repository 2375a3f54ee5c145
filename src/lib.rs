//! # dwell-values - value-preference reasoning for reflective journaling
//!
//! Journal entries reveal which personal values a writer puts first. An
//! upstream extractor turns entries into pairwise judgments ("HONESTY
//! mattered more than POLITENESS here"); the user confirms or rejects each
//! one. This crate takes the confirmed judgments and works out what they
//! imply.
//!
//! ## Core Concepts
//!
//! - **Judgment**: one pairwise claim with its reason, quote and date
//! - **PreferenceGraph**: adjacency list of direct "more important than" edges
//! - **EvidenceIndex**: every reason and date behind each edge, never overwritten
//! - **DerivedOrder**: a maximal chain of direct edges, e.g. A > B > C
//! - **Conflict**: a cycle such as A > B > C > A, surfaced for the user to settle
//!
//! The engine never ranks values numerically and never resolves a conflict
//! on its own. It reports every chain it can derive and every cycle it walks
//! into.
//!
//! ## Usage
//!
//! ```rust
//! use dwell_values::{derive_orders, Judgment, ValueName};
//!
//! let judgments = vec![
//!     Judgment::new(ValueName::Honesty, ValueName::Courage, "owned up", "2024-01-01"),
//!     Judgment::new(ValueName::Courage, ValueName::Honesty, "bluffed", "2024-01-08"),
//! ];
//!
//! let mut cycles = Vec::new();
//! let orders = derive_orders(&judgments, |path, _evidence| cycles.push(path.to_vec()));
//!
//! assert!(orders.is_empty());
//! assert_eq!(cycles.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod catalog;

// Vocabularies
pub mod emotion;
pub mod value;

// Input
pub mod error;
pub mod ingest;
pub mod judgment;

// Reasoning engine
pub mod conflict;
pub mod graph;
pub mod order;
pub mod resolver;

// Re-export primary types at crate root for convenience
pub use conflict::{ConflictCollector, ConflictFingerprint, ConflictReport, ConflictReporter};
pub use emotion::{EmotionName, HwfEmotion};
pub use error::{DwellError, DwellResult, ValidationError};
pub use graph::{build, EdgeEvidence, EvidenceIndex, PreferenceGraph};
pub use ingest::{parse_comparisons, ValuesComparison, ValuesComparisons};
pub use judgment::{confirmed_judgments, Evidence, Judgment, ReviewStatus, ReviewedJudgment};
pub use order::DerivedOrder;
pub use resolver::{derive_orders, has_conflict, Derivation, OrderResolver, ResolverConfig};
pub use value::{RokeachValue, ValueName};

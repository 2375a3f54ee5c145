use dwell_values::ValueName::{
    AComfortableLife, Ambition, Courage, FamilySecurity, Freedom, Honesty, Logic, Love, Obedience,
    Politeness, SelfControl,
};
use dwell_values::{
    build, confirmed_judgments, derive_orders, has_conflict, ConflictCollector, EvidenceIndex,
    Judgment, OrderResolver, ResolverConfig, ReviewStatus, ReviewedJudgment, ValueName,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn judge(superior: ValueName, inferior: ValueName, reason: &str, date: &str) -> Judgment {
    Judgment::new(superior, inferior, reason, date)
}

fn as_paths(orders: &[dwell_values::DerivedOrder]) -> Vec<Vec<ValueName>> {
    orders.iter().map(|o| o.to_vec()).collect()
}

#[test]
fn empty_input_yields_nothing() {
    init_tracing();
    let mut called = false;
    let orders = derive_orders(&[], |_, _| called = true);
    assert!(orders.is_empty());
    assert!(!called);
}

#[test]
fn single_edge_yields_one_order() {
    init_tracing();
    let mut conflicts = 0;
    let orders = derive_orders(&[judge(Honesty, Courage, "r", "2024-01-01")], |_, _| {
        conflicts += 1;
    });
    assert_eq!(as_paths(&orders), vec![vec![Honesty, Courage]]);
    assert_eq!(conflicts, 0);
}

#[test]
fn chain_is_reported_from_each_start() {
    init_tracing();
    let orders = derive_orders(
        &[
            judge(Honesty, Courage, "a", "2024-01-01"),
            judge(Courage, SelfControl, "b", "2024-01-02"),
        ],
        |_, _| panic!("no cycle expected"),
    );
    let paths = as_paths(&orders);
    assert!(paths.contains(&vec![Honesty, Courage, SelfControl]));
    assert!(paths.contains(&vec![Courage, SelfControl]));
    assert_eq!(paths.len(), 2);
}

#[test]
fn cycle_reports_path_and_full_evidence() {
    init_tracing();
    let judgments = [
        judge(Honesty, Courage, "admitted the error", "2024-01-01"),
        judge(Courage, Logic, "acted on instinct", "2024-01-02"),
        judge(Logic, Honesty, "kept quiet to stay consistent", "2024-01-03"),
    ];

    let mut reports: Vec<(Vec<ValueName>, EvidenceIndex)> = Vec::new();
    derive_orders(&judgments, |path, evidence| {
        reports.push((path.to_vec(), evidence.clone()));
    });

    assert!(!reports.is_empty());
    let (path, evidence) = &reports[0];
    assert_eq!(path, &vec![Honesty, Courage, Logic, Honesty]);
    assert_eq!(path.first(), path.last());

    assert_eq!(evidence.len(), 3);
    assert_eq!(evidence.get(Honesty, Courage)[0].reason, "admitted the error");
    assert_eq!(evidence.get(Courage, Logic)[0].reason, "acted on instinct");
    assert_eq!(
        evidence.get(Logic, Honesty)[0].reason,
        "kept quiet to stay consistent"
    );
}

#[test]
fn evidence_accumulates_in_insertion_order() {
    let (_, index) = build(&[
        judge(Love, Ambition, "left early for the recital", "2024-03-01"),
        judge(Love, Ambition, "turned down the late meeting", "2024-03-09"),
    ]);
    let evidence = index.get(Love, Ambition);
    assert_eq!(evidence.len(), 2);
    assert_eq!(evidence[0].reason, "left early for the recital");
    assert_eq!(evidence[0].date, "2024-03-01");
    assert_eq!(evidence[1].reason, "turned down the late meeting");
    assert_eq!(evidence[1].date, "2024-03-09");
}

#[test]
fn derivation_is_idempotent_across_resolvers() {
    init_tracing();
    let judgments = vec![
        judge(Honesty, Courage, "a", "2024-01-01"),
        judge(Courage, Honesty, "b", "2024-01-02"),
        judge(Courage, Politeness, "c", "2024-01-03"),
        judge(Freedom, Obedience, "d", "2024-01-04"),
    ];

    let run = || {
        let mut collector = ConflictCollector::new();
        let orders = OrderResolver::default().derive_orders(&judgments, &mut collector);
        (orders, collector.into_reports())
    };

    let (orders_a, conflicts_a) = run();
    let (orders_b, conflicts_b) = run();
    assert_eq!(orders_a, orders_b);
    assert_eq!(conflicts_a, conflicts_b);

    let shared = OrderResolver::default();
    assert_eq!(shared.derive(&judgments), shared.derive(&judgments));
}

#[test]
fn branching_signal_is_not_cycle_detection() {
    init_tracing();

    // Two disjoint chains, one of them forking: branching, but no cycle.
    let forked = [
        judge(Honesty, Courage, "a", "2024-01-01"),
        judge(Honesty, Logic, "b", "2024-01-02"),
        judge(Freedom, Obedience, "c", "2024-01-03"),
    ];
    let mut cycles = 0;
    derive_orders(&forked, |_, _| cycles += 1);
    assert!(has_conflict(&forked));
    assert_eq!(cycles, 0);

    // A bare two-value cycle: a cycle, but no completed path anywhere.
    let cyclic = [
        judge(FamilySecurity, AComfortableLife, "a", "2024-01-01"),
        judge(AComfortableLife, FamilySecurity, "b", "2024-01-02"),
    ];
    let mut cycles = 0;
    derive_orders(&cyclic, |_, _| cycles += 1);
    assert!(!has_conflict(&cyclic));
    assert_eq!(cycles, 2);

    // Disjoint linear chains: neither signal fires.
    let linear = [
        judge(Honesty, Courage, "a", "2024-01-01"),
        judge(Freedom, Obedience, "b", "2024-01-02"),
    ];
    let mut cycles = 0;
    derive_orders(&linear, |_, _| cycles += 1);
    assert!(!has_conflict(&linear));
    assert_eq!(cycles, 0);
}

#[test]
fn rejecting_a_judgment_resolves_the_conflict() {
    init_tracing();
    let reviewed = vec![
        ReviewedJudgment::new(judge(Honesty, Politeness, "a", "2024-01-01"), ReviewStatus::Confirmed),
        ReviewedJudgment::new(judge(Politeness, Honesty, "b", "2024-01-02"), ReviewStatus::Confirmed),
    ];
    let resolver = OrderResolver::default();
    assert!(resolver.derive(&confirmed_judgments(reviewed.clone())).has_conflicts());

    let mut reviewed = reviewed;
    reviewed[1].status = ReviewStatus::Rejected;
    let derivation = resolver.derive(&confirmed_judgments(reviewed));
    assert!(!derivation.has_conflicts());
    assert_eq!(as_paths(&derivation.orders), vec![vec![Honesty, Politeness]]);
}

#[test]
fn self_comparison_is_tolerated_as_conflict() {
    init_tracing();
    let judgment = judge(Logic, Logic, "malformed", "2024-01-01");
    assert!(judgment.validate().is_err());

    let derivation = OrderResolver::default().derive(&[judgment]);
    assert!(derivation.orders.is_empty());
    assert_eq!(derivation.conflicts.len(), 1);
    assert_eq!(derivation.conflicts[0].path, vec![Logic, Logic]);
    assert!(derivation.conflicts[0].is_self_loop());
}

#[test]
fn same_cycle_from_different_starts_shares_fingerprint() {
    let derivation = OrderResolver::default().derive(&[
        judge(Honesty, Courage, "a", "2024-01-01"),
        judge(Courage, Logic, "b", "2024-01-02"),
        judge(Logic, Honesty, "c", "2024-01-03"),
    ]);
    assert_eq!(derivation.conflicts.len(), 3);
    let first = &derivation.conflicts[0].fingerprint;
    assert!(derivation.conflicts.iter().all(|c| &c.fingerprint == first));
}

#[test]
fn truncated_derivation_reports_every_conflict() {
    init_tracing();
    let judgments = [
        judge(Honesty, Courage, "a", "2024-01-01"),
        judge(Honesty, Logic, "b", "2024-01-02"),
        judge(Logic, Honesty, "c", "2024-01-03"),
    ];
    let capped = OrderResolver::new(ResolverConfig::default().with_max_orders(1)).derive(&judgments);
    let full = OrderResolver::default().derive(&judgments);

    assert!(capped.truncated);
    assert_eq!(capped.orders.len(), 1);
    assert!(full.orders.len() > 1);
    assert_eq!(capped.conflicts, full.conflicts);
}

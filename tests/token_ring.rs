use ringcheck::config::DiagnosticOptions;
use ringcheck::consistency::ConsistencyLevel;
use ringcheck::diagnostic::Diagnostic;
use ringcheck::generator::{RangeReplicas, Replica, TokenRingDiagnosticGenerator};
use ringcheck::keyspace::{KeyspaceMetadata, ReplicationStrategy};
use ringcheck::status::Status;
use ringcheck::token::{Token, TokenRange};
use ringcheck::token_range_diagnostic::TokenRangeDiagnostic;
use ringcheck::token_ring_diagnostic::TokenRingDiagnostic;
use serde_json::json;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::TRACE)
    .with_test_writer()
    .try_init();
}

// Three ranges tiling the whole ring.
fn full_ring() -> [TokenRange; 3] {
  let a = Token(-3_074_457_345_618_258_603);
  let b = Token(3_074_457_345_618_258_602);
  [
    TokenRange::between(Token::MIN, a),
    TokenRange::between(a, b),
    TokenRange::between(b, Token::MIN),
  ]
}

#[test]
fn quorum_ring_with_one_degraded_range() {
  init_tracing();
  let [r1, r2, r3] = full_ring();
  let ring = TokenRingDiagnostic::new(
    KeyspaceMetadata::new("ks1", ReplicationStrategy::simple(3)),
    ConsistencyLevel::Quorum,
    None,
    vec![
      TokenRangeDiagnostic::new(r3, 2, 2),
      TokenRangeDiagnostic::new(r1, 2, 2),
      TokenRangeDiagnostic::new(r2, 2, 1),
    ],
  )
  .unwrap();

  let statuses: Vec<Status> = ring
    .token_range_diagnostics()
    .iter()
    .map(|d| d.status())
    .collect();
  assert_eq!(
    statuses,
    vec![Status::Available, Status::Unavailable, Status::Available]
  );
  assert_eq!(ring.status(), Status::Unavailable);
  assert_eq!(ring.datacenter(), None);

  let second = ring.token_range_diagnostics().iter().nth(1).unwrap();
  assert_eq!(second.token_range(), &r2);
  let details = second.details();
  assert_eq!(details.len(), 2);
  assert_eq!(details["required"], json!(2));
  assert_eq!(details["alive"], json!(1));
}

#[test]
fn generator_end_to_end() {
  init_tracing();
  let keyspace = KeyspaceMetadata::new(
    "ks1",
    ReplicationStrategy::network_topology([("dc1", 3), ("dc2", 1)]),
  );
  let nodes = |down: &[&str]| -> Vec<Replica> {
    [("n1", "dc1"), ("n2", "dc1"), ("n3", "dc1"), ("m1", "dc2")]
      .iter()
      .map(|(n, dc)| Replica::new(*n, *dc, !down.contains(n)))
      .collect()
  };
  let [r1, r2, r3] = full_ring();
  let snapshot = vec![
    RangeReplicas::new(r1, nodes(&[])),
    RangeReplicas::new(r2, nodes(&["m1"])),
    RangeReplicas::new(r3, nodes(&["n1", "n2"])),
  ];

  let local = TokenRingDiagnosticGenerator::new(
    keyspace.clone(),
    DiagnosticOptions::local(ConsistencyLevel::LocalQuorum, "dc1"),
  )
  .unwrap()
  .generate(snapshot.clone())
  .unwrap();
  assert_eq!(local.status(), Status::Unavailable);
  assert_eq!(local.unavailable_ranges().count(), 1);

  let remote = TokenRingDiagnosticGenerator::new(
    keyspace.clone(),
    DiagnosticOptions::local(ConsistencyLevel::LocalOne, "dc2"),
  )
  .unwrap()
  .generate(snapshot.clone())
  .unwrap();
  let remote_unavailable: Vec<_> = remote
    .unavailable_ranges()
    .map(|d| *d.token_range())
    .collect();
  assert_eq!(remote_unavailable, vec![r2]);

  let one = TokenRingDiagnosticGenerator::new(keyspace, DiagnosticOptions::new(ConsistencyLevel::One))
    .unwrap()
    .generate(snapshot)
    .unwrap();
  assert_eq!(one.status(), Status::Available);
  assert_eq!(one.details()["available_ranges"], json!(3));
}

#[test]
fn report_renders_as_json() {
  init_tracing();
  let ring = TokenRingDiagnostic::new(
    KeyspaceMetadata::new("ks1", ReplicationStrategy::simple(1)),
    ConsistencyLevel::LocalOne,
    Some("dc1".to_string()),
    vec![TokenRangeDiagnostic::new(TokenRange::new(0, 0), 1, 1)],
  )
  .unwrap();
  let report = serde_json::to_value(&ring).unwrap();
  assert_eq!(report["datacenter"], json!("dc1"));
  assert_eq!(report["consistency_level"], json!("LOCAL_ONE"));
  assert_eq!(report["status"], json!("AVAILABLE"));
  assert_eq!(report["token_ranges"].as_array().map(Vec::len), Some(1));
}

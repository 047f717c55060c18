//! End-to-end behaviour of the run workflow against in-memory ports.

mod support;

use std::sync::Arc;

use classbridge_core::{MeetingProvisioner, SyncService};
use classbridge_domain::{ClassBridgeError, LicenseTier, MeetingDefaults, MeetingRequest};
use support::{
    request, CountingCredentials, MemorySink, MockDirectory, MockScheduler, StaticSource,
};

struct Harness {
    directory: MockDirectory,
    scheduler: MockScheduler,
    credentials: Arc<CountingCredentials>,
    json: MemorySink,
    csv: MemorySink,
}

impl Harness {
    fn new(directory: MockDirectory) -> Self {
        Self {
            directory,
            scheduler: MockScheduler::new(),
            credentials: Arc::new(CountingCredentials::default()),
            json: MemorySink::named("json"),
            csv: MemorySink::named("csv"),
        }
    }

    fn service(&self, requests: Vec<MeetingRequest>) -> SyncService {
        SyncService::new(
            Arc::new(StaticSource(Ok(requests))),
            self.credentials.clone(),
            Arc::new(self.directory.clone()),
            Arc::new(self.scheduler.clone()),
        )
        .with_sink(Arc::new(self.json.clone()))
        .with_sink(Arc::new(self.csv.clone()))
    }
}

#[tokio::test]
async fn eligible_batch_creates_one_meeting_per_record() {
    let harness = Harness::new(MockDirectory::new().licensed(&["alice", "bob"]));
    let requests = vec![request("101", "alice", None), request("102", "bob", Some("alice"))];

    let report = harness.service(requests).run().await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.records_loaded, 2);
    let calls: Vec<_> = harness.scheduler.calls().into_iter().map(|(id, _)| id).collect();
    assert_eq!(calls, vec!["101", "102"]);

    for sink in [&harness.json, &harness.csv] {
        let rows = sink.rows().expect("sink written");
        let ids: Vec<_> = rows.iter().map(|r| r.class_id.as_str()).collect();
        assert_eq!(ids, vec!["101", "102"]);
    }
}

#[tokio::test]
async fn ineligible_alternate_blocks_all_provisioning() {
    let directory = MockDirectory::new()
        .licensed(&["alice", "bob"])
        .with_account("mallory", LicenseTier::Basic);
    let harness = Harness::new(directory);
    let requests = vec![request("101", "alice", None), request("102", "bob", Some("mallory"))];

    let report = harness.service(requests).run().await.unwrap();

    assert!(!report.verdict.is_eligible());
    assert!(report.outcome.is_none());
    assert!(harness.scheduler.calls().is_empty());
    assert!(harness.json.rows().is_none());
    assert!(harness.csv.rows().is_none());
    assert!(report.sinks.is_empty());
    assert!(!report.is_success());
}

#[tokio::test]
async fn check_only_stops_after_the_gate() {
    let harness = Harness::new(MockDirectory::new().licensed(&["alice"]));

    let report = harness
        .service(vec![request("101", "alice", None)])
        .check_only(true)
        .run()
        .await
        .unwrap();

    assert!(report.verdict.is_eligible());
    assert!(report.outcome.is_none());
    assert!(harness.scheduler.calls().is_empty());
    assert!(harness.json.rows().is_none());
}

#[tokio::test]
async fn failed_record_is_collected_and_later_records_still_run() {
    let mut harness = Harness::new(MockDirectory::new().licensed(&["alice"]));
    harness.scheduler = MockScheduler::new().failing_for("102");
    let requests = vec![
        request("101", "alice", None),
        request("102", "alice", None),
        request("103", "alice", None),
    ];

    let report = harness.service(requests).run().await.unwrap();

    let outcome = report.outcome.clone().unwrap();
    let created: Vec<_> = outcome.created.iter().map(|r| r.class_id.as_str()).collect();
    assert_eq!(created, vec!["101", "103"]);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].class_id, "102");
    assert_eq!(harness.json.rows().unwrap().len(), 2);
    assert!(!report.is_success());
}

#[tokio::test]
async fn failing_sink_does_not_affect_the_other() {
    let harness = Harness::new(MockDirectory::new().licensed(&["alice"]));
    let good = MemorySink::named("csv");
    let service = SyncService::new(
        Arc::new(StaticSource(Ok(vec![request("101", "alice", None)]))),
        harness.credentials.clone(),
        Arc::new(harness.directory.clone()),
        Arc::new(harness.scheduler.clone()),
    )
    .with_sink(Arc::new(MemorySink::failing("json")))
    .with_sink(Arc::new(good.clone()));

    let report = service.run().await.unwrap();

    assert_eq!(report.sinks.len(), 2);
    assert!(!report.sinks[0].succeeded());
    assert!(report.sinks[1].succeeded());
    assert_eq!(good.rows().unwrap().len(), 1);
    assert_eq!(report.outcome.unwrap().created.len(), 1);
}

#[tokio::test]
async fn parse_error_aborts_before_any_remote_call() {
    let harness = Harness::new(MockDirectory::new());
    let service = SyncService::new(
        Arc::new(StaticSource(Err(ClassBridgeError::Parse("row 3: missing column".into())))),
        harness.credentials.clone(),
        Arc::new(harness.directory.clone()),
        Arc::new(harness.scheduler.clone()),
    );

    let err = service.run().await.unwrap_err();

    assert!(err.is_fatal());
    assert!(harness.directory.lookups().is_empty());
    assert_eq!(harness.credentials.issued(), 0);
}

#[tokio::test]
async fn credential_error_aborts_before_any_lookup() {
    let harness = Harness::new(MockDirectory::new().licensed(&["alice"]));
    let service = SyncService::new(
        Arc::new(StaticSource(Ok(vec![request("101", "alice", None)]))),
        Arc::new(CountingCredentials::failing()),
        Arc::new(harness.directory.clone()),
        Arc::new(harness.scheduler.clone()),
    );

    let err = service.run().await.unwrap_err();

    assert!(matches!(err, ClassBridgeError::Config(_)));
    assert!(harness.directory.lookups().is_empty());
}

#[tokio::test]
async fn a_fresh_credential_is_minted_per_phase() {
    let harness = Harness::new(MockDirectory::new().licensed(&["alice"]));

    harness.service(vec![request("101", "alice", None)]).run().await.unwrap();

    assert_eq!(harness.credentials.issued(), 2);
    assert_eq!(harness.scheduler.calls()[0].1, "token-2");
}

#[tokio::test]
async fn provisioner_preserves_order_and_class_ids() {
    let scheduler = MockScheduler::new();
    let provisioner = MeetingProvisioner::new(Arc::new(scheduler.clone()));
    let requests: Vec<_> =
        (1..=5).map(|n| request(&format!("C-{n}"), "alice", None)).collect();

    let outcome = provisioner.provision(&requests, "token").await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.attempted(), 5);
    for (row, source) in outcome.created.iter().zip(&requests) {
        assert_eq!(row.class_id, source.class_id);
    }
}

#[tokio::test]
async fn every_creation_carries_the_fixed_daily_bundle() {
    let scheduler = MockScheduler::new();
    let provisioner = MeetingProvisioner::new(Arc::new(scheduler.clone()));
    let requests = vec![request("C-1", "alice", None), request("C-2", "bob", Some("alice"))];

    provisioner.provision(&requests, "token").await;

    let settings = scheduler.settings();
    assert_eq!(settings.len(), 2);
    for bundle in settings {
        assert_eq!(bundle, MeetingDefaults::default());
        assert_eq!(bundle.recurrence.recurrence_type, 1);
        assert_eq!(bundle.audio, "both");
        assert_eq!(bundle.auto_recording, "none");
    }
}

//! End-to-end lead lifecycle against the real JSON file storage: the
//! durable records round-trip, corruption fails closed, and a second store
//! instance sees exactly what the first one wrote.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use studio_crm::workflows::crm::{
    export_leads_csv, CrmStorage, InteractionDraft, InteractionKind, JsonFileStorage, Lead,
    LeadIntake, LeadStatus, LeadStore, LeadStoreError, LeadSyncDispatcher, StorageError,
    SyncDispatchError, SyncJob,
};
use studio_crm::workflows::crm::stats;
use studio_crm::workflows::quiz::{score, AnswerSet};

#[derive(Default, Clone)]
struct RecordingDispatcher {
    jobs: Arc<Mutex<Vec<SyncJob>>>,
}

impl LeadSyncDispatcher for RecordingDispatcher {
    fn dispatch(&self, job: SyncJob) -> Result<(), SyncDispatchError> {
        self.jobs.lock().expect("lock").push(job);
        Ok(())
    }
}

fn intake() -> LeadIntake {
    LeadIntake {
        name: "Estúdio Arquitetura".to_string(),
        email: "contato@estudioarq.com.br".to_string(),
        phone: "+55 31 96666-5555".to_string(),
        company: Some("Estúdio Arquitetura".to_string()),
        business_type: Some("arquitetura".to_string()),
        how_found: Some("Google".to_string()),
        budget: Some("R$ 3.000 - R$ 5.500".to_string()),
        deadline: None,
        notes: Some("Quer destacar projetos residenciais".to_string()),
    }
}

fn quiz_answers() -> AnswerSet {
    [(1u8, "1b"), (2, "2b"), (3, "3b")]
        .into_iter()
        .map(|(question, option)| (question, option.to_string()))
        .collect::<BTreeMap<u8, String>>()
}

async fn open_store(
    dir: &std::path::Path,
) -> LeadStore<JsonFileStorage, RecordingDispatcher> {
    let storage = Arc::new(JsonFileStorage::new(dir));
    let sync = Arc::new(RecordingDispatcher::default());
    LeadStore::open(storage, sync).await.expect("store opens")
}

#[tokio::test]
async fn persisted_leads_survive_a_store_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let first = open_store(dir.path()).await;
    let created = first.create(intake()).await.expect("create");
    let outcome = score(&quiz_answers());
    first
        .attach_quiz_result(&created.id, quiz_answers(), outcome.category)
        .await
        .expect("attach result");
    first
        .append_interaction(
            &created.id,
            InteractionDraft {
                kind: InteractionKind::Meeting,
                description: "Reunião de briefing".to_string(),
                by: "Marina".to_string(),
            },
        )
        .await
        .expect("interaction");
    let snapshot = first
        .get_by_id(&created.id)
        .await
        .expect("lookup")
        .expect("present");

    // A brand new store over the same directory must materialize the same
    // entity, timestamps included.
    let second = open_store(dir.path()).await;
    let reloaded: Vec<Lead> = second.get_all().await.expect("reload");
    assert_eq!(reloaded, vec![snapshot]);
}

#[tokio::test]
async fn status_change_shows_up_in_dashboard_stats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_store(dir.path()).await;

    let lead = store.create(intake()).await.expect("create");
    store
        .set_status(&lead.id, LeadStatus::Converted)
        .await
        .expect("convert");

    let leads = store.get_all().await.expect("all");
    let dashboard = stats::compute(&leads, chrono::Utc::now().date_naive());
    assert_eq!(dashboard.total_leads, 1);
    assert!(dashboard.conversion_rate > 0.0);
    let converted = dashboard
        .leads_by_status
        .iter()
        .find(|entry| entry.status == LeadStatus::Converted)
        .expect("converted bucket");
    assert_eq!(converted.count, 1);
}

#[tokio::test]
async fn csv_export_covers_the_stored_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_store(dir.path()).await;

    assert_eq!(
        export_leads_csv(&store.get_all().await.expect("all")).expect("empty export"),
        ""
    );

    store.create(intake()).await.expect("create");
    let csv = export_leads_csv(&store.get_all().await.expect("all")).expect("export");
    assert_eq!(csv.trim_end().lines().count(), 2);
}

#[tokio::test]
async fn corrupted_leads_record_fails_closed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_store(dir.path()).await;
    store.create(intake()).await.expect("create");

    std::fs::write(dir.path().join("leads.json"), b"{ not json").expect("corrupt file");

    let result = store.get_all().await;
    assert!(matches!(
        result,
        Err(LeadStoreError::Storage(StorageError::Corrupted { .. }))
    ));
}

#[tokio::test]
async fn missing_files_read_as_an_empty_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = JsonFileStorage::new(dir.path());
    assert!(storage.read_leads().await.expect("read").is_empty());
    assert!(storage.read_config().await.expect("read").is_none());
}

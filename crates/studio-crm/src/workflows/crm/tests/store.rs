use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::common::{build_store, sample_intake, syncing_config, BrokenDispatcher, MemoryStorage};
use crate::workflows::crm::domain::{InteractionDraft, InteractionKind, LeadId, LeadStatus};
use crate::workflows::crm::store::{LeadStore, LeadStoreError};
use crate::workflows::quiz::{AnswerSet, SiteCategory};

fn answers(pairs: &[(u8, &str)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(question, option)| (*question, option.to_string()))
        .collect::<BTreeMap<u8, String>>()
}

#[tokio::test]
async fn create_then_get_by_id_round_trips_intake() {
    let (store, _, _) = build_store().await;
    let created = store.create(sample_intake()).await.expect("create");

    let fetched = store
        .get_by_id(&created.id)
        .await
        .expect("lookup")
        .expect("lead present");

    assert_eq!(fetched.contact, sample_intake());
    assert_eq!(fetched.status, LeadStatus::New);
    assert!(!fetched.tags.is_empty());
    assert_eq!(fetched.source, "quiz");
    assert!(fetched.interactions.is_empty());
    assert!(fetched.updated_at >= fetched.created_at);
}

#[tokio::test]
async fn lookup_of_unknown_id_is_none_not_an_error() {
    let (store, _, _) = build_store().await;
    let missing = store
        .get_by_id(&LeadId("no-such-lead".to_string()))
        .await
        .expect("lookup succeeds");
    assert!(missing.is_none());
}

#[tokio::test]
async fn ids_stay_unique_under_rapid_creates() {
    let (store, _, _) = build_store().await;
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let lead = store.create(sample_intake()).await.expect("create");
        assert!(seen.insert(lead.id.0.clone()), "duplicate id {}", lead.id.0);
    }
}

#[tokio::test]
async fn set_status_overwrites_unconditionally() {
    let (store, _, _) = build_store().await;
    let lead = store.create(sample_intake()).await.expect("create");

    // No transition table: converted may be followed by new again.
    store
        .set_status(&lead.id, LeadStatus::Converted)
        .await
        .expect("to converted");
    let reverted = store
        .set_status(&lead.id, LeadStatus::New)
        .await
        .expect("back to new");
    assert_eq!(reverted.status, LeadStatus::New);
}

#[tokio::test]
async fn set_status_on_unknown_lead_is_not_found() {
    let (store, _, _) = build_store().await;
    let result = store
        .set_status(&LeadId("ghost".to_string()), LeadStatus::Lost)
        .await;
    assert!(matches!(result, Err(LeadStoreError::NotFound)));
}

#[tokio::test]
async fn interactions_append_in_call_order() {
    let (store, _, _) = build_store().await;
    let lead = store.create(sample_intake()).await.expect("create");

    let first = store
        .append_interaction(
            &lead.id,
            InteractionDraft {
                kind: InteractionKind::Call,
                description: "Primeiro contato por telefone".to_string(),
                by: "Marina".to_string(),
            },
        )
        .await
        .expect("first interaction");

    let second = store
        .append_interaction(
            &lead.id,
            InteractionDraft {
                kind: InteractionKind::Email,
                description: "Proposta enviada".to_string(),
                by: "Marina".to_string(),
            },
        )
        .await
        .expect("second interaction");

    assert_eq!(second.interactions.len(), 2);
    assert_eq!(second.interactions[0], first.interactions[0]);
    assert_eq!(second.interactions[1].kind, InteractionKind::Email);
    assert_ne!(second.interactions[0].id, second.interactions[1].id);
}

#[tokio::test]
async fn attach_quiz_result_tags_the_lead() {
    let (store, _, _) = build_store().await;
    let lead = store.create(sample_intake()).await.expect("create");

    let quiz_answers = answers(&[(1, "1b"), (2, "2b"), (3, "3b")]);
    let updated = store
        .attach_quiz_result(&lead.id, quiz_answers.clone(), SiteCategory::Portfolio)
        .await
        .expect("attach result");

    assert_eq!(updated.quiz_result, Some(SiteCategory::Portfolio));
    assert_eq!(updated.quiz_answers, Some(quiz_answers));
    assert!(updated
        .tags
        .iter()
        .any(|tag| tag == "resultado:portfolio"));
    assert!(updated.updated_at >= lead.updated_at);
}

#[tokio::test]
async fn update_replaces_whole_record_by_id() {
    let (store, _, _) = build_store().await;
    let mut lead = store.create(sample_intake()).await.expect("create");

    lead.contact.notes = Some("Prefere contato à tarde".to_string());
    lead.tags.push("vip".to_string());
    let updated = store.update(lead.clone()).await.expect("update");

    assert_eq!(
        updated.contact.notes.as_deref(),
        Some("Prefere contato à tarde")
    );
    assert!(updated.tags.contains(&"vip".to_string()));

    let mut phantom = updated.clone();
    phantom.id = LeadId("does-not-exist".to_string());
    assert!(matches!(
        store.update(phantom).await,
        Err(LeadStoreError::NotFound)
    ));
}

#[tokio::test]
async fn create_queues_sync_when_fully_configured() {
    let storage = Arc::new(MemoryStorage::with_config(syncing_config()));
    let sync = Arc::new(super::common::RecordingDispatcher::default());
    let store = LeadStore::open(storage, sync.clone())
        .await
        .expect("store opens");

    let lead = store.create(sample_intake()).await.expect("create");
    store
        .attach_quiz_result(&lead.id, AnswerSet::new(), SiteCategory::Professional)
        .await
        .expect("attach result");
    store
        .set_status(&lead.id, LeadStatus::Contacted)
        .await
        .expect("status change");

    // Create and quiz-result attach push; plain status changes stay local.
    let jobs = sync.jobs();
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|job| job.lead.id == lead.id));
    assert_eq!(jobs[0].target.api_url, "https://crm.example.com/api");
}

#[tokio::test]
async fn sync_stays_quiet_when_disabled() {
    let (store, _, sync) = build_store().await;
    store.create(sample_intake()).await.expect("create");
    assert!(sync.jobs().is_empty());
}

#[tokio::test]
async fn broken_sync_queue_never_fails_the_local_write() {
    let storage = Arc::new(MemoryStorage::with_config(syncing_config()));
    let sync = Arc::new(BrokenDispatcher);
    let store = LeadStore::open(storage, sync).await.expect("store opens");

    let lead = store
        .create(sample_intake())
        .await
        .expect("create succeeds despite sync failure");
    assert!(store
        .get_by_id(&lead.id)
        .await
        .expect("lookup")
        .is_some());
}

#[tokio::test]
async fn config_updates_merge_and_persist() {
    let (store, storage, _) = build_store().await;

    let merged = store
        .update_config(crate::workflows::crm::domain::CrmConfigUpdate {
            sync_enabled: Some(true),
            api_url: Some("https://crm.example.com/api".to_string()),
            ..Default::default()
        })
        .await
        .expect("config update");

    assert!(merged.sync_enabled);
    assert_eq!(merged.leads_tags, vec!["quiz".to_string()]);

    use crate::workflows::crm::storage::CrmStorage;
    let persisted = storage
        .read_config()
        .await
        .expect("read config")
        .expect("config persisted");
    assert_eq!(persisted, merged);
}

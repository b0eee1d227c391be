use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::workflows::crm::domain::{CrmConfig, Lead, LeadIntake};
use crate::workflows::crm::storage::{CrmStorage, StorageError};
use crate::workflows::crm::store::LeadStore;
use crate::workflows::crm::sync::{LeadSyncDispatcher, SyncDispatchError, SyncJob};

/// In-memory storage fake mirroring the wholesale read/write contract.
#[derive(Default)]
pub(super) struct MemoryStorage {
    leads: Mutex<Vec<Lead>>,
    config: Mutex<Option<CrmConfig>>,
}

#[async_trait]
impl CrmStorage for MemoryStorage {
    async fn read_leads(&self) -> Result<Vec<Lead>, StorageError> {
        Ok(self.leads.lock().expect("lock").clone())
    }

    async fn write_leads(&self, leads: &[Lead]) -> Result<(), StorageError> {
        *self.leads.lock().expect("lock") = leads.to_vec();
        Ok(())
    }

    async fn read_config(&self) -> Result<Option<CrmConfig>, StorageError> {
        Ok(self.config.lock().expect("lock").clone())
    }

    async fn write_config(&self, config: &CrmConfig) -> Result<(), StorageError> {
        *self.config.lock().expect("lock") = Some(config.clone());
        Ok(())
    }
}

impl MemoryStorage {
    pub(super) fn with_config(config: CrmConfig) -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
            config: Mutex::new(Some(config)),
        }
    }
}

/// Captures dispatched sync jobs instead of delivering them.
#[derive(Default, Clone)]
pub(super) struct RecordingDispatcher {
    jobs: Arc<Mutex<Vec<SyncJob>>>,
}

impl RecordingDispatcher {
    pub(super) fn jobs(&self) -> Vec<SyncJob> {
        self.jobs.lock().expect("lock").clone()
    }
}

impl LeadSyncDispatcher for RecordingDispatcher {
    fn dispatch(&self, job: SyncJob) -> Result<(), SyncDispatchError> {
        self.jobs.lock().expect("lock").push(job);
        Ok(())
    }
}

/// Always fails to queue, for asserting that sync trouble never fails a
/// local write.
#[derive(Default, Clone)]
pub(super) struct BrokenDispatcher;

impl LeadSyncDispatcher for BrokenDispatcher {
    fn dispatch(&self, _job: SyncJob) -> Result<(), SyncDispatchError> {
        Err(SyncDispatchError::WorkerGone)
    }
}

pub(super) fn sample_intake() -> LeadIntake {
    LeadIntake {
        name: "Helena Duarte".to_string(),
        email: "helena@exemplo.com.br".to_string(),
        phone: "+55 11 98888-7777".to_string(),
        company: Some("Estúdio Duarte".to_string()),
        business_type: Some("arquitetura".to_string()),
        how_found: Some("indicação".to_string()),
        budget: Some("R$ 5.000 - R$ 9.000".to_string()),
        deadline: Some("2 meses".to_string()),
        notes: None,
    }
}

pub(super) async fn build_store() -> (
    Arc<LeadStore<MemoryStorage, RecordingDispatcher>>,
    Arc<MemoryStorage>,
    Arc<RecordingDispatcher>,
) {
    let storage = Arc::new(MemoryStorage::default());
    let sync = Arc::new(RecordingDispatcher::default());
    let store = LeadStore::open(storage.clone(), sync.clone())
        .await
        .expect("store opens");
    (Arc::new(store), storage, sync)
}

pub(super) fn syncing_config() -> CrmConfig {
    CrmConfig {
        api_url: Some("https://crm.example.com/api".to_string()),
        api_key: Some("secret-token".to_string()),
        sync_enabled: true,
        ..CrmConfig::default()
    }
}

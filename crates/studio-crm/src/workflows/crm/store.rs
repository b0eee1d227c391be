use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::workflows::quiz::{AnswerSet, SiteCategory};

use super::domain::{
    CrmConfig, CrmConfigUpdate, Interaction, InteractionDraft, Lead, LeadId, LeadIntake,
    LeadStatus,
};
use super::storage::{CrmStorage, StorageError};
use super::sync::{LeadSyncDispatcher, SyncJob, SyncTarget};

/// Every lead minted by this store originates from the quiz funnel.
const LEAD_SOURCE: &str = "quiz";

/// Error raised by lead store operations. A missing lead is the expected,
/// recoverable condition; storage failures carry their cause.
#[derive(Debug, thiserror::Error)]
pub enum LeadStoreError {
    #[error("lead not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service owning the durable lead collection. Constructed explicitly and
/// injected into callers; storage and external sync sit behind traits so
/// both are swappable in tests.
///
/// Designed for a single logical caller: each operation reads the
/// collection wholesale, mutates it, and writes it back before returning,
/// so readers always observe the last fully committed write.
pub struct LeadStore<S, C> {
    storage: Arc<S>,
    sync: Arc<C>,
    config: RwLock<CrmConfig>,
}

fn next_lead_id() -> LeadId {
    LeadId(Uuid::new_v4().to_string())
}

fn next_interaction_id() -> String {
    Uuid::new_v4().to_string()
}

impl<S, C> LeadStore<S, C>
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    /// Load the persisted CRM configuration (or the default) and build the
    /// store around it.
    pub async fn open(storage: Arc<S>, sync: Arc<C>) -> Result<Self, LeadStoreError> {
        let config = storage.read_config().await?.unwrap_or_default();
        Ok(Self {
            storage,
            sync,
            config: RwLock::new(config),
        })
    }

    pub fn config(&self) -> CrmConfig {
        self.config.read().expect("config lock poisoned").clone()
    }

    /// Merge a partial update over the current configuration and persist
    /// the result.
    pub async fn update_config(&self, update: CrmConfigUpdate) -> Result<CrmConfig, LeadStoreError> {
        let merged = {
            let mut guard = self.config.write().expect("config lock poisoned");
            guard.apply(update);
            guard.clone()
        };
        self.storage.write_config(&merged).await?;
        Ok(merged)
    }

    /// Register a new lead from validated intake data. The local write
    /// commits before the external sync is even attempted.
    pub async fn create(&self, intake: LeadIntake) -> Result<Lead, LeadStoreError> {
        let now = Utc::now();
        let lead = Lead {
            id: next_lead_id(),
            contact: intake,
            created_at: now,
            updated_at: now,
            status: LeadStatus::New,
            quiz_answers: None,
            quiz_result: None,
            assigned_to: None,
            follow_up_date: None,
            tags: self.config().leads_tags,
            interactions: Vec::new(),
            source: LEAD_SOURCE.to_string(),
        };

        self.save(lead.clone()).await?;
        self.queue_external_sync(&lead);
        Ok(lead)
    }

    /// Record the quiz outcome on an existing lead and tag it with the
    /// resulting category.
    pub async fn attach_quiz_result(
        &self,
        id: &LeadId,
        answers: AnswerSet,
        category: SiteCategory,
    ) -> Result<Lead, LeadStoreError> {
        let mut lead = self.require(id).await?;
        lead.quiz_answers = Some(answers);
        lead.quiz_result = Some(category);
        lead.tags.push(format!("resultado:{}", category.label()));
        lead.updated_at = Utc::now();

        self.save(lead.clone()).await?;
        self.queue_external_sync(&lead);
        Ok(lead)
    }

    /// Unconditional status overwrite; any status may follow any other.
    pub async fn set_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, LeadStoreError> {
        let mut lead = self.require(id).await?;
        lead.status = status;
        lead.updated_at = Utc::now();
        self.save(lead.clone()).await?;
        Ok(lead)
    }

    /// Append one interaction, preserving all prior entries. The store
    /// assigns the id and timestamp.
    pub async fn append_interaction(
        &self,
        id: &LeadId,
        draft: InteractionDraft,
    ) -> Result<Lead, LeadStoreError> {
        let mut lead = self.require(id).await?;
        lead.interactions.push(Interaction {
            id: next_interaction_id(),
            date: Utc::now(),
            kind: draft.kind,
            description: draft.description,
            by: draft.by,
        });
        lead.updated_at = Utc::now();
        self.save(lead.clone()).await?;
        Ok(lead)
    }

    /// Full-record replace by id. Fails when no lead with that id exists.
    pub async fn update(&self, mut lead: Lead) -> Result<Lead, LeadStoreError> {
        self.require(&lead.id).await?;
        lead.updated_at = Utc::now();
        self.save(lead.clone()).await?;
        Ok(lead)
    }

    /// Every lead in storage insertion order.
    pub async fn get_all(&self) -> Result<Vec<Lead>, LeadStoreError> {
        Ok(self.storage.read_leads().await?)
    }

    pub async fn get_by_id(&self, id: &LeadId) -> Result<Option<Lead>, LeadStoreError> {
        let leads = self.storage.read_leads().await?;
        Ok(leads.into_iter().find(|lead| &lead.id == id))
    }

    async fn require(&self, id: &LeadId) -> Result<Lead, LeadStoreError> {
        self.get_by_id(id).await?.ok_or(LeadStoreError::NotFound)
    }

    async fn save(&self, lead: Lead) -> Result<(), LeadStoreError> {
        let mut leads = self.storage.read_leads().await?;
        match leads.iter_mut().find(|existing| existing.id == lead.id) {
            Some(existing) => *existing = lead,
            None => leads.push(lead),
        }
        self.storage.write_leads(&leads).await?;
        Ok(())
    }

    /// Best-effort handoff to the external CRM. Failure to queue is
    /// logged and never surfaces to the caller.
    fn queue_external_sync(&self, lead: &Lead) {
        let Some(target) = SyncTarget::from_config(&self.config()) else {
            return;
        };
        let job = SyncJob {
            target,
            lead: lead.clone(),
        };
        if let Err(err) = self.sync.dispatch(job) {
            warn!(lead_id = %lead.id.0, error = %err, "unable to queue external crm sync");
        }
    }
}

use reqwest::StatusCode;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

use super::domain::{CrmConfig, Lead};

/// A slow or unreachable remote endpoint must never stall the worker
/// indefinitely.
const SYNC_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved coordinates of the external CRM endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub api_url: String,
    pub api_key: String,
}

impl SyncTarget {
    /// Only a fully configured, enabled integration yields a target;
    /// otherwise sync is a no-op.
    pub fn from_config(config: &CrmConfig) -> Option<Self> {
        if !config.sync_enabled {
            return None;
        }
        let api_url = config.api_url.as_deref().filter(|url| !url.is_empty())?;
        let api_key = config.api_key.as_deref().filter(|key| !key.is_empty())?;
        Some(Self {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

/// One queued push of a lead snapshot to the external CRM.
#[derive(Debug, Clone)]
pub struct SyncJob {
    pub target: SyncTarget,
    pub lead: Lead,
}

/// Raised when a job cannot even be queued (the worker is gone). The
/// store logs this and carries on; local writes stay the source of truth.
#[derive(Debug, thiserror::Error)]
pub enum SyncDispatchError {
    #[error("sync worker is no longer running")]
    WorkerGone,
}

/// Fire-and-forget seam between the lead store and the external CRM.
/// Implementations must return promptly; delivery happens elsewhere.
pub trait LeadSyncDispatcher: Send + Sync {
    fn dispatch(&self, job: SyncJob) -> Result<(), SyncDispatchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SyncSetupError {
    #[error("unable to build sync http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Outcome of one delivery attempt, logged by the worker.
#[derive(Debug, thiserror::Error)]
pub enum SyncPushError {
    #[error("sync request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sync endpoint answered {0}")]
    Rejected(StatusCode),
}

/// Queues jobs onto an unbounded channel drained by a background worker
/// task, so retries or backoff can later live in the worker without
/// touching the store's contract.
pub struct HttpSyncDispatcher {
    jobs: mpsc::UnboundedSender<SyncJob>,
}

impl HttpSyncDispatcher {
    /// Build the HTTP client and spawn the delivery worker on the current
    /// runtime.
    pub fn spawn() -> Result<Self, SyncSetupError> {
        let client = reqwest::Client::builder()
            .timeout(SYNC_REQUEST_TIMEOUT)
            .build()?;
        let (jobs, inbox) = mpsc::unbounded_channel();
        tokio::spawn(run_sync_worker(client, inbox));
        Ok(Self { jobs })
    }
}

impl LeadSyncDispatcher for HttpSyncDispatcher {
    fn dispatch(&self, job: SyncJob) -> Result<(), SyncDispatchError> {
        self.jobs
            .send(job)
            .map_err(|_| SyncDispatchError::WorkerGone)
    }
}

async fn run_sync_worker(client: reqwest::Client, mut inbox: mpsc::UnboundedReceiver<SyncJob>) {
    while let Some(job) = inbox.recv().await {
        if let Err(err) = push_lead(&client, &job.target, &job.lead).await {
            warn!(lead_id = %job.lead.id.0, error = %err, "external crm sync failed");
        }
    }
}

/// POST the full lead as JSON to `{api_url}/leads` with a bearer token.
/// Any non-2xx answer counts as a failure.
pub async fn push_lead(
    client: &reqwest::Client,
    target: &SyncTarget,
    lead: &Lead,
) -> Result<(), SyncPushError> {
    let response = client
        .post(format!("{}/leads", target.api_url))
        .bearer_auth(&target.api_key)
        .json(lead)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SyncPushError::Rejected(response.status()));
    }

    Ok(())
}

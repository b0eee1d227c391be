use async_trait::async_trait;
use clap::Args;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use studio_crm::error::AppError;
use studio_crm::workflows::crm::{
    export_leads_csv, stats, CrmConfig, CrmStorage, JsonFileStorage, Lead, LeadStoreError,
    LeadSyncDispatcher, StorageError, SyncDispatchError, SyncJob,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory storage for demos and tests; the served process uses
/// `JsonFileStorage` instead.
#[derive(Default)]
pub(crate) struct InMemoryCrmStorage {
    leads: Mutex<Vec<Lead>>,
    config: Mutex<Option<CrmConfig>>,
}

#[async_trait]
impl CrmStorage for InMemoryCrmStorage {
    async fn read_leads(&self) -> Result<Vec<Lead>, StorageError> {
        Ok(self.leads.lock().expect("storage mutex poisoned").clone())
    }

    async fn write_leads(&self, leads: &[Lead]) -> Result<(), StorageError> {
        *self.leads.lock().expect("storage mutex poisoned") = leads.to_vec();
        Ok(())
    }

    async fn read_config(&self) -> Result<Option<CrmConfig>, StorageError> {
        Ok(self.config.lock().expect("storage mutex poisoned").clone())
    }

    async fn write_config(&self, config: &CrmConfig) -> Result<(), StorageError> {
        *self.config.lock().expect("storage mutex poisoned") = Some(config.clone());
        Ok(())
    }
}

/// Records dispatched sync jobs so demos and tests can assert on them.
#[derive(Default, Clone)]
pub(crate) struct RecordingSyncDispatcher {
    jobs: Arc<Mutex<Vec<SyncJob>>>,
}

impl RecordingSyncDispatcher {
    pub(crate) fn jobs(&self) -> Vec<SyncJob> {
        self.jobs.lock().expect("sync mutex poisoned").clone()
    }
}

impl LeadSyncDispatcher for RecordingSyncDispatcher {
    fn dispatch(&self, job: SyncJob) -> Result<(), SyncDispatchError> {
        self.jobs.lock().expect("sync mutex poisoned").push(job);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub(crate) struct CrmExportArgs {
    /// Directory holding leads.json and crm-config.json
    #[arg(long, default_value = "data")]
    pub(crate) data_dir: PathBuf,
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CrmStatsArgs {
    /// Directory holding leads.json and crm-config.json
    #[arg(long, default_value = "data")]
    pub(crate) data_dir: PathBuf,
}

pub(crate) async fn run_crm_export(args: CrmExportArgs) -> Result<(), AppError> {
    let storage = JsonFileStorage::new(args.data_dir);
    let leads = storage
        .read_leads()
        .await
        .map_err(LeadStoreError::from)?;
    let csv = export_leads_csv(&leads)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, csv.as_bytes())?;
            println!("Exported {} lead(s) to {}", leads.len(), path.display());
        }
        None => print!("{csv}"),
    }

    Ok(())
}

pub(crate) async fn run_crm_stats(args: CrmStatsArgs) -> Result<(), AppError> {
    let storage = JsonFileStorage::new(args.data_dir);
    let leads = storage
        .read_leads()
        .await
        .map_err(LeadStoreError::from)?;
    let dashboard = stats::compute(&leads, chrono::Utc::now().date_naive());

    match serde_json::to_string_pretty(&dashboard) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("dashboard stats unavailable: {err}"),
    }

    Ok(())
}

//! Lead lifecycle CRM: durable store, persistence seam, best-effort
//! external sync, dashboard aggregation, and CSV export.

pub mod domain;
pub mod export;
pub mod router;
pub mod stats;
pub mod storage;
pub mod store;
pub mod sync;

#[cfg(test)]
mod tests;

pub use domain::{
    CrmConfig, CrmConfigUpdate, Interaction, InteractionDraft, InteractionKind, Lead, LeadId,
    LeadIntake, LeadStatus, SyncFrequency,
};
pub use export::{export_leads_csv, CsvExportError};
pub use router::crm_router;
pub use stats::{DailyLeadCount, DashboardStats, StatusCount};
pub use storage::{CrmStorage, JsonFileStorage, StorageError};
pub use store::{LeadStore, LeadStoreError};
pub use sync::{
    HttpSyncDispatcher, LeadSyncDispatcher, SyncDispatchError, SyncJob, SyncSetupError, SyncTarget,
};

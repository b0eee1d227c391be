use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use super::domain::{CrmConfig, Lead};

/// Error enumeration for storage failures. Corrupted records fail closed
/// with the record name so the operator knows which file to inspect.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored {record} record is corrupted: {source}")]
    Corrupted {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode {record} record: {source}")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Narrow persistence seam: two independent named records, each read into
/// memory wholesale and rewritten wholesale on every mutation. Keeps the
/// medium swappable and the store testable with an in-memory fake.
#[async_trait]
pub trait CrmStorage: Send + Sync {
    async fn read_leads(&self) -> Result<Vec<Lead>, StorageError>;
    async fn write_leads(&self, leads: &[Lead]) -> Result<(), StorageError>;
    async fn read_config(&self) -> Result<Option<CrmConfig>, StorageError>;
    async fn write_config(&self, config: &CrmConfig) -> Result<(), StorageError>;
}

const LEADS_RECORD: &str = "leads";
const CONFIG_RECORD: &str = "crm-config";

/// JSON-file storage under a data directory: `leads.json` holds the
/// ordered lead collection, `crm-config.json` the CRM settings. Writes go
/// through a temp file and rename so readers never observe a partial
/// record.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn leads_path(&self) -> PathBuf {
        self.dir.join("leads.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.join("crm-config.json")
    }

    async fn read_record<T: DeserializeOwned>(
        &self,
        path: &Path,
        record: &'static str,
    ) -> Result<Option<T>, StorageError> {
        match fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StorageError::Corrupted { record, source }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_record<T: Serialize + ?Sized>(
        &self,
        path: &Path,
        record: &'static str,
        value: &T,
    ) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|source| StorageError::Encode { record, source })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl CrmStorage for JsonFileStorage {
    async fn read_leads(&self) -> Result<Vec<Lead>, StorageError> {
        Ok(self
            .read_record(&self.leads_path(), LEADS_RECORD)
            .await?
            .unwrap_or_default())
    }

    async fn write_leads(&self, leads: &[Lead]) -> Result<(), StorageError> {
        self.write_record(&self.leads_path(), LEADS_RECORD, leads)
            .await
    }

    async fn read_config(&self) -> Result<Option<CrmConfig>, StorageError> {
        self.read_record(&self.config_path(), CONFIG_RECORD).await
    }

    async fn write_config(&self, config: &CrmConfig) -> Result<(), StorageError> {
        self.write_record(&self.config_path(), CONFIG_RECORD, config)
            .await
    }
}

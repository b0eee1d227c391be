use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::crm::export::CsvExportError;
use crate::workflows::crm::store::LeadStoreError;
use crate::workflows::crm::sync::SyncSetupError;
use crate::workflows::quiz::CatalogIntegrityError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogIntegrityError),
    Store(LeadStoreError),
    Csv(CsvExportError),
    Sync(SyncSetupError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "quiz catalog error: {}", err),
            AppError::Store(err) => write!(f, "lead store error: {}", err),
            AppError::Csv(err) => write!(f, "csv export error: {}", err),
            AppError::Sync(err) => write!(f, "sync setup error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::Csv(err) => Some(err),
            AppError::Sync(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Store(LeadStoreError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Catalog(_)
            | AppError::Store(_)
            | AppError::Csv(_)
            | AppError::Sync(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogIntegrityError> for AppError {
    fn from(value: CatalogIntegrityError) -> Self {
        Self::Catalog(value)
    }
}

impl From<LeadStoreError> for AppError {
    fn from(value: LeadStoreError) -> Self {
        Self::Store(value)
    }
}

impl From<CsvExportError> for AppError {
    fn from(value: CsvExportError) -> Self {
        Self::Csv(value)
    }
}

impl From<SyncSetupError> for AppError {
    fn from(value: SyncSetupError) -> Self {
        Self::Sync(value)
    }
}

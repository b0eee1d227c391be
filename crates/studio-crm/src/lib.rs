//! Core workflows for the studio lead pipeline: the site-recommendation
//! quiz (catalog, scoring, recommendation lookup) and the lead lifecycle
//! CRM (store, persistence, external sync, dashboard stats, CSV export).

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::quiz::{AnswerSet, SiteCategory};

/// Identifier wrapper for persisted leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Workflow stage of a lead. The wire labels are the Portuguese values the
/// admin dashboard has always stored; transitions are unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    #[serde(rename = "novo")]
    New,
    #[serde(rename = "contatado")]
    Contacted,
    #[serde(rename = "em_andamento")]
    InProgress,
    #[serde(rename = "convertido")]
    Converted,
    #[serde(rename = "perdido")]
    Lost,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "novo",
            LeadStatus::Contacted => "contatado",
            LeadStatus::InProgress => "em_andamento",
            LeadStatus::Converted => "convertido",
            LeadStatus::Lost => "perdido",
        }
    }

    /// Declaration order; dashboard breakdowns follow it.
    pub const fn ordered() -> [LeadStatus; 5] {
        [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::InProgress,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ]
    }
}

/// Channel of a recorded interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Email,
    Call,
    Meeting,
    Message,
    Other,
}

/// One entry of a lead's interaction history. Append-only: never mutated
/// or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub description: String,
    pub by: String,
}

/// Caller-supplied portion of an interaction; the store assigns id and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionDraft {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub description: String,
    pub by: String,
}

/// Contact data collected by the intake form before the quiz starts.
/// Name, email, and phone are required and validated by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadIntake {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_found: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A persisted prospect record: intake data plus lifecycle state.
/// `id` is immutable after creation and `updated_at` never precedes
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    #[serde(flatten)]
    pub contact: LeadIntake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_answers: Option<AnswerSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_result: Option<SiteCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub interactions: Vec<Interaction>,
    pub source: String,
}

/// How often the optional external CRM expects pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncFrequency {
    Realtime,
    Hourly,
    Daily,
}

/// Process-wide CRM settings, loaded once at store construction and
/// persisted on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub sync_enabled: bool,
    pub sync_frequency: SyncFrequency,
    pub leads_tags: Vec<String>,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            sync_enabled: false,
            sync_frequency: SyncFrequency::Daily,
            leads_tags: vec!["quiz".to_string()],
        }
    }
}

/// Partial update merged over the current configuration; absent fields
/// keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmConfigUpdate {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub sync_enabled: Option<bool>,
    pub sync_frequency: Option<SyncFrequency>,
    pub leads_tags: Option<Vec<String>>,
}

impl CrmConfig {
    pub fn apply(&mut self, update: CrmConfigUpdate) {
        if let Some(api_url) = update.api_url {
            self.api_url = Some(api_url);
        }
        if let Some(api_key) = update.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(sync_enabled) = update.sync_enabled {
            self.sync_enabled = sync_enabled;
        }
        if let Some(sync_frequency) = update.sync_frequency {
            self.sync_frequency = sync_frequency;
        }
        if let Some(leads_tags) = update.leads_tags {
            self.leads_tags = leads_tags;
        }
    }
}

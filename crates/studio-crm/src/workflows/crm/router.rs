use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::workflows::quiz::{
    question_catalog, recommendation_for, score, AnswerSet, Recommendation, SiteCategory,
};

use super::domain::{
    CrmConfig, CrmConfigUpdate, InteractionDraft, Lead, LeadId, LeadIntake, LeadStatus,
};
use super::export::export_leads_csv;
use super::stats;
use super::storage::CrmStorage;
use super::store::{LeadStore, LeadStoreError};
use super::sync::LeadSyncDispatcher;

/// Router builder exposing the quiz and lead lifecycle endpoints.
pub fn crm_router<S, C>(store: Arc<LeadStore<S, C>>) -> Router
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler))
        .route("/api/v1/quiz/score", post(score_handler))
        .route(
            "/api/v1/leads",
            post(create_lead_handler::<S, C>).get(list_leads_handler::<S, C>),
        )
        .route(
            "/api/v1/leads/export/csv",
            get(export_csv_handler::<S, C>),
        )
        .route(
            "/api/v1/leads/:lead_id",
            get(get_lead_handler::<S, C>).put(update_lead_handler::<S, C>),
        )
        .route(
            "/api/v1/leads/:lead_id/status",
            patch(set_status_handler::<S, C>),
        )
        .route(
            "/api/v1/leads/:lead_id/interactions",
            post(append_interaction_handler::<S, C>),
        )
        .route(
            "/api/v1/leads/:lead_id/quiz-result",
            post(attach_quiz_result_handler::<S, C>),
        )
        .route("/api/v1/dashboard/stats", get(stats_handler::<S, C>))
        .route(
            "/api/v1/crm/config",
            get(get_config_handler::<S, C>).put(update_config_handler::<S, C>),
        )
        .with_state(store)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    category: SiteCategory,
    top_score: u32,
    fallback_applied: bool,
    recommendation: &'static Recommendation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    status: LeadStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuizResultResponse {
    lead: Lead,
    category: SiteCategory,
    recommendation: &'static Recommendation,
}

pub(crate) async fn questions_handler() -> Response {
    (StatusCode::OK, axum::Json(question_catalog())).into_response()
}

pub(crate) async fn score_handler(axum::Json(request): axum::Json<ScoreRequest>) -> Response {
    let outcome = score(&request.answers);
    let response = ScoreResponse {
        category: outcome.category,
        top_score: outcome.top_score,
        fallback_applied: outcome.fallback_applied,
        recommendation: recommendation_for(outcome.category),
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn create_lead_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
    axum::Json(intake): axum::Json<LeadIntake>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    // Required-field validation happens here, before the store is invoked;
    // the core does not re-validate.
    if intake.name.trim().is_empty()
        || intake.email.trim().is_empty()
        || intake.phone.trim().is_empty()
    {
        let payload = json!({ "error": "name, email and phone are required" });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    match store.create(intake).await {
        Ok(lead) => (StatusCode::CREATED, axum::Json(lead)).into_response(),
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn list_leads_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    match store.get_all().await {
        Ok(leads) => (StatusCode::OK, axum::Json(leads)).into_response(),
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn get_lead_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    match store.get_by_id(&LeadId(lead_id)).await {
        Ok(Some(lead)) => (StatusCode::OK, axum::Json(lead)).into_response(),
        Ok(None) => store_error_response(LeadStoreError::NotFound),
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn update_lead_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
    Path(lead_id): Path<String>,
    axum::Json(lead): axum::Json<Lead>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    if lead.id.0 != lead_id {
        let payload = json!({ "error": "lead id in path and body disagree" });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    match store.update(lead).await {
        Ok(lead) => (StatusCode::OK, axum::Json(lead)).into_response(),
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn set_status_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
    Path(lead_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    match store.set_status(&LeadId(lead_id), request.status).await {
        Ok(lead) => (StatusCode::OK, axum::Json(lead)).into_response(),
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn append_interaction_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
    Path(lead_id): Path<String>,
    axum::Json(draft): axum::Json<InteractionDraft>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    match store.append_interaction(&LeadId(lead_id), draft).await {
        Ok(lead) => (StatusCode::OK, axum::Json(lead)).into_response(),
        Err(err) => store_error_response(err),
    }
}

/// Scores the submitted answers internally; callers never pass a category
/// or an option value directly.
pub(crate) async fn attach_quiz_result_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
    Path(lead_id): Path<String>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    let outcome = score(&request.answers);
    match store
        .attach_quiz_result(&LeadId(lead_id), request.answers, outcome.category)
        .await
    {
        Ok(lead) => {
            let response = QuizResultResponse {
                lead,
                category: outcome.category,
                recommendation: recommendation_for(outcome.category),
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn export_csv_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    let leads = match store.get_all().await {
        Ok(leads) => leads,
        Err(err) => return store_error_response(err),
    };

    match export_leads_csv(&leads) {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            csv,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "csv export failed");
            let payload = json!({ "error": "could not complete the requested operation" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn stats_handler<S, C>(State(store): State<Arc<LeadStore<S, C>>>) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    match store.get_all().await {
        Ok(leads) => {
            let stats = stats::compute(&leads, Utc::now().date_naive());
            (StatusCode::OK, axum::Json(stats)).into_response()
        }
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn get_config_handler<S, C>(State(store): State<Arc<LeadStore<S, C>>>) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    let config: CrmConfig = store.config();
    (StatusCode::OK, axum::Json(config)).into_response()
}

pub(crate) async fn update_config_handler<S, C>(
    State(store): State<Arc<LeadStore<S, C>>>,
    axum::Json(update): axum::Json<CrmConfigUpdate>,
) -> Response
where
    S: CrmStorage + 'static,
    C: LeadSyncDispatcher + 'static,
{
    match store.update_config(update).await {
        Ok(config) => (StatusCode::OK, axum::Json(config)).into_response(),
        Err(err) => store_error_response(err),
    }
}

fn store_error_response(err: LeadStoreError) -> Response {
    match err {
        LeadStoreError::NotFound => {
            let payload = json!({ "error": "lead not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        LeadStoreError::Storage(source) => {
            error!(error = %source, "lead store operation failed");
            let payload = json!({ "error": "could not complete the requested operation" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

//! JSON API routes.
//!
//! Path and body rejections go through [`JsonError`], so every failure here
//! answers with an `{"error": ..}` body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    Json,
};

use crate::common::SampleAppId;
use crate::domains::sample_app::activities::{check_job, get_sample_app, list_all, update_flags};
use crate::domains::sample_app::data::JobCheckReport;
use crate::domains::sample_app::{Job, SampleAppData, SampleAppFlagsInput, SampleAppListData};
use crate::server::app::AppState;
use crate::server::error::JsonError;

/// GET /api/sampleapp
pub async fn list_sample_apps_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<SampleAppListData>, JsonError> {
    Ok(Json(list_all(&state.deps).await?))
}

/// GET /api/sampleapp/:id
pub async fn get_sample_app_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<SampleAppId>, PathRejection>,
) -> Result<Json<SampleAppData>, JsonError> {
    let Path(id) = id?;
    Ok(Json(get_sample_app(id, &state.deps).await?))
}

/// POST /api/sampleapp/:id
pub async fn update_sample_app_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<SampleAppId>, PathRejection>,
    body: Result<Json<SampleAppFlagsInput>, JsonRejection>,
) -> Result<Json<SampleAppData>, JsonError> {
    let Path(id) = id?;
    let Json(flags) = body?;
    Ok(Json(update_flags(id, flags, &state.deps).await?))
}

/// GET /api/jobs/:job/failures
pub async fn job_failures_handler(
    Extension(state): Extension<AppState>,
    Path(job): Path<String>,
) -> Result<Json<JobCheckReport>, JsonError> {
    let job: Job = job.parse()?;
    Ok(Json(check_job(job, &state.deps).await?))
}

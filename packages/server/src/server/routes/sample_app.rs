//! HTML routes: list view, edit form and the form submission.

use axum::{
    extract::Extension,
    response::{Html, Redirect},
    Form,
};
use tracing::info;

use crate::domains::sample_app::activities::{list_all, update_all};
use crate::domains::sample_app::{SampleAppError, SampleAppForm};
use crate::server::app::AppState;
use crate::server::views::{render_form, render_list};

/// GET / and GET /sampleapp/list
pub async fn sample_app_list_handler(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, SampleAppError> {
    let list = list_all(&state.deps).await?;
    Ok(Html(render_list(&list)))
}

/// GET /sampleapp/form
pub async fn sample_app_form_handler(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, SampleAppError> {
    let list = list_all(&state.deps).await?;
    Ok(Html(render_form(&list)))
}

/// POST /sampleapp/form/update
///
/// Binds the indexed form fields, writes the flags, then redirects to the
/// list view whether or not anything changed.
pub async fn sample_app_update_handler(
    Extension(state): Extension<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect, SampleAppError> {
    let input = SampleAppForm::from_pairs(fields)?.into_list()?;

    let saved = update_all(&input, &state.deps).await?;
    info!(saved, "Form update applied");

    Ok(Redirect::to("/"))
}

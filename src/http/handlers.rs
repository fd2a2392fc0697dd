use super::state::AppState;
use crate::console::StopOutcome;
use crate::error::AppError;
use crate::meetings::MeetingRecord;
use crate::view;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect},
    Form,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitMeetingForm {
    /// Meeting link typed into the form
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct StopMeetingForm {
    pub meeting_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Meeting form, status banner and active meetings
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut console = state.controller.state().write().await;
    let url_value = console.take_failed_url().unwrap_or_default();
    let body = view::render_page(&state.title, &console, Utc::now(), &url_value)?;
    Ok(Html(body))
}

/// POST /meetings
/// Submit a meeting link, then send the browser back to the page
pub async fn submit_meeting(
    State(state): State<AppState>,
    Form(form): Form<SubmitMeetingForm>,
) -> Redirect {
    match state.controller.submit_meeting(&form.url).await {
        Ok(record) => info!("Tracking meeting {}", record.meeting_id),
        Err(_) => state
            .controller
            .state()
            .write()
            .await
            .remember_failed_url(form.url),
    }

    Redirect::to("/")
}

/// POST /meetings/stop
/// Stop control of one meeting row, keyed by its meeting id
pub async fn stop_meeting(
    State(state): State<AppState>,
    Form(form): Form<StopMeetingForm>,
) -> Redirect {
    let meeting_id = form.meeting_id;
    match state.controller.container_name_of(&meeting_id).await {
        Some(container_name) => {
            match state
                .controller
                .stop_meeting(&container_name, &meeting_id)
                .await
            {
                StopOutcome::Stopped { message } => info!("{}: {}", meeting_id, message),
                StopOutcome::Failed(e) => debug!("Stop of {} failed: {}", meeting_id, e),
                StopOutcome::Ignored => {}
            }
        }
        None => debug!("Stop requested for unknown meeting {}", meeting_id),
    }

    Redirect::to("/")
}

/// GET /meetings/list
/// Meeting container markup alone
pub async fn meeting_list_fragment(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    Ok(Html(state.controller.render_list().await?))
}

/// GET /api/meetings
/// Tracked meetings as JSON
pub async fn list_meetings(State(state): State<AppState>) -> Json<Vec<MeetingRecord>> {
    Json(state.controller.meetings().await)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

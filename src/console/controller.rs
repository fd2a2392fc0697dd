use super::banner::StatusKind;
use super::state::ConsoleState;
use super::ConsoleError;
use crate::backend::{MeetingBackend, StopMeetingRequest};
use crate::meetings::{MeetingRecord, MeetingStatus};
use crate::view;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

pub const JOINING_MESSAGE: &str = "Joining meeting...";
pub const JOINED_MESSAGE: &str = "Meeting joined successfully";
pub const STOPPED_MESSAGE: &str = "Meeting stopped successfully";

/// Seconds the backend is asked to wait before tearing a meeting down
pub const DEFAULT_STOP_AFTER_DURATION: u64 = 20;

/// Result of a stop click
#[derive(Debug)]
pub enum StopOutcome {
    /// Backend confirmed; carries the message shown in the banner
    Stopped { message: String },
    /// Request failed and the control was re-enabled
    Failed(ConsoleError),
    /// Control was already disabled, nothing was sent
    Ignored,
}

/// Drives the meeting list from user actions and backend responses.
///
/// The state lock is never held across a backend call, so actions on
/// different meetings proceed independently.
#[derive(Clone)]
pub struct MeetingController {
    state: Arc<RwLock<ConsoleState>>,
    backend: Arc<dyn MeetingBackend>,
    stop_after_duration: u64,
}

impl MeetingController {
    pub fn new(
        state: ConsoleState,
        backend: Arc<dyn MeetingBackend>,
        stop_after_duration: u64,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            backend,
            stop_after_duration,
        }
    }

    pub fn state(&self) -> &Arc<RwLock<ConsoleState>> {
        &self.state
    }

    /// Submit a meeting link to the backend and track the resulting meeting
    pub async fn submit_meeting(&self, url: &str) -> Result<MeetingRecord, ConsoleError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(self.fail(ConsoleError::EmptyUrl).await);
        }

        self.show_status(JOINING_MESSAGE, StatusKind::Info).await;
        info!(backend = self.backend.name(), "Joining meeting: {}", url);

        let created = match self.backend.submit_meeting_link(url).await {
            Ok(created) => created,
            Err(e) => {
                error!("Error joining meeting: {}", e);
                return Err(self.fail(e.into()).await);
            }
        };

        let record = MeetingRecord::confirmed(
            created.meeting_id,
            created.container_name,
            url.to_string(),
            Utc::now(),
        );

        let mut state = self.state.write().await;
        match state.meetings.push(record.clone()) {
            Ok(()) => {
                info!(
                    meeting_id = %record.meeting_id,
                    container = %record.container_name,
                    "Meeting joined"
                );
                state.show_status(JOINED_MESSAGE, StatusKind::Success, Utc::now());
                Ok(record)
            }
            Err(e) => {
                warn!("Backend returned a meeting already in the list: {}", e);
                let err = ConsoleError::from(e);
                state.show_status(err.to_string(), StatusKind::Error, Utc::now());
                Err(err)
            }
        }
    }

    /// Stop one meeting. A click on a control that is already disabled is a
    /// no-op.
    pub async fn stop_meeting(&self, container_name: &str, meeting_id: &str) -> StopOutcome {
        if !self.state.write().await.begin_stop(meeting_id) {
            debug!(meeting_id = %meeting_id, "Stop ignored, control disabled");
            return StopOutcome::Ignored;
        }

        let request = StopMeetingRequest {
            meeting_id: meeting_id.to_string(),
            stop_after_duration: self.stop_after_duration,
            container_name: container_name.to_string(),
        };
        let result = self.backend.stop_meeting(&request).await;

        let mut state = self.state.write().await;
        state.finish_stop(meeting_id);

        match result {
            Ok(resp) => {
                if let Err(e) = state.meetings.set_status(meeting_id, MeetingStatus::Stopped) {
                    warn!("Could not mark meeting stopped: {}", e);
                }
                let message = resp
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| STOPPED_MESSAGE.to_string());
                info!(meeting_id = %meeting_id, "Meeting stopped");
                state.show_status(message.clone(), StatusKind::Success, Utc::now());
                StopOutcome::Stopped { message }
            }
            Err(e) => {
                error!(meeting_id = %meeting_id, "Error stopping meeting: {}", e);
                let err = ConsoleError::from(e);
                state.show_status(err.to_string(), StatusKind::Error, Utc::now());
                StopOutcome::Failed(err)
            }
        }
    }

    /// Container the backend runs `meeting_id` in, if the meeting is tracked
    pub async fn container_name_of(&self, meeting_id: &str) -> Option<String> {
        self.state
            .read()
            .await
            .meetings
            .get(meeting_id)
            .map(|r| r.container_name.clone())
    }

    pub async fn show_status(&self, message: impl Into<String>, kind: StatusKind) {
        self.state
            .write()
            .await
            .show_status(message, kind, Utc::now());
    }

    /// Current meeting rows as markup
    pub async fn render_list(&self) -> Result<String, askama::Error> {
        view::render_list(&*self.state.read().await)
    }

    pub async fn meetings(&self) -> Vec<MeetingRecord> {
        self.state.read().await.meetings.as_slice().to_vec()
    }

    async fn fail(&self, err: ConsoleError) -> ConsoleError {
        self.show_status(err.to_string(), StatusKind::Error).await;
        err
    }
}

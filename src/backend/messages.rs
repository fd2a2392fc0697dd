use serde::{Deserialize, Serialize};

use super::BackendError;

/// Body of `POST /submit_meeting_link`
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitMeetingRequest {
    pub meet_url: String,
}

/// Reply to a meeting submission, as sent by the backend
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubmitMeetingResponse {
    #[serde(default)]
    pub meeting_id: Option<String>,
    #[serde(rename = "containerName", default)]
    pub container_name: Option<String>,
}

impl SubmitMeetingResponse {
    /// Require the backend to have assigned an identifier
    pub fn into_created(self) -> Result<CreatedMeeting, BackendError> {
        match self.meeting_id {
            Some(meeting_id) if !meeting_id.is_empty() => Ok(CreatedMeeting {
                meeting_id,
                container_name: self.container_name,
            }),
            _ => Err(BackendError::MalformedResponse),
        }
    }
}

/// A meeting the backend confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMeeting {
    pub meeting_id: String,
    pub container_name: Option<String>,
}

/// Body of `POST /meeting/stop`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopMeetingRequest {
    pub meeting_id: String,
    /// Seconds the backend waits before tearing the container down
    pub stop_after_duration: u64,
    pub container_name: String,
}

/// Reply to a stop request; also the shape of its error bodies
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StopMeetingResponse {
    #[serde(default)]
    pub message: Option<String>,
}

use super::messages::{
    CreatedMeeting, StopMeetingRequest, StopMeetingResponse, SubmitMeetingRequest,
    SubmitMeetingResponse,
};
use super::BackendError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

pub const JOIN_FAILED_MESSAGE: &str = "Failed to join meeting";
pub const STOP_FAILED_MESSAGE: &str = "Failed to stop meeting";

/// Meeting bot backend
///
/// Implementations:
/// - `HttpMeetingBackend`: the real REST API
/// - test doubles that script responses
#[async_trait::async_trait]
pub trait MeetingBackend: Send + Sync {
    /// Ask the backend to join a meeting link
    async fn submit_meeting_link(&self, meet_url: &str) -> Result<CreatedMeeting, BackendError>;

    /// Ask the backend to stop a running meeting bot
    async fn stop_meeting(
        &self,
        request: &StopMeetingRequest,
    ) -> Result<StopMeetingResponse, BackendError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// REST client for the meeting bot API
pub struct HttpMeetingBackend {
    client: Client,
    base_url: String,
}

impl HttpMeetingBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl MeetingBackend for HttpMeetingBackend {
    async fn submit_meeting_link(&self, meet_url: &str) -> Result<CreatedMeeting, BackendError> {
        let url = self.endpoint("submit_meeting_link");
        info!("Submitting meeting link to {}", url);

        let resp = self
            .client
            .post(&url)
            .json(&SubmitMeetingRequest {
                meet_url: meet_url.to_string(),
            })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), body = %body, "submit_meeting_link response");

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                JOIN_FAILED_MESSAGE.to_string()
            } else {
                body
            };
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SubmitMeetingResponse =
            serde_json::from_str(&body).map_err(|_| BackendError::MalformedResponse)?;
        parsed.into_created()
    }

    async fn stop_meeting(
        &self,
        request: &StopMeetingRequest,
    ) -> Result<StopMeetingResponse, BackendError> {
        let url = self.endpoint("meeting/stop");
        info!(
            meeting_id = %request.meeting_id,
            container = %request.container_name,
            "Requesting meeting stop"
        );

        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), body = %body, "meeting/stop response");

        if !status.is_success() {
            let message = serde_json::from_str::<StopMeetingResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| STOP_FAILED_MESSAGE.to_string());
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(StopMeetingResponse::default());
        }
        serde_json::from_str(&body).map_err(|_| BackendError::MalformedResponse)
    }

    fn name(&self) -> &str {
        "http"
    }
}

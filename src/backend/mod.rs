//! Client for the external meeting bot API
//!
//! - POST /submit_meeting_link - Start a bot for a meeting link
//! - POST /meeting/stop - Stop a running bot

pub mod client;
pub mod messages;

pub use client::{HttpMeetingBackend, MeetingBackend};
pub use messages::{
    CreatedMeeting, StopMeetingRequest, StopMeetingResponse, SubmitMeetingRequest,
    SubmitMeetingResponse,
};

/// Failures talking to the meeting bot API
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Non-2xx response; carries the server-provided message
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response format from server")]
    MalformedResponse,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

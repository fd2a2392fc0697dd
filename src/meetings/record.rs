use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MeetingError;

/// Lifecycle of a tracked meeting, driven only by backend responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Active,
    Stopping,
    Stopped,
    Ended,
}

impl MeetingStatus {
    fn rank(self) -> u8 {
        match self {
            MeetingStatus::Active => 0,
            MeetingStatus::Stopping => 1,
            MeetingStatus::Stopped | MeetingStatus::Ended => 2,
        }
    }

    /// Stopped and ended meetings accept no further stop requests
    pub fn is_terminal(self) -> bool {
        matches!(self, MeetingStatus::Stopped | MeetingStatus::Ended)
    }

    /// Whether moving from `self` to `next` goes strictly forward
    pub fn can_advance_to(self, next: MeetingStatus) -> bool {
        next.rank() > self.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MeetingStatus::Active => "active",
            MeetingStatus::Stopping => "stopping",
            MeetingStatus::Stopped => "stopped",
            MeetingStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A meeting session the console knows about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    /// Identifier assigned by the backend
    pub meeting_id: String,

    /// Container running the meeting bot
    pub container_name: String,

    /// Meeting link as submitted by the user
    pub url: String,

    pub status: MeetingStatus,

    /// When the backend confirmed the meeting
    pub created_at: DateTime<Utc>,
}

impl MeetingRecord {
    /// Build a freshly confirmed meeting.
    ///
    /// When the backend does not name a container, a `meeting-<unix millis>`
    /// placeholder is used.
    pub fn confirmed(
        meeting_id: String,
        container_name: Option<String>,
        url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let container_name = container_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| default_container_name(created_at));

        Self {
            meeting_id,
            container_name,
            url,
            status: MeetingStatus::Active,
            created_at,
        }
    }

    /// Move the record forward to `next`
    pub fn advance(&mut self, next: MeetingStatus) -> Result<(), MeetingError> {
        if !self.status.can_advance_to(next) {
            return Err(MeetingError::InvalidTransition {
                meeting_id: self.meeting_id.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

pub fn default_container_name(at: DateTime<Utc>) -> String {
    format!("meeting-{}", at.timestamp_millis())
}

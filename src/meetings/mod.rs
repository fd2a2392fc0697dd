//! Client-side meeting tracking
//!
//! The console keeps its own ordered list of meetings it has started through
//! the backend. Records are only ever appended; afterwards their status moves
//! forward as stop requests succeed.

mod list;
mod record;

pub use list::MeetingList;
pub use record::{default_container_name, MeetingRecord, MeetingStatus};

/// Violations of the meeting list invariants
#[derive(Debug, thiserror::Error)]
pub enum MeetingError {
    #[error("Meeting {0} is already tracked")]
    Duplicate(String),

    #[error("Meeting {0} not found")]
    NotFound(String),

    #[error("Meeting {meeting_id} cannot move from {from} to {to}")]
    InvalidTransition {
        meeting_id: String,
        from: MeetingStatus,
        to: MeetingStatus,
    },
}

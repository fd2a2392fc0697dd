//! Meeting list controller
//!
//! Owns the console state and applies user actions to it:
//! - submitting a meeting link
//! - stopping a meeting
//! - updating the status banner

mod banner;
mod controller;
mod state;

pub use banner::{StatusBanner, StatusKind, DEFAULT_SUCCESS_TTL_SECS};
pub use controller::{
    MeetingController, StopOutcome, DEFAULT_STOP_AFTER_DURATION, JOINED_MESSAGE,
    JOINING_MESSAGE, STOPPED_MESSAGE,
};
pub use state::ConsoleState;

use crate::backend::BackendError;
use crate::meetings::MeetingError;

/// Why a user action failed; the message is what the banner shows
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Please enter a valid URL")]
    EmptyUrl,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Meeting(#[from] MeetingError),
}

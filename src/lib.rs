pub mod backend;
pub mod config;
pub mod console;
pub mod error;
pub mod http;
pub mod meetings;
pub mod view;

pub use backend::{BackendError, HttpMeetingBackend, MeetingBackend};
pub use config::Config;
pub use console::{ConsoleError, ConsoleState, MeetingController, StatusKind, StopOutcome};
pub use error::AppError;
pub use http::{create_router, AppState};
pub use meetings::{MeetingError, MeetingList, MeetingRecord, MeetingStatus};

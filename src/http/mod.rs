//! HTTP surface of the console
//!
//! - GET / - Meeting form and active meetings
//! - POST /meetings - Submit a meeting link, redirect to /
//! - POST /meetings/stop - Stop a meeting, redirect to /
//! - GET /meetings/list - Meeting list markup
//! - GET /api/meetings - Tracked meetings as JSON
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{StopMeetingForm, SubmitMeetingForm};
pub use routes::create_router;
pub use state::AppState;

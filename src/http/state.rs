use crate::console::MeetingController;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Owns the meeting list and talks to the backend
    pub controller: MeetingController,

    /// Page heading
    pub title: Arc<str>,
}

impl AppState {
    pub fn new(controller: MeetingController, title: &str) -> Self {
        Self {
            controller,
            title: Arc::from(title),
        }
    }
}

// Shared test doubles for the meeting bot backend
#![allow(dead_code)]

use async_trait::async_trait;
use meeting_console::backend::{CreatedMeeting, StopMeetingRequest, StopMeetingResponse};
use meeting_console::{BackendError, ConsoleState, MeetingBackend, MeetingController};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Backend that replays queued responses and records every call
#[derive(Default)]
pub struct ScriptedBackend {
    submit_replies: Mutex<VecDeque<Result<CreatedMeeting, BackendError>>>,
    stop_replies: Mutex<VecDeque<Result<StopMeetingResponse, BackendError>>>,
    submitted: Mutex<Vec<String>>,
    stop_requests: Mutex<Vec<StopMeetingRequest>>,
    /// When set, stop requests wait for a notification before replying
    stop_gate: Option<Arc<Notify>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            stop_gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn reply_created(&self, meeting_id: &str, container_name: Option<&str>) {
        self.submit_replies.lock().unwrap().push_back(Ok(CreatedMeeting {
            meeting_id: meeting_id.to_string(),
            container_name: container_name.map(str::to_string),
        }));
    }

    pub fn reply_submit_error(&self, err: BackendError) {
        self.submit_replies.lock().unwrap().push_back(Err(err));
    }

    pub fn reply_stopped(&self, message: Option<&str>) {
        self.stop_replies.lock().unwrap().push_back(Ok(StopMeetingResponse {
            message: message.map(str::to_string),
        }));
    }

    pub fn reply_stop_error(&self, err: BackendError) {
        self.stop_replies.lock().unwrap().push_back(Err(err));
    }

    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn stop_requests(&self) -> Vec<StopMeetingRequest> {
        self.stop_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingBackend for ScriptedBackend {
    async fn submit_meeting_link(&self, meet_url: &str) -> Result<CreatedMeeting, BackendError> {
        self.submitted.lock().unwrap().push(meet_url.to_string());
        self.submit_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn stop_meeting(
        &self,
        request: &StopMeetingRequest,
    ) -> Result<StopMeetingResponse, BackendError> {
        self.stop_requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.stop_gate {
            gate.notified().await;
        }
        self.stop_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn unscripted() -> BackendError {
    BackendError::Rejected {
        status: 500,
        message: "no scripted response".to_string(),
    }
}

pub fn controller(backend: Arc<ScriptedBackend>) -> MeetingController {
    MeetingController::new(ConsoleState::default(), backend, 20)
}

/// Controller already tracking the given meetings, each in container `bot-<id>`
pub async fn controller_with(backend: Arc<ScriptedBackend>, ids: &[&str]) -> MeetingController {
    let controller = controller(backend.clone());
    for id in ids {
        let container = format!("bot-{id}");
        backend.reply_created(id, Some(&container));
        controller
            .submit_meeting(&format!("https://meet.example.com/{id}"))
            .await
            .unwrap();
    }
    controller
}

pub async fn banner_message(controller: &MeetingController) -> Option<String> {
    controller
        .state()
        .read()
        .await
        .banner_at(chrono::Utc::now())
        .map(|b| b.message.clone())
}

pub fn count_rows(markup: &str) -> usize {
    markup.matches("class=\"meeting-item\"").count()
}

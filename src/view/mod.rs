//! Page rendering
//!
//! Markup is produced only from a `ConsoleState` snapshot; the mapping from
//! a meeting record to its row lives in `MeetingRow::from_record`.

use crate::console::ConsoleState;
use crate::meetings::{MeetingRecord, MeetingStatus};
use askama::Template;
use chrono::{DateTime, Utc};

pub const NO_MEETINGS_MESSAGE: &str = "No active meetings";

/// One rendered meeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRow {
    pub meeting_id: String,
    pub url: String,
    pub started: String,
    pub status: String,
    pub disabled: bool,
    pub stopping: bool,
}

impl MeetingRow {
    pub fn from_record(record: &MeetingRecord, stop_in_flight: bool) -> Self {
        let stopping = stop_in_flight || record.status == MeetingStatus::Stopping;
        Self {
            meeting_id: record.meeting_id.clone(),
            url: record.url.clone(),
            started: record.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            status: record.status.to_string(),
            disabled: stop_in_flight || record.status.is_terminal(),
            stopping,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.stopping {
            "Stopping..."
        } else {
            "Force Stop"
        }
    }
}

/// Banner contents at render time; an empty message renders an empty banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub message: String,
    pub class: String,
    /// Delay before the rendered banner hides itself (success only)
    pub expires_in_ms: Option<i64>,
}

#[derive(Template)]
#[template(path = "meetings/list.html")]
pub struct MeetingListTemplate {
    pub rows: Vec<MeetingRow>,
    pub placeholder: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub banner: BannerView,
    pub url_value: String,
    pub rows: Vec<MeetingRow>,
    pub placeholder: &'static str,
}

pub fn meeting_rows(state: &ConsoleState) -> Vec<MeetingRow> {
    state
        .meetings
        .iter()
        .map(|r| MeetingRow::from_record(r, state.is_stop_in_flight(&r.meeting_id)))
        .collect()
}

pub fn banner_view(state: &ConsoleState, now: DateTime<Utc>) -> BannerView {
    match state.banner_at(now) {
        Some(banner) => BannerView {
            message: banner.message.clone(),
            class: banner.css_class().to_string(),
            expires_in_ms: banner
                .remaining_at(now, state.success_ttl())
                .map(|d| d.num_milliseconds()),
        },
        None => BannerView {
            message: String::new(),
            class: "status-message".to_string(),
            expires_in_ms: None,
        },
    }
}

/// Render the meeting container alone
pub fn render_list(state: &ConsoleState) -> Result<String, askama::Error> {
    MeetingListTemplate {
        rows: meeting_rows(state),
        placeholder: NO_MEETINGS_MESSAGE,
    }
    .render()
}

/// Render the whole page with `url_value` prefilled in the link input
pub fn render_page(
    title: &str,
    state: &ConsoleState,
    now: DateTime<Utc>,
    url_value: &str,
) -> Result<String, askama::Error> {
    IndexTemplate {
        title: title.to_string(),
        banner: banner_view(state, now),
        url_value: url_value.to_string(),
        rows: meeting_rows(state),
        placeholder: NO_MEETINGS_MESSAGE,
    }
    .render()
}

use super::banner::{StatusBanner, StatusKind, DEFAULT_SUCCESS_TTL_SECS};
use crate::meetings::MeetingList;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// Everything the page shows: the meeting list, the status banner, and
/// which stop controls are currently disabled by an outstanding request.
#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub meetings: MeetingList,
    banner: Option<StatusBanner>,
    stops_in_flight: HashSet<String>,
    /// Link of the last submission that failed, shown once in the input
    failed_url: Option<String>,
    success_ttl: Duration,
}

impl ConsoleState {
    pub fn new(success_ttl: Duration) -> Self {
        Self {
            meetings: MeetingList::new(),
            banner: None,
            stops_in_flight: HashSet::new(),
            failed_url: None,
            success_ttl,
        }
    }

    /// Replace the status banner
    pub fn show_status(&mut self, message: impl Into<String>, kind: StatusKind, now: DateTime<Utc>) {
        self.banner = Some(StatusBanner::new(message, kind, now));
    }

    /// The banner as it should appear at `now`, if any
    pub fn banner_at(&self, now: DateTime<Utc>) -> Option<&StatusBanner> {
        self.banner
            .as_ref()
            .filter(|b| b.is_visible_at(now, self.success_ttl))
    }

    pub fn success_ttl(&self) -> Duration {
        self.success_ttl
    }

    pub fn remember_failed_url(&mut self, url: impl Into<String>) {
        self.failed_url = Some(url.into());
    }

    /// Hand out the failed link once; later renders start with an empty input
    pub fn take_failed_url(&mut self) -> Option<String> {
        self.failed_url.take()
    }

    pub fn is_stop_in_flight(&self, meeting_id: &str) -> bool {
        self.stops_in_flight.contains(meeting_id)
    }

    /// Disable the stop control for `meeting_id`.
    ///
    /// Returns `false` when the control is already disabled: unknown
    /// meeting, meeting no longer running, or a stop already in flight.
    pub fn begin_stop(&mut self, meeting_id: &str) -> bool {
        let runnable = self
            .meetings
            .get(meeting_id)
            .is_some_and(|r| !r.status.is_terminal());
        runnable && self.stops_in_flight.insert(meeting_id.to_string())
    }

    /// Re-enable the control after the stop request completed
    pub fn finish_stop(&mut self, meeting_id: &str) {
        self.stops_in_flight.remove(meeting_id);
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_SUCCESS_TTL_SECS))
    }
}

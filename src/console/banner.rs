use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a success banner stays up unless configured otherwise
pub const DEFAULT_SUCCESS_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// Outcome of the last user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
    pub kind: StatusKind,
    pub shown_at: DateTime<Utc>,
}

impl StatusBanner {
    pub fn new(message: impl Into<String>, kind: StatusKind, shown_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
        }
    }

    /// Success banners clear themselves once `success_ttl` has passed;
    /// the other kinds stay until replaced.
    pub fn is_visible_at(&self, now: DateTime<Utc>, success_ttl: Duration) -> bool {
        match self.kind {
            StatusKind::Success => now - self.shown_at < success_ttl,
            StatusKind::Error | StatusKind::Info => true,
        }
    }

    /// Time left before a success banner clears; `None` for banners that persist
    pub fn remaining_at(&self, now: DateTime<Utc>, success_ttl: Duration) -> Option<Duration> {
        match self.kind {
            StatusKind::Success => Some((self.shown_at + success_ttl - now).max(Duration::zero())),
            StatusKind::Error | StatusKind::Info => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "status-message success",
            StatusKind::Error => "status-message error",
            StatusKind::Info => "status-message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_banner_expires() {
        let shown = Utc::now();
        let ttl = Duration::seconds(DEFAULT_SUCCESS_TTL_SECS);
        let banner = StatusBanner::new("Meeting joined successfully", StatusKind::Success, shown);

        assert!(banner.is_visible_at(shown, ttl));
        assert!(banner.is_visible_at(shown + Duration::milliseconds(4999), ttl));
        assert!(!banner.is_visible_at(shown + Duration::seconds(5), ttl));
    }

    #[test]
    fn test_error_and_info_persist() {
        let shown = Utc::now();
        let ttl = Duration::seconds(DEFAULT_SUCCESS_TTL_SECS);
        let later = shown + Duration::hours(1);

        assert!(StatusBanner::new("boom", StatusKind::Error, shown).is_visible_at(later, ttl));
        assert!(StatusBanner::new("Joining meeting...", StatusKind::Info, shown)
            .is_visible_at(later, ttl));
    }

    #[test]
    fn test_remaining_time() {
        let shown = Utc::now();
        let ttl = Duration::seconds(DEFAULT_SUCCESS_TTL_SECS);

        let success = StatusBanner::new("ok", StatusKind::Success, shown);
        assert_eq!(
            success.remaining_at(shown + Duration::seconds(2), ttl),
            Some(Duration::seconds(3))
        );
        assert_eq!(
            success.remaining_at(shown + Duration::seconds(9), ttl),
            Some(Duration::zero())
        );
        assert_eq!(
            StatusBanner::new("no", StatusKind::Error, shown).remaining_at(shown, ttl),
            None
        );
    }

    #[test]
    fn test_css_class() {
        let now = Utc::now();
        assert_eq!(
            StatusBanner::new("x", StatusKind::Error, now).css_class(),
            "status-message error"
        );
        assert_eq!(
            StatusBanner::new("x", StatusKind::Info, now).css_class(),
            "status-message"
        );
    }
}

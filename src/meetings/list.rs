use super::record::{MeetingRecord, MeetingStatus};
use super::MeetingError;

/// Ordered, append-only collection of tracked meetings
#[derive(Debug, Clone, Default)]
pub struct MeetingList {
    records: Vec<MeetingRecord>,
}

impl MeetingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, rejecting an identifier that is already tracked
    pub fn push(&mut self, record: MeetingRecord) -> Result<(), MeetingError> {
        if self.contains(&record.meeting_id) {
            return Err(MeetingError::Duplicate(record.meeting_id));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, meeting_id: &str) -> Option<&MeetingRecord> {
        self.records.iter().find(|r| r.meeting_id == meeting_id)
    }

    pub fn contains(&self, meeting_id: &str) -> bool {
        self.get(meeting_id).is_some()
    }

    /// Advance one record's status in place
    pub fn set_status(
        &mut self,
        meeting_id: &str,
        status: MeetingStatus,
    ) -> Result<&MeetingRecord, MeetingError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.meeting_id == meeting_id)
            .ok_or_else(|| MeetingError::NotFound(meeting_id.to_string()))?;
        record.advance(status)?;
        Ok(&*record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeetingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[MeetingRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn meeting(id: &str) -> MeetingRecord {
        MeetingRecord::confirmed(
            id.to_string(),
            Some(format!("bot-{id}")),
            format!("https://meet.example.com/{id}"),
            Utc::now(),
        )
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut list = MeetingList::new();
        list.push(meeting("a")).unwrap();
        list.push(meeting("b")).unwrap();
        list.push(meeting("c")).unwrap();

        let ids: Vec<&str> = list.iter().map(|r| r.meeting_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut list = MeetingList::new();
        list.push(meeting("a")).unwrap();

        let err = list.push(meeting("a")).unwrap_err();
        assert!(matches!(err, MeetingError::Duplicate(ref id) if id == "a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_status_only_touches_target() {
        let mut list = MeetingList::new();
        list.push(meeting("a")).unwrap();
        list.push(meeting("b")).unwrap();

        list.set_status("a", MeetingStatus::Stopped).unwrap();

        assert_eq!(list.get("a").unwrap().status, MeetingStatus::Stopped);
        assert_eq!(list.get("b").unwrap().status, MeetingStatus::Active);
    }

    #[test]
    fn test_set_status_unknown_id() {
        let mut list = MeetingList::new();
        let err = list.set_status("ghost", MeetingStatus::Stopped).unwrap_err();
        assert!(matches!(err, MeetingError::NotFound(_)));
    }
}

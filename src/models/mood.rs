use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single journaled mood: label, optional free-text note, timestamp.
/// `mood` and `note` are stored verbatim — no enumeration, trimming, or
/// length limit is enforced server-side.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMoodEntryRequest {
    pub mood: String,
    pub note: Option<String>,
    /// Defaults to the server's current time when omitted.
    pub date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn request_deserializes_without_note_or_date() {
        let body: CreateMoodEntryRequest = serde_json::from_str(r#"{"mood":"Happy"}"#).unwrap();
        assert_eq!(body.mood, "Happy");
        assert!(body.note.is_none());
        assert!(body.date.is_none());
    }

    #[test]
    fn request_accepts_explicit_date() {
        let body: CreateMoodEntryRequest =
            serde_json::from_str(r#"{"mood":"Calm","note":"","date":"2026-08-25T09:30:00Z"}"#)
                .unwrap();
        assert_eq!(body.note.as_deref(), Some(""));
        assert_eq!(
            body.date,
            Some(Utc.with_ymd_and_hms(2026, 8, 25, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn entry_serializes_date_as_rfc3339_and_omits_missing_note() {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            mood: "Sad".into(),
            note: None,
            date: Utc.with_ymd_and_hms(2026, 8, 25, 9, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["mood"], "Sad");
        assert_eq!(value["date"], "2026-08-25T09:30:00Z");
        assert!(value.get("note").is_none());
    }

    #[test]
    fn entry_keeps_note_verbatim() {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            mood: "Happy".into(),
            note: Some("  great day  ".into()),
            date: Utc::now(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["note"], "  great day  ");
    }
}

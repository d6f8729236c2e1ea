use serde::Deserialize;

/// One entry of the `GET /activities` object, keyed by activity name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct ActivityDetails {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    fn from_details(name: String, d: ActivityDetails) -> Self {
        Self {
            name,
            description: d.description,
            schedule: d.schedule,
            max_participants: d.max_participants,
            participants: d.participants,
        }
    }

    /// Capacity minus roster size. The server keeps the roster within
    /// capacity; an over-full payload shows 0 rather than wrapping.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Decodes the `/activities` body, keeping the server's key order.
pub fn roster_from_json(body: &str) -> Result<Vec<Activity>, serde_json::Error> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)?;
    raw.into_iter()
        .map(|(name, value)| {
            serde_json::from_value::<ActivityDetails>(value).map(|d| Activity::from_details(name, d))
        })
        .collect()
}

/// 2xx body of signup / removal.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

/// Non-2xx body. FastAPI puts the reason in `detail`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        },
        "Programming Class": {
            "description": "Learn programming fundamentals and build software projects",
            "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": []
        },
        "Art Studio": {
            "description": "Painting and drawing",
            "schedule": "Mondays, 4:00 PM - 5:30 PM",
            "max_participants": 15,
            "participants": ["amelia@mergington.edu"]
        }
    }"#;

    #[test]
    fn roster_keeps_server_order() {
        let roster = roster_from_json(SAMPLE).unwrap();
        let names: Vec<&str> = roster.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Chess Club", "Programming Class", "Art Studio"]);
    }

    #[test]
    fn roster_carries_details() {
        let roster = roster_from_json(SAMPLE).unwrap();
        let chess = &roster[0];
        assert!(chess.description.starts_with("Learn"));
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.participants[0], "michael@mergington.edu");
        assert_eq!(chess.spots_left(), 10);
        assert_eq!(roster[1].spots_left(), 20);
    }

    #[test]
    fn missing_participants_means_empty_roster() {
        let roster = roster_from_json(
            r#"{"Drama": {"description": "d", "schedule": "s", "max_participants": 3}}"#,
        )
        .unwrap();
        assert!(roster[0].participants.is_empty());
        assert_eq!(roster[0].spots_left(), 3);
    }

    #[test]
    fn malformed_roster_is_an_error() {
        assert!(roster_from_json("[]").is_err());
        assert!(roster_from_json(r#"{"Drama": {"description": "d"}}"#).is_err());
        assert!(roster_from_json("not json").is_err());
    }

    #[test]
    fn over_full_activity_shows_zero_spots() {
        let a = Activity {
            name: "Chess Club".into(),
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.edu".into(), "b@x.edu".into()],
        };
        assert_eq!(a.spots_left(), 0);
    }

    #[test]
    fn error_body_without_detail_decodes_to_none() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Activity not found"));
    }

    proptest! {
        #[test]
        fn spots_left_is_capacity_minus_roster(max in 0u32..500, taken in 0usize..500) {
            prop_assume!(taken as u32 <= max);
            let a = Activity {
                name: "Any".into(),
                description: String::new(),
                schedule: String::new(),
                max_participants: max,
                participants: (0..taken).map(|i| format!("s{i}@mergington.edu")).collect(),
            };
            prop_assert_eq!(a.spots_left(), max - taken as u32);
        }
    }
}

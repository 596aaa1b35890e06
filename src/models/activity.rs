use serde::{Deserialize, Serialize};

// One extracurricular offering. The roster name is the map key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_the_four_roster_fields() {
        let activity = Activity::new("Chess", "Fridays", 12, &["a@mergington.edu"]);
        let value = serde_json::to_value(&activity).unwrap();

        assert_eq!(value["description"], "Chess");
        assert_eq!(value["schedule"], "Fridays");
        assert_eq!(value["max_participants"], 12);
        assert_eq!(value["participants"], serde_json::json!(["a@mergington.edu"]));
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn participant_lookup_is_exact() {
        let activity = Activity::new("Chess", "Fridays", 12, &["a@mergington.edu"]);
        assert!(activity.has_participant("a@mergington.edu"));
        assert!(!activity.has_participant("A@mergington.edu"));
    }
}

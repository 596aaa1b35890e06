use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::database::{ActivityMap, ActivityStore};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

pub type RosterResult<T> = Result<T, RosterError>;

/// List, signup and unregister over a shared [`ActivityStore`].
///
/// Capacity (`max_participants`) is reported but not enforced on signup.
#[derive(Debug, Clone)]
pub struct RosterService {
    store: Arc<ActivityStore>,
}

impl RosterService {
    pub fn new(store: Arc<ActivityStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<ActivityStore> {
        &self.store
    }

    pub fn list_activities(&self) -> ActivityMap {
        self.store.get_all()
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> RosterResult<String> {
        self.store
            .with_activity_mut(activity_name, |activity| -> RosterResult<()> {
                if activity.has_participant(email) {
                    return Err(RosterError::AlreadyRegistered);
                }
                activity.participants.push(email.to_string());
                Ok(())
            })
            .ok_or(RosterError::ActivityNotFound)??;

        info!(activity = %activity_name, email = %email, "signup");
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> RosterResult<String> {
        self.store
            .with_activity_mut(activity_name, |activity| -> RosterResult<()> {
                let idx = activity
                    .participants
                    .iter()
                    .position(|p| p == email)
                    .ok_or(RosterError::NotRegistered)?;
                activity.participants.remove(idx);
                Ok(())
            })
            .ok_or(RosterError::ActivityNotFound)??;

        info!(activity = %activity_name, email = %email, "unregister");
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

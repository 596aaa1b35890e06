use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed;
use crate::models::Activity;

pub type ActivityMap = BTreeMap<String, Activity>;

/// In-memory roster keyed by activity name.
///
/// Reads take the shared lock; every mutation goes through
/// [`ActivityStore::with_activity_mut`] so a check and the write that depends
/// on it happen under one exclusive lock.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<ActivityMap>,
}

impl ActivityStore {
    pub fn from_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            activities: RwLock::new(activities.into_iter().collect()),
        }
    }

    pub fn seeded() -> Self {
        Self::from_activities(seed::seed_activities())
    }

    /// Owned copy of the whole roster; later mutations are not reflected.
    pub fn get_all(&self) -> ActivityMap {
        self.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.read().get(name).cloned()
    }

    /// Runs `f` against the named activity under the write lock.
    /// Returns `None` when no activity has that name.
    pub fn with_activity_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> T,
    ) -> Option<T> {
        self.write().get_mut(name).map(f)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Mutations never leave the map half-written, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, ActivityMap> {
        self.activities
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ActivityMap> {
        self.activities
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ActivityStore {
        ActivityStore::from_activities([(
            "Chess Club".to_string(),
            Activity::new("Chess", "Fridays", 12, &["michael@mergington.edu"]),
        )])
    }

    #[test]
    fn get_is_case_sensitive() {
        let store = store();
        assert!(store.get("Chess Club").is_some());
        assert!(store.get("chess club").is_none());
    }

    #[test]
    fn snapshot_does_not_follow_later_mutations() {
        let store = store();
        let snapshot = store.get_all();

        store.with_activity_mut("Chess Club", |a| {
            a.participants.push("new@mergington.edu".into())
        });

        assert_eq!(snapshot["Chess Club"].participants.len(), 1);
        assert_eq!(store.get("Chess Club").unwrap().participants.len(), 2);
    }

    #[test]
    fn mutating_a_missing_activity_returns_none() {
        let store = store();
        let touched = store.with_activity_mut("Nope", |_| ());
        assert!(touched.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn seeded_store_is_populated() {
        let store = ActivityStore::seeded();
        assert!(!store.is_empty());
        assert!(store.get("Soccer").is_some());
    }
}

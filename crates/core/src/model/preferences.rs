use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::quiz::Difficulty;

/// User-facing preference flags, persisted as one snapshot.
///
/// `Default` is the factory state a data reset returns to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub notifications_enabled: bool,
    pub sound_effects_enabled: bool,
    pub haptic_feedback_enabled: bool,
    pub dark_mode_enabled: bool,
    pub preferred_difficulty: Difficulty,
    /// Local time of day for the daily study reminder, if scheduled.
    pub daily_reminder: Option<NaiveTime>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            sound_effects_enabled: true,
            haptic_feedback_enabled: true,
            dark_mode_enabled: true,
            preferred_difficulty: Difficulty::Beginner,
            daily_reminder: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_factory_state() {
        let prefs = UserPreferences::default();
        assert!(prefs.notifications_enabled);
        assert!(prefs.dark_mode_enabled);
        assert_eq!(prefs.preferred_difficulty, Difficulty::Beginner);
        assert!(prefs.daily_reminder.is_none());
    }

    #[test]
    fn partial_snapshot_fills_missing_fields() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{"dark_mode_enabled": false}"#).unwrap();
        assert!(!prefs.dark_mode_enabled);
        assert!(prefs.sound_effects_enabled);
    }
}

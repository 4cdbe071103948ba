//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::habit::HabitFrequency;

/// A stored notification for a user.
///
/// Delivery is a read flag only; there is no push channel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification type (e.g., "challenge", "streak", "system").
    pub notification_type: String,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification type.
    pub notification_type: String,
}

impl NewNotification {
    /// Notification emitted when a user joins a challenge.
    pub fn challenge_joined(user_id: Uuid, challenge_title: &str) -> Self {
        Self {
            user_id,
            title: "Challenge joined".to_string(),
            message: format!("You joined the challenge \"{challenge_title}\". Good luck!"),
            notification_type: "challenge".to_string(),
        }
    }

    /// Notification emitted when a habit streak reaches a milestone.
    pub fn streak_milestone(
        user_id: Uuid,
        habit_title: &str,
        streak: u32,
        frequency: HabitFrequency,
    ) -> Self {
        Self {
            user_id,
            title: "Streak milestone".to_string(),
            message: format!(
                "\"{habit_title}\" is on a {streak}-{} streak. Keep it up!",
                frequency.unit_name()
            ),
            notification_type: "streak".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_message_matches_frequency_unit() {
        let daily =
            NewNotification::streak_milestone(Uuid::new_v4(), "Run", 7, HabitFrequency::Daily);
        assert!(daily.message.contains("7-day streak"), "{}", daily.message);

        let weekly =
            NewNotification::streak_milestone(Uuid::new_v4(), "Review", 7, HabitFrequency::Weekly);
        assert!(
            weekly.message.contains("7-week streak"),
            "{}",
            weekly.message
        );
    }
}

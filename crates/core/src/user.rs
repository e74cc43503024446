//! Profile records sourced from the remote user directory.

use serde::{Deserialize, Serialize};

/// A user profile as delivered by the directory.
///
/// Field names mirror the directory's JSON payload. A user embedded in a
/// slot is a snapshot copy taken at assignment time, never a live link back
/// to the directory. Identity for display purposes is the screen name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// URL of the avatar image.
    pub profile_image_url: String,
    /// Handle shown on the card.
    pub screen_name: String,
    /// Link to the profile page.
    pub url: String,
    /// Follower count at snapshot time.
    pub followers_count: u64,
    /// Following count at snapshot time.
    pub friends_count: u64,
    /// Account creation timestamp, kept verbatim as delivered.
    pub created_at: String,
    /// Free-text profile description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_directory_payload_with_missing_fields() {
        let json = r#"{"screen_name":"ada","followers_count":42}"#;
        let user: User = serde_json::from_str(json).expect("partial record parses");
        assert_eq!(user.screen_name, "ada");
        assert_eq!(user.followers_count, 42);
        assert!(user.description.is_empty());
    }
}

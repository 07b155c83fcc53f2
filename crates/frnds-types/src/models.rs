use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of photos (and captions) kept on a profile.
pub const MAX_PHOTOS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Man,
    Vrouw,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    pub instagram: String,
    pub snapchat: String,
    pub tiktok: String,
}

/// Everything a user shows on their card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: Option<u32>,
    pub gender: Gender,
    pub photos: Vec<String>,
    pub photo_captions: Vec<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub socials: Socials,
    pub status_text: String,
    pub anthem_url: String,
    pub spotify_url: String,
}

/// A registered user as seen from outside the store.
///
/// There is no credential field: the secret stays inside the directory, so
/// every read that hands out a `User` is redacted by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    #[serde(flatten)]
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

/// A symmetric pairing of two distinct users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub a: Uuid,
    pub b: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.a == user_id || self.b == user_id
    }

    /// The member that is not `user_id`, if `user_id` is a member at all.
    pub fn counterpart(&self, user_id: Uuid) -> Option<Uuid> {
        if self.a == user_id {
            Some(self.b)
        } else if self.b == user_id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A chat message inside a match. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub match_id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub message: String,
    #[serde(rename = "ts", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// One entry of a user's match list: the match and the other member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: Uuid,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_resolves_from_either_side() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let m = Match { id: Uuid::new_v4(), a, b, created_at: Utc::now() };

        assert_eq!(m.counterpart(a), Some(b));
        assert_eq!(m.counterpart(b), Some(a));
        assert_eq!(m.counterpart(Uuid::new_v4()), None);
        assert!(m.involves(a) && m.involves(b));
    }

    #[test]
    fn user_serializes_camel_case_without_password() {
        let user = User {
            id: Uuid::new_v4(),
            username: "lina".into(),
            is_admin: false,
            profile: Profile { status_text: "Be kind".into(), ..Profile::default() },
            created_at: Utc::now(),
            last_active: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "lina");
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["statusText"], "Be kind");
        assert_eq!(json["gender"], "man");
        assert!(json.get("password").is_none());
    }
}

use tracing::{debug, info};
use uuid::Uuid;

use frnds_types::{Match, MatchSummary, Message, Profile, ProfilePatch, User};

use crate::conversations::ConversationStore;
use crate::error::Result;
use crate::Store;

/// Result of a like: whether it made the pair mutual, and the match if so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeOutcome {
    pub mutual: bool,
    pub matched: Option<Match>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub users: usize,
    pub matches: usize,
}

impl Store {
    // -- Directory --

    pub fn register(&self, handle: &str, credential: &str, profile: Profile) -> Result<User> {
        self.with_state_mut(|s| s.directory.register(handle, credential, profile))
    }

    pub fn authenticate(&self, handle: &str, credential: &str) -> Result<User> {
        self.with_state_mut(|s| s.directory.authenticate(handle, credential))
    }

    pub fn user(&self, id: Uuid) -> Result<User> {
        self.with_state(|s| s.directory.require(id).cloned())
    }

    pub fn update_profile(&self, id: Uuid, patch: &ProfilePatch) -> Result<User> {
        self.with_state_mut(|s| s.directory.update_profile(id, patch))
    }

    pub fn ping(&self, id: Uuid) -> Result<User> {
        self.with_state_mut(|s| s.directory.touch(id))
    }

    pub fn list_others(&self, exclude_id: Uuid) -> Result<Vec<User>> {
        self.with_state(|s| Ok(s.directory.list_others(exclude_id)))
    }

    // -- Affinity / matches --

    /// Records the like and, once it is mutual, makes sure the pair has a match.
    pub fn like(&self, from: Uuid, to: Uuid) -> Result<LikeOutcome> {
        self.with_state_mut(|s| {
            let status = s.affinity.record_like(&s.directory, from, to)?;
            if !status.is_mutual() {
                return Ok(LikeOutcome { mutual: false, matched: None });
            }

            let m = s.matches.ensure_match(from, to)?;
            Ok(LikeOutcome { mutual: true, matched: Some(m) })
        })
    }

    /// Match for two registered users, created if needed.
    pub fn ensure_match(&self, a: Uuid, b: Uuid) -> Result<Match> {
        self.with_state_mut(|s| {
            s.directory.require(a)?;
            s.directory.require(b)?;
            s.matches.ensure_match(a, b)
        })
    }

    pub fn matches_for(&self, user_id: Uuid) -> Result<Vec<MatchSummary>> {
        self.with_state(|s| Ok(s.matches.list_for_user(&s.directory, user_id)))
    }

    // -- Conversations --

    /// Opens (or reuses) the match between `from` and `to` and posts the
    /// opening message. All checks run before anything is written, the text
    /// first.
    pub fn first_message(&self, from: Uuid, to: Uuid, text: &str) -> Result<Message> {
        self.with_state_mut(|s| {
            ConversationStore::validate_text(text)?;
            s.directory.require(from)?;
            s.directory.require(to)?;

            let m = s.matches.ensure_match(from, to)?;
            let message = s.conversations.append(&s.matches, m.id, from, to, text)?;
            info!("First message from {} to {} in match {}", from, to, m.id);
            Ok(message)
        })
    }

    pub fn send_message(&self, match_id: Uuid, from: Uuid, to: Uuid, text: &str) -> Result<Message> {
        self.with_state_mut(|s| s.conversations.append(&s.matches, match_id, from, to, text))
    }

    pub fn messages_for(&self, match_id: Uuid) -> Result<Vec<Message>> {
        self.with_state(|s| {
            let list = s.conversations.list_for_match(match_id);
            debug!("Listed {} messages for match {}", list.len(), match_id);
            Ok(list)
        })
    }

    // -- Misc --

    pub fn stats(&self) -> Result<Stats> {
        self.with_state(|s| {
            Ok(Stats {
                users: s.directory.len(),
                matches: s.matches.len(),
            })
        })
    }
}

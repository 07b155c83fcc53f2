use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use frnds_types::{Profile, ProfilePatch, User};

use crate::error::{Result, StoreError};

/// A user as the directory keeps it. The credential never leaves this module.
#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    credential: String,
}

/// Registered users in insertion order.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<UserRecord>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn register(&mut self, handle: &str, credential: &str, profile: Profile) -> Result<User> {
        self.insert(handle, credential, profile, false)
    }

    /// Registers an account with the admin flag set. Only reachable from
    /// seeding, never from the public registration path.
    pub(crate) fn register_admin(
        &mut self,
        handle: &str,
        credential: &str,
        profile: Profile,
    ) -> Result<User> {
        self.insert(handle, credential, profile, true)
    }

    fn insert(
        &mut self,
        handle: &str,
        credential: &str,
        profile: Profile,
        is_admin: bool,
    ) -> Result<User> {
        if handle.is_empty() || credential.is_empty() {
            return Err(StoreError::InvalidInput("username/password required".into()));
        }
        if self.find_by_handle(handle).is_some() {
            return Err(StoreError::Conflict(format!("username '{}' is already taken", handle)));
        }

        let mut id = Uuid::new_v4();
        while self.lookup(id).is_some() {
            id = Uuid::new_v4();
        }

        let now = Utc::now();
        let user = User {
            id,
            username: handle.to_string(),
            is_admin,
            profile,
            created_at: now,
            last_active: now,
        };
        self.users.push(UserRecord {
            user: user.clone(),
            credential: credential.to_string(),
        });

        info!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Exact, case-sensitive match on both handle and credential. Refreshes
    /// the user's last-active time on success.
    pub fn authenticate(&mut self, handle: &str, credential: &str) -> Result<User> {
        let record = self
            .users
            .iter_mut()
            .find(|r| r.user.username == handle && r.credential == credential)
            .ok_or(StoreError::Unauthorized)?;

        record.user.last_active = Utc::now();
        Ok(record.user.clone())
    }

    pub fn lookup(&self, id: Uuid) -> Option<&User> {
        self.users.iter().map(|r| &r.user).find(|u| u.id == id)
    }

    pub fn find_by_handle(&self, handle: &str) -> Option<&User> {
        self.users.iter().map(|r| &r.user).find(|u| u.username == handle)
    }

    /// Fails with `NotFound` unless `id` is registered.
    pub fn require(&self, id: Uuid) -> Result<&User> {
        self.lookup(id)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", id)))
    }

    pub fn update_profile(&mut self, id: Uuid, patch: &ProfilePatch) -> Result<User> {
        let user = self.user_mut(id)?;
        patch.apply(&mut user.profile);
        user.last_active = Utc::now();
        Ok(user.clone())
    }

    /// Activity ping.
    pub fn touch(&mut self, id: Uuid) -> Result<User> {
        let user = self.user_mut(id)?;
        user.last_active = Utc::now();
        Ok(user.clone())
    }

    /// Everyone except `exclude_id`, in registration order.
    pub fn list_others(&self, exclude_id: Uuid) -> Vec<User> {
        self.users
            .iter()
            .filter(|r| r.user.id != exclude_id)
            .map(|r| r.user.clone())
            .collect()
    }

    fn user_mut(&mut self, id: Uuid) -> Result<&mut User> {
        self.users
            .iter_mut()
            .map(|r| &mut r.user)
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", id)))
    }
}

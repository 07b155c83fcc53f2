use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::directory::Directory;
use crate::error::{Result, StoreError};

/// "`from` likes `to`". Never updated or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affinity {
    pub from: Uuid,
    pub to: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutualStatus {
    OneSided,
    Mutual,
}

impl MutualStatus {
    pub fn is_mutual(self) -> bool {
        self == Self::Mutual
    }
}

/// Append-only record of likes, indexed by ordered pair.
#[derive(Debug, Default)]
pub struct AffinityLedger {
    likes: Vec<Affinity>,
    pairs: HashSet<(Uuid, Uuid)>,
}

impl AffinityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }

    pub fn likes(&self, from: Uuid, to: Uuid) -> bool {
        self.pairs.contains(&(from, to))
    }

    /// Records `from → to` once; repeats are no-ops. Reports whether
    /// `to → from` already exists.
    pub fn record_like(&mut self, directory: &Directory, from: Uuid, to: Uuid) -> Result<MutualStatus> {
        directory.require(from)?;
        directory.require(to)?;
        if from == to {
            return Err(StoreError::InvalidInput("a user cannot like themselves".into()));
        }

        if self.pairs.insert((from, to)) {
            self.likes.push(Affinity {
                from,
                to,
                created_at: Utc::now(),
            });
            debug!("Like recorded {} -> {}", from, to);
        }

        Ok(if self.likes(to, from) {
            MutualStatus::Mutual
        } else {
            MutualStatus::OneSided
        })
    }
}

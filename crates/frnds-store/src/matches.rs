use std::collections::HashMap;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use frnds_types::{Match, MatchSummary};

use crate::directory::Directory;
use crate::error::{Result, StoreError};

/// Unordered key for a pair of users.
fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Matches in creation order, with an index on the unordered pair so each
/// pair maps to at most one match.
#[derive(Debug, Default)]
pub struct MatchRegistry {
    matches: Vec<Match>,
    by_pair: HashMap<(Uuid, Uuid), usize>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, match_id: Uuid) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn find_pair(&self, a: Uuid, b: Uuid) -> Option<&Match> {
        self.by_pair.get(&pair_key(a, b)).map(|&i| &self.matches[i])
    }

    /// Returns the match for `{a, b}`, creating it on first use. Existing
    /// matches are returned untouched whichever order the ids come in.
    pub fn ensure_match(&mut self, a: Uuid, b: Uuid) -> Result<Match> {
        if a == b {
            return Err(StoreError::InvalidInput("a match needs two distinct users".into()));
        }
        if let Some(existing) = self.find_pair(a, b) {
            return Ok(existing.clone());
        }

        let mut id = Uuid::new_v4();
        while self.get(id).is_some() {
            id = Uuid::new_v4();
        }
        let m = Match {
            id,
            a,
            b,
            created_at: Utc::now(),
        };
        self.by_pair.insert(pair_key(a, b), self.matches.len());
        self.matches.push(m.clone());

        info!("Match {} created between {} and {}", m.id, a, b);
        Ok(m)
    }

    /// Matches that `user_id` belongs to, each resolved to the other member.
    pub fn list_for_user(&self, directory: &Directory, user_id: Uuid) -> Vec<MatchSummary> {
        self.matches
            .iter()
            .filter(|m| m.involves(user_id))
            .filter_map(|m| {
                let other = directory.lookup(m.counterpart(user_id)?)?;
                Some(MatchSummary {
                    match_id: m.id,
                    user: other.clone(),
                })
            })
            .collect()
    }
}

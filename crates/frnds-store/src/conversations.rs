use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use frnds_types::Message;

use crate::error::{Result, StoreError};
use crate::matches::MatchRegistry;

/// Append-only message log for all matches.
#[derive(Debug, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    /// Latest timestamp handed out per match.
    last_ts: HashMap<Uuid, DateTime<Utc>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Rejects empty text before touching anything.
    pub fn validate_text(text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(StoreError::InvalidInput("message text required".into()));
        }
        Ok(())
    }

    pub fn append(
        &mut self,
        matches: &MatchRegistry,
        match_id: Uuid,
        from: Uuid,
        to: Uuid,
        text: &str,
    ) -> Result<Message> {
        Self::validate_text(text)?;
        if matches.get(match_id).is_none() {
            return Err(StoreError::NotFound(format!("match {}", match_id)));
        }

        // Never earlier than the previous message in this match, even if the
        // wall clock steps back.
        let now = Utc::now();
        let created_at = match self.last_ts.get(&match_id) {
            Some(&last) if last > now => last,
            _ => now,
        };
        self.last_ts.insert(match_id, created_at);

        let message = Message {
            id: Uuid::new_v4(),
            match_id,
            from_user_id: from,
            to_user_id: to,
            message: text.to_string(),
            created_at,
        };
        self.messages.push(message.clone());

        debug!("Message {} appended to match {}", message.id, match_id);
        Ok(message)
    }

    /// Messages of one match, oldest first; ties keep arrival order.
    pub fn list_for_match(&self, match_id: Uuid) -> Vec<Message> {
        let mut list: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.match_id == match_id)
            .cloned()
            .collect();
        list.sort_by_key(|m| m.created_at);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_match() -> (MatchRegistry, Uuid, Uuid, Uuid) {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut registry = MatchRegistry::new();
        let m = registry.ensure_match(a, b).unwrap();
        (registry, m.id, a, b)
    }

    #[test]
    fn append_to_unknown_match_is_not_found() {
        let (registry, _, a, b) = registry_with_match();
        let mut store = ConversationStore::new();

        let err = store
            .append(&registry, Uuid::new_v4(), a, b, "hoi")
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_text_is_invalid() {
        let (registry, match_id, a, b) = registry_with_match();
        let mut store = ConversationStore::new();

        let err = store.append(&registry, match_id, a, b, "").unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn messages_come_back_in_arrival_order() {
        let (registry, match_id, a, b) = registry_with_match();
        let mut store = ConversationStore::new();

        for i in 0..20 {
            let (from, to) = if i % 2 == 0 { (a, b) } else { (b, a) };
            store
                .append(&registry, match_id, from, to, &format!("msg {}", i))
                .unwrap();
        }

        let list = store.list_for_match(match_id);
        assert_eq!(list.len(), 20);
        assert!(list.windows(2).all(|w| w[0].created_at <= w[1].created_at));
        let texts: Vec<_> = list.iter().map(|m| m.message.as_str()).collect();
        let expected: Vec<_> = (0..20).map(|i| format!("msg {}", i)).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let (registry, match_id, a, b) = registry_with_match();
        let mut store = ConversationStore::new();

        // Pretend an earlier message was stamped in the future.
        let future = Utc::now() + chrono::Duration::hours(1);
        store.last_ts.insert(match_id, future);

        let msg = store.append(&registry, match_id, a, b, "hoi").unwrap();
        assert_eq!(msg.created_at, future);
    }

    #[test]
    fn list_is_scoped_to_the_match() {
        let (mut registry, match_id, a, _) = registry_with_match();
        let c = Uuid::new_v4();
        let other = registry.ensure_match(a, c).unwrap().id;
        let mut store = ConversationStore::new();

        store.append(&registry, match_id, a, c, "one").unwrap();
        store.append(&registry, other, a, c, "two").unwrap();

        let list = store.list_for_match(other);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].message, "two");
        assert!(store.list_for_match(Uuid::new_v4()).is_empty());
    }
}

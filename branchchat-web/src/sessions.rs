//! Local mirror of the remote chat-session list.
//!
//! The sidebar drives the backend calls; this store owns the list rules —
//! the active session cannot be deleted, removal preserves the order of
//! the survivors, and emptying the list signals a navigation to home.

use shared::models::ChatSummary;

/// Outcome of a delete request against the local list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The session is currently open; deletion is a no-op.
    ActiveGuard,
    /// The id is not in the list; nothing changed.
    Missing,
    /// Exactly one entry was removed. `emptied` is true when it was the
    /// last one, in which case the caller navigates to the default route.
    Removed { emptied: bool },
}

/// Cached session list plus the id of the session open in the chat view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    sessions: Vec<ChatSummary>,
    active: Option<i64>,
}

impl SessionStore {
    pub fn sessions(&self) -> &[ChatSummary] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn active(&self) -> Option<i64> {
        self.active
    }

    pub fn contains(&self, id: i64) -> bool {
        self.sessions.iter().any(|session| session.id == id)
    }

    /// Replace the cached list with a freshly fetched one.
    pub fn replace(&mut self, sessions: Vec<ChatSummary>) {
        self.sessions = sessions;
    }

    /// Record which session the chat view currently displays.
    pub fn set_active(&mut self, id: Option<i64>) {
        self.active = id;
    }

    /// Append a session confirmed by the backend.
    pub fn push_created(&mut self, session: ChatSummary) {
        self.sessions.push(session);
    }

    /// Remove a session, refusing to touch the one that is open.
    pub fn remove(&mut self, id: i64) -> DeleteOutcome {
        if self.active == Some(id) {
            return DeleteOutcome::ActiveGuard;
        }
        if !self.contains(id) {
            return DeleteOutcome::Missing;
        }

        self.sessions.retain(|session| session.id != id);
        DeleteOutcome::Removed {
            emptied: self.sessions.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::Timestamp;

    fn summary(id: i64) -> ChatSummary {
        ChatSummary {
            id,
            created_at: Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 10, 0, 0).unwrap()),
        }
    }

    fn store_with(ids: &[i64], active: Option<i64>) -> SessionStore {
        let mut store = SessionStore::default();
        store.replace(ids.iter().copied().map(summary).collect());
        store.set_active(active);
        store
    }

    #[test]
    fn test_deleting_active_session_is_a_no_op() {
        let mut store = store_with(&[1, 2, 3], Some(2));

        assert_eq!(store.remove(2), DeleteOutcome::ActiveGuard);
        let ids: Vec<_> = store.sessions().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_deleting_non_active_removes_exactly_one() {
        let mut store = store_with(&[1, 2, 3], Some(1));

        assert_eq!(store.remove(2), DeleteOutcome::Removed { emptied: false });
        let ids: Vec<_> = store.sessions().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_deleting_last_session_signals_empty() {
        let mut store = store_with(&[5], None);

        assert_eq!(store.remove(5), DeleteOutcome::Removed { emptied: true });
        assert!(store.is_empty());
    }

    #[test]
    fn test_deleting_unknown_id_changes_nothing() {
        let mut store = store_with(&[1, 2], None);

        assert_eq!(store.remove(9), DeleteOutcome::Missing);
        assert_eq!(store.sessions().len(), 2);
    }

    #[test]
    fn test_push_created_appends_in_order() {
        let mut store = store_with(&[1], None);
        store.push_created(summary(2));

        let ids: Vec<_> = store.sessions().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}

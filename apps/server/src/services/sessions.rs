//! In-memory store of running quiz sessions.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use date_quiz_core::QuizSession;
use uuid::Uuid;

/// Live sessions keyed by id.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, QuizSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new session, dropping sessions that have already finished.
    pub fn insert(&self, session: QuizSession) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.retain(|_, s| !s.is_finished());
        sessions.insert(id, session);
        id
    }

    /// Run `f` against a session, if it exists.
    pub fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut QuizSession) -> T) -> Option<T> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.get_mut(&id).map(f)
    }

    /// Discard a session. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

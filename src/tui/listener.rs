use crossterm::event::{KeyCode, KeyEvent};

/// What a registered key listener asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SubmitDraft,
}

/// Handle returned by `register`, needed to deregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Global key listeners, consulted before mode-specific key handling.
///
/// Listeners are tied to a session (e.g. an open draft) and must be
/// deregistered when it ends, or they keep firing on later key presses.
#[derive(Debug, Default)]
pub struct KeyListeners {
    next_id: u64,
    entries: Vec<(ListenerId, KeyCode, KeyAction)>,
}

impl KeyListeners {
    pub fn register(&mut self, code: KeyCode, action: KeyAction) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, code, action));
        tracing::trace!(?id, ?code, ?action, "key listener registered");
        id
    }

    /// Returns false if the listener was already gone
    pub fn deregister(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(lid, _, _)| *lid != id);
        let removed = self.entries.len() != before;
        tracing::trace!(?id, removed, "key listener deregistered");
        removed
    }

    /// The action of the first listener registered for this key's code
    pub fn dispatch(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.entries
            .iter()
            .find(|(_, code, _)| *code == key.code)
            .map(|(_, _, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use crate::signal::Signal;
use std::sync::Arc;

/// Set of wakeup tokens parked on one side of a channel.
///
/// Tokens are keyed by pointer identity and appear at most once. The set is
/// guarded externally by the channel's registry mutex; the select call that
/// inserts a token removes it before returning.
pub(crate) struct WaiterSet {
    tokens: Vec<Arc<Signal>>,
}

impl WaiterSet {
    pub(crate) fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Inserts a token unless an identical one is already present.
    pub(crate) fn insert(&mut self, token: &Arc<Signal>) {
        if !self.tokens.iter().any(|t| Arc::ptr_eq(t, token)) {
            self.tokens.push(token.clone());
        }
    }

    /// Removes a token by identity, if present.
    pub(crate) fn remove(&mut self, token: &Arc<Signal>) {
        if let Some(pos) = self.tokens.iter().position(|t| Arc::ptr_eq(t, token)) {
            self.tokens.swap_remove(pos);
        }
    }

    /// Posts every token in the set.
    pub(crate) fn notify_all(&self) {
        for token in &self.tokens {
            token.notify();
        }
    }
}

//! Request generation tracking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter arbitrating overlapping analysis requests.
///
/// Every request takes a token when it starts; once a newer token has been
/// issued, older tokens are stale and their results must be discarded rather
/// than rendered. This makes the outcome of rapid repeated triggers
/// deterministic: the newest request always wins.
#[derive(Debug, Default)]
pub struct RequestLedger {
    latest: AtomicU64,
}

/// Token identifying one analysis request's position in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

impl RequestLedger {
    /// Creates a new ledger with no requests recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the start of a new request and returns its token.
    ///
    /// Issuing a token makes every previously issued token stale.
    pub fn begin(&self) -> RequestToken {
        RequestToken {
            generation: self.latest.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Returns whether `token` still belongs to the newest request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_single_token_is_current() {
        let ledger = RequestLedger::new();
        let token = ledger.begin();
        assert!(ledger.is_current(token));
    }

    #[test]
    fn test_newer_token_supersedes_older() {
        let ledger = RequestLedger::new();
        let first = ledger.begin();
        let second = ledger.begin();
        assert!(!ledger.is_current(first));
        assert!(ledger.is_current(second));
    }

    #[test]
    fn test_tokens_are_strictly_ordered() {
        let ledger = RequestLedger::new();
        let mut last = ledger.begin();
        for _ in 0..100 {
            let next = ledger.begin();
            assert_ne!(next, last);
            assert!(ledger.is_current(next));
            assert!(!ledger.is_current(last));
            last = next;
        }
    }

    #[test]
    fn test_concurrent_begins_produce_exactly_one_current_token() {
        let ledger = Arc::new(RequestLedger::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || ledger.begin())
            })
            .collect();
        let tokens: Vec<RequestToken> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let current: Vec<_> = tokens
            .iter()
            .filter(|token| ledger.is_current(**token))
            .collect();
        assert_eq!(current.len(), 1, "exactly one token may be current");
    }
}

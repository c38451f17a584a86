use std::collections::HashSet;
use std::sync::RwLock;

/// Ledger of digital-product redemption codes that have been used.
///
/// Explicitly constructed and passed to whoever needs it; keeping one instance
/// per process is a wiring concern, not enforced here. Interior locking keeps
/// `mark_used`/`is_used` safe when the ledger is shared across threads.
///
/// Membership is independent of the product's own expiry date: an expired
/// code can still be marked and queried.
#[derive(Debug, Default)]
pub struct RedemptionLedger {
    used: RwLock<HashSet<String>>,
}

impl RedemptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a code as used. Marking an already-used code has no further
    /// effect. There is no removal operation.
    pub fn mark_used(&self, code: impl Into<String>) {
        if let Ok(mut used) = self.used.write() {
            used.insert(code.into());
        }
    }

    /// Whether `code` has ever been marked used.
    pub fn is_used(&self, code: &str) -> bool {
        self.used
            .read()
            .map(|used| used.contains(code))
            .unwrap_or(false)
    }
}

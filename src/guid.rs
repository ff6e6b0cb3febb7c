//! Identifier source for sub-region ids.
//!
//! Sub-region identifiers must stay stable for an element's lifetime and be
//! unique across every element created in the process. The source is an
//! injected trait so tests can supply a deterministic counter; the default
//! [`Guid`] draws from one process-wide atomic.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// IdSource Trait
// =============================================================================

/// Supplier of unique identifier tokens.
///
/// Implementations hand out a fresh token on every call. Tokens from the
/// default [`Guid`] source are unique process-wide; a custom source only
/// has to be unique within whatever scope its owner cares about.
pub trait IdSource {
    /// Return the next token.
    fn next(&self) -> u64;
}

// =============================================================================
// Guid - process-wide monotonic source
// =============================================================================

static NEXT_GUID: AtomicU64 = AtomicU64::new(1);

/// Default identifier source backed by a process-wide monotonic counter.
///
/// Every `Guid` instance draws from the same counter, so tokens are unique
/// across all elements in the process regardless of how many docks exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Guid;

impl IdSource for Guid {
    fn next(&self) -> u64 {
        NEXT_GUID.fetch_add(1, Ordering::Relaxed)
    }
}

// =============================================================================
// CountingIds - deterministic source for tests
// =============================================================================

/// Deterministic per-instance counter starting at a known value.
///
/// Unlike [`Guid`], two `CountingIds` instances do not share state, so a
/// test can predict every token an element will receive.
#[derive(Debug, Default)]
pub struct CountingIds {
    next: Cell<u64>,
}

impl CountingIds {
    /// Create a source whose first token is `start`.
    pub fn new(start: u64) -> Self {
        Self { next: Cell::new(start) }
    }
}

impl IdSource for CountingIds {
    fn next(&self) -> u64 {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }
}

// =============================================================================
// Tests
// =============================================================================

//! # dock-overlay
//!
//! Caption dock and shelf overlay components for media player surfaces.
//!
//! Overlays a title/producer/schedule caption block (the "dock") and a
//! structural background (the "shelf") onto a host player, keeping both in
//! step with the host's lifecycle and deriving accessibility linkage from
//! the caption content.
//!
//! ## Architecture
//!
//! The host is never a concrete class. Everything the overlay consumes is
//! behind the [`HostSurface`]/[`Node`] traits, so any player that can
//! register named children, report readiness, and notify disposal can
//! carry the overlay:
//!
//! ```text
//! activate(options) → host ready → insertion index → Shelf → Title → aria
//! ```
//!
//! Execution is single-threaded and event-driven: the one suspension point
//! is the host's ready dispatch, and all state lives in `Rc`/`RefCell`
//! slots mutated only from the ready continuation and disposal observers.
//!
//! ## Modules
//!
//! - [`types`] - Options, resolved caption text, wiring constants
//! - [`guid`] - Injected identifier source with a process-wide default
//! - [`host`] - Capability traits plus the in-memory reference host
//! - [`elements`] - The Title and Shelf element kinds
//! - [`dock`] - The controller orchestrating creation, update, and aria

pub mod dock;
pub mod elements;
pub mod guid;
pub mod host;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use dock::Dock;

pub use elements::{Shelf, SubRegion, Title};

pub use guid::{CountingIds, Guid, IdSource};

pub use host::{Callback, HostSurface, MemoryHost, MemoryNode, Node, NodeHandle};

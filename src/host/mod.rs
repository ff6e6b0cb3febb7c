//! Host surface capabilities.
//!
//! The overlay never talks to a concrete player class. Everything it needs
//! from the host is behind two traits:
//! - [`Node`] - a DOM-like element: attributes, text content, children
//! - [`HostSurface`] - the player: named children, readiness, disposal
//!
//! The dock controller and both element kinds depend only on these traits,
//! so any host that can satisfy them can carry the overlay. [`MemoryHost`]
//! is a complete in-memory implementation used by the crate's own tests.

use std::rc::Rc;

mod memory;

pub use memory::{MemoryHost, MemoryNode};

// =============================================================================
// Callbacks
// =============================================================================

/// One-shot callback registered for ready and disposal notifications.
pub type Callback = Box<dyn FnOnce()>;

// =============================================================================
// Node
// =============================================================================

/// Shared handle to a host-created element node.
pub type NodeHandle = Rc<dyn Node>;

/// A DOM-like element created by the host.
///
/// Nodes carry string attributes (`id`, tooltip), visible text content,
/// and child nodes. All mutation goes through shared references; hosts
/// use interior mutability, consistent with the single-threaded model.
pub trait Node {
    /// Class name the node was created with.
    fn class_name(&self) -> String;

    /// Read an attribute, `None` when never set.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set or replace an attribute.
    fn set_attribute(&self, name: &str, value: &str);

    /// Visible text content.
    fn text(&self) -> String;

    /// Replace the visible text content.
    fn set_text(&self, text: &str);

    /// Append a child node.
    fn append(&self, child: NodeHandle);
}

// =============================================================================
// HostSurface
// =============================================================================

/// The media-player surface that owns and renders overlay children.
///
/// The host is an external collaborator; this trait is the full extent of
/// what the overlay consumes from it.
pub trait HostSurface {
    /// The host's own identifier, used as the first token of the
    /// `aria-labelledby` linkage.
    fn id(&self) -> String;

    /// Register a marker class on the surface. Idempotent.
    fn add_class(&self, class: &str);

    /// Set an attribute on the surface itself.
    fn set_attribute(&self, name: &str, value: &str);

    /// Create a detached element node with the given class name.
    fn create_node(&self, class_name: &str) -> NodeHandle;

    /// Register a named child. With `Some(index)` the child is inserted at
    /// that position among current children; with `None` it is appended.
    fn add_child(&self, name: &str, node: NodeHandle, index: Option<usize>);

    /// Position of the named child among current children, `None` when the
    /// child does not exist.
    fn child_index(&self, name: &str) -> Option<usize>;

    /// Run `callback` once the host is ready: immediately if readiness has
    /// already been reached, otherwise exactly once when it is.
    fn on_ready(&self, callback: Callback);

    /// Run `callback` exactly once when the named child is disposed by the
    /// host. Never fires if the child is never disposed.
    fn on_dispose(&self, child: &str, callback: Callback);
}

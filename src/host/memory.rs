//! In-memory host surface.
//!
//! A complete [`HostSurface`]/[`Node`] implementation with no rendering
//! behind it. Readiness and disposal are driven explicitly through
//! [`MemoryHost::set_ready`] and [`MemoryHost::dispose_child`], which makes
//! it the reference host for tests and for embedding the overlay logic in
//! headless harnesses.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use super::{Callback, HostSurface, Node, NodeHandle};

// =============================================================================
// MemoryNode
// =============================================================================

/// In-memory element node.
pub struct MemoryNode {
    class_name: String,
    attributes: RefCell<HashMap<String, String>>,
    text: RefCell<String>,
    children: RefCell<Vec<NodeHandle>>,
}

impl MemoryNode {
    /// Create a detached node with the given class name.
    pub fn new(class_name: &str) -> Rc<Self> {
        Rc::new(Self {
            class_name: class_name.to_string(),
            attributes: RefCell::new(HashMap::new()),
            text: RefCell::new(String::new()),
            children: RefCell::new(Vec::new()),
        })
    }

    /// Number of appended children.
    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }
}

impl Node for MemoryNode {
    fn class_name(&self) -> String {
        self.class_name.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn append(&self, child: NodeHandle) {
        self.children.borrow_mut().push(child);
    }
}

// =============================================================================
// MemoryHost
// =============================================================================

struct Child {
    name: String,
    node: NodeHandle,
}

/// In-memory host surface with explicit readiness and disposal controls.
pub struct MemoryHost {
    id: String,
    ready: Cell<bool>,
    classes: RefCell<Vec<String>>,
    attributes: RefCell<HashMap<String, String>>,
    children: RefCell<Vec<Child>>,
    pending_ready: RefCell<Vec<Callback>>,
    dispose_watchers: RefCell<HashMap<String, Vec<Callback>>>,
}

impl MemoryHost {
    /// Create a host surface with the given identifier, initially not ready.
    pub fn new(id: &str) -> Rc<Self> {
        Rc::new(Self {
            id: id.to_string(),
            ready: Cell::new(false),
            classes: RefCell::new(Vec::new()),
            attributes: RefCell::new(HashMap::new()),
            children: RefCell::new(Vec::new()),
            pending_ready: RefCell::new(Vec::new()),
            dispose_watchers: RefCell::new(HashMap::new()),
        })
    }

    /// Whether readiness has been reached.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Mark the host ready and dispatch pending ready callbacks, in
    /// registration order. Later `on_ready` registrations run immediately.
    pub fn set_ready(&self) {
        if self.ready.replace(true) {
            return;
        }
        trace!(host = %self.id, "host ready, dispatching pending callbacks");
        // Drain first: a callback may register further children or watchers.
        let pending = self.pending_ready.take();
        for callback in pending {
            callback();
        }
    }

    /// Remove the named child and fire its one-shot disposal watchers.
    /// No effect when the child does not exist.
    pub fn dispose_child(&self, name: &str) {
        let position = self
            .children
            .borrow()
            .iter()
            .position(|child| child.name == name);
        let Some(position) = position else { return };

        self.children.borrow_mut().remove(position);
        trace!(host = %self.id, child = name, "child disposed");

        let watchers = self.dispose_watchers.borrow_mut().remove(name);
        if let Some(watchers) = watchers {
            for watcher in watchers {
                watcher();
            }
        }
    }

    /// Whether the marker class has been registered.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    /// Read a surface attribute, `None` when never set.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Names of current children, in order.
    pub fn child_names(&self) -> Vec<String> {
        self.children
            .borrow()
            .iter()
            .map(|child| child.name.clone())
            .collect()
    }

    /// Node of the named child, `None` when absent.
    pub fn child_node(&self, name: &str) -> Option<NodeHandle> {
        self.children
            .borrow()
            .iter()
            .find(|child| child.name == name)
            .map(|child| Rc::clone(&child.node))
    }

    /// Number of current children.
    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }
}

impl HostSurface for MemoryHost {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn create_node(&self, class_name: &str) -> NodeHandle {
        MemoryNode::new(class_name)
    }

    fn add_child(&self, name: &str, node: NodeHandle, index: Option<usize>) {
        let mut children = self.children.borrow_mut();
        // Out-of-range index degrades to append, matching the permissive
        // posture of the rest of the surface.
        let at = index.unwrap_or(children.len()).min(children.len());
        children.insert(
            at,
            Child {
                name: name.to_string(),
                node,
            },
        );
    }

    fn child_index(&self, name: &str) -> Option<usize> {
        self.children
            .borrow()
            .iter()
            .position(|child| child.name == name)
    }

    fn on_ready(&self, callback: Callback) {
        if self.ready.get() {
            callback();
        } else {
            self.pending_ready.borrow_mut().push(callback);
        }
    }

    fn on_dispose(&self, child: &str, callback: Callback) {
        self.dispose_watchers
            .borrow_mut()
            .entry(child.to_string())
            .or_default()
            .push(callback);
    }
}

// =============================================================================
// Tests
// =============================================================================

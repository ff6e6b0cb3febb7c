//! Shelf element - structural background behind the caption text.
//!
//! Purely visual scaffolding: one node, no state, no update operation.
//! It takes the full options object for contract uniformity with Title
//! but consumes none of the caption fields.

use std::rc::Rc;

use tracing::debug;

use crate::host::{HostSurface, NodeHandle};
use crate::types::DockOptions;

/// Class name of the shelf node.
pub const SHELF_CLASS: &str = "dock-shelf";

/// The background shelf.
pub struct Shelf {
    node: NodeHandle,
}

impl Shelf {
    /// Build the structural node. `options` is accepted but unused.
    pub fn create(host: &dyn HostSurface, _options: &DockOptions) -> Self {
        let node = host.create_node(SHELF_CLASS);
        debug!("shelf element created");
        Self { node }
    }

    /// The shelf node, registered on the host by the dock controller.
    pub fn node(&self) -> NodeHandle {
        Rc::clone(&self.node)
    }
}

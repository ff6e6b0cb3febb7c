//! Title element - the caption text block.
//!
//! Owns three sub-regions (title, producer, schedule) grouped under one
//! container node. Each sub-region gets a fresh identifier at creation
//! time; the identifier never changes afterwards, which is what makes it
//! usable as an accessibility linkage target. Only the displayed text is
//! mutable, through [`Title::update`].

use std::rc::Rc;

use tracing::debug;

use crate::guid::IdSource;
use crate::host::{HostSurface, Node, NodeHandle};
use crate::types::TitleText;

/// Class name of the container node grouping the three sub-regions.
pub const TEXT_CLASS: &str = "dock-text";

/// Class names of the three sub-region nodes.
pub const TITLE_REGION_CLASS: &str = "dock-title";
pub const PRODUCER_REGION_CLASS: &str = "dock-producer";
pub const SCHEDULE_REGION_CLASS: &str = "dock-schedule";

// =============================================================================
// SubRegion
// =============================================================================

/// One caption line: a node plus the identifier generated for it.
pub struct SubRegion {
    id: String,
    node: NodeHandle,
}

impl SubRegion {
    fn create(host: &dyn HostSurface, ids: &dyn IdSource, class_name: &str, text: &str) -> Self {
        let id = format!("{class_name}-{}", ids.next());
        let node = host.create_node(class_name);
        node.set_attribute("id", &id);
        // Tooltip mirrors the visible text at creation time only; update
        // replaces the visible text and leaves the tooltip alone.
        node.set_attribute("title", text);
        node.set_text(text);
        Self { id, node }
    }

    /// Identifier generated at creation. Stable for the element's lifetime.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier as currently carried on the node's `id` attribute.
    ///
    /// The accessibility wiring reads this rather than the cached field,
    /// since the linkage must reflect what the host would resolve.
    pub fn current_id(&self) -> Option<String> {
        self.node.attribute("id")
    }

    /// Currently displayed text.
    pub fn text(&self) -> String {
        self.node.text()
    }

    /// The underlying node.
    pub fn node(&self) -> &NodeHandle {
        &self.node
    }

    fn set_text(&self, text: &str) {
        self.node.set_text(text);
    }
}

// =============================================================================
// Title
// =============================================================================

/// The caption text block: three sub-regions under one container node.
pub struct Title {
    node: NodeHandle,
    /// Main caption sub-region.
    pub title: SubRegion,
    /// Attribution sub-region.
    pub producer: SubRegion,
    /// Schedule sub-region.
    pub schedule: SubRegion,
}

impl Title {
    /// Build the element: three sub-regions with fresh identifiers, each
    /// holding its text as both tooltip and visible content, appended to a
    /// container node in display order.
    pub fn create(host: &dyn HostSurface, ids: &dyn IdSource, text: &TitleText) -> Self {
        let title = SubRegion::create(host, ids, TITLE_REGION_CLASS, &text.title);
        let producer = SubRegion::create(host, ids, PRODUCER_REGION_CLASS, &text.producer);
        let schedule = SubRegion::create(host, ids, SCHEDULE_REGION_CLASS, &text.schedule);

        let node = host.create_node(TEXT_CLASS);
        node.append(Rc::clone(title.node()));
        node.append(Rc::clone(producer.node()));
        node.append(Rc::clone(schedule.node()));

        debug!(
            title_id = %title.id,
            producer_id = %producer.id,
            schedule_id = %schedule.id,
            "title element created"
        );

        Self {
            node,
            title,
            producer,
            schedule,
        }
    }

    /// Replace the displayed text of all three sub-regions in place.
    /// Identifiers are untouched. Safe to call with identical values.
    pub fn update(&self, title: &str, producer: &str, schedule: &str) {
        self.title.set_text(title);
        self.producer.set_text(producer);
        self.schedule.set_text(schedule);
        debug!(title, producer, schedule, "title element updated");
    }

    /// Container node, registered on the host by the dock controller.
    pub fn node(&self) -> NodeHandle {
        Rc::clone(&self.node)
    }
}

// =============================================================================
// Tests
// =============================================================================

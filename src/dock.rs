//! Dock controller - overlay orchestration.
//!
//! Owns the lifecycle of the two overlay children. `activate` marks the
//! host, then defers everything else to the host's ready dispatch: compute
//! the insertion index, place Shelf then Title (or update Title in place),
//! watch both for disposal, and wire the accessibility linkage from the
//! Title's current content.
//!
//! # Lifecycle
//!
//! Per overlay pair: `ABSENT -> (ready) -> PRESENT -> (host disposal) ->
//! ABSENT`. Repeated `activate` while both children exist is the
//! `PRESENT -> PRESENT` update path: no recreation, text replaced in place.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use dock_overlay::{Dock, DockOptions, MemoryHost};
//!
//! let host = MemoryHost::new("player-1");
//! let dock = Dock::new(host.clone());
//!
//! dock.activate(DockOptions {
//!     title: Some("News".to_string()),
//!     ..Default::default()
//! });
//!
//! // Nothing is placed until the host signals readiness.
//! assert_eq!(host.child_count(), 0);
//! host.set_ready();
//! assert_eq!(host.child_names(), vec!["shelf", "title"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::elements::{Shelf, Title};
use crate::guid::{Guid, IdSource};
use crate::host::HostSurface;
use crate::types::{
    ARIA_DESCRIBED_BY, ARIA_LABELLED_BY, DOCK_CLASS, DockOptions, PRIMARY_ACTION_CHILD,
    SHELF_CHILD, TITLE_CHILD, TitleText,
};

// =============================================================================
// Dock
// =============================================================================

/// Controller for one host surface's caption overlay.
///
/// Holds at most one live [`Title`] and one live [`Shelf`] at any time.
/// The slots are cleared only at the two defined transition points:
/// element creation and the host's disposal notification. Cloning a `Dock`
/// clones handles to the same slots.
#[derive(Clone)]
pub struct Dock {
    host: Rc<dyn HostSurface>,
    ids: Rc<dyn IdSource>,
    title: Rc<RefCell<Option<Title>>>,
    shelf: Rc<RefCell<Option<Shelf>>>,
}

impl Dock {
    /// Create a controller for `host` using the process-wide [`Guid`]
    /// identifier source.
    pub fn new(host: Rc<dyn HostSurface>) -> Self {
        Self::with_ids(host, Rc::new(Guid))
    }

    /// Create a controller with an explicit identifier source.
    pub fn with_ids(host: Rc<dyn HostSurface>, ids: Rc<dyn IdSource>) -> Self {
        Self {
            host,
            ids,
            title: Rc::new(RefCell::new(None)),
            shelf: Rc::new(RefCell::new(None)),
        }
    }

    /// Activate the overlay with the given options.
    ///
    /// Adds the dock marker class immediately (idempotent), then schedules
    /// the placement logic through the host's ready primitive. This is the
    /// single suspension point: `activate` returns before the scheduled
    /// logic runs unless the host is already ready, in which case it runs
    /// inline. Fire-and-forget; there is no error path (see the module
    /// docs for the degradation rules).
    pub fn activate(&self, options: DockOptions) {
        let text = options.resolve();
        self.host.add_class(DOCK_CLASS);
        debug!(host = %self.host.id(), "dock activation scheduled");

        // The overlay must layer correctly against controls that may not
        // exist yet, so placement waits for host readiness.
        let dock = self.clone();
        self.host
            .on_ready(Box::new(move || dock.attach(&options, &text)));
    }

    /// Whether a live Title element is currently tracked.
    pub fn has_title(&self) -> bool {
        self.title.borrow().is_some()
    }

    /// Whether a live Shelf element is currently tracked.
    pub fn has_shelf(&self) -> bool {
        self.shelf.borrow().is_some()
    }

    // =========================================================================
    // Ready continuation
    // =========================================================================

    /// Placement logic, run from the host's ready dispatch.
    fn attach(&self, options: &DockOptions, text: &TitleText) {
        let index = self.insertion_index();
        debug!(host = %self.host.id(), ?index, "placing overlay children");

        // Shelf goes in first so Title, inserted at the same index, lands
        // in front of it.
        if self.shelf.borrow().is_none() {
            let shelf = Shelf::create(self.host.as_ref(), options);
            self.host.add_child(SHELF_CHILD, shelf.node(), index);
            *self.shelf.borrow_mut() = Some(shelf);

            let slot = Rc::clone(&self.shelf);
            self.host.on_dispose(
                SHELF_CHILD,
                Box::new(move || {
                    slot.borrow_mut().take();
                    debug!("shelf disposed, reference cleared");
                }),
            );
        }

        let needs_title = self.title.borrow().is_none();
        if needs_title {
            let title = Title::create(self.host.as_ref(), self.ids.as_ref(), text);
            self.host.add_child(TITLE_CHILD, title.node(), index);
            *self.title.borrow_mut() = Some(title);

            let slot = Rc::clone(&self.title);
            self.host.on_dispose(
                TITLE_CHILD,
                Box::new(move || {
                    slot.borrow_mut().take();
                    debug!("title disposed, reference cleared");
                }),
            );
        } else if let Some(title) = self.title.borrow().as_ref() {
            title.update(&text.title, &text.producer, &text.schedule);
        }

        self.wire_accessibility();
    }

    /// Index at which overlay children are inserted: one position before
    /// the reference control when it exists past the front of the child
    /// list, otherwise append-style.
    fn insertion_index(&self) -> Option<usize> {
        match self.host.child_index(PRIMARY_ACTION_CHILD) {
            Some(p) if p > 0 => Some(p - 1),
            _ => None,
        }
    }

    /// Derive `aria-labelledby` / `aria-describedby` on the host from the
    /// Title's current sub-region state. Empty identifier or empty text
    /// leaves the corresponding attribute untouched.
    fn wire_accessibility(&self) {
        let slot = self.title.borrow();
        let Some(title) = slot.as_ref() else { return };

        let title_id = title.title.current_id().unwrap_or_default();
        if !title_id.is_empty() && !title.title.text().is_empty() {
            let value = format!("{} {}", self.host.id(), title_id);
            self.host.set_attribute(ARIA_LABELLED_BY, &value);
            debug!(value = %value, "labelled-by linkage set");
        }

        let producer_id = title.producer.current_id().unwrap_or_default();
        if !producer_id.is_empty() && !title.producer.text().is_empty() {
            self.host.set_attribute(ARIA_DESCRIBED_BY, &producer_id);
            debug!(value = %producer_id, "described-by linkage set");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::CountingIds;
    use crate::host::{MemoryHost, MemoryNode, Node};
    use crate::types::VERSION;

    fn news_options() -> DockOptions {
        DockOptions {
            title: Some("News".to_string()),
            producer: Some("".to_string()),
            schedule: Some("8pm".to_string()),
        }
    }

    fn ready_host(id: &str) -> Rc<MemoryHost> {
        let host = MemoryHost::new(id);
        host.set_ready();
        host
    }

    #[test]
    fn test_activate_waits_for_ready() {
        let host = MemoryHost::new("player-1");
        let dock = Dock::new(host.clone());

        dock.activate(news_options());
        assert!(host.has_class(DOCK_CLASS));
        assert_eq!(host.child_count(), 0);
        assert!(!dock.has_title());
        assert!(!dock.has_shelf());

        host.set_ready();
        assert!(dock.has_title());
        assert!(dock.has_shelf());
        assert_eq!(host.child_names(), vec![SHELF_CHILD, TITLE_CHILD]);
    }

    #[test]
    fn test_activate_runs_inline_when_ready() {
        let host = ready_host("player-1");
        let dock = Dock::new(host.clone());

        dock.activate(news_options());
        assert!(dock.has_title());
        assert!(dock.has_shelf());
    }

    #[test]
    fn test_insertion_before_reference_control() {
        let host = ready_host("player-1");
        host.add_child("poster", MemoryNode::new("poster"), None);
        host.add_child(PRIMARY_ACTION_CHILD, MemoryNode::new("play"), None);
        host.add_child("control-bar", MemoryNode::new("bar"), None);

        let dock = Dock::new(host.clone());
        dock.activate(news_options());

        // Reference control at position 1: index 0. Shelf lands at 0, then
        // Title at 0 pushes it back, so Title sits in front of Shelf.
        assert_eq!(
            host.child_names(),
            vec![
                TITLE_CHILD,
                SHELF_CHILD,
                "poster",
                PRIMARY_ACTION_CHILD,
                "control-bar"
            ]
        );
    }

    #[test]
    fn test_reference_control_at_front_appends() {
        let host = ready_host("player-1");
        host.add_child(PRIMARY_ACTION_CHILD, MemoryNode::new("play"), None);

        let dock = Dock::new(host.clone());
        dock.activate(news_options());

        assert_eq!(
            host.child_names(),
            vec![PRIMARY_ACTION_CHILD, SHELF_CHILD, TITLE_CHILD]
        );
    }

    #[test]
    fn test_reference_control_absent_appends() {
        let host = ready_host("player-1");
        host.add_child("poster", MemoryNode::new("poster"), None);

        let dock = Dock::new(host.clone());
        dock.activate(news_options());

        assert_eq!(host.child_names(), vec!["poster", SHELF_CHILD, TITLE_CHILD]);
        assert!(dock.has_title());
        assert!(dock.has_shelf());
    }

    #[test]
    fn test_aria_linkage_for_news_scenario() {
        let host = ready_host("player-1");
        let dock = Dock::with_ids(host.clone(), Rc::new(CountingIds::new(1)));
        dock.activate(news_options());

        let title_node = host.child_node(TITLE_CHILD).unwrap();
        assert_eq!(title_node.class_name(), "dock-text");

        // Title text is non-empty, so labelled-by combines host id and the
        // title sub-region id. Producer text is empty, so described-by is
        // never set.
        assert_eq!(
            host.attribute(ARIA_LABELLED_BY).as_deref(),
            Some("player-1 dock-title-1")
        );
        assert_eq!(host.attribute(ARIA_DESCRIBED_BY), None);
    }

    #[test]
    fn test_aria_linkage_with_producer() {
        let host = ready_host("player-1");
        let dock = Dock::with_ids(host.clone(), Rc::new(CountingIds::new(1)));
        dock.activate(DockOptions {
            title: Some("News".to_string()),
            producer: Some("Newsroom".to_string()),
            schedule: None,
        });

        assert_eq!(
            host.attribute(ARIA_LABELLED_BY).as_deref(),
            Some("player-1 dock-title-1")
        );
        assert_eq!(
            host.attribute(ARIA_DESCRIBED_BY).as_deref(),
            Some("dock-producer-2")
        );
    }

    #[test]
    fn test_empty_options_set_no_aria() {
        let host = ready_host("player-1");
        let dock = Dock::new(host.clone());
        dock.activate(DockOptions::default());

        assert!(dock.has_title());
        assert_eq!(host.attribute(ARIA_LABELLED_BY), None);
        assert_eq!(host.attribute(ARIA_DESCRIBED_BY), None);

        let title_node = host.child_node(TITLE_CHILD).unwrap();
        assert_eq!(title_node.text(), "");
    }

    #[test]
    fn test_second_activate_updates_in_place() {
        let host = ready_host("player-1");
        let dock = Dock::with_ids(host.clone(), Rc::new(CountingIds::new(1)));

        dock.activate(news_options());
        assert_eq!(host.child_count(), 2);

        dock.activate(DockOptions {
            title: Some("Late News".to_string()),
            producer: Some("Night desk".to_string()),
            schedule: Some("11pm".to_string()),
        });

        // Still exactly one Title and one Shelf.
        assert_eq!(host.child_count(), 2);

        let title = dock.title.borrow();
        let title = title.as_ref().unwrap();
        assert_eq!(title.title.text(), "Late News");
        assert_eq!(title.producer.text(), "Night desk");
        assert_eq!(title.schedule.text(), "11pm");

        // Identifier survived the update, so the linkage still points at
        // the original sub-region.
        assert_eq!(title.title.id(), "dock-title-1");
        assert_eq!(
            host.attribute(ARIA_LABELLED_BY).as_deref(),
            Some("player-1 dock-title-1")
        );
        assert_eq!(
            host.attribute(ARIA_DESCRIBED_BY).as_deref(),
            Some("dock-producer-2")
        );
    }

    #[test]
    fn test_repeated_activate_identical_options() {
        let host = ready_host("player-1");
        let dock = Dock::new(host.clone());

        dock.activate(news_options());
        dock.activate(news_options());
        dock.activate(news_options());

        assert_eq!(host.child_count(), 2);
        let title = dock.title.borrow();
        assert_eq!(title.as_ref().unwrap().title.text(), "News");
    }

    #[test]
    fn test_disposal_clears_reference_and_recreates() {
        let host = ready_host("player-1");
        let dock = Dock::with_ids(host.clone(), Rc::new(CountingIds::new(1)));
        dock.activate(news_options());

        let first_id = dock
            .title
            .borrow()
            .as_ref()
            .unwrap()
            .title
            .id()
            .to_string();

        host.dispose_child(TITLE_CHILD);
        assert!(!dock.has_title());
        assert!(dock.has_shelf());

        // Next activation builds a brand-new Title with fresh identifiers.
        dock.activate(news_options());
        assert!(dock.has_title());
        let second_id = dock
            .title
            .borrow()
            .as_ref()
            .unwrap()
            .title
            .id()
            .to_string();
        assert_ne!(first_id, second_id);
        assert_eq!(host.child_index(TITLE_CHILD), Some(1));
    }

    #[test]
    fn test_shelf_disposal_clears_only_shelf() {
        let host = ready_host("player-1");
        let dock = Dock::new(host.clone());
        dock.activate(news_options());

        host.dispose_child(SHELF_CHILD);
        assert!(dock.has_title());
        assert!(!dock.has_shelf());

        dock.activate(news_options());
        assert!(dock.has_shelf());
        assert_eq!(host.child_count(), 2);
    }

    #[test]
    fn test_host_never_ready_never_places() {
        let host = MemoryHost::new("player-1");
        let dock = Dock::new(host.clone());
        dock.activate(news_options());

        // The continuation simply never fires.
        assert_eq!(host.child_count(), 0);
        assert!(!dock.has_title());
    }

    #[test]
    fn test_version_is_exported() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}

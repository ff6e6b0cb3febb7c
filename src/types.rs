//! Core types for dock-overlay.
//!
//! Plain data types and wiring constants that everything builds on:
//! the options object handed to `Dock::activate`, its resolved form,
//! and the names under which overlay children register on the host.

use serde::{Deserialize, Serialize};

/// Crate version, exposed so hosts can report which overlay they carry.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Wiring Constants
// =============================================================================

/// Marker class added to the host surface while dock-mode is active.
pub const DOCK_CLASS: &str = "dock";

/// Child name under which the Title element registers on the host.
pub const TITLE_CHILD: &str = "title";

/// Child name under which the Shelf element registers on the host.
pub const SHELF_CHILD: &str = "shelf";

/// Child name of the reference control used to compute the insertion
/// index. The overlay lands immediately before this control when it
/// exists at a nonzero position.
pub const PRIMARY_ACTION_CHILD: &str = "primary-action";

/// Accessibility attribute naming the elements that label the host.
pub const ARIA_LABELLED_BY: &str = "aria-labelledby";

/// Accessibility attribute naming the element that describes the host.
pub const ARIA_DESCRIBED_BY: &str = "aria-describedby";

// =============================================================================
// Overlay Settings
// =============================================================================

/// Options accepted by [`Dock::activate`](crate::dock::Dock::activate).
///
/// All three fields are optional and default to the empty string. The
/// struct is serde-derived so hosts can pass it through from their own
/// configuration unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockOptions {
    /// Main caption line.
    pub title: Option<String>,
    /// Attribution line below the title.
    pub producer: Option<String>,
    /// Schedule line below the attribution.
    pub schedule: Option<String>,
}

impl DockOptions {
    /// Fill defaults once, producing fully-populated text for the three
    /// sub-regions. Called at the start of `activate`; nothing downstream
    /// deals in `Option`s.
    pub fn resolve(&self) -> TitleText {
        TitleText {
            title: self.title.clone().unwrap_or_default(),
            producer: self.producer.clone().unwrap_or_default(),
            schedule: self.schedule.clone().unwrap_or_default(),
        }
    }
}

/// Resolved caption text for the three Title sub-regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleText {
    pub title: String,
    pub producer: String,
    pub schedule: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_fills_empty_defaults() {
        let text = DockOptions::default().resolve();
        assert_eq!(text.title, "");
        assert_eq!(text.producer, "");
        assert_eq!(text.schedule, "");
    }

    #[test]
    fn test_resolve_keeps_given_values() {
        let opts = DockOptions {
            title: Some("News".to_string()),
            producer: None,
            schedule: Some("8pm".to_string()),
        };
        let text = opts.resolve();
        assert_eq!(text.title, "News");
        assert_eq!(text.producer, "");
        assert_eq!(text.schedule, "8pm");
    }

    #[test]
    fn test_options_from_json() {
        let opts: DockOptions = serde_json::from_str(r#"{"title": "News"}"#).unwrap();
        assert_eq!(opts.title.as_deref(), Some("News"));
        assert_eq!(opts.producer, None);

        let empty: DockOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DockOptions::default());
    }

    proptest! {
        // Defaulting law: each resolved field is the given value, or empty
        // when absent, for every subset of present fields.
        #[test]
        fn prop_resolve_defaulting(
            title in proptest::option::of(".*"),
            producer in proptest::option::of(".*"),
            schedule in proptest::option::of(".*"),
        ) {
            let opts = DockOptions {
                title: title.clone(),
                producer: producer.clone(),
                schedule: schedule.clone(),
            };
            let text = opts.resolve();
            prop_assert_eq!(text.title, title.unwrap_or_default());
            prop_assert_eq!(text.producer, producer.unwrap_or_default());
            prop_assert_eq!(text.schedule, schedule.unwrap_or_default());
        }

        // Resolution is pure: resolving twice observes the same text.
        #[test]
        fn prop_resolve_stable(title in proptest::option::of(".*")) {
            let opts = DockOptions { title, ..Default::default() };
            prop_assert_eq!(opts.resolve(), opts.resolve());
        }
    }
}

//! Overlay elements.
//!
//! The two child kinds the dock controller places on the host:
//! - [`Title`] - three caption sub-regions with stable identifiers
//! - [`Shelf`] - structural background behind the caption text

mod shelf;
mod title;

pub use shelf::Shelf;
pub use title::{SubRegion, Title};

//! Displacement math for drag-and-drop reordering of virtualized lists and
//! tables.
//!
//! The core is [`displace::calculate_displacements`]: given the window of
//! laid-out items, the dragged subset, and a pixel delta, it returns how far
//! each item's rendered position should shift so the drag reads as a live
//! reorder. [`reorder`] derives the durable order and layout for the drop,
//! and [`scenario`] replays TOML-described drags for debugging and snapshot
//! tests.
//!
//! The library is UI-agnostic and pure: the caller owns item geometry and
//! the drag gesture lifecycle, applies the returned offsets as visual
//! transforms, and commits the reorder when the drag ends. Every call is an
//! independent computation over its inputs.

pub mod displace;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod scenario;

pub use displace::{calculate_displacements, Displacements};
pub use model::{contiguous_layout, DisplaceError, InvalidItemId, Item, ItemId};
pub use reorder::{committed_layout, committed_order};

//! Domain model: item geometry and the displacement error taxonomy.

pub mod error;
pub mod item;

pub use error::DisplaceError;
pub use item::{contiguous_layout, InvalidItemId, Item, ItemId};

//! Item geometry for the displacement calculator.
//!
//! An [`Item`] is one entry of the "in-range window": the contiguous run of
//! items the caller's virtualizer currently has laid out. The caller owns
//! this geometry and refreshes it on every drag frame; nothing in this crate
//! ever mutates it.

use std::fmt;

/// Stable identifier for an item within the window.
///
/// Validates non-empty ids at construction time; the raw constructor is
/// never exported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: validates a non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidItemId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error for [`ItemId`] construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    /// The id string was empty.
    #[error("item id cannot be empty")]
    Empty,
}

/// One linearly-positioned item in the in-range window.
///
/// In the canonical resting state `start` equals the sum of the sizes of all
/// preceding items plus the window origin, and `index` values are contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Ordinal position within the window.
    pub index: usize,
    /// Stable identifier.
    pub id: ItemId,
    /// Pixel offset from the range origin.
    pub start: f64,
    /// Pixel extent.
    pub size: f64,
}

impl Item {
    /// Create an item from its ordinal position and geometry.
    pub fn new(index: usize, id: ItemId, start: f64, size: f64) -> Self {
        Self {
            index,
            id,
            start,
            size,
        }
    }

    /// Pixel offset just past this item.
    pub fn end(&self) -> f64 {
        self.start + self.size
    }

    /// Pixel midpoint, the anchor for nearest-center classification.
    pub fn center(&self) -> f64 {
        self.start + self.size / 2.0
    }
}

/// Build a canonical contiguous window from `(id, size)` pairs.
///
/// Each item's `start` is the running sum of preceding sizes offset by
/// `origin`; `index` is its position in the input sequence.
pub fn contiguous_layout<I>(origin: f64, specs: I) -> Vec<Item>
where
    I: IntoIterator<Item = (ItemId, f64)>,
{
    let mut start = origin;
    specs
        .into_iter()
        .enumerate()
        .map(|(index, (id, size))| {
            let item = Item::new(index, id, start, size);
            start += size;
            item
        })
        .collect()
}

//! The displacement calculator.
//!
//! [`calculate_displacements`] answers one question for a drag in progress:
//! given the window of laid-out items, the dragged subset, and how far the
//! pointer has moved, how many pixels should each item's rendered position
//! shift from its resting `start`?
//!
//! The computation simulates the reorder over a transient working map in two
//! bounded passes. Insertion has to see post-removal geometry, so the passes
//! cannot be folded into one:
//!
//! 1. **Removal**: dragged items leave their slots, highest index first;
//!    every mapped item at or behind a vacated slot slides back to close the
//!    gap.
//! 2. **Insertion**: dragged items are placed one at a time in original
//!    order, each at whichever occupied slot's *center* is nearest its
//!    dragged position; mapped items at or past that slot slide forward to
//!    make room. A drag that resolves to no slot at all (the working map is
//!    empty) parks the item just past the window end for a positive delta,
//!    just before the window start otherwise.
//!
//! # Insertion-order contract
//!
//! The working map is an insertion-ordered sequence: non-selected items in
//! window order, then placed items in placement order. When two slot centers
//! are equally distant from a dragged position, the earliest entry wins.
//! This ordering is part of the function's public contract; it is what
//! keeps tie-breaks reproducible across calls and platforms.
//!
//! # Purity
//!
//! No I/O, no shared state, no mutation of caller-owned items. The function
//! is called on every pointer-move frame; identical inputs produce
//! bit-identical output.

use crate::model::{DisplaceError, Item, ItemId};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Per-item pixel offsets, one entry per in-range item, in window order.
///
/// An offset is added to the item's resting `start` to get its rendered
/// position during the drag. Items that do not move have an explicit `0.0`
/// entry, so the map always covers exactly the ids of the input window.
#[derive(Debug, Clone, PartialEq)]
pub struct Displacements {
    entries: Vec<(ItemId, f64)>,
}

impl Displacements {
    /// Offset for `id`, if the id was part of the window.
    pub fn get(&self, id: &ItemId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == id)
            .map(|(_, offset)| *offset)
    }

    /// Entries in window order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, f64)> {
        self.entries.iter().map(|(id, offset)| (id, *offset))
    }

    /// Number of entries (always the window size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the window itself was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One entry of the working map: a window item and the ordinal slot it
/// occupies in the simulation.
#[derive(Debug)]
struct Slot {
    /// Position of the item in the `in_range` slice.
    item: usize,
    /// Transient ordinal position, distinct from the item's original index.
    working_index: usize,
}

/// Compute per-item pixel displacements for a drag of `selected` by `delta`.
///
/// `in_range` is the contiguous window being reflowed; `selected` is the
/// dragged subset (possibly non-contiguous, possibly the whole window), each
/// entry carrying its own resting geometry. Every id in `selected` must
/// resolve to an id in `in_range`.
///
/// Returns one offset per in-range item. Dragged items land at their new
/// slot; everything else shifts just enough to make room.
///
/// # Errors
///
/// - [`DisplaceError::EmptyWindow`] when `in_range` is empty but `selected`
///   is not.
/// - [`DisplaceError::UnknownSelection`] when a selected id is absent from
///   the window.
pub fn calculate_displacements(
    in_range: &[Item],
    selected: &[Item],
    delta: f64,
) -> Result<Displacements, DisplaceError> {
    if in_range.is_empty() {
        if selected.is_empty() {
            return Ok(Displacements {
                entries: Vec::new(),
            });
        }
        return Err(DisplaceError::EmptyWindow);
    }

    let window_pos: HashMap<&str, usize> = in_range
        .iter()
        .enumerate()
        .map(|(pos, item)| (item.id.as_str(), pos))
        .collect();
    for sel in selected {
        if !window_pos.contains_key(sel.id.as_str()) {
            return Err(DisplaceError::UnknownSelection {
                id: sel.id.clone(),
            });
        }
    }

    trace!(
        window = in_range.len(),
        selected = selected.len(),
        delta,
        "calculating displacements"
    );

    let mut offsets = vec![0.0f64; in_range.len()];

    // Working map seeded with the non-selected items in window order.
    let selected_ids: HashSet<&str> = selected.iter().map(|sel| sel.id.as_str()).collect();
    let mut slots: Vec<Slot> = in_range
        .iter()
        .enumerate()
        .filter(|(_, item)| !selected_ids.contains(item.id.as_str()))
        .map(|(pos, item)| Slot {
            item: pos,
            working_index: item.index,
        })
        .collect();

    let mut ordered: Vec<&Item> = selected.iter().collect();
    ordered.sort_by_key(|sel| sel.index);

    // Removal pass: highest index first, so earlier removals never shift the
    // indices later removals compare against.
    for sel in ordered.iter().rev() {
        for slot in &mut slots {
            if slot.working_index >= sel.index {
                slot.working_index -= 1;
                offsets[slot.item] -= sel.size;
            }
        }
    }

    // Insertion pass: original forward order, each placement updating the
    // geometry the next one classifies against.
    for sel in &ordered {
        let sel_pos = window_pos[sel.id.as_str()];
        let target_position = sel.start + delta;
        let placement = index_for_position(&slots, in_range, &offsets, target_position)
            .and_then(|target| {
                start_for_index(&slots, in_range, &offsets, target)
                    .map(|slot_start| (target, slot_start))
            });

        match placement {
            Some((target_index, slot_start)) => {
                offsets[sel_pos] = slot_start - sel.start;
                // Make room: everything at or past the slot slides forward.
                for slot in &mut slots {
                    if slot.working_index >= target_index {
                        slot.working_index += 1;
                        offsets[slot.item] += sel.size;
                    }
                }
                slots.push(Slot {
                    item: sel_pos,
                    working_index: target_index,
                });
                trace!(
                    id = %sel.id,
                    target_index,
                    offset = offsets[sel_pos],
                    "placed dragged item"
                );
            }
            None if delta > 0.0 => {
                // Nothing left to classify against; park past the window end.
                let last = &in_range[in_range.len() - 1];
                offsets[sel_pos] = last.end() - sel.start;
                trace!(id = %sel.id, offset = offsets[sel_pos], "parked past window end");
            }
            None => {
                let first = &in_range[0];
                offsets[sel_pos] = first.start - sel.start - sel.size;
                trace!(id = %sel.id, offset = offsets[sel_pos], "parked before window start");
            }
        }
    }

    let entries = in_range
        .iter()
        .enumerate()
        .map(|(pos, item)| (item.id.clone(), offsets[pos]))
        .collect();
    Ok(Displacements { entries })
}

/// Pixel start of whichever item occupies `target`; if the slot is vacant,
/// fall back to just after the item at `target - 1` (insertion at the
/// boundary or end).
fn start_for_index(
    slots: &[Slot],
    in_range: &[Item],
    offsets: &[f64],
    target: usize,
) -> Option<f64> {
    if let Some(slot) = slots.iter().find(|slot| slot.working_index == target) {
        return Some(in_range[slot.item].start + offsets[slot.item]);
    }
    let prev = target.checked_sub(1)?;
    slots
        .iter()
        .find(|slot| slot.working_index == prev)
        .map(|slot| {
            let item = &in_range[slot.item];
            item.start + offsets[slot.item] + item.size
        })
}

/// Working index of the mapped item whose displaced center is nearest to
/// `position`. Nearest-center classification, not a containment test.
fn index_for_position(
    slots: &[Slot],
    in_range: &[Item],
    offsets: &[f64],
    position: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for slot in slots {
        let item = &in_range[slot.item];
        let center = item.center() + offsets[slot.item];
        let distance = (center - position).abs();
        // Strict `<` keeps ties on the earliest-inserted entry.
        match best {
            Some((_, best_distance)) if distance < best_distance => {
                best = Some((slot.working_index, distance));
            }
            None => best = Some((slot.working_index, distance)),
            _ => {}
        }
    }
    best.map(|(working_index, _)| working_index)
}

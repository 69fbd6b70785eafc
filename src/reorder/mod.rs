//! Commit step for the end of a drag gesture.
//!
//! While the pointer moves, callers render [`calculate_displacements`]
//! output as visual transforms. On drop they need the durable result: the
//! new item order, and a window relaid out in that order. Both are derived
//! from the same displacement map, so the committed state always matches
//! what was on screen when the drag ended.

use crate::displace::calculate_displacements;
use crate::model::{DisplaceError, Item, ItemId};
use std::collections::HashMap;

/// Final visual order implied by a finished drag.
///
/// Items are sorted by displaced start; the sort is stable, so exact
/// position ties keep window order.
///
/// # Errors
///
/// Same contract as [`calculate_displacements`].
pub fn committed_order(
    in_range: &[Item],
    selected: &[Item],
    delta: f64,
) -> Result<Vec<ItemId>, DisplaceError> {
    let displacements = calculate_displacements(in_range, selected, delta)?;
    let mut order: Vec<&Item> = in_range.iter().collect();
    order.sort_by(|a, b| {
        let pa = a.start + displacements.get(&a.id).unwrap_or(0.0);
        let pb = b.start + displacements.get(&b.id).unwrap_or(0.0);
        pa.total_cmp(&pb)
    });
    Ok(order.into_iter().map(|item| item.id.clone()).collect())
}

/// Window relaid out in committed order: contiguous starts from the window
/// origin, reassigned indices, sizes preserved.
///
/// The result is a permutation of the input items by id and size, tiling
/// exactly the original window extent.
///
/// # Errors
///
/// Same contract as [`calculate_displacements`].
pub fn committed_layout(
    in_range: &[Item],
    selected: &[Item],
    delta: f64,
) -> Result<Vec<Item>, DisplaceError> {
    let order = committed_order(in_range, selected, delta)?;
    let by_id: HashMap<&str, &Item> = in_range
        .iter()
        .map(|item| (item.id.as_str(), item))
        .collect();
    let origin = in_range.first().map(|item| item.start).unwrap_or(0.0);

    let mut start = origin;
    let mut layout = Vec::with_capacity(order.len());
    for (index, id) in order.into_iter().enumerate() {
        if let Some(item) = by_id.get(id.as_str()) {
            layout.push(Item::new(index, id, start, item.size));
            start += item.size;
        }
    }
    Ok(layout)
}

//! Property-based tests for the displacement calculator.
//!
//! Sizes and deltas are drawn as integers and cast to `f64`, so every
//! quantity the assertions compare stays exactly representable and exact
//! equality is safe.

use proptest::prelude::*;
use reslot::{calculate_displacements, committed_layout, contiguous_layout, Item, ItemId};

fn item_id(i: usize) -> ItemId {
    ItemId::new(format!("item-{i}")).expect("valid id")
}

fn build_window(sizes: &[f64]) -> Vec<Item> {
    contiguous_layout(
        0.0,
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| (item_id(i), size)),
    )
}

fn pick(items: &[Item], mask: &[bool]) -> Vec<Item> {
    items
        .iter()
        .zip(mask)
        .filter(|(_, &selected)| selected)
        .map(|(item, _)| item.clone())
        .collect()
}

fn masked_window() -> impl Strategy<Value = (Vec<f64>, Vec<bool>)> {
    prop::collection::vec(((1u32..=200).prop_map(f64::from), any::<bool>()), 1..16)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

fn window_with_single_pick() -> impl Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec((1u32..=200).prop_map(f64::from), 1..16).prop_flat_map(|sizes| {
        let len = sizes.len();
        (Just(sizes), 0..len)
    })
}

fn any_delta() -> impl Strategy<Value = f64> {
    (-500i32..=500).prop_map(f64::from)
}

proptest! {
    /// Every in-range id gets exactly one entry, in window order.
    #[test]
    fn map_covers_window_ids_in_order((sizes, mask) in masked_window(), delta in any_delta()) {
        let items = build_window(&sizes);
        let selected = pick(&items, &mask);
        let displacements =
            calculate_displacements(&items, &selected, delta).expect("valid input");
        prop_assert_eq!(displacements.len(), items.len());
        for ((id, _), item) in displacements.iter().zip(&items) {
            prop_assert_eq!(id, &item.id);
        }
    }

    /// An empty selection never moves anything, whatever the delta.
    #[test]
    fn empty_selection_is_a_no_op(
        sizes in prop::collection::vec((1u32..=200).prop_map(f64::from), 1..16),
        delta in any_delta(),
    ) {
        let items = build_window(&sizes);
        let displacements = calculate_displacements(&items, &[], delta).expect("valid input");
        for (_, offset) in displacements.iter() {
            prop_assert_eq!(offset, 0.0);
        }
    }

    /// Identical inputs produce bit-identical output.
    #[test]
    fn identical_inputs_identical_output((sizes, mask) in masked_window(), delta in any_delta()) {
        let items = build_window(&sizes);
        let selected = pick(&items, &mask);
        let first = calculate_displacements(&items, &selected, delta).expect("valid input");
        let second = calculate_displacements(&items, &selected, delta).expect("valid input");
        prop_assert_eq!(first, second);
    }

    /// Undragged items move by exactly the dragged item's size, or not at all.
    #[test]
    fn single_selection_quantizes_neighbors(
        (sizes, pick_index) in window_with_single_pick(),
        delta in any_delta(),
    ) {
        let items = build_window(&sizes);
        let selected = vec![items[pick_index].clone()];
        let dragged_size = items[pick_index].size;
        let displacements =
            calculate_displacements(&items, &selected, delta).expect("valid input");
        for (position, item) in items.iter().enumerate() {
            if position == pick_index {
                continue;
            }
            let offset = displacements.get(&item.id).expect("covered");
            prop_assert!(
                offset == -dragged_size || offset == 0.0 || offset == dragged_size,
                "offset {} is not a step of the dragged size {}",
                offset,
                dragged_size
            );
        }
    }

    /// With at least one undragged item, displaced positions tile the window
    /// exactly: same extent, no gaps, no overlaps.
    #[test]
    fn strict_subselection_tiles_the_window((sizes, mask) in masked_window(), delta in any_delta()) {
        prop_assume!(mask.iter().any(|&selected| !selected));
        let items = build_window(&sizes);
        let selected = pick(&items, &mask);
        let displacements =
            calculate_displacements(&items, &selected, delta).expect("valid input");

        let mut spans: Vec<(f64, f64)> = items
            .iter()
            .map(|item| {
                let offset = displacements.get(&item.id).expect("covered");
                (item.start + offset, item.size)
            })
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut expected_start = 0.0;
        for (start, size) in spans {
            prop_assert_eq!(start, expected_start);
            expected_start += size;
        }
        prop_assert_eq!(expected_start, sizes.iter().sum::<f64>());
    }

    /// Undragged items never change order among themselves.
    #[test]
    fn undragged_items_keep_their_relative_order(
        (sizes, mask) in masked_window(),
        delta in any_delta(),
    ) {
        let items = build_window(&sizes);
        let selected = pick(&items, &mask);
        let displacements =
            calculate_displacements(&items, &selected, delta).expect("valid input");
        let mut last_position = f64::NEG_INFINITY;
        for (position, item) in items.iter().enumerate() {
            if mask[position] {
                continue;
            }
            let displaced = item.start + displacements.get(&item.id).expect("covered");
            prop_assert!(displaced > last_position, "undragged items out of order");
            last_position = displaced;
        }
    }

    /// A forward drag over uniform items keeps the dragged items in their
    /// original relative order.
    #[test]
    fn forward_drag_keeps_selection_order(
        mask in prop::collection::vec(any::<bool>(), 2..16),
        steps in 1i32..10,
        jitter in 1i32..50,
    ) {
        let sizes = vec![50.0; mask.len()];
        // Positive and never a whole number of slots, so no center is ever
        // exactly equidistant between two targets.
        let delta = f64::from(steps * 50 + jitter);
        let items = build_window(&sizes);
        let selected = pick(&items, &mask);
        let displacements =
            calculate_displacements(&items, &selected, delta).expect("valid input");
        let mut last_position = f64::NEG_INFINITY;
        for (position, item) in items.iter().enumerate() {
            if !mask[position] {
                continue;
            }
            let displaced = item.start + displacements.get(&item.id).expect("covered");
            prop_assert!(displaced >= last_position, "dragged items out of order");
            last_position = displaced;
        }
    }

    /// The committed layout is a contiguous, re-indexed permutation of the
    /// window, sizes travelling with their items.
    #[test]
    fn committed_layout_is_a_permutation((sizes, mask) in masked_window(), delta in any_delta()) {
        let items = build_window(&sizes);
        let selected = pick(&items, &mask);
        let layout = committed_layout(&items, &selected, delta).expect("valid input");

        prop_assert_eq!(layout.len(), items.len());
        let mut start = 0.0;
        for (index, item) in layout.iter().enumerate() {
            prop_assert_eq!(item.index, index);
            prop_assert_eq!(item.start, start);
            let original = items
                .iter()
                .find(|candidate| candidate.id == item.id)
                .expect("id comes from the window");
            prop_assert_eq!(item.size, original.size);
            start += item.size;
        }

        let mut ids: Vec<&str> = layout.iter().map(|item| item.id.as_str()).collect();
        ids.sort_unstable();
        let mut expected: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(ids, expected);
    }
}

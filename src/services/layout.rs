//! Panel layout engine and hit-testing.
//!
//! Converts a layer's row/key structure plus panel pixel geometry into
//! absolute key rectangles, and resolves points back to keys. Both
//! routines are pure: the same inputs reproduce the same output
//! bit-for-bit, which the layout tests rely on.

use crate::models::{Key, KeyBounds, PanelGeometry, Rect};

/// Computes absolute key rectangles for one panel.
///
/// Rows split the panel height equally. Within a row, each key's slot
/// width is proportional to its width weight after reserving
/// `(key count + 1) * margin` of gap space. Each rectangle is its slot
/// inset by `padding` on all sides and by `margin` vertically, producing
/// the visible gaps between keys and rows.
///
/// Output order follows input order: rows top to bottom, keys left to
/// right. Hit-testing resolves ties by first match, so this order is part
/// of the contract.
///
/// Degenerate inputs produce no rectangles instead of failing: a panel
/// with zero width or height yields an empty list, and a row with no keys
/// or zero total weight is skipped.
#[must_use]
pub fn compute_panel_bounds(rows: &[Vec<Key>], geometry: &PanelGeometry) -> Vec<KeyBounds> {
    if rows.is_empty() || geometry.width <= 0.0 || geometry.height <= 0.0 {
        return Vec::new();
    }

    let row_height = geometry.height / rows.len() as f32;
    let mut bounds = Vec::with_capacity(rows.iter().map(Vec::len).sum());

    for (row_index, keys) in rows.iter().enumerate() {
        let total_weight: f32 = keys.iter().map(|k| k.width).sum();
        if keys.is_empty() || total_weight <= 0.0 {
            continue;
        }

        let y = row_index as f32 * row_height;
        let unit_width =
            (geometry.width - (keys.len() + 1) as f32 * geometry.margin) / total_weight;

        let mut x = geometry.origin_x + geometry.margin;
        for key in keys {
            let slot_width = unit_width * key.width;
            let rect = Rect::new(
                x + geometry.padding,
                y + geometry.margin + geometry.padding,
                slot_width - 2.0 * geometry.padding,
                row_height - 2.0 * (geometry.margin + geometry.padding),
            );
            bounds.push(KeyBounds {
                key: key.clone(),
                rect,
            });
            x += slot_width + geometry.margin;
        }
    }

    bounds
}

/// Finds the key whose rectangle contains the point.
///
/// Linear scan over the bounds in layout output order, returning the
/// first rectangle that contains the point. At this scale (≤ ~30 keys
/// per panel) no spatial index is warranted; first-match-wins is the
/// documented behavior for adjacent-rectangle edge cases.
#[must_use]
pub fn find_key_at(x: f32, y: f32, bounds: &[KeyBounds]) -> Option<&KeyBounds> {
    bounds.iter().find(|kb| kb.rect.contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Key;

    fn equal_row(count: usize) -> Vec<Key> {
        (0..count).map(|i| Key::new(i.to_string())).collect()
    }

    #[test]
    fn test_reference_scenario_five_equal_keys() {
        // Panel 300x900, margin 4, padding 8, one row of 5 equal keys:
        // slot = (300 - 6*4) / 5 = 55.2, rect width = 55.2 - 16 = 39.2
        let rows = vec![equal_row(5)];
        let geometry = PanelGeometry::new(0.0, 300.0, 900.0);
        let bounds = compute_panel_bounds(&rows, &geometry);

        assert_eq!(bounds.len(), 5);
        for kb in &bounds {
            assert!((kb.rect.width - 39.2).abs() < 1e-4);
            assert_eq!(kb.rect.height, 900.0 - 2.0 * (4.0 + 8.0));
        }
        assert_eq!(bounds[0].rect.x, 4.0 + 8.0);
    }

    #[test]
    fn test_rows_split_height_equally() {
        let rows = vec![equal_row(2), equal_row(2), equal_row(2)];
        let geometry = PanelGeometry::new(0.0, 300.0, 900.0);
        let bounds = compute_panel_bounds(&rows, &geometry);

        assert_eq!(bounds.len(), 6);
        assert_eq!(bounds[0].rect.y, 12.0); // margin + padding
        assert_eq!(bounds[2].rect.y, 300.0 + 12.0);
        assert_eq!(bounds[4].rect.y, 600.0 + 12.0);
    }

    #[test]
    fn test_width_weight_scales_slot() {
        let rows = vec![vec![Key::new("a"), Key::new("b").with_width(2.0)]];
        let geometry = PanelGeometry::new(0.0, 300.0, 100.0);
        let bounds = compute_panel_bounds(&rows, &geometry);

        // unit = (300 - 3*4) / 3 = 96; slots 96 and 192
        assert_eq!(bounds[0].rect.width, 96.0 - 16.0);
        assert_eq!(bounds[1].rect.width, 192.0 - 16.0);
    }

    #[test]
    fn test_origin_x_offsets_rectangles() {
        let rows = vec![equal_row(1)];
        let at_zero = compute_panel_bounds(&rows, &PanelGeometry::new(0.0, 200.0, 100.0));
        let offset = compute_panel_bounds(&rows, &PanelGeometry::new(500.0, 200.0, 100.0));

        assert_eq!(offset[0].rect.x, at_zero[0].rect.x + 500.0);
        assert_eq!(offset[0].rect.y, at_zero[0].rect.y);
    }

    #[test]
    fn test_empty_row_is_skipped() {
        let rows = vec![equal_row(2), vec![], equal_row(2)];
        let geometry = PanelGeometry::new(0.0, 300.0, 900.0);
        let bounds = compute_panel_bounds(&rows, &geometry);

        // Middle row contributes nothing but still occupies vertical space
        assert_eq!(bounds.len(), 4);
        assert_eq!(bounds[2].rect.y, 600.0 + 12.0);
    }

    #[test]
    fn test_zero_panel_yields_empty() {
        let rows = vec![equal_row(3)];
        assert!(compute_panel_bounds(&rows, &PanelGeometry::new(0.0, 0.0, 900.0)).is_empty());
        assert!(compute_panel_bounds(&rows, &PanelGeometry::new(0.0, 300.0, 0.0)).is_empty());
        assert!(compute_panel_bounds(&[], &PanelGeometry::new(0.0, 300.0, 900.0)).is_empty());
    }

    #[test]
    fn test_zero_weight_row_is_skipped() {
        // Constructed directly since KeyboardLayer::new would reject it
        let rows = vec![vec![Key::new("a").with_width(0.0)]];
        let geometry = PanelGeometry::new(0.0, 300.0, 900.0);
        assert!(compute_panel_bounds(&rows, &geometry).is_empty());
    }

    #[test]
    fn test_output_is_reproducible() {
        let rows = vec![equal_row(5), equal_row(3)];
        let geometry = PanelGeometry::new(12.0, 287.0, 643.0);
        let first = compute_panel_bounds(&rows, &geometry);
        let second = compute_panel_bounds(&rows, &geometry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_key_at_hits_and_misses() {
        let rows = vec![equal_row(5)];
        let geometry = PanelGeometry::new(0.0, 300.0, 900.0);
        let bounds = compute_panel_bounds(&rows, &geometry);

        for kb in &bounds {
            let (cx, cy) = kb.rect.center();
            let hit = find_key_at(cx, cy, &bounds).unwrap();
            assert_eq!(hit.key, kb.key);
        }

        // In the margin gap before the first key
        assert!(find_key_at(2.0, 450.0, &bounds).is_none());
        // Outside the panel entirely
        assert!(find_key_at(-10.0, -10.0, &bounds).is_none());
    }

    #[test]
    fn test_find_key_at_first_match_wins() {
        // Two identical rectangles; the earlier one is returned
        let rows = vec![equal_row(1)];
        let geometry = PanelGeometry::new(0.0, 300.0, 900.0);
        let mut bounds = compute_panel_bounds(&rows, &geometry);
        let mut duplicate = bounds[0].clone();
        duplicate.key = Key::new("dup");
        bounds.push(duplicate);

        let (cx, cy) = bounds[0].rect.center();
        assert_eq!(find_key_at(cx, cy, &bounds).unwrap().key.label, "0");
    }
}

//! Panel diagram renderer.
//!
//! Generates ASCII/Unicode panel diagrams using box-drawing characters,
//! one boxed row per keyboard row with cell widths proportional to the
//! key width weights.

use crate::models::{Key, KeyboardLayer, PanelSide};
use std::fmt::Write;

/// Characters of cell width per 1.0 of key width weight.
const CELL_WIDTH_PER_UNIT: f32 = 7.0;

/// Minimum cell width so narrow keys stay legible.
const MIN_CELL_WIDTH: usize = 3;

/// Renders both panels of a layer as a text diagram.
///
/// # Example
///
/// ```text
/// Layer: default
///
/// left panel
/// ┌───────┬───────┐
/// │   q   │   w   │
/// └───────┴───────┘
/// ...
/// ```
#[must_use]
pub fn render_layer_diagram(layer: &KeyboardLayer) -> String {
    let mut output = String::new();
    writeln!(output, "Layer: {}", layer.name).unwrap();

    for side in PanelSide::ALL {
        writeln!(output).unwrap();
        writeln!(output, "{} panel", side.as_str()).unwrap();
        output.push_str(&render_panel_diagram(layer, side));
    }

    output
}

/// Renders one panel of a layer as a text diagram.
#[must_use]
pub fn render_panel_diagram(layer: &KeyboardLayer, side: PanelSide) -> String {
    let mut output = String::new();

    for row in layer.rows(side) {
        if row.is_empty() {
            continue;
        }
        let widths: Vec<usize> = row.iter().map(|key| cell_width(key)).collect();

        output.push_str(&border_line(&widths, '┌', '┬', '┐'));
        output.push_str(&label_line(row, &widths));
        output.push_str(&border_line(&widths, '└', '┴', '┘'));
    }

    output
}

fn cell_width(key: &Key) -> usize {
    ((key.width * CELL_WIDTH_PER_UNIT) as usize).max(MIN_CELL_WIDTH)
}

fn border_line(widths: &[usize], start: char, junction: char, end: char) -> String {
    let mut line = String::new();
    line.push(start);
    for (index, width) in widths.iter().enumerate() {
        if index > 0 {
            line.push(junction);
        }
        for _ in 0..*width {
            line.push('─');
        }
    }
    line.push(end);
    line.push('\n');
    line
}

fn label_line(row: &[Key], widths: &[usize]) -> String {
    let mut line = String::new();
    line.push('│');
    for (key, width) in row.iter().zip(widths) {
        let label: String = key.label.chars().take(*width).collect();
        let label_width = label.chars().count();
        let left_pad = (width - label_width) / 2;
        let right_pad = width - label_width - left_pad;
        for _ in 0..left_pad {
            line.push(' ');
        }
        line.push_str(&label);
        for _ in 0..right_pad {
            line.push(' ');
        }
        line.push('│');
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Key, LayerRegistry};

    #[test]
    fn test_panel_diagram_shape() {
        let layer = KeyboardLayer::new(
            "test",
            vec![vec![Key::new("a"), Key::new("b")]],
            vec![vec![Key::new("c")]],
        )
        .unwrap();

        let diagram = render_panel_diagram(&layer, PanelSide::Left);
        let lines: Vec<&str> = diagram.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[1].contains('a') && lines[1].contains('b'));
        assert!(lines[2].starts_with('└') && lines[2].ends_with('┘'));
        // One junction between the two cells
        assert_eq!(lines[0].matches('┬').count(), 1);
    }

    #[test]
    fn test_wide_key_gets_wider_cell() {
        let layer = KeyboardLayer::new(
            "test",
            vec![vec![Key::new("a"), Key::new("b").with_width(2.0)]],
            vec![vec![Key::new("c")]],
        )
        .unwrap();

        let diagram = render_panel_diagram(&layer, PanelSide::Left);
        let top = diagram.lines().next().unwrap();
        let segments: Vec<&str> = top
            .trim_matches(['┌', '┐'])
            .split('┬')
            .collect();
        assert_eq!(segments.len(), 2);
        assert!(segments[1].chars().count() > segments[0].chars().count());
    }

    #[test]
    fn test_layer_diagram_includes_both_panels() {
        let registry = LayerRegistry::builtin();
        let diagram = render_layer_diagram(registry.get("default").unwrap());

        assert!(diagram.contains("Layer: default"));
        assert!(diagram.contains("left panel"));
        assert!(diagram.contains("right panel"));
        assert!(diagram.contains('q'));
        assert!(diagram.contains('p'));
    }

    #[test]
    fn test_label_lines_match_border_width() {
        let registry = LayerRegistry::builtin();
        let diagram = render_panel_diagram(registry.get("default").unwrap(), PanelSide::Left);

        let lines: Vec<&str> = diagram.lines().collect();
        for chunk in lines.chunks(3) {
            let [top, middle, bottom] = chunk else {
                panic!("diagram rows come in threes");
            };
            assert_eq!(top.chars().count(), middle.chars().count());
            assert_eq!(top.chars().count(), bottom.chars().count());
        }
    }
}

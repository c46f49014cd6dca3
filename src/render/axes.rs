//! Axis lines and tick labels.

use crate::{
    core::{
        cell::{Cell, Frame, Rect},
        config::ChartConfig,
    },
    layout::Layout,
};

const ORIGIN: char = '└';
const HDASH: char = '┄';
const VDASH: char = '┊';

/// Draw the origin marker, both dashed axis rules and the precomputed
/// label sets.  The x labels go on the row below the axis at the offsets
/// the layout walk assigned; the y labels sit left-aligned in the reserved
/// margin, every `axis_y_label_gap + 1` rows counting up from the origin.
pub fn plot(layout: &Layout, area: &Rect, cfg: &ChartConfig) -> Frame {
    let mut frame = Frame::new();
    let orig_y = area.min_y + area.dy() - 2;
    let orig_x = area.min_x + layout.label_y_space;
    let axes = |ch: char| Cell::new(ch, cfg.axes_color, cfg.bg);

    frame.set_within(area, orig_x, orig_y, axes(ORIGIN));

    for x in orig_x + 1..orig_x + layout.axis_x_width {
        frame.set_within(area, x, orig_y, axes(HDASH));
    }

    for dy in 1..=layout.axis_y_height {
        frame.set_within(area, orig_x, orig_y - dy, axes(VDASH));
    }

    for label in &layout.x_labels {
        for (j, ch) in label.text.chars().enumerate() {
            frame.set_within(area, orig_x + label.offset + j as i32, orig_y + 1, axes(ch));
        }
    }

    let step = cfg.axis_y_label_gap as i32 + 1;
    for (i, text) in layout.y_labels.iter().enumerate() {
        let y = orig_y - i as i32 * step;
        for (j, ch) in text.chars().enumerate() {
            frame.set_within(area, area.min_x + j as i32, y, axes(ch));
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::XLabel;

    fn lay() -> Layout {
        Layout {
            axis_y_height: 4,
            axis_x_width: 7,
            label_y_space: 4,
            scale: 1.0,
            x_labels: vec![
                XLabel {
                    offset: 0,
                    text: "0".into(),
                },
                XLabel {
                    offset: 3,
                    text: "3".into(),
                },
            ],
            y_labels: vec!["0.00".into(), "2.00".into()],
        }
    }

    #[test]
    fn origin_and_rules_land_where_expected() {
        let area = Rect::new(0, 0, 12, 6);
        let frame = plot(&lay(), &area, &ChartConfig::default());

        // origin at the margin column, one row above the label row
        assert_eq!(frame.get(4, 4).unwrap().ch, ORIGIN);
        // horizontal rule spans axis_x_width - 1 dashes
        for x in 5..11 {
            assert_eq!(frame.get(x, 4).unwrap().ch, HDASH);
        }
        assert!(frame.get(11, 4).is_none());
        // vertical rule climbs axis_y_height rows
        for y in 0..4 {
            assert_eq!(frame.get(4, y).unwrap().ch, VDASH);
        }
    }

    #[test]
    fn x_labels_sit_below_the_axis_at_their_offsets() {
        let area = Rect::new(0, 0, 12, 6);
        let frame = plot(&lay(), &area, &ChartConfig::default());

        assert_eq!(frame.get(4, 5).unwrap().ch, '0');
        assert_eq!(frame.get(7, 5).unwrap().ch, '3');
    }

    #[test]
    fn y_labels_climb_from_the_origin_row() {
        let area = Rect::new(0, 0, 12, 6);
        let frame = plot(&lay(), &area, &ChartConfig::default());

        // gap 1 → every second row, starting at the origin row
        for (j, ch) in "0.00".chars().enumerate() {
            assert_eq!(frame.get(j as i32, 4).unwrap().ch, ch);
        }
        for (j, ch) in "2.00".chars().enumerate() {
            assert_eq!(frame.get(j as i32, 2).unwrap().ch, ch);
        }
    }

    #[test]
    fn degenerate_layout_draws_almost_nothing() {
        let area = Rect::new(0, 0, 3, 1);
        let frame = plot(&Layout::default(), &area, &ChartConfig::default());
        // only the origin marker can land, and only if it fits
        assert!(frame.len() <= 1);
    }
}

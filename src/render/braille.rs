//! Braille line renderer: two samples per column.
//!
//! One terminal cell shows a 2×4 dot matrix (Unicode braille block), so each
//! canvas column carries two consecutive samples (the older in the left dot
//! column, the newer in the right), each quantized to one of four vertical
//! sub-rows.  When both samples of a pair land in the same cell row
//! a single combined glyph shows both dots; when they straddle rows, two
//! single-dot glyphs are emitted instead, one per row.

use crate::{
    core::{
        cell::{Cell, Frame, Rect},
        config::ChartConfig,
        constants::BRAILLE_VERTICAL_RESOLUTION,
        series::SeriesSet,
    },
    layout::{Layout, ValueRange},
    render::row_y,
};

/// Combined two-dot glyphs indexed `[sub-row of older][sub-row of newer]`.
/// Sub-row 0 is the bottom of the cell.  All 16 `(older, newer)` pairs map
/// to distinct glyphs.
pub(crate) const PAIR_GLYPHS: [[char; 4]; 4] = [
    ['⣀', '⡠', '⡐', '⡈'],
    ['⢄', '⠤', '⠔', '⠌'],
    ['⢂', '⠢', '⠒', '⠊'],
    ['⢁', '⠡', '⠑', '⠉'],
];

/// Lone older sample: left dot column only, sub-rows bottom to top.
pub(crate) const LEFT_ONLY: [char; 4] = ['⡀', '⠄', '⠂', '⠁'];
/// Lone newer sample: right dot column only, sub-rows bottom to top.
pub(crate) const RIGHT_ONLY: [char; 4] = ['⢀', '⠠', '⠐', '⠈'];

/// Quantize a sample to `(cell row, sub-row)` counting up from `bottom` in
/// quarter-cell steps.  A degenerate scale parks everything on the baseline
/// row, as do samples below the clamped bottom.
#[inline]
fn sub_cell(d: f64, bottom: f64, scale: f64) -> (i32, usize) {
    const VR: i32 = BRAILLE_VERTICAL_RESOLUTION as i32;
    if scale <= 0.0 {
        return (0, 0);
    }
    let cnt4 = ((d - bottom) / (scale / f64::from(VR)) + 0.5).max(0.0) as i32;
    (cnt4 / VR, (cnt4 % VR) as usize)
}

/// Plot every series into a fresh frame, name order, newest sample at the
/// rightmost column and two samples per column moving left.  Stops at the
/// y-label margin or when a series runs out of samples.
pub fn render(
    series: &SeriesSet,
    range: &ValueRange,
    layout: &Layout,
    area: &Rect,
    cfg: &ChartConfig,
) -> Frame {
    let mut frame = Frame::new();
    let bottom = range.bottom();
    let min_cell = area.min_x + layout.label_y_space;

    for (_, s) in series.iter() {
        if s.samples.is_empty() {
            continue;
        }
        let color = s.color.unwrap_or(cfg.line_color);
        let glyph = |ch: char| Cell::new(ch, color, cfg.bg);

        let mut cell_pos = area.max_x - 1;
        let mut data_pos = s.samples.len() as i32 - 1;
        while data_pos >= 0 && cell_pos > min_cell {
            let (b0, m0) = sub_cell(s.samples[data_pos as usize], bottom, layout.scale);
            if data_pos > 0 {
                let (b1, m1) = sub_cell(s.samples[data_pos as usize - 1], bottom, layout.scale);
                if b0 == b1 {
                    frame.set_within(area, cell_pos, row_y(area, b0), glyph(PAIR_GLYPHS[m1][m0]));
                } else {
                    // a single glyph cannot span two rows: one dot each
                    frame.set_within(area, cell_pos, row_y(area, b0), glyph(RIGHT_ONLY[m0]));
                    frame.set_within(area, cell_pos, row_y(area, b1), glyph(LEFT_ONLY[m1]));
                }
            } else {
                // oldest boundary, no left partner
                frame.set_within(area, cell_pos, row_y(area, b0), glyph(RIGHT_ONLY[m0]));
            }
            data_pos -= 2;
            cell_pos -= 1;
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::Series;
    use std::collections::HashSet;

    fn layout(scale: f64) -> Layout {
        Layout {
            scale,
            ..Layout::default()
        }
    }

    fn primed(bottom: f64, top: f64) -> ValueRange {
        let mut r = ValueRange::new();
        r.observe(bottom, top, 0.0, f64::NEG_INFINITY, f64::INFINITY);
        r
    }

    #[test]
    fn codebook_glyphs_are_all_distinct() {
        let mut seen = HashSet::new();
        for row in &PAIR_GLYPHS {
            for &ch in row {
                assert!(seen.insert(ch), "duplicate pair glyph {ch}");
            }
        }
        for &ch in LEFT_ONLY.iter().chain(&RIGHT_ONLY) {
            assert!(seen.insert(ch), "single-dot glyph {ch} collides");
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn quantization_splits_cell_row_and_sub_row() {
        assert_eq!(sub_cell(0.0, 0.0, 1.0), (0, 0));
        assert_eq!(sub_cell(0.25, 0.0, 1.0), (0, 1));
        assert_eq!(sub_cell(0.75, 0.0, 1.0), (0, 3));
        assert_eq!(sub_cell(1.0, 0.0, 1.0), (1, 0));
        // below-bottom samples clamp to the baseline instead of wrapping
        assert_eq!(sub_cell(-5.0, 0.0, 1.0), (0, 0));
        // degenerate scale parks everything on the baseline
        assert_eq!(sub_cell(7.0, 0.0, 0.0), (0, 0));
    }

    #[test]
    fn pair_straddling_rows_emits_two_single_dot_glyphs() {
        let mut set = SeriesSet::new();
        set.insert("a", Series::new(vec![0.0, 1.0]));
        let area = Rect::new(0, 0, 4, 6);

        let frame = render(
            &set,
            &primed(0.0, 4.0),
            &layout(1.0),
            &area,
            &ChartConfig::default(),
        );

        // newer sample 1.0 → row 1, right dot; older 0.0 → row 0, left dot
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.get(3, 2).unwrap().ch, RIGHT_ONLY[0]);
        assert_eq!(frame.get(3, 3).unwrap().ch, LEFT_ONLY[0]);
    }

    #[test]
    fn pair_in_one_row_emits_the_combined_glyph() {
        let mut set = SeriesSet::new();
        set.insert("a", Series::new(vec![0.0, 0.25]));
        let area = Rect::new(0, 0, 4, 6);

        let frame = render(
            &set,
            &primed(0.0, 4.0),
            &layout(1.0),
            &area,
            &ChartConfig::default(),
        );

        assert_eq!(frame.len(), 1);
        // older at sub-row 0, newer at sub-row 1
        assert_eq!(frame.get(3, 3).unwrap().ch, PAIR_GLYPHS[0][1]);
    }

    #[test]
    fn lone_oldest_sample_gets_a_right_dot() {
        let mut set = SeriesSet::new();
        set.insert("a", Series::new(vec![0.5]));
        let area = Rect::new(0, 0, 4, 6);

        let frame = render(
            &set,
            &primed(0.0, 4.0),
            &layout(1.0),
            &area,
            &ChartConfig::default(),
        );

        assert_eq!(frame.len(), 1);
        assert_eq!(frame.get(3, 3).unwrap().ch, RIGHT_ONLY[2]);
    }

    #[test]
    fn columns_stop_at_the_label_margin() {
        let mut set = SeriesSet::new();
        set.insert("a", Series::new((0..40).map(f64::from).collect()));
        let area = Rect::new(0, 0, 4, 6);
        let lay = Layout {
            scale: 100.0,
            label_y_space: 2,
            ..Layout::default()
        };

        let frame = render(&set, &primed(0.0, 400.0), &lay, &area, &ChartConfig::default());

        // only the column right of min_x + label_y_space is drawable
        assert!(!frame.is_empty());
        assert!(frame.iter().all(|(x, _, _)| x == 3));
    }
}

//! Dot line renderer: one sample per column, one marker glyph each.

use crate::{
    core::{
        cell::{Cell, Frame, Rect},
        config::ChartConfig,
        series::SeriesSet,
    },
    layout::{Layout, ValueRange},
    render::row_y,
};

/// Quantize a sample to a whole cell row above the baseline.  Shares the
/// degenerate-scale and below-bottom guards with the braille quantizer.
#[inline]
fn cell_row(d: f64, bottom: f64, scale: f64) -> i32 {
    if scale <= 0.0 {
        return 0;
    }
    ((d - bottom) / scale + 0.5).max(0.0) as i32
}

/// Plot every series into a fresh frame, name order, newest sample at the
/// rightmost column.  Stops at the y-label margin or when a series runs out
/// of samples.
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

        let mut cell_pos = area.max_x - 1;
        let mut data_pos = s.samples.len() as i32 - 1;
        while data_pos >= 0 && cell_pos > min_cell {
            let b = cell_row(s.samples[data_pos as usize], bottom, layout.scale);
            frame.set_within(
                area,
                cell_pos,
                row_y(area, b),
                Cell::new(cfg.dot_glyph, color, cfg.bg),
            );
            data_pos -= 1;
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

    fn primed(bottom: f64, top: f64) -> ValueRange {
        let mut r = ValueRange::new();
        r.observe(bottom, top, 0.0, f64::NEG_INFINITY, f64::INFINITY);
        r
    }

    #[test]
    fn autoscaled_walk_places_one_dot_per_column() {
        // padded range for [1, 2, 3, 2]: bottom 0.6, top 3.4
        let mut range = ValueRange::new();
        range.observe(1.0, 3.0, 0.2, f64::NEG_INFINITY, f64::INFINITY);
        assert!((range.bottom() - 0.6).abs() < 1e-12);
        assert!((range.top() - 3.4).abs() < 1e-12);

        let mut set = SeriesSet::new();
        set.insert("a", Series::new(vec![1.0, 2.0, 3.0, 2.0]));
        let area = Rect::new(0, 0, 5, 6);
        let lay = Layout {
            axis_y_height: 4,
            scale: range.span() / 4.0,
            ..Layout::default()
        };

        let frame = render(&set, &range, &lay, &area, &ChartConfig::default());

        assert_eq!(frame.len(), 4);
        let columns: HashSet<i32> = frame.iter().map(|(x, _, _)| x).collect();
        assert_eq!(columns.len(), 4);

        // rightmost column holds the most recent sample, 2.0
        let rightmost = frame.get(4, 1).unwrap();
        assert_eq!(rightmost.ch, '•');
        // oldest visible sample 1.0 sits lowest
        assert_eq!(frame.get(1, 2).unwrap().ch, '•');
    }

    #[test]
    fn degenerate_scale_collapses_to_the_baseline_row() {
        let mut set = SeriesSet::new();
        set.insert("a", Series::new(vec![5.0, 5.0, 5.0]));
        let area = Rect::new(0, 0, 5, 6);
        let lay = Layout::default(); // scale 0.0

        let frame = render(&set, &primed(5.0, 5.0), &lay, &area, &ChartConfig::default());

        assert_eq!(frame.len(), 3);
        assert!(frame.iter().all(|(_, y, _)| y == 3));
    }

    #[test]
    fn marker_glyph_is_configurable() {
        let mut set = SeriesSet::new();
        set.insert("a", Series::new(vec![0.0]));
        let cfg = ChartConfig {
            dot_glyph: '+',
            ..ChartConfig::default()
        };
        let lay = Layout {
            scale: 1.0,
            ..Layout::default()
        };

        let frame = render(&set, &primed(0.0, 4.0), &lay, &Rect::new(0, 0, 4, 6), &cfg);
        assert_eq!(frame.iter().next().unwrap().2.ch, '+');
    }
}

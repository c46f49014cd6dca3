//! Per-pass layout: visible window scan, range update, scale, label sets.

use crate::{
    core::{
        cell::Rect,
        config::{ChartConfig, Mode},
        series::SeriesSet,
    },
    layout::{format::short_float, range::ValueRange},
};

/// One x-axis label with the column offset (relative to the origin column)
/// it must be placed at.
#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub offset: i32,
    pub text: String,
}

/// Everything a render pass needs besides the series themselves.
/// Recomputed from scratch every pass; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Plot rows above the axis line: inner height minus the axis row and
    /// the x-label row.
    pub axis_y_height: i32,
    /// Columns available to the x axis after the y-label margin.
    pub axis_x_width: i32,
    /// Left margin reserved for y labels: the widest formatted value.
    pub label_y_space: i32,
    /// Data units per vertical cell step; 0.0 when the canvas or range is
    /// degenerate.
    pub scale: f64,
    pub x_labels: Vec<XLabel>,
    pub y_labels: Vec<String>,
}

/// Compute the layout for one render pass.
///
/// Folds each non-empty series' visible window into `range` (the hysteretic
/// state), then derives axis extents, the per-cell scale and both label
/// sets.  A canvas with no usable area yields a degenerate layout with empty
/// label sets; it never fails.
pub fn compute(
    series: &SeriesSet,
    area: &Rect,
    cfg: &ChartConfig,
    range: &mut ValueRange,
) -> Layout {
    let width = usize::try_from(area.dx()).unwrap_or(0);
    let height = area.dy().max(0);

    // Caller labels win; otherwise stringify the sample indices of the
    // first non-empty series.
    let auto_labels: Vec<String>;
    let labels: &[String] = if cfg.data_labels.is_empty() {
        auto_labels = series
            .first_non_empty()
            .map(|s| (0..s.samples.len()).map(|i| i.to_string()).collect())
            .unwrap_or_default();
        &auto_labels
    } else {
        &cfg.data_labels
    };

    // Scan only the samples that can reach the canvas: the most recent
    // `width` in dot mode, twice that in braille mode.
    for (_, s) in series.iter() {
        if s.samples.is_empty() {
            continue;
        }
        let window = (width * cfg.mode.samples_per_column()).min(s.samples.len());
        if window == 0 {
            continue;
        }
        let visible = &s.samples[s.samples.len() - window..];
        let mut lo = visible[0];
        let mut hi = visible[0];
        for &v in visible {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        range.observe(lo, hi, cfg.y_padding, cfg.y_floor, cfg.y_ceil);
    }

    let axis_y_height = (height - 2).max(0);

    let mut layout = Layout {
        axis_y_height,
        ..Layout::default()
    };
    if !range.primed() || axis_y_height == 0 {
        return layout;
    }

    let span = range.span();
    layout.scale = span / f64::from(axis_y_height);

    // y labels: evenly spaced from the bottom, top value excluded
    let n = (1 + axis_y_height as usize) / (cfg.axis_y_label_gap + 1);
    for i in 0..n {
        let s = short_float(range.bottom() + i as f64 * span / n as f64);
        layout.label_y_space = layout.label_y_space.max(s.chars().count() as i32);
        layout.y_labels.push(s);
    }

    layout.axis_x_width = area.dx() - 1 - layout.label_y_space;

    // x labels: the cursor walks columns; the label picked at each stop is
    // the one whose sample index lands in that column (two per column in
    // braille mode).  A label that would overshoot is skipped, but the
    // cursor still advances so later, shorter labels may fit.
    let gap_x = cfg.axis_x_label_gap as i32;
    let mut l: i32 = 0;
    let mut taken = 0usize;
    while taken < labels.len() && l < layout.axis_x_width {
        let idx = match cfg.mode {
            Mode::Dot => l as usize,
            Mode::Braille => l as usize * 2,
        };
        if idx >= labels.len() {
            break;
        }
        let text = &labels[idx];
        let w = text.chars().count() as i32;
        if l + w <= layout.axis_x_width {
            layout.x_labels.push(XLabel {
                offset: l,
                text: text.clone(),
            });
        }
        l += w + gap_x;
        taken += 1;
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::Series;

    fn one_series(samples: Vec<f64>) -> SeriesSet {
        let mut set = SeriesSet::new();
        set.insert("a", Series::new(samples));
        set
    }

    fn dot_cfg() -> ChartConfig {
        ChartConfig {
            mode: Mode::Dot,
            ..ChartConfig::default()
        }
    }

    #[test]
    fn autoscale_pads_observed_extrema() {
        let set = one_series(vec![1.0, 2.0, 3.0, 2.0]);
        let mut range = ValueRange::new();
        let area = Rect::new(0, 0, 4, 5);
        let layout = compute(&set, &area, &dot_cfg(), &mut range);

        assert!((range.bottom() - 0.6).abs() < 1e-12);
        assert!((range.top() - 3.4).abs() < 1e-12);
        assert_eq!(layout.axis_y_height, 3);
        assert!((layout.scale - 2.8 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn only_the_trailing_window_is_scanned() {
        // the 100.0 is older than the 4-column window and must not widen
        // the range
        let set = one_series(vec![100.0, 1.0, 2.0, 3.0, 2.0]);
        let mut range = ValueRange::new();
        let area = Rect::new(0, 0, 4, 5);
        compute(&set, &area, &dot_cfg(), &mut range);
        assert!((range.top() - 3.4).abs() < 1e-12);
    }

    #[test]
    fn second_pass_with_interior_data_keeps_the_range() {
        let set = one_series(vec![1.0, 2.0, 3.0, 2.0]);
        let mut range = ValueRange::new();
        let area = Rect::new(0, 0, 4, 5);
        compute(&set, &area, &dot_cfg(), &mut range);
        let warmed = range;

        let calm = one_series(vec![1.5, 2.0, 2.5, 2.0]);
        compute(&calm, &area, &dot_cfg(), &mut range);
        assert_eq!(range, warmed);
    }

    #[test]
    fn x_labels_fit_inside_the_axis() {
        let set = one_series((0..200).map(f64::from).collect());
        let mut range = ValueRange::new();
        let area = Rect::new(0, 0, 30, 10);
        let layout = compute(&set, &area, &dot_cfg(), &mut range);

        assert!(!layout.x_labels.is_empty());
        for l in &layout.x_labels {
            assert!(l.offset + l.text.chars().count() as i32 <= layout.axis_x_width);
        }
    }

    #[test]
    fn y_labels_fit_inside_the_reserved_margin() {
        let set = one_series(vec![0.0, 12345.0]);
        let mut range = ValueRange::new();
        let area = Rect::new(0, 0, 20, 9);
        let layout = compute(&set, &area, &ChartConfig::default(), &mut range);

        assert!(!layout.y_labels.is_empty());
        for s in &layout.y_labels {
            assert!(s.chars().count() as i32 <= layout.label_y_space);
        }
    }

    #[test]
    fn y_label_count_follows_height_and_gap() {
        let set = one_series(vec![0.0, 1.0]);
        let mut range = ValueRange::new();
        // height 9 → axis_y_height 7 → (1 + 7) / (1 + 1) = 4 labels
        let layout = compute(&set, &Rect::new(0, 0, 20, 9), &ChartConfig::default(), &mut range);
        assert_eq!(layout.y_labels.len(), 4);
    }

    #[test]
    fn braille_mode_takes_every_second_label() {
        let set = one_series((0..40).map(f64::from).collect());
        let mut range = ValueRange::new();
        let area = Rect::new(0, 0, 20, 8);
        let layout = compute(&set, &area, &ChartConfig::default(), &mut range);

        // first label is index 0; the cursor advanced by width+gap, and the
        // label at cursor l names sample 2·l
        let second = &layout.x_labels[1];
        assert_eq!(second.text, (second.offset * 2).to_string());
    }

    #[test]
    fn zero_area_yields_a_degenerate_layout() {
        let set = one_series(vec![1.0, 2.0]);
        let mut range = ValueRange::new();
        let layout = compute(&set, &Rect::new(0, 0, 0, 0), &ChartConfig::default(), &mut range);
        assert_eq!(layout.scale, 0.0);
        assert!(layout.x_labels.is_empty());
        assert!(layout.y_labels.is_empty());
    }
}

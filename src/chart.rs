//! Chart orchestrator: owns the configuration, the series, the persisted
//! value range and the optional trace sink.
//!
//! A render pass is pure in everything except the hysteretic [`ValueRange`]:
//! layout, label sets and cell writes are recomputed from scratch, the range
//! only ever widens.  [`LineChart::reset_range`] discards that one piece of
//! state.  Not safe for concurrent mutation: callers serialize render calls
//! and series edits themselves.

use crate::{
    core::{
        cell::{Frame, Rect},
        config::{ChartConfig, Mode},
        series::SeriesSet,
        trace::TraceSink,
    },
    layout::{self, ValueRange},
    render::{axes, braille, dot},
};

pub struct LineChart {
    config: ChartConfig,
    series: SeriesSet,
    range: ValueRange,
    trace: Option<Box<dyn TraceSink>>,
}

impl LineChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            series: SeriesSet::new(),
            range: ValueRange::new(),
            trace: None,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesSet) -> Self {
        self.series = series;
        self
    }

    /// Install a diagnostic sink; the channel is inert without one.
    #[must_use]
    pub fn with_trace(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    pub fn series_mut(&mut self) -> &mut SeriesSet {
        &mut self.series
    }

    /// The y range currently in effect (widens across passes).
    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        self.range
    }

    /// Forget the accumulated range; the next pass re-primes it from the
    /// visible data.
    pub fn reset_range(&mut self) {
        self.range.reset();
    }

    /// One full render pass into a fresh frame of cell writes, to be merged
    /// into a caller-owned buffer (last write wins).
    ///
    /// Zero usable series is a valid silent no-data state: no axes, no
    /// labels, empty frame.
    pub fn render(&mut self, area: &Rect) -> Frame {
        if self.series.usable() == 0 {
            self.trace_line("render: no usable series");
            return Frame::new();
        }

        let layout = layout::compute(&self.series, area, &self.config, &mut self.range);
        if let Some(t) = &mut self.trace {
            t.line(&format!(
                "layout bottom={} top={} scale={} axis_y_height={} axis_x_width={} label_y_space={}",
                self.range.bottom(),
                self.range.top(),
                layout.scale,
                layout.axis_y_height,
                layout.axis_x_width,
                layout.label_y_space,
            ));
        }

        let mut frame = axes::plot(&layout, area, &self.config);
        match self.config.mode {
            Mode::Braille => {
                self.trace_line("render: braille pass");
                frame.merge(braille::render(
                    &self.series,
                    &self.range,
                    &layout,
                    area,
                    &self.config,
                ));
            }
            Mode::Dot => {
                self.trace_line("render: dot pass");
                frame.merge(dot::render(
                    &self.series,
                    &self.range,
                    &layout,
                    area,
                    &self.config,
                ));
            }
        }
        frame
    }

    fn trace_line(&mut self, msg: &str) {
        if let Some(t) = &mut self.trace {
            t.line(msg);
        }
    }
}

//! Public-facing crate root – re-exports + one-shot helper.

pub mod chart;
pub mod cli;
pub mod core;
pub mod layout;
pub mod render;

pub use chart::LineChart;

pub use self::core::{
    cell::{Cell, Frame, Rect},
    color::{AnsiCode, ColorError, colorize},
    config::{ChartConfig, ChartConfigBuilder, Mode},
    error::{ChartError, ConfigError},
    series::{Series, SeriesSet},
    trace::{TraceSink, WriterTrace},
};

pub use layout::{Layout, ValueRange};

pub use render::{Screen, terminal_inner};

/// Convenience function for the simple case: plot a **static** series set
/// once, auto-scaled and sized to the current terminal.
pub fn plot(series: SeriesSet, title: &str, mode: Mode, color: &str) -> Result<(), ChartError> {
    if series.usable() == 0 {
        return Err(ChartError::EmptyData);
    }

    let cfg = ChartConfig::builder()
        .mode(mode)
        .line_color(AnsiCode::from_name(color)?)
        .build()?;

    let inner = terminal_inner();
    let mut chart = LineChart::new(cfg).with_series(series);
    let frame = chart.render(&inner);
    Screen::new().draw(title, &inner, &frame)
}

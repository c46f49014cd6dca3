//! Aggregates the data-model layer: cells, colours, series, configuration.

pub mod cell;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;
pub mod series;
pub mod trace;

// re-export frequently-used items for convenience
pub use cell::{Cell, Frame, Rect};
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{ChartConfig, ChartConfigBuilder, Mode};
pub use constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION, MIN_CHART_HEIGHT,
    MIN_CHART_WIDTH,
};
pub use error::{ChartError, ConfigError};
pub use series::{Series, SeriesSet};
pub use trace::{TraceSink, WriterTrace};

//! Run-time chart configuration + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{
        BRAILLE_HORIZONTAL_RESOLUTION, DEFAULT_AXIS_X_LABEL_GAP, DEFAULT_AXIS_Y_LABEL_GAP,
        DEFAULT_DOT_GLYPH, DEFAULT_Y_PADDING,
    },
    error::ConfigError,
};

/// How samples are packed into cells.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Two samples per column via the braille dot matrix.
    #[default]
    Braille,
    /// One sample per column, a single marker glyph each.
    Dot,
}

impl Mode {
    /// Parse the CLI spelling.
    pub fn from_name(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "braille" => Ok(Self::Braille),
            "dot" => Ok(Self::Dot),
            other => Err(ConfigError::UnknownMode(other.to_owned())),
        }
    }

    /// Samples one canvas column can hold in this mode.
    #[inline]
    #[must_use]
    pub const fn samples_per_column(self) -> usize {
        match self {
            Self::Braille => BRAILLE_HORIZONTAL_RESOLUTION,
            Self::Dot => 1,
        }
    }
}

/// Immutable parameters consulted by every render pass.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub mode: Mode,
    /// Fraction of the observed span padded beyond new extrema.
    pub y_padding: f64,
    /// Hard lower bound the auto-scaled range never crosses.
    pub y_floor: f64,
    /// Hard upper bound the auto-scaled range never crosses.
    pub y_ceil: f64,
    /// Columns between the start of consecutive x labels.
    pub axis_x_label_gap: usize,
    /// Blank rows between consecutive y labels.
    pub axis_y_label_gap: usize,
    /// Marker used by [`Mode::Dot`].
    pub dot_glyph: char,
    pub axes_color: AnsiCode,
    /// Fallback for series without a colour of their own.
    pub line_color: AnsiCode,
    pub bg: AnsiCode,
    /// Caller-supplied x-axis labels; empty means stringified sample
    /// indices are synthesized at layout time.
    pub data_labels: Vec<String>,
}

impl ChartConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::new()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Braille,
            y_padding: DEFAULT_Y_PADDING,
            y_floor: f64::NEG_INFINITY,
            y_ceil: f64::INFINITY,
            axis_x_label_gap: DEFAULT_AXIS_X_LABEL_GAP,
            axis_y_label_gap: DEFAULT_AXIS_Y_LABEL_GAP,
            dot_glyph: DEFAULT_DOT_GLYPH,
            axes_color: AnsiCode::white(),
            line_color: AnsiCode::green(),
            bg: AnsiCode::none(),
            data_labels: Vec::new(),
        }
    }
}

/// Fluent builder; defaults mirror [`ChartConfig::default`].
#[derive(Debug, Default)]
pub struct ChartConfigBuilder {
    cfg: ChartConfig,
}

impl ChartConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(mut self, m: Mode) -> Self {
        self.cfg.mode = m;
        self
    }
    #[inline]
    pub fn y_padding(mut self, p: f64) -> Self {
        self.cfg.y_padding = p;
        self
    }
    #[inline]
    pub fn y_floor(mut self, v: f64) -> Self {
        self.cfg.y_floor = v;
        self
    }
    #[inline]
    pub fn y_ceil(mut self, v: f64) -> Self {
        self.cfg.y_ceil = v;
        self
    }
    #[inline]
    pub fn axis_x_label_gap(mut self, g: usize) -> Self {
        self.cfg.axis_x_label_gap = g;
        self
    }
    #[inline]
    pub fn axis_y_label_gap(mut self, g: usize) -> Self {
        self.cfg.axis_y_label_gap = g;
        self
    }
    #[inline]
    pub fn dot_glyph(mut self, ch: char) -> Self {
        self.cfg.dot_glyph = ch;
        self
    }
    #[inline]
    pub fn axes_color<C: Into<AnsiCode>>(mut self, c: C) -> Self {
        self.cfg.axes_color = c.into();
        self
    }
    #[inline]
    pub fn line_color<C: Into<AnsiCode>>(mut self, c: C) -> Self {
        self.cfg.line_color = c.into();
        self
    }
    #[inline]
    pub fn bg<C: Into<AnsiCode>>(mut self, c: C) -> Self {
        self.cfg.bg = c.into();
        self
    }
    #[inline]
    pub fn data_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.data_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        let c = self.cfg;
        if c.y_floor > c.y_ceil {
            return Err(ConfigError::InvertedBounds {
                floor: c.y_floor,
                ceil: c.y_ceil,
            });
        }
        if !c.y_padding.is_finite() || c.y_padding < 0.0 {
            return Err(ConfigError::InvalidPadding(c.y_padding));
        }
        Ok(c)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ChartConfigBuilder> for Result<ChartConfig, ConfigError> {
    fn from(b: ChartConfigBuilder) -> Self {
        b.build()
    }
}

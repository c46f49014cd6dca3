//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseCsvError};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    /// `y_floor` must not exceed `y_ceil`; an inverted clamp window is a
    /// caller error, rejected here instead of silently reordered.
    InvertedBounds { floor: f64, ceil: f64 },
    /// Padding must be a finite, non-negative fraction.
    InvalidPadding(f64),
    /// Render mode string was neither `braille` nor `dot`.
    UnknownMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvertedBounds { floor, ceil } => {
                write!(f, "y_floor {floor} must be <= y_ceil {ceil}")
            }
            ConfigError::InvalidPadding(p) => {
                write!(f, "y_padding {p} must be finite and >= 0")
            }
            ConfigError::UnknownMode(m) => {
                write!(f, "unknown mode `{m}` (expected `braille` or `dot`)")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Csv(ParseCsvError),
    Color(ColorError),
    Config(ConfigError),
    ScreenTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
    EmptyData,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Csv(e) => write!(f, "{e}"),
            ChartError::Color(e) => write!(f, "{e}"),
            ChartError::Config(e) => write!(f, "{e}"),
            ChartError::ScreenTooSmall {
                want_w,
                want_h,
                got_w,
                got_h,
            } => write!(
                f,
                "terminal too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}"
            ),
            ChartError::EmptyData => write!(f, "data set is empty"),
        }
    }
}
impl Error for ChartError {}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for ChartError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<ColorError> for ChartError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

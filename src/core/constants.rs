//! A collection of constants.

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;

/// Chart inner area must be at least 5 cells tall: 3 plot rows plus the axis
/// row and the x-label row.
pub const MIN_CHART_HEIGHT: usize = 5;
/// Chart inner area must be at least 12 cells wide
pub const MIN_CHART_WIDTH: usize = 12;

/// Braille packs 2 horizontal dots into one character cell
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille packs 4 vertical dots into one character cell
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Fraction of the observed span padded above/below when the auto-scaled
/// value range widens.
pub const DEFAULT_Y_PADDING: f64 = 0.2;
/// Blank columns between consecutive x-axis labels.
pub const DEFAULT_AXIS_X_LABEL_GAP: usize = 2;
/// Blank rows between consecutive y-axis labels.
pub const DEFAULT_AXIS_Y_LABEL_GAP: usize = 1;
/// Marker glyph used by dot mode.
pub const DEFAULT_DOT_GLYPH: char = '•';

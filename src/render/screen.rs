//! Frame → terminal composition: border, centred title, coloured cells.
//!
//! The chart engine hands back a sparse cell frame; this writer folds it
//! into one ANSI string per draw and pushes it to stdout.  Escape sequences
//! are only re-emitted when the colour actually changes along a row.

use std::io::{Write, stdout};

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    cell::{Frame, Rect},
    color::{AnsiCode, colorize},
    constants::{BORDER_WIDTH, MIN_CHART_HEIGHT, MIN_CHART_WIDTH},
    error::ChartError,
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

/// Hides the cursor on construction and shows it again on Drop
struct CursorGuard;
impl CursorGuard {
    fn new() -> Self {
        let _ = write!(stdout(), "\x1b[?25l");
        CursorGuard
    }
}
impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = write!(stdout(), "\x1b[?25h");
        let _ = stdout().flush();
    }
}

/// Inner drawable rectangle for the current terminal (80×30 fallback):
/// one border cell on every side plus a spare row under the box.
#[must_use]
pub fn terminal_inner() -> Rect {
    const BORDER: i32 = BORDER_WIDTH as i32;
    let (Width(w), Height(h)) = terminal_size().unwrap_or((Width(80), Height(30)));
    Rect::new(1, 1, i32::from(w) - BORDER, i32::from(h) - BORDER - 1)
}

/// Write centred coloured text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &AnsiCode) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Compose one full screen: border box around `inner`, title in the top
/// rule, frame cells inside.  `inner` is assumed anchored at `(1, 1)`, the
/// cell just inside the border.
fn compose(title: &str, inner: &Rect, frame: &Frame, color: &AnsiCode) -> String {
    let width = usize::try_from(inner.dx()).unwrap_or(0);
    let mut out = String::new();

    out.push_str(TL);
    push_centered(&mut out, title, width, color);
    out.push_str(TR);
    out.push('\n');

    for y in inner.min_y..inner.max_y {
        out.push_str(V);
        let mut current: Option<(AnsiCode, AnsiCode)> = None;
        for x in inner.min_x..inner.max_x {
            match frame.get(x, y) {
                Some(cell) => {
                    if current != Some((cell.fg, cell.bg)) {
                        out.push_str(AnsiCode::reset().as_str());
                        out.push_str(cell.bg.as_str());
                        out.push_str(cell.fg.as_str());
                        current = Some((cell.fg, cell.bg));
                    }
                    out.push(cell.ch);
                }
                None => {
                    if current.is_some() {
                        out.push_str(AnsiCode::reset().as_str());
                        current = None;
                    }
                    out.push(' ');
                }
            }
        }
        if current.is_some() {
            out.push_str(AnsiCode::reset().as_str());
        }
        out.push_str(V);
        out.push('\n');
    }

    out.push_str(BL);
    out.push_str(&H.repeat(width));
    out.push_str(BR);
    out.push('\n');
    out
}

/// Stateful stdout writer: clears the terminal on the first frame only,
/// then repaints from the home position on every draw.
pub struct Screen {
    first_frame: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    #[must_use]
    pub fn new() -> Self {
        Self { first_frame: true }
    }

    /// Paint `frame` inside a border box.  Fails if the inner area cannot
    /// hold a minimal chart.
    pub fn draw(&mut self, title: &str, inner: &Rect, frame: &Frame) -> Result<(), ChartError> {
        let got_w = usize::try_from(inner.dx()).unwrap_or(0);
        let got_h = usize::try_from(inner.dy()).unwrap_or(0);
        if got_w < MIN_CHART_WIDTH || got_h < MIN_CHART_HEIGHT {
            return Err(ChartError::ScreenTooSmall {
                want_w: MIN_CHART_WIDTH,
                want_h: MIN_CHART_HEIGHT,
                got_w,
                got_h,
            });
        }

        let text = compose(title, inner, frame, &AnsiCode::white());
        let mut term = stdout().lock();
        let _cursor = CursorGuard::new();

        if self.first_frame {
            write!(term, "\x1b[2J")?;
            self.first_frame = false;
        }
        write!(term, "\x1b[1;1H")?;
        term.write_all(text.as_bytes())?;
        term.flush()?;
        Ok(())
    }
}

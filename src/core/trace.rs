//! Injected render-event trace channel.
//!
//! The chart accepts an optional [`TraceSink`] at construction; layout and
//! render milestones are reported as plain text lines.  When no sink is
//! installed the channel is inert: call sites check for `None` before
//! formatting anything.  The sink's lifecycle belongs to the caller.

use std::{
    io::Write,
    time::Instant,
};

/// Receives one diagnostic line per event.
pub trait TraceSink {
    fn line(&mut self, msg: &str);
}

/// Stamps each line with seconds elapsed since the sink was created and
/// forwards it to any `io::Write` target.  Write failures are swallowed:
/// diagnostics must never take down a render pass.
pub struct WriterTrace<W: Write> {
    out: W,
    start: Instant,
}

impl<W: Write> WriterTrace<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            start: Instant::now(),
        }
    }
}

impl<W: Write> TraceSink for WriterTrace<W> {
    fn line(&mut self, msg: &str) {
        let t = self.start.elapsed();
        let _ = writeln!(self.out, "[{:>8.3}] {msg}", t.as_secs_f64());
    }
}

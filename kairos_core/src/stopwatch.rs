use std::{fmt::Display, time::Instant};

use tracing::{debug, trace};

use crate::error::StopwatchError;
use crate::state::{Cycle, StopwatchStatus};

const DEFAULT_PRECISION: usize = 5;

/// Single-cycle stopwatch over the monotonic clock.
///
/// One `start()`/`stop()` cycle is permitted per instance; a finished
/// instance must be `reset()` before it can be started again, and a second
/// `start()` without a reset is an error rather than a silent no-op.
/// Elapsed time is reported in milliseconds as `f64` and rendered as a
/// fixed-point decimal string with a configurable digit count.
///
/// Not synchronized: transitions take `&mut self`, so sharing one instance
/// across threads requires external locking by the caller.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    default_precision: usize,
    cycle: Cycle,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            default_precision: DEFAULT_PRECISION,
            cycle: Cycle::Idle,
        }
    }

    /// Creates a stopwatch whose `format()` renders with `precision`
    /// fractional digits instead of the default 5.
    pub fn with_precision(precision: i32) -> Result<Self, StopwatchError> {
        Ok(Self {
            default_precision: checked_precision(precision)?,
            cycle: Cycle::Idle,
        })
    }

    /// Begins a measurement cycle, anchoring it to the monotonic clock.
    pub fn start(&mut self) -> Result<(), StopwatchError> {
        match self.cycle {
            Cycle::Running { .. } => Err(StopwatchError::AlreadyRunning),
            Cycle::Stopped { .. } => Err(StopwatchError::NotReset),
            Cycle::Idle => {
                self.cycle = Cycle::Running {
                    started_at: Instant::now(),
                };
                trace!("stopwatch started");
                Ok(())
            }
        }
    }

    /// Ends the measurement cycle and records the elapsed time.
    ///
    /// Never fails: stopping a never-started stopwatch leaves it idle with
    /// an elapsed time of zero, and stopping an already stopped one
    /// recomputes the elapsed time against the original start anchor, so
    /// the recorded value keeps growing with the clock.
    pub fn stop(&mut self) {
        match self.cycle {
            Cycle::Idle => {}
            Cycle::Running { started_at } | Cycle::Stopped { started_at, .. } => {
                let elapsed_ms = started_at.elapsed().as_secs_f64() * 1e3;
                self.cycle = Cycle::Stopped {
                    started_at,
                    elapsed_ms,
                };
                debug!("stopwatch stopped after {} ms", elapsed_ms);
            }
        }
    }

    /// Stops the cycle and returns the elapsed milliseconds.
    pub fn stop_and_get(&mut self) -> f64 {
        self.stop();
        self.elapsed_ms()
    }

    /// Returns the stopwatch to its initial state, keeping only the
    /// default precision. A running cycle is flushed first; the instance
    /// is start-eligible again afterwards.
    pub fn reset(&mut self) {
        self.stop();
        self.cycle = Cycle::Idle;
        trace!("stopwatch reset");
    }

    /// Elapsed milliseconds recorded by the last `stop()`, `0.0` if no
    /// cycle has completed yet.
    pub fn elapsed_ms(&self) -> f64 {
        match self.cycle {
            Cycle::Stopped { elapsed_ms, .. } => elapsed_ms,
            Cycle::Idle | Cycle::Running { .. } => 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.cycle, Cycle::Running { .. })
    }

    /// True from `start()` until the next `reset()`.
    pub fn has_been_used(&self) -> bool {
        !matches!(self.cycle, Cycle::Idle)
    }

    pub fn status(&self) -> StopwatchStatus {
        self.cycle.status()
    }

    pub fn default_precision(&self) -> usize {
        self.default_precision
    }

    /// Renders the elapsed milliseconds with the default precision.
    pub fn format(&self) -> String {
        format_ms(self.elapsed_ms(), self.default_precision)
    }

    /// Renders the elapsed milliseconds with `precision` fractional
    /// digits.
    pub fn format_with(&self, precision: i32) -> Result<String, StopwatchError> {
        Ok(format_ms(self.elapsed_ms(), checked_precision(precision)?))
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

fn checked_precision(precision: i32) -> Result<usize, StopwatchError> {
    if precision < 0 {
        return Err(StopwatchError::NegativePrecision(precision));
    }
    Ok(precision as usize)
}

// Rust's native fixed-point formatter: round to nearest, trailing zeros
// kept up to the requested digit count, no decimal point at precision 0.
fn format_ms(elapsed_ms: f64, precision: usize) -> String {
    format!("{elapsed_ms:.precision$}")
}

/// Runs a block on a fresh stopwatch and logs the elapsed milliseconds at
/// debug level, returning the block's value.
#[macro_export]
macro_rules! stopwatch_debug {
    ($msg:literal, $block:expr) => {{
        let mut stopwatch = $crate::stopwatch::Stopwatch::new();
        let _ = stopwatch.start();
        let result = $block;
        tracing::debug!("{}: took {} ms", $msg, stopwatch.stop_and_get());
        result
    }};
}

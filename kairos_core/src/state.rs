use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Lifecycle of a measurement cycle.
///
/// The running anchor and the computed duration live inside the variants,
/// so a stopwatch can never be running without having been started and an
/// elapsed value can never exist without a completed stop. `Stopped`
/// keeps the original anchor so a repeated stop recomputes against it.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cycle {
    Idle,
    Running { started_at: Instant },
    Stopped { started_at: Instant, elapsed_ms: f64 },
}

impl Cycle {
    pub(crate) fn status(&self) -> StopwatchStatus {
        match self {
            Cycle::Idle => StopwatchStatus::Idle,
            Cycle::Running { .. } => StopwatchStatus::Running,
            Cycle::Stopped { .. } => StopwatchStatus::Stopped,
        }
    }
}

/// Externally visible snapshot of a stopwatch's lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StopwatchStatus {
    Idle,
    Running,
    Stopped,
}

impl Default for StopwatchStatus {
    fn default() -> Self {
        StopwatchStatus::Idle
    }
}

//! Errors a lifecycle handler can propagate to the host

use crate::exec::RoutineId;
use thiserror::Error;

/// Failures surfaced to the host interpreter's error handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    /// The name-resolution service has no entry for a routine that is
    /// currently executing. That means the catalog is corrupt, so the event
    /// is aborted instead of logged with a placeholder name.
    #[error("log_functions: cache lookup for routine {0} failed")]
    RoutineLookup(RoutineId),
}

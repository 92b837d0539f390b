//! Host-owned handle types passed into lifecycle callbacks
//!
//! These are borrowed views of interpreter state, valid only for the duration
//! of one callback. The tracer never retains them.

use std::fmt;

/// Opaque identifier for a routine, assigned by the host interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoutineId(pub u32);

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One statement inside a routine body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    /// Source line the statement starts on
    pub line: u32,
    /// Kind code from the host's closed statement enumeration
    pub kind: i32,
}

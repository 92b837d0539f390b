//! Host registration surface
//!
//! The host interpreter discovers the tracer one of two ways: at startup it
//! looks up its rendezvous slot and we point it at the static hook table, or
//! it loads plugins late and hands us a host-owned table to fill in. Both
//! paths install the same five entry points, so behavior is independent of
//! which one the host uses.

use crate::error::TraceError;
use crate::exec::{RoutineId, Statement};
use crate::tracer;

/// Entry point for the three routine-level lifecycle events
pub type RoutineHook = fn(RoutineId) -> Result<(), TraceError>;

/// Entry point for the two statement-level lifecycle events
pub type StatementHook = fn(&Statement) -> Result<(), TraceError>;

/// The fixed-shape handler table the host dispatches through
#[derive(Clone, Copy)]
pub struct HookTable {
    pub func_setup: RoutineHook,
    pub func_beg: RoutineHook,
    pub func_end: RoutineHook,
    pub stmt_beg: StatementHook,
    pub stmt_end: StatementHook,
}

impl HookTable {
    /// A table whose entries observe events and do nothing
    pub const fn noop() -> Self {
        Self {
            func_setup: noop_routine,
            func_beg: noop_routine,
            func_end: noop_routine,
            stmt_beg: noop_stmt,
            stmt_end: noop_stmt,
        }
    }
}

/// The tracer's five handlers, in lifecycle order
pub static PLUGIN_HOOKS: HookTable = HookTable {
    func_setup,
    func_beg,
    func_end,
    stmt_beg,
    stmt_end,
};

/// Primary path: write the hook table into the host's rendezvous slot
pub fn rendezvous_install(slot: &mut Option<&'static HookTable>) {
    *slot = Some(&PLUGIN_HOOKS);
}

/// Late/explicit path: fill a host-owned table with the same entry points
pub fn load_plugin(hooks: &mut HookTable) {
    *hooks = PLUGIN_HOOKS;
}

// The table entries forward to the process-wide tracer. Before one is
// installed they are silent no-ops: a missing tracer must never abort host
// execution, and the host invariant (handlers installed before any routine
// runs) makes the case unreachable in practice.

fn func_setup(func: RoutineId) -> Result<(), TraceError> {
    match tracer::global() {
        Some(t) => t.func_setup(func),
        None => Ok(()),
    }
}

fn func_beg(func: RoutineId) -> Result<(), TraceError> {
    match tracer::global() {
        Some(t) => t.func_beg(func),
        None => Ok(()),
    }
}

fn func_end(func: RoutineId) -> Result<(), TraceError> {
    match tracer::global() {
        Some(t) => t.func_end(func),
        None => Ok(()),
    }
}

fn stmt_beg(stmt: &Statement) -> Result<(), TraceError> {
    match tracer::global() {
        Some(t) => t.stmt_beg(stmt),
        None => Ok(()),
    }
}

fn stmt_end(stmt: &Statement) -> Result<(), TraceError> {
    match tracer::global() {
        Some(t) => t.stmt_end(stmt),
        None => Ok(()),
    }
}

fn noop_routine(_func: RoutineId) -> Result<(), TraceError> {
    Ok(())
}

fn noop_stmt(_stmt: &Statement) -> Result<(), TraceError> {
    Ok(())
}

//! The lifecycle tracer
//!
//! Five handlers, one per instrumentation point. Each gates on its toggle
//! before doing anything else, so a disabled category costs one relaxed load
//! and a branch on the interpreter's hot path. An enabled handler resolves
//! whatever context its line needs and hands exactly one formatted line to
//! the sink.

use std::sync::{Arc, OnceLock};

use crate::config::{Toggle, ToggleSet};
use crate::error::TraceError;
use crate::exec::{RoutineId, Statement};
use crate::resolver::NameResolver;
use crate::sink::{LogSink, Severity};
use crate::stmts;

/// Tag prefixed to every emitted line
///
/// Downstream log scrapers key on this string, so it stays `log_functions`
/// regardless of the crate name.
pub const TRACE_TAG: &str = "log_functions";

/// Emits one log line per enabled lifecycle event
pub struct Tracer {
    toggles: ToggleSet,
    resolver: Arc<dyn NameResolver>,
    sink: Arc<dyn LogSink>,
}

impl Tracer {
    /// New tracer with all toggles at their documented defaults
    pub fn new(resolver: Arc<dyn NameResolver>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            toggles: ToggleSet::new(),
            resolver,
            sink,
        }
    }

    /// Runtime flags for the five instrumentation points
    ///
    /// The embedding configuration layer flips these; handlers read them on
    /// every callback.
    pub fn toggles(&self) -> &ToggleSet {
        &self.toggles
    }

    /// Before the routine's local-declaration block evaluates
    pub fn func_setup(&self, func: RoutineId) -> Result<(), TraceError> {
        if !self.toggles.get(Toggle::Declare) {
            return Ok(());
        }
        self.routine_line("DECLARE", func)
    }

    /// Before the routine's main body starts executing
    pub fn func_beg(&self, func: RoutineId) -> Result<(), TraceError> {
        if !self.toggles.get(Toggle::FunctionBegin) {
            return Ok(());
        }
        self.routine_line("BEGIN", func)
    }

    /// After the routine's main body finishes
    ///
    /// Whether the host calls this when an error unwinds past the routine is
    /// part of the host's lifecycle contract, not ours.
    pub fn func_end(&self, func: RoutineId) -> Result<(), TraceError> {
        if !self.toggles.get(Toggle::FunctionEnd) {
            return Ok(());
        }
        self.routine_line("END", func)
    }

    /// Immediately before one statement executes
    pub fn stmt_beg(&self, stmt: &Statement) -> Result<(), TraceError> {
        if !self.toggles.get(Toggle::StatementBegin) {
            return Ok(());
        }
        self.stmt_line("START", stmt);
        Ok(())
    }

    /// Immediately after one statement finishes
    pub fn stmt_end(&self, stmt: &Statement) -> Result<(), TraceError> {
        if !self.toggles.get(Toggle::StatementEnd) {
            return Ok(());
        }
        self.stmt_line("STOP", stmt);
        Ok(())
    }

    fn routine_line(&self, phase: &str, func: RoutineId) -> Result<(), TraceError> {
        let name = self
            .resolver
            .resolve(func)
            .ok_or(TraceError::RoutineLookup(func))?;
        self.sink
            .emit(Severity::Log, &format!("{TRACE_TAG}, {phase}, {name}"));
        Ok(())
    }

    fn stmt_line(&self, edge: &str, stmt: &Statement) {
        self.sink.emit(
            Severity::Log,
            &format!(
                "{TRACE_TAG}, STMT {edge}, line {}, type {}",
                stmt.line,
                stmts::stmt_type_name(stmt.kind)
            ),
        );
    }
}

static GLOBAL: OnceLock<Tracer> = OnceLock::new();

/// Install the process-wide tracer the plugin hook table dispatches to
///
/// First install wins; later calls return the existing instance unchanged,
/// so repeated initialization cannot double-register handlers.
pub fn install(resolver: Arc<dyn NameResolver>, sink: Arc<dyn LogSink>) -> &'static Tracer {
    GLOBAL.get_or_init(|| Tracer::new(resolver, sink))
}

/// The installed process-wide tracer, if any
pub fn global() -> Option<&'static Tracer> {
    GLOBAL.get()
}

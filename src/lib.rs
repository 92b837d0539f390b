//! Rastro - Lifecycle tracer for procedural-language interpreters
//!
//! This library instruments a host interpreter at five lifecycle points
//! (declare block, function begin, function end, statement begin, statement
//! end) and emits one structured log line per enabled event. Each point is
//! independently toggleable at runtime, and a disabled point costs a single
//! branch on the interpreter's hot path.
//!
//! The host drives all control flow: it installs the hook table from
//! [`plugin`] once at startup and calls into it as routines execute. The
//! tracer only reads host-owned data (a routine identifier, a statement's
//! line number and kind code) and never blocks, buffers, or retries.

pub mod config;
pub mod error;
pub mod exec;
pub mod plugin;
pub mod resolver;
pub mod sink;
pub mod stmts;
pub mod tracer;

//! Runtime toggles for the five instrumentation points
//!
//! The embedding configuration layer owns the writes; the tracer only reads,
//! once per callback. Both sides use relaxed atomics: a stale flag for one
//! callback changes logging granularity, nothing else.

use std::sync::atomic::{AtomicBool, Ordering};

/// One instrumentation point that operators can switch at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Before a routine's local-declaration block evaluates
    Declare,
    /// Before a routine's main body starts executing
    FunctionBegin,
    /// After a routine's main body finishes
    FunctionEnd,
    /// Immediately before each statement executes
    StatementBegin,
    /// Immediately after each statement finishes
    StatementEnd,
}

impl Toggle {
    /// All five toggles, in lifecycle order
    pub const ALL: [Toggle; 5] = [
        Toggle::Declare,
        Toggle::FunctionBegin,
        Toggle::FunctionEnd,
        Toggle::StatementBegin,
        Toggle::StatementEnd,
    ];

    /// Qualified option name exposed to operators
    pub fn name(self) -> &'static str {
        match self {
            Toggle::Declare => "log_functions.log_declare",
            Toggle::FunctionBegin => "log_functions.log_function_begin",
            Toggle::FunctionEnd => "log_functions.log_function_end",
            Toggle::StatementBegin => "log_functions.log_statement_begin",
            Toggle::StatementEnd => "log_functions.log_statement_end",
        }
    }

    /// One-line help string for the option
    pub fn describe(self) -> &'static str {
        match self {
            Toggle::Declare => "Logs the start of the DECLARE block.",
            Toggle::FunctionBegin => "Logs the start of the BEGIN/END block.",
            Toggle::FunctionEnd => "Logs the end of the BEGIN/END block.",
            Toggle::StatementBegin => "Logs the start of a statement.",
            Toggle::StatementEnd => "Logs the end of a statement.",
        }
    }

    /// Documented default at process start
    pub fn default_value(self) -> bool {
        !matches!(self, Toggle::StatementBegin | Toggle::StatementEnd)
    }

    /// Look up a toggle by its qualified option name
    pub fn from_name(name: &str) -> Option<Toggle> {
        Toggle::ALL.iter().copied().find(|t| t.name() == name)
    }
}

/// The five per-category flags, read on every callback
#[derive(Debug)]
pub struct ToggleSet {
    declare: AtomicBool,
    function_begin: AtomicBool,
    function_end: AtomicBool,
    statement_begin: AtomicBool,
    statement_end: AtomicBool,
}

impl ToggleSet {
    /// All flags at their documented defaults: routine-level events on,
    /// statement-level events off
    pub const fn new() -> Self {
        Self {
            declare: AtomicBool::new(true),
            function_begin: AtomicBool::new(true),
            function_end: AtomicBool::new(true),
            statement_begin: AtomicBool::new(false),
            statement_end: AtomicBool::new(false),
        }
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        self.flag(toggle).load(Ordering::Relaxed)
    }

    pub fn set(&self, toggle: Toggle, value: bool) {
        self.flag(toggle).store(value, Ordering::Relaxed);
    }

    fn flag(&self, toggle: Toggle) -> &AtomicBool {
        match toggle {
            Toggle::Declare => &self.declare,
            Toggle::FunctionBegin => &self.function_begin,
            Toggle::FunctionEnd => &self.function_end,
            Toggle::StatementBegin => &self.statement_begin,
            Toggle::StatementEnd => &self.statement_end,
        }
    }
}

impl Default for ToggleSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let toggles = ToggleSet::new();
        for toggle in Toggle::ALL {
            assert_eq!(toggles.get(toggle), toggle.default_value(), "{:?}", toggle);
        }
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let toggles = ToggleSet::new();
        toggles.set(Toggle::StatementBegin, true);
        assert!(toggles.get(Toggle::StatementBegin));
        toggles.set(Toggle::Declare, false);
        assert!(!toggles.get(Toggle::Declare));
        // Flipping one flag leaves the others alone
        assert!(toggles.get(Toggle::FunctionBegin));
        assert!(!toggles.get(Toggle::StatementEnd));
    }

    #[test]
    fn test_from_name_resolves_every_option() {
        for toggle in Toggle::ALL {
            assert_eq!(Toggle::from_name(toggle.name()), Some(toggle));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown_options() {
        assert_eq!(Toggle::from_name("log_functions.log_everything"), None);
        assert_eq!(Toggle::from_name(""), None);
        assert_eq!(Toggle::from_name("log_declare"), None);
    }

    #[test]
    fn test_option_metadata_is_nonempty() {
        for toggle in Toggle::ALL {
            assert!(toggle.name().starts_with("log_functions."));
            assert!(!toggle.describe().is_empty());
        }
    }
}

//! Statement-kind code to label mapping
//!
//! The codes form the host interpreter's closed statement enumeration; the
//! labels are the stable uppercase vocabulary written into statement log
//! lines.

/// Kind codes of the host's statement enumeration
pub mod kind {
    pub const BLOCK: i32 = 0;
    pub const ASSIGN: i32 = 1;
    pub const IF: i32 = 2;
    pub const CASE: i32 = 3;
    pub const LOOP: i32 = 4;
    pub const WHILE: i32 = 5;
    pub const FORI: i32 = 6;
    pub const FORS: i32 = 7;
    pub const FORC: i32 = 8;
    pub const FOREACH_A: i32 = 9;
    pub const EXIT: i32 = 10;
    pub const RETURN: i32 = 11;
    pub const RETURN_NEXT: i32 = 12;
    pub const RETURN_QUERY: i32 = 13;
    pub const RAISE: i32 = 14;
    pub const ASSERT: i32 = 15;
    pub const EXECSQL: i32 = 16;
    pub const DYNEXECUTE: i32 = 17;
    pub const DYNFORS: i32 = 18;
    pub const GETDIAG: i32 = 19;
    pub const OPEN: i32 = 20;
    pub const FETCH: i32 = 21;
    pub const CLOSE: i32 = 22;
    pub const PERFORM: i32 = 23;
    pub const CALL: i32 = 24;
    pub const COMMIT: i32 = 25;
    pub const ROLLBACK: i32 = 26;
}

/// Resolve a statement-kind code to its label
///
/// Returns the label, or "unknown" for any code outside the enumeration,
/// including future host extensions. Runs on the per-statement hot path, so
/// it never allocates and never fails.
pub fn stmt_type_name(code: i32) -> &'static str {
    match code {
        kind::BLOCK => "BLOCK",
        kind::ASSIGN => "ASSIGN",
        kind::IF => "IF",
        kind::CASE => "CASE",
        kind::LOOP => "LOOP",
        kind::WHILE => "WHILE",
        kind::FORI => "FORI",
        kind::FORS => "FORS",
        kind::FORC => "FORC",
        kind::FOREACH_A => "FOREACH A",
        kind::EXIT => "EXIT",
        kind::RETURN => "RETURN",
        kind::RETURN_NEXT => "RETURN NEXT",
        kind::RETURN_QUERY => "RETURN QUERY",
        kind::RAISE => "RAISE",
        kind::ASSERT => "ASSERT",
        kind::EXECSQL => "EXEC SQL",
        kind::DYNEXECUTE => "DYNEXECUTE",
        kind::DYNFORS => "DYNFORS",
        kind::GETDIAG => "GETDIAG",
        kind::OPEN => "OPEN",
        kind::FETCH => "FETCH",
        kind::CLOSE => "CLOSE",
        kind::PERFORM => "PERFORM",
        kind::CALL => "CALL",
        kind::COMMIT => "COMMIT",
        kind::ROLLBACK => "ROLLBACK",
        _ => "unknown",
    }
}

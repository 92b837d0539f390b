//! Classification totality tests: every i32 has a label, known codes map to
//! their documented labels exactly.

use proptest::prelude::*;

use rastro::stmts::{kind, stmt_type_name};

/// Every known code with its documented label
const KNOWN: [(i32, &str); 27] = [
    (kind::BLOCK, "BLOCK"),
    (kind::ASSIGN, "ASSIGN"),
    (kind::IF, "IF"),
    (kind::CASE, "CASE"),
    (kind::LOOP, "LOOP"),
    (kind::WHILE, "WHILE"),
    (kind::FORI, "FORI"),
    (kind::FORS, "FORS"),
    (kind::FORC, "FORC"),
    (kind::FOREACH_A, "FOREACH A"),
    (kind::EXIT, "EXIT"),
    (kind::RETURN, "RETURN"),
    (kind::RETURN_NEXT, "RETURN NEXT"),
    (kind::RETURN_QUERY, "RETURN QUERY"),
    (kind::RAISE, "RAISE"),
    (kind::ASSERT, "ASSERT"),
    (kind::EXECSQL, "EXEC SQL"),
    (kind::DYNEXECUTE, "DYNEXECUTE"),
    (kind::DYNFORS, "DYNFORS"),
    (kind::GETDIAG, "GETDIAG"),
    (kind::OPEN, "OPEN"),
    (kind::FETCH, "FETCH"),
    (kind::CLOSE, "CLOSE"),
    (kind::PERFORM, "PERFORM"),
    (kind::CALL, "CALL"),
    (kind::COMMIT, "COMMIT"),
    (kind::ROLLBACK, "ROLLBACK"),
];

#[test]
fn test_every_known_code_maps_to_its_documented_label() {
    for (code, label) in KNOWN {
        assert_eq!(stmt_type_name(code), label, "code {}", code);
    }
}

#[test]
fn test_known_labels_are_distinct() {
    for (i, (_, a)) in KNOWN.iter().enumerate() {
        for (_, b) in &KNOWN[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_codes_outside_the_enumeration_fall_back() {
    for code in [-1, 27, 255, 9999, i32::MIN, i32::MAX] {
        assert_eq!(stmt_type_name(code), "unknown", "code {}", code);
    }
}

proptest! {
    #[test]
    fn prop_classification_is_total(code in any::<i32>()) {
        // Never panics, never returns an empty label
        prop_assert!(!stmt_type_name(code).is_empty());
    }

    #[test]
    fn prop_codes_above_the_enumeration_share_the_fallback(code in 27..=i32::MAX) {
        prop_assert_eq!(stmt_type_name(code), "unknown");
    }

    #[test]
    fn prop_negative_codes_share_the_fallback(code in i32::MIN..0) {
        prop_assert_eq!(stmt_type_name(code), "unknown");
    }
}

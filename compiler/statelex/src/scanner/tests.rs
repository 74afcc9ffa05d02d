use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;

const WORD: TokenType = TokenType::custom(0);
const PUNCT: TokenType = TokenType::custom(1);

fn scanner(input: &str) -> Scanner {
    Scanner::new(Arc::from(input), Sink::buffer())
}

fn values(scanner: Scanner) -> Vec<(TokenType, String)> {
    scanner
        .into_tokens()
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

// === Emission ===

#[test]
fn emit_packages_pending_span() {
    let mut s = scanner("abc def");
    s.step(3, &[]);
    s.emit(WORD);
    let tokens = s.into_tokens();
    assert_eq!(
        tokens,
        vec![Token {
            kind: WORD,
            value: "abc".to_string(),
            line: 1,
            start: 0,
            width: 3,
        }]
    );
}

#[test]
fn emit_ignore_advances_start_without_token() {
    let mut s = scanner("   x");
    s.step(3, &[]);
    s.emit(TokenType::IGNORE);
    assert_eq!(s.start(), 3);
    assert_eq!(s.emitted(), 0);
    assert!(s.into_tokens().is_empty());
}

#[test]
fn ignore_drops_pending() {
    let mut s = scanner("--x");
    s.step(2, &[]);
    s.ignore();
    assert!(!s.has_pending());
    s.next();
    assert_eq!(s.pending(), "x");
}

#[test]
fn consecutive_tokens_do_not_overlap() {
    let mut s = scanner("ab=cd");
    s.accept_run("ab", &[Hook::Emit(WORD)]);
    s.accept("=", &[Hook::Emit(PUNCT)]);
    s.accept_run("cd", &[Hook::Emit(WORD)]);
    let tokens = s.into_tokens();
    for pair in tokens.windows(2) {
        assert!(pair[1].start >= pair[0].end());
    }
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].value, "cd");
}

#[test]
fn error_builds_fail_transition() {
    let s = scanner("");
    match s.error("bad input") {
        Transition::Fail(message) => assert_eq!(message, "bad input"),
        other => panic!("expected Fail, got {other:?}"),
    }
}

#[test]
fn emit_error_uses_cursor_state() {
    let mut s = scanner("ok\n!");
    s.step(3, &[Hook::Ignore]);
    s.next();
    s.emit_error("unknown character".to_string());
    let tokens = s.into_tokens();
    assert_eq!(tokens[0].kind, TokenType::ERROR);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[0].start, 3);
    assert_eq!(tokens[0].width, 0);
    assert_eq!(tokens[0].value, "unknown character");
}

// === Hooks ===

#[test]
fn accept_runs_hooks_only_on_match() {
    let mut s = scanner("[x");
    assert!(s.accept("[", &[Hook::Emit(PUNCT)]));
    assert!(!s.accept("[", &[Hook::Emit(PUNCT)]));
    assert_eq!(values(s), vec![(PUNCT, "[".to_string())]);
}

#[test]
fn hooks_run_in_order() {
    let mut s = scanner("ab");
    s.next();
    s.next_with(&[Hook::Emit(WORD), Hook::Emit(PUNCT)]);
    // The second hook sees an empty span.
    assert_eq!(
        values(s),
        vec![(WORD, "ab".to_string()), (PUNCT, String::new())]
    );
}

#[test]
fn next_with_skips_hooks_at_eof() {
    let mut s = scanner("");
    assert_eq!(s.next_with(&[Hook::Emit(WORD)]), None);
    assert!(s.into_tokens().is_empty());
}

#[test]
fn backup_with_runs_hooks_only_when_moved() {
    let mut s = scanner("ab");
    s.next();
    s.next();
    s.backup_with(&[Hook::Emit(WORD)]);
    s.backup_with(&[Hook::Emit(PUNCT)]);
    assert_eq!(values(s), vec![(WORD, "a".to_string())]);
}

#[test]
fn step_then_ignore() {
    let mut s = scanner("--comment");
    s.step(2, &[Hook::Ignore]);
    assert_eq!(s.rest(), "comment");
    assert_eq!(s.start(), 2);
}

// === Whitespace ===

#[test]
fn accept_whitespace_stops_before_text() {
    let mut s = scanner(" \t\r\n  key");
    s.accept_whitespace(&[Hook::Ignore]);
    assert_eq!(s.rest(), "key");
    assert_eq!(s.line(), 2);
    assert!(s.into_tokens().is_empty());
}

#[test]
fn accept_whitespace_at_end_emits_eof() {
    let mut s = scanner("x  \n ");
    s.next();
    s.ignore();
    s.accept_whitespace(&[Hook::Ignore]);
    let tokens = s.into_tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenType::EOF);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[0].start, 5);
}

#[test]
fn accept_whitespace_on_empty_input_emits_eof() {
    let mut s = scanner("");
    s.accept_whitespace(&[]);
    assert_eq!(values(s), vec![(TokenType::EOF, String::new())]);
}

// === Queries ===

#[test]
fn prefix_queries() {
    let mut s = scanner("--[[x]]");
    assert!(s.starts_with("--"));
    s.step(2, &[Hook::Ignore]);
    assert!(s.starts_with("[["));
    assert!(!s.is_eof());
}

#[test]
fn line_queries_agree() {
    let mut s = scanner("a\nb\nc");
    s.step(4, &[]);
    assert_eq!(s.line(), 3);
    assert_eq!(s.line_number(), 3);
    assert_eq!(s.cursor().line(), 3);
}

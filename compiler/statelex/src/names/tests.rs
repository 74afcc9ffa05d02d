use super::*;
use pretty_assertions::assert_eq;

fn token(kind: TokenType) -> Token {
    Token {
        kind,
        value: "---".to_string(),
        line: 1,
        start: 5,
        width: 6,
    }
}

#[test]
fn reserved_baseline() {
    let names = TokenNames::reserved();
    assert_eq!(names.name(TokenType::ERROR), Some("Error"));
    assert_eq!(names.name(TokenType::IGNORE), Some("Ignore"));
    assert_eq!(names.name(TokenType::EOF), Some("EndOfFile"));
    assert_eq!(names.name(TokenType::NEWLINE), Some("Newline"));
    assert_eq!(names.name(TokenType::custom(0)), None);
    assert_eq!(names.custom_count(), 0);
}

#[test]
fn register_appends_after_reserved() {
    let mut names = TokenNames::reserved();
    let first = names.register(["Key", "Value"]);
    assert_eq!(first, TokenType::custom(0));
    assert_eq!(names.name(TokenType::custom(0)), Some("Key"));
    assert_eq!(names.name(TokenType::custom(1)), Some("Value"));
    assert_eq!(names.custom_count(), 2);
}

#[test]
fn register_twice_continues_numbering() {
    let mut names = TokenNames::reserved();
    names.register(["A"]);
    let second = names.register(["B", "C"]);
    assert_eq!(second, TokenType::custom(1));
    assert_eq!(names.name(TokenType::custom(2)), Some("C"));
}

#[test]
fn restore_returns_to_baseline() {
    let mut names = TokenNames::with_custom(["Comment"]);
    names.rename(TokenType::EOF, "End");
    names.restore();
    assert_eq!(names, TokenNames::reserved());
    assert_eq!(names.name(TokenType::custom(0)), None);
    assert_eq!(names.name(TokenType::EOF), Some("EndOfFile"));
}

#[test]
fn rename_existing_and_missing() {
    let mut names = TokenNames::with_custom(["Key"]);
    assert!(names.rename(TokenType::custom(0), "Name"));
    assert_eq!(names.name(TokenType::custom(0)), Some("Name"));
    assert!(!names.rename(TokenType::custom(5), "Nope"));
}

#[test]
fn tables_are_independent() {
    let ini = TokenNames::with_custom(["LeftBracket"]);
    let comments = TokenNames::with_custom(["Comment"]);
    let tok = token(TokenType::custom(0));
    assert_eq!(ini.display(&tok).to_string(), "[Type(LeftBracket) 1:5+6] <--->");
    assert_eq!(comments.display(&tok).to_string(), "[Type(Comment) 1:5+6] <--->");
}

#[test]
fn display_falls_back_to_number() {
    let names = TokenNames::with_custom(["Only"]);
    assert_eq!(
        names.display(&token(TokenType(7))).to_string(),
        "[Type(7) 1:5+6] <--->"
    );
}

#[test]
fn display_matches_token_display_for_reserved() {
    let names = TokenNames::reserved();
    let tok = token(TokenType::EOF);
    assert_eq!(names.display(&tok).to_string(), tok.to_string());
}

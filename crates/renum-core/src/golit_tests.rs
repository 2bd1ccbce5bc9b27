use crate::golit::{parse_int, quote, unquote};

#[test]
fn parses_decimal_and_prefixed_integers() {
    assert_eq!(parse_int("0"), Some(0));
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("0x2A"), Some(42));
    assert_eq!(parse_int("0X2a"), Some(42));
    assert_eq!(parse_int("0o52"), Some(42));
    assert_eq!(parse_int("0b101010"), Some(42));
    assert_eq!(parse_int("1_000_000"), Some(1_000_000));
    assert_eq!(parse_int("0xDEAD_BEEF"), Some(0xDEAD_BEEF));
}

#[test]
fn parses_legacy_octal() {
    assert_eq!(parse_int("0755"), Some(0o755));
    assert_eq!(parse_int("00"), Some(0));
}

#[test]
fn rejects_malformed_integers() {
    assert_eq!(parse_int(""), None);
    assert_eq!(parse_int("0x"), None);
    assert_eq!(parse_int("12ab"), None);
}

#[test]
fn quotes_plain_text_verbatim() {
    assert_eq!(quote("GET"), r#""GET""#);
    assert_eq!(quote("application/json"), r#""application/json""#);
    assert_eq!(quote(""), r#""""#);
}

#[test]
fn quotes_escapes() {
    assert_eq!(quote("a\"b"), r#""a\"b""#);
    assert_eq!(quote("a\\b"), r#""a\\b""#);
    assert_eq!(quote("line\nbreak"), r#""line\nbreak""#);
    assert_eq!(quote("\t"), r#""\t""#);
    assert_eq!(quote("\x01"), r#""\x01""#);
}

#[test]
fn unquotes_interpreted_literals() {
    assert_eq!(unquote(r#""GET""#), Some("GET".to_string()));
    assert_eq!(unquote(r#""a\"b""#), Some("a\"b".to_string()));
    assert_eq!(unquote(r#""a\nb""#), Some("a\nb".to_string()));
    assert_eq!(unquote(r#""\x41B""#), Some("AB".to_string()));
    assert_eq!(unquote(r#""\101""#), Some("A".to_string()));
}

#[test]
fn unquotes_raw_literals() {
    assert_eq!(unquote("`a\\nb`"), Some("a\\nb".to_string()));
    assert_eq!(unquote("`multi\nline`"), Some("multi\nline".to_string()));
}

#[test]
fn rejects_malformed_string_literals() {
    assert_eq!(unquote("GET"), None);
    assert_eq!(unquote(r#""unterminated"#), None);
    assert_eq!(unquote(r#""bad \q escape""#), None);
}

#[test]
fn quote_unquote_round_trip() {
    for s in ["", "plain", "with \"quotes\"", "tab\there", "mixed\\slash\n"] {
        assert_eq!(unquote(&quote(s)).as_deref(), Some(s));
    }
}

use super::Language;
use crate::domain::models::Page;

#[test]
fn it_parses_a_supported_language() {
    assert_eq!(Language::parse("rust", Page::Editor), Some(Language::Rust));
}

#[test]
fn it_rejects_an_unknown_language() {
    assert!(Language::parse("cobol", Page::Editor).is_none());
}

#[test]
fn it_rejects_text_on_the_editor_page() {
    assert!(Language::parse("text", Page::Editor).is_none());
}

#[test]
fn it_accepts_text_on_the_diff_page() {
    assert_eq!(Language::parse("text", Page::Diff), Some(Language::Text));
}

#[test]
fn it_defaults_to_json() {
    assert_eq!(Language::default(), Language::Json);
}

#[test]
fn it_uses_lowercase_wire_tags() {
    assert_eq!(Language::Csharp.to_string(), "csharp");
    assert_eq!(Language::Typescript.to_string(), "typescript");
}

#[test]
fn it_is_case_sensitive() {
    assert!(Language::parse("Rust", Page::Editor).is_none());
}

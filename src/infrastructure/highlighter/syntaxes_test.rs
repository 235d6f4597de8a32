use strum::IntoEnumIterator;
use syntect::parsing::SyntaxSet;

use super::Syntaxes;
use crate::domain::models::Language;

#[test]
fn it_resolves_rust() {
    let syntax_set = SyntaxSet::load_defaults_newlines();
    assert_eq!(Syntaxes::get(&syntax_set, Language::Rust).name, "Rust");
}

#[test]
fn it_falls_back_to_plain_text_for_the_text_tag() {
    let syntax_set = SyntaxSet::load_defaults_newlines();
    assert_eq!(Syntaxes::get(&syntax_set, Language::Text).name, "Plain Text");
}

#[test]
fn it_resolves_every_language_to_some_syntax() {
    let syntax_set = SyntaxSet::load_defaults_newlines();
    for language in Language::iter() {
        let syntax = Syntaxes::get(&syntax_set, language);
        assert!(!syntax.name.is_empty());
    }
}

#[test]
fn it_lists_the_bundled_syntaxes() {
    let syntax_set = SyntaxSet::load_defaults_newlines();
    let syntaxes = Syntaxes::list(&syntax_set);
    assert!(syntaxes.contains(&"Rust".to_string()));
}

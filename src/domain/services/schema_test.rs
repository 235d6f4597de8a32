use super::DIFF;
use super::EDITOR;
use crate::domain::models::Language;
use crate::domain::models::QueryPairs;

fn query_of(pairs: Vec<(&str, &str)>) -> QueryPairs {
    let mut query = QueryPairs::default();
    for (key, value) in pairs {
        query.push((key.to_string(), value.to_string()));
    }

    return query;
}

#[tokio::test]
async fn it_defaults_a_text_field_on_a_missing_key() {
    assert_eq!(EDITOR.code.decode(&QueryPairs::default()).await, "");
}

#[tokio::test]
async fn it_defaults_a_text_field_on_an_empty_value() {
    let query = query_of(vec![("code", "")]);
    assert_eq!(EDITOR.code.decode(&query).await, "");
}

#[tokio::test]
async fn it_defaults_a_text_field_on_a_broken_payload() {
    let query = query_of(vec![("code", "not-valid-compressed-data")]);
    assert_eq!(EDITOR.code.decode(&query).await, "");
}

#[tokio::test]
async fn it_round_trips_a_text_field() {
    let (key, payload) = EDITOR.code.encode("let x = 1;\n").await.unwrap();
    let query = query_of(vec![(key.as_str(), payload.as_str())]);
    assert_eq!(EDITOR.code.decode(&query).await, "let x = 1;\n");
}

#[test]
fn it_falls_back_on_an_unknown_language() {
    let query = query_of(vec![("lang", "cobol")]);
    assert_eq!(EDITOR.lang.decode(&query), Language::Json);
}

#[test]
fn it_scopes_text_to_the_diff_page() {
    let query = query_of(vec![("lang", "text")]);
    assert_eq!(EDITOR.lang.decode(&query), Language::Json);
    assert_eq!(DIFF.lang.decode(&query), Language::Text);
}

#[test]
fn it_defaults_a_language_field_on_a_missing_key() {
    assert_eq!(EDITOR.lang.decode(&QueryPairs::default()), Language::Json);
}

#[test]
fn it_decodes_flag_literals_only() {
    assert!(EDITOR.usetransforms.decode(&query_of(vec![("usetransforms", "true")])));
    assert!(!EDITOR.usetransforms.decode(&query_of(vec![("usetransforms", "false")])));
    assert!(!EDITOR.usetransforms.decode(&query_of(vec![("usetransforms", "TRUE")])));
    assert!(!EDITOR.usetransforms.decode(&query_of(vec![("usetransforms", "maybe")])));
    assert!(!EDITOR.usetransforms.decode(&QueryPairs::default()));
}

#[test]
fn it_encodes_flags_as_literal_strings() {
    let (key, value) = EDITOR.usetransforms.encode(true);
    assert_eq!(key, "usetransforms");
    assert_eq!(value, "true");
}

#[test]
fn it_encodes_languages_as_literal_tags() {
    let (key, value) = DIFF.lang.encode(Language::Text);
    assert_eq!(key, "lang");
    assert_eq!(value, "text");
}

use super::QueryPairs;
use super::ShareLink;
use crate::domain::models::Page;

#[test]
fn it_parses_a_full_url() {
    let link =
        ShareLink::parse("https://snippets.example.com/#/editor?lang=rust&usetransforms=true")
            .unwrap();
    assert_eq!(link.page, Page::Editor);
    assert_eq!(link.query.get("lang"), Some("rust"));
    assert_eq!(link.query.get("usetransforms"), Some("true"));
}

#[test]
fn it_parses_a_bare_fragment() {
    let link = ShareLink::parse("#/diff?lang=text").unwrap();
    assert_eq!(link.page, Page::Diff);
    assert_eq!(link.query.get("lang"), Some("text"));
}

#[test]
fn it_parses_a_route_without_a_query() {
    let link = ShareLink::parse("#/editor").unwrap();
    assert_eq!(link.page, Page::Editor);
    assert!(link.query.get("lang").is_none());
}

#[test]
fn it_rejects_an_unknown_route() {
    let res = ShareLink::parse("https://snippets.example.com/#/settings?lang=rust");
    assert!(res.is_err());
}

#[test]
fn it_rejects_a_link_without_a_fragment() {
    let res = ShareLink::parse("https://snippets.example.com/");
    assert!(res.is_err());
}

#[test]
fn it_formats_with_a_base_url() {
    let mut query = QueryPairs::default();
    query.push(("lang".to_string(), "rust".to_string()));

    let link = ShareLink::new(Page::Diff, query);
    assert_eq!(
        link.to_url("https://snippets.example.com/"),
        "https://snippets.example.com/#/diff?lang=rust"
    );
}

#[test]
fn it_round_trips_through_its_url_form() {
    let mut query = QueryPairs::default();
    query.push(("lang".to_string(), "go".to_string()));
    query.push(("usetransforms".to_string(), "false".to_string()));

    let link = ShareLink::new(Page::Editor, query);
    let res = ShareLink::parse(&link.to_url("https://snippets.example.com/")).unwrap();
    assert_eq!(res, link);
}

#[test]
fn it_keeps_query_pairs_order_irrelevant_for_lookup() {
    let query = QueryPairs::parse("usetransforms=true&lang=rust");
    assert_eq!(query.get("lang"), Some("rust"));
    assert_eq!(query.get("usetransforms"), Some("true"));
    assert!(query.get("code").is_none());
}

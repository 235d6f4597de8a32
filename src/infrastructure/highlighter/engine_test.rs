use super::HighlightEngine;

#[tokio::test]
async fn it_shares_a_single_instance_across_concurrent_first_use() {
    let (first, second) = tokio::join!(HighlightEngine::get(), HighlightEngine::get());
    let first = first.unwrap();
    let second = second.unwrap();
    assert!(std::ptr::eq(first, second));
}

#[tokio::test]
async fn it_loads_the_bundled_syntaxes() {
    let engine = HighlightEngine::get().await.unwrap();
    assert!(engine.syntax_set.find_syntax_by_token("rs").is_some());
    assert!(engine.syntax_set.find_syntax_by_token("json").is_some());
}

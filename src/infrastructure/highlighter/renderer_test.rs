use super::Renderer;
use crate::domain::models::Decoration;
use crate::domain::models::Language;

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(current) = chars.next() {
        if current == '\x1b' {
            for skipped in chars.by_ref() {
                if skipped == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(current);
    }

    return out;
}

#[tokio::test]
async fn it_renders_the_input_content() {
    let res = Renderer::render("let x = 1;\n", Language::Rust, false)
        .await
        .unwrap();
    assert_eq!(strip_ansi(&res), "let x = 1;\n");
}

#[tokio::test]
async fn it_strips_markers_when_decorations_are_enabled() {
    let res = Renderer::render("let x = 1;// [!code ++]\n", Language::Rust, true)
        .await
        .unwrap();
    assert_eq!(strip_ansi(&res), "let x = 1;\n");
    assert!(res.contains(Decoration::Added.background()));
}

#[tokio::test]
async fn it_keeps_markers_literal_when_decorations_are_disabled() {
    let res = Renderer::render("let x = 1;// [!code ++]\n", Language::Rust, false)
        .await
        .unwrap();
    assert_eq!(strip_ansi(&res), "let x = 1;// [!code ++]\n");
    assert!(!res.contains(Decoration::Added.background()));
}

#[tokio::test]
async fn it_renders_a_line_without_a_trailing_newline() {
    let res = Renderer::render("let x = 1;", Language::Rust, false)
        .await
        .unwrap();
    assert_eq!(strip_ansi(&res), "let x = 1;");
}

#[tokio::test]
async fn it_renders_each_decoration_kind() {
    let text = "a// [!code --]\nb// [!code highlight]\nc// [!code warning]\n";
    let res = Renderer::render(text, Language::Text, true).await.unwrap();
    assert_eq!(strip_ansi(&res), "a\nb\nc\n");
    assert!(res.contains(Decoration::Removed.background()));
    assert!(res.contains(Decoration::Highlighted.background()));
    assert!(res.contains(Decoration::Warning.background()));
}

#[tokio::test]
async fn it_degrades_to_raw_text_instead_of_failing() {
    let res = Renderer::render_or_raw("let x = 1;\n", Language::Rust, false).await;
    assert!(!res.is_empty());
}

#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;

use anyhow::Result;
use syntect::easy::HighlightLines;
use syntect::util::as_24_bit_terminal_escaped;
use syntect::util::LinesWithEndings;

use super::HighlightEngine;
use super::Syntaxes;
use crate::domain::models::Decoration;
use crate::domain::models::Language;

const RESET: &str = "\x1b[0m";

pub struct Renderer {}

impl Renderer {
    /// Renders text as 24-bit ANSI terminal markup. With decorations
    /// enabled, trailing markers are stripped from each line and drawn as
    /// background decorations; disabled, they stay literal text.
    pub async fn render(
        text: &str,
        language: Language,
        decorations_enabled: bool,
    ) -> Result<String> {
        let engine = HighlightEngine::get().await?;
        let syntax = Syntaxes::get(&engine.syntax_set, language);
        let mut highlight = HighlightLines::new(syntax, &engine.theme);
        let mut out = String::new();

        for line in LinesWithEndings::from(text) {
            let (content, has_newline) = match line.strip_suffix('\n') {
                Some(content) => (content, true),
                None => (line, false),
            };

            let (content, decoration) = if decorations_enabled {
                Decoration::split_line(content)
            } else {
                (content, None)
            };

            let rebuilt = format!("{content}\n");
            let ranges = highlight.highlight_line(&rebuilt, &engine.syntax_set)?;
            let escaped = as_24_bit_terminal_escaped(&ranges, false);
            let escaped = escaped.strip_suffix('\n').unwrap_or(&escaped);

            if let Some(decoration) = decoration {
                out.push_str(decoration.background());
                out.push_str(escaped);
                out.push_str(RESET);
            } else {
                out.push_str(escaped);
            }

            if has_newline {
                out.push('\n');
            }
        }

        out.push_str(RESET);

        return Ok(out);
    }

    /// Raw-text fallback keeping the output usable when the engine cannot
    /// start, e.g. a missing theme file.
    pub async fn render_or_raw(text: &str, language: Language, decorations_enabled: bool) -> String {
        match Renderer::render(text, language, decorations_enabled).await {
            Ok(rendered) => return rendered,
            Err(err) => {
                tracing::warn!(err = ?err, "highlighting unavailable, falling back to raw text");
                return text.to_string();
            },
        }
    }
}

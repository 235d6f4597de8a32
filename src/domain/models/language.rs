#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Page;

/// Closed set of language tags a share link may carry. `Text` is only
/// valid on the diff page; everything else is valid on both.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Astro,
    Csharp,
    Css,
    Dotenv,
    Go,
    Html,
    Javascript,
    #[default]
    Json,
    Jsx,
    Rust,
    Scss,
    Sql,
    Tsx,
    Typescript,
    Text,
}

impl Language {
    pub fn parse(text: &str, page: Page) -> Option<Language> {
        return Language::iter().find(|e| return e.to_string() == text && e.allowed_on(page));
    }

    pub fn allowed_on(&self, page: Page) -> bool {
        if *self == Language::Text {
            return page == Page::Diff;
        }

        return true;
    }

    /// Lookup tokens tried in order against the syntax set. An empty list
    /// resolves straight to plain text.
    pub fn tokens(&self) -> Vec<&'static str> {
        let res = match self {
            Language::Astro => vec!["astro", "html"],
            Language::Csharp => vec!["cs", "csharp"],
            Language::Css => vec!["css"],
            Language::Dotenv => vec!["env", "sh"],
            Language::Go => vec!["go"],
            Language::Html => vec!["html"],
            Language::Javascript => vec!["js", "javascript"],
            Language::Json => vec!["json"],
            Language::Jsx => vec!["jsx", "js"],
            Language::Rust => vec!["rs", "rust"],
            Language::Scss => vec!["scss", "css"],
            Language::Sql => vec!["sql"],
            Language::Tsx => vec!["tsx", "ts", "js"],
            Language::Typescript => vec!["ts", "typescript"],
            Language::Text => vec![],
        };

        return res;
    }
}

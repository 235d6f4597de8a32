#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;

use anyhow::Result;

use super::Compression;
use crate::domain::models::Language;
use crate::domain::models::Page;
use crate::domain::models::QueryPairs;

/// Free-text field carried as a compressed, URL-safe payload. A missing
/// key and a broken payload both resolve to an empty document; a shared
/// link that was truncated or hand-edited must degrade, not fail.
pub struct TextField {
    pub key: &'static str,
}

impl TextField {
    pub async fn decode(&self, query: &QueryPairs) -> String {
        let raw = match query.get(self.key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return "".to_string(),
        };

        match Compression::decompress(raw).await {
            Ok(text) => return text,
            Err(err) => {
                tracing::debug!(key = self.key, err = ?err, "discarding undecodable text field");
                return "".to_string();
            },
        }
    }

    pub async fn encode(&self, text: &str) -> Result<(String, String)> {
        return Ok((self.key.to_string(), Compression::compress(text).await?));
    }
}

/// Language tag checked against the closed set allowed on a page.
/// Anything out of set silently becomes json.
pub struct LanguageField {
    pub key: &'static str,
    pub page: Page,
}

impl LanguageField {
    pub fn decode(&self, query: &QueryPairs) -> Language {
        return query
            .get(self.key)
            .and_then(|raw| return Language::parse(raw, self.page))
            .unwrap_or_default();
    }

    pub fn encode(&self, language: Language) -> (String, String) {
        return (self.key.to_string(), language.to_string());
    }
}

/// Boolean toggle carried as the literal strings "true"/"false". Anything
/// else is false.
pub struct FlagField {
    pub key: &'static str,
}

impl FlagField {
    pub fn decode(&self, query: &QueryPairs) -> bool {
        return query.get(self.key) == Some("true");
    }

    pub fn encode(&self, value: bool) -> (String, String) {
        return (self.key.to_string(), value.to_string());
    }
}

pub struct EditorSchema {
    pub code: TextField,
    pub lang: LanguageField,
    pub usetransforms: FlagField,
}

pub struct DiffSchema {
    pub codeold: TextField,
    pub codenew: TextField,
    pub lang: LanguageField,
}

pub const EDITOR: EditorSchema = EditorSchema {
    code: TextField { key: "code" },
    lang: LanguageField {
        key: "lang",
        page: Page::Editor,
    },
    usetransforms: FlagField {
        key: "usetransforms",
    },
};

pub const DIFF: DiffSchema = DiffSchema {
    codeold: TextField { key: "codeold" },
    codenew: TextField { key: "codenew" },
    lang: LanguageField {
        key: "lang",
        page: Page::Diff,
    },
};

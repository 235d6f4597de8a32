#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;

use anyhow::Result;
use syntect::highlighting::Theme;
use syntect::parsing::SyntaxSet;
use tokio::sync::OnceCell;
use tokio::task;

use super::Themes;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

static ENGINE: OnceCell<HighlightEngine> = OnceCell::const_new();

/// Process-wide syntect engine. Loading the bundled syntax definitions is
/// not cheap, so the engine initializes at most once; concurrent first
/// use shares the single in-flight initialization.
pub struct HighlightEngine {
    pub syntax_set: SyntaxSet,
    pub theme: Theme,
}

impl HighlightEngine {
    pub async fn get() -> Result<&'static HighlightEngine> {
        return ENGINE
            .get_or_try_init(|| {
                return async {
                    return task::spawn_blocking(|| {
                        let syntax_set = SyntaxSet::load_defaults_newlines();
                        let theme = Themes::get(
                            &Config::get(ConfigKey::Theme),
                            &Config::get(ConfigKey::ThemeFile),
                        )?;

                        return Ok(HighlightEngine { syntax_set, theme });
                    })
                    .await?;
                };
            })
            .await;
    }
}

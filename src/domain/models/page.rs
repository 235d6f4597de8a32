use strum::EnumIter;
use strum::IntoEnumIterator;

/// Route discriminator of a share link. Each page owns its own set of
/// query fields and allowed languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    Editor,
    Diff,
}

impl Page {
    pub fn parse(text: &str) -> Option<Page> {
        return Page::iter().find(|e| return e.to_string() == text);
    }
}

#[cfg(test)]
#[path = "decoration_test.rs"]
mod tests;

use strum::EnumIter;
use strum::IntoEnumIterator;

/// Inline line decoration directive. Written as a trailing marker in the
/// text stream; the highlighter strips it and renders the line with the
/// matching decoration instead of printing the marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Decoration {
    Added,
    Removed,
    Highlighted,
    Focused,
    Error,
    Warning,
}

impl Decoration {
    pub fn marker(&self) -> &'static str {
        let res = match self {
            Decoration::Added => "// [!code ++]",
            Decoration::Removed => "// [!code --]",
            Decoration::Highlighted => "// [!code highlight]",
            Decoration::Focused => "// [!code focus]",
            Decoration::Error => "// [!code error]",
            Decoration::Warning => "// [!code warning]",
        };

        return res;
    }

    /// ANSI background painted over the line when the decoration renders.
    pub fn background(&self) -> &'static str {
        let res = match self {
            Decoration::Added => "\x1b[48;2;20;60;31m",
            Decoration::Removed => "\x1b[48;2;74;26;26m",
            Decoration::Highlighted => "\x1b[48;2;44;44;66m",
            Decoration::Focused => "\x1b[48;2;38;38;38m",
            Decoration::Error => "\x1b[48;2;84;20;20m",
            Decoration::Warning => "\x1b[48;2;84;68;10m",
        };

        return res;
    }

    /// Splits a line (without its newline) into content and trailing
    /// decoration, if one is present. Markers are appended directly after
    /// line content, so only a bare suffix match counts.
    pub fn split_line(line: &str) -> (&str, Option<Decoration>) {
        for decoration in Decoration::iter() {
            if let Some(content) = line.strip_suffix(decoration.marker()) {
                return (content, Some(decoration));
            }
        }

        return (line, None);
    }
}

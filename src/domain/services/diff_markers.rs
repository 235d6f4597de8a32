#[cfg(test)]
#[path = "diff_markers_test.rs"]
mod tests;

use similar::ChangeTag;
use similar::TextDiff;

use crate::domain::models::Decoration;

pub struct DiffMarkers {}

impl DiffMarkers {
    /// Folds two documents into a single text stream where every changed
    /// line carries a trailing insertion or deletion marker. Unchanged
    /// lines pass through verbatim. Blank lines are never marked: a
    /// decoration directive cannot attach to an empty line.
    pub fn annotate(old_text: &str, new_text: &str) -> String {
        let diff = TextDiff::from_lines(old_text, new_text);
        let mut out = String::new();

        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Equal => out.push_str(change.value()),
                ChangeTag::Delete => DiffMarkers::push_marked(&mut out, change.value(), Decoration::Removed),
                ChangeTag::Insert => DiffMarkers::push_marked(&mut out, change.value(), Decoration::Added),
            }
        }

        return out.trim().to_string();
    }

    // Marked lines always terminate with a newline, normalizing a final
    // diff line that lacks one. The trailing trim in annotate drops the
    // last one again.
    fn push_marked(out: &mut String, line: &str, decoration: Decoration) {
        let content = line.strip_suffix('\n').unwrap_or(line);
        out.push_str(content);
        if !content.is_empty() {
            out.push_str(decoration.marker());
        }
        out.push('\n');
    }
}

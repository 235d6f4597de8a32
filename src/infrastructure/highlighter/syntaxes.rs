#[cfg(test)]
#[path = "syntaxes_test.rs"]
mod tests;

use syntect::parsing::SyntaxReference;
use syntect::parsing::SyntaxSet;

use crate::domain::models::Language;

pub struct Syntaxes {}

impl Syntaxes {
    /// Resolves a language tag to a syntax definition, falling back to
    /// plain text when the bundled set has nothing usable.
    pub fn get<'a>(syntax_set: &'a SyntaxSet, language: Language) -> &'a SyntaxReference {
        for token in language.tokens() {
            if let Some(syntax) = syntax_set.find_syntax_by_token(token) {
                return syntax;
            }
        }

        return syntax_set.find_syntax_plain_text();
    }

    pub fn list(syntax_set: &SyntaxSet) -> Vec<String> {
        let mut syntaxes = syntax_set
            .syntaxes()
            .iter()
            .map(|e| return e.name.to_string())
            .collect::<Vec<String>>();
        syntaxes.sort();

        return syntaxes;
    }
}

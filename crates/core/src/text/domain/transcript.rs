use super::dictionary::Dictionary;
use crate::shared::sign::Sign;

/// Accumulating text fed by committed signs and manual edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn append_sign(&mut self, sign: Sign) {
        self.text.push_str(sign.as_str());
    }

    pub fn add_space(&mut self) {
        self.text.push(' ');
    }

    /// Removes the last `char`, so multi-byte glyphs go in one step.
    pub fn delete_last_char(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Text after the last space; empty right after a space.
    pub fn trailing_word(&self) -> &str {
        self.text.rsplit(' ').next().unwrap_or("")
    }

    pub fn suggestions<'d>(&self, dictionary: &'d Dictionary, max: usize) -> Vec<&'d str> {
        dictionary.suggest(self.trailing_word(), max)
    }

    /// Replaces the trailing partial word with `word` and a space.
    pub fn apply_suggestion(&mut self, word: &str) {
        let keep = self.text.len() - self.trailing_word().len();
        self.text.truncate(keep);
        self.text.push_str(word);
        self.text.push(' ');
    }
}

use std::fs;
use std::path::Path;

/// Common English words offered as completions by default.
pub const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on", "with",
    "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
    "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
    "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
    "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
    "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
    "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even",
    "new", "want", "because", "any", "these", "give", "day", "most", "us", "hello", "help",
    "please", "sorry", "thanks", "yes", "friend", "family", "learn", "sign", "language", "awesome",
    "cool", "world", "love", "peace", "create", "detect", "computer",
];

/// Fixed word list for prefix completion.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Words are stored lowercased, matching how `suggest` treats the prefix.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(Into::into)
                .map(|w: String| w.to_lowercase())
                .collect(),
        }
    }

    /// Newline-separated word list; blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        ))
    }

    /// Up to `max` words that extend `prefix` (lowercased), shortest first.
    ///
    /// Exact matches are excluded. Words of equal length keep dictionary
    /// order. An empty prefix suggests nothing.
    pub fn suggest(&self, prefix: &str, max: usize) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        let mut matches: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|w| w.starts_with(&prefix) && *w != prefix)
            .collect();
        matches.sort_by_key(|w| w.chars().count());
        matches.truncate(max);
        matches
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(COMMON_WORDS.iter().copied())
    }
}

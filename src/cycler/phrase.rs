//! Phrase: a string indexed by grapheme cluster.

use unicode_segmentation::UnicodeSegmentation;

/// A phrase with precomputed grapheme boundaries, so growing and shrinking
/// the visible prefix never splits a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Phrase {
    text: String,
    /// Byte offset just past each grapheme.
    ends: Vec<usize>,
}

impl Phrase {
    pub(crate) fn new(text: String) -> Self {
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Self { text, ends }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in graphemes.
    pub(crate) fn len(&self) -> usize {
        self.ends.len()
    }

    /// The first `n` graphemes (clipped to the phrase length).
    pub(crate) fn head(&self, n: usize) -> &str {
        match n.min(self.ends.len()) {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_ascii() {
        let phrase = Phrase::new("OSINT".to_string());
        assert_eq!(phrase.len(), 5);
        assert_eq!(phrase.head(0), "");
        assert_eq!(phrase.head(3), "OSI");
        assert_eq!(phrase.head(9), "OSINT");
    }

    #[test]
    fn test_head_keeps_clusters_whole() {
        // "e" + combining acute, then a skin-toned thumbs up
        let phrase = Phrase::new("e\u{301}👍🏽!".to_string());
        assert_eq!(phrase.len(), 3);
        assert_eq!(phrase.head(1), "e\u{301}");
        assert_eq!(phrase.head(2), "e\u{301}👍🏽");
    }

    #[test]
    fn test_empty_phrase() {
        let phrase = Phrase::new(String::new());
        assert_eq!(phrase.len(), 0);
        assert_eq!(phrase.head(1), "");
    }
}

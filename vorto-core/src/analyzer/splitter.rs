//! Sentence Splitter Module
//!
//! Splits a normalized sentence value into the word candidates that get
//! classified one by one. It is the second stage of the pipeline, taking
//! text that already went through [`TextNormalizer`](super::TextNormalizer).
//!
//! ## What It Does
//!
//! Given normalized input like `"la vivo en la jaro"`, it emits each piece
//! with its position in the sentence:
//!
//! ```ignore
//! ("la", 0)
//! ("vivo", 1)
//! ("en", 2)
//! ("la", 3)
//! ("jaro", 4)
//! ```
//!
//! Pieces that still carry characters outside the token alphabet are
//! cleaned before emission; pieces that end up empty are skipped and do not
//! consume a position.
//!
//! ## The Input Contract
//!
//! The splitter expects **pre-normalized** input:
//! - No leading or trailing spaces
//! - No consecutive spaces between words
//!
//! Violations panic in debug builds.

use std::borrow::Cow;

use memchr::memchr_iter;

use super::normalizer::is_token_char;

/// Splits normalized text on U+0020 spaces.
///
/// ## Example
///
/// ```
/// use vorto_core::analyzer::SentenceSplitter;
///
/// let mut words = Vec::new();
/// SentenceSplitter::new().split("ĉu vi vidas", |word, pos| {
///     words.push((word.into_owned(), pos));
/// });
///
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[2], ("vidas".to_string(), 2));
/// ```
///
/// ## How It Works
///
/// A single forward scan for the ASCII space byte. The space is never a
/// UTF-8 continuation byte, so every piece is a valid `&str` slice of the
/// input and is borrowed unless it needs cleaning.
#[derive(Debug, Default, Copy, Clone)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Creates a new splitter.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Splits normalized input and emits `(word, position)`.
    pub fn split<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(Cow<'n, str>, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "splitter: leading space: normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "splitter: trailing space: normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "splitter: consecutive spaces: normalizer contract violated"
        );

        let mut pos = 0u32;
        let mut emit_piece = |piece: &'n str| {
            let word = clean(piece);
            if !word.is_empty() {
                emit(word, pos);
                pos = pos.saturating_add(1);
            }
        };

        let mut start = 0usize;
        for i in memchr_iter(b' ', bytes) {
            if start < i {
                emit_piece(&normalized[start..i]);
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit_piece(&normalized[start..]);
        }
    }

    /// Collects the pieces into owned strings, in order.
    pub fn split_to_vec(&self, normalized: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.split(normalized, |word, _| out.push(word.into_owned()));
        out
    }
}

/// Strips every character that is not a letter or digit.
#[inline]
fn clean(piece: &str) -> Cow<'_, str> {
    if piece.chars().all(is_token_char) {
        Cow::Borrowed(piece)
    } else {
        Cow::Owned(piece.chars().filter(|&c| is_token_char(c)).collect())
    }
}

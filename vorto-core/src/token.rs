//! The classification entity.
//!
//! A [`Token`] owns one normalized string. Construction is the only place
//! normalization happens; afterwards the text never changes. A token whose
//! text contains a space is a sentence value: it is never classified as a
//! whole, and instead carries one child token per word.

use core::fmt;

use tracing::debug;
use vorto_types::{Mode, TokenKind, VortoError};

use crate::analyzer::{SentenceSplitter, TextNormalizer, PUNCTUATION};
use crate::classify::{Analysis, Classifier, Description};

/// A normalized Esperanto word or sentence.
///
/// # Example
///
/// ```
/// use vorto_core::Token;
/// use vorto_types::TokenKind;
///
/// let token = Token::new("Hundo!");
/// assert_eq!(token.to_string(), "hundo");
/// assert_eq!(token.kind(), TokenKind::Word);
///
/// let labels = token.describe("description").unwrap();
/// assert_eq!(labels.labels(), Some(&["singular", "noun"][..]));
///
/// assert!(token.describe("x").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    words: Vec<Token>,
}

impl Token {
    /// Normalizes `raw` and, for sentence values, builds the child tokens.
    pub fn new(raw: &str) -> Self {
        let text = TextNormalizer::new().normalize(raw);

        let mut words = Vec::new();
        if text.contains(' ') {
            SentenceSplitter::new().split(&text, |word, _| words.push(Token::new(&word)));
            debug!(words = words.len(), "split sentence");
        }

        Self { text, words }
    }

    /// The normalized text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child tokens of a sentence value; empty for anything else.
    #[inline]
    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// A single non-empty token without spaces.
    #[inline]
    pub fn is_word(&self) -> bool {
        !self.text.contains(' ') && !self.is_empty()
    }

    /// Contains at least one space.
    #[inline]
    pub fn is_sentence(&self) -> bool {
        self.text.contains(' ')
    }

    /// Non-empty and made only of digits, spaces and number punctuation.
    pub fn is_number(&self) -> bool {
        !self.text.is_empty()
            && self
                .text
                .chars()
                .all(|c| c.is_ascii_digit() || c == ' ' || PUNCTUATION.contains(c))
    }

    /// Nothing survived normalization.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The type tag, by predicate priority word, sentence, number, empty.
    pub fn kind(&self) -> TokenKind {
        if self.is_word() {
            TokenKind::Word
        } else if self.is_sentence() {
            TokenKind::Sentence
        } else if self.is_number() {
            TokenKind::Number
        } else if self.is_empty() {
            TokenKind::Empty
        } else {
            TokenKind::Special
        }
    }

    /// Runs the classifier and returns both outputs.
    ///
    /// Anything that is not a word gets [`Analysis::non_word`] without
    /// running the cascade.
    pub fn analyze(&self) -> Analysis {
        if self.is_word() {
            Classifier::new().classify(&self.text)
        } else {
            Analysis::non_word()
        }
    }

    /// Classifies the token and returns the output named by `mode`:
    /// `"description"`, `"vector"` or `"both"`.
    ///
    /// # Errors
    ///
    /// Returns [`VortoError::InvalidMode`] for any other mode, before any
    /// classification work is done.
    pub fn describe(&self, mode: &str) -> Result<Description, VortoError> {
        let mode: Mode = mode.parse()?;
        Ok(self.describe_with(mode))
    }

    /// Typed variant of [`Token::describe`].
    #[inline]
    pub fn describe_with(&self, mode: Mode) -> Description {
        self.analyze().select(mode)
    }

    /// Analyses every child word of a sentence value, in input order.
    pub fn analyze_words(&self) -> Vec<Analysis> {
        self.words.iter().map(Token::analyze).collect()
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?}, kind={})", self.text, self.kind())
    }
}

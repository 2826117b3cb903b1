//! Text analysis pipeline.
//!
//! This module provides the text processing components that run before
//! classification:
//! - **Normalizer**: Lowercases raw text and filters it to the Esperanto alphabet
//! - **Splitter**: Splits normalized sentences into word candidates

pub mod normalizer;
pub mod splitter;

pub use normalizer::{is_token_char, TextNormalizer, ALPHABET, PUNCTUATION};
pub use splitter::SentenceSplitter;

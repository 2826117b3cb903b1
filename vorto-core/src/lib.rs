//! Deterministic Esperanto token classifier.
//!
//! Raw text goes through a fixed pipeline:
//!
//! ```text
//! raw ─▶ TextNormalizer ─▶ Token ─┬─ word ─────▶ Classifier ─▶ Analysis
//!                                 └─ sentence ─▶ SentenceSplitter ─▶ Token per word
//! ```
//!
//! Every word yields human-readable labels and a 95-slot feature vector
//! whose layout is defined in [`vorto_types::layout`]. No statistics, no
//! context: the same word always produces the same output.
//!
//! # Example
//!
//! ```
//! use vorto_core::Token;
//!
//! let sentence = Token::new("Li vivas apud la maro.");
//! for (word, analysis) in sentence.words().iter().zip(sentence.analyze_words()) {
//!     println!("{word}: {:?}", analysis.labels);
//! }
//! ```

pub mod analyzer;
pub mod classify;
pub mod lexicon;
mod token;

pub use classify::{Analysis, Classifier, Description};
pub use token::Token;
pub use vorto_types::{FeatureVector, Mode, TokenKind, VortoError};

//! Core types shared by the Vorto Esperanto classifier.
//!
//! This crate provides the vocabulary every consumer of the classifier
//! agrees on. Keeping it separate ensures:
//!
//! - **Stable layout**: the feature vector's slot positions live in one place
//! - **Cross-crate compatibility**: the engine and its callers share the same types
//! - **Clean boundaries**: no lexicon data or classification logic leaks in here

#![warn(missing_docs)]

use core::fmt;
use core::ops::Index;
use core::str::FromStr;

pub use layout::LEN;

/// The literal type tag of a normalized token.
///
/// Tags are evaluated in declaration order: the first predicate that holds
/// wins, so a digit-only token with no spaces is still a [`TokenKind::Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// A single non-empty token without spaces.
    Word = 0,
    /// Several space-separated tokens.
    Sentence = 1,
    /// Digits and punctuation only.
    Number = 2,
    /// Nothing left after normalization.
    Empty = 3,
    /// Anything else.
    Special = 4,
}

impl TokenKind {
    /// Returns the literal tag for this kind.
    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Sentence => "sentence",
            TokenKind::Number => "number",
            TokenKind::Empty => "empty",
            TokenKind::Special => "special",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which output `describe` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The list of human-readable labels.
    #[default]
    Description,
    /// The fixed-length feature vector.
    Vector,
    /// Labels and vector, in that order.
    Both,
}

impl Mode {
    /// Returns the literal name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Description => "description",
            Mode::Vector => "vector",
            Mode::Both => "both",
        }
    }
}

impl FromStr for Mode {
    type Err = VortoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(Mode::Description),
            "vector" => Ok(Mode::Vector),
            "both" => Ok(Mode::Both),
            other => Err(VortoError::InvalidMode {
                mode: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the classifier's public entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VortoError {
    /// `describe` was called with a mode other than the three accepted ones.
    #[error("invalid describe mode {mode:?}: expected \"description\", \"vector\" or \"both\"")]
    InvalidMode {
        /// The rejected mode string.
        mode: String,
    },
}

/// Positional layout of the feature vector.
///
/// Slot positions are an external compatibility contract: consumers that
/// stored vectors depend on every offset below. Groups appear in the vector
/// in the order of [`Group::ALL`].
pub mod layout {
    /// A named, contiguous slice of the feature vector.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(u8)]
    pub enum Group {
        /// Closed-class preposition flag.
        Preposition = 0,
        /// Table-word (correlative) group flag.
        TableWord,
        /// Table-word prefix, one-hot.
        TablePrefix,
        /// Table-word ending, one-hot.
        TableEnding,
        /// Closed-class conjunction flag.
        Conjunction,
        /// Closed-class subordinating conjunction flag.
        SubordinatingConjunction,
        /// Closed-class particle flag.
        Particle,
        /// Numeral flag.
        Numeral,
        /// A trailing accusative `n` was stripped.
        Accusative,
        /// A trailing plural `j` was stripped.
        Plural,
        /// Pronoun kind: `[personal, possessive]`.
        Pronoun,
        /// Grammatical ending, multi-hot.
        Ending,
        /// Word-building prefix, multi-hot.
        Prefix,
        /// Word-building suffix, multi-hot.
        Suffix,
        /// No closed class and no grammatical ending matched.
        Incorrect,
    }

    impl Group {
        /// Every group, in vector order.
        pub const ALL: [Group; 15] = [
            Group::Preposition,
            Group::TableWord,
            Group::TablePrefix,
            Group::TableEnding,
            Group::Conjunction,
            Group::SubordinatingConjunction,
            Group::Particle,
            Group::Numeral,
            Group::Accusative,
            Group::Plural,
            Group::Pronoun,
            Group::Ending,
            Group::Prefix,
            Group::Suffix,
            Group::Incorrect,
        ];

        /// Groups of which at most one may be set for any token.
        pub const EXCLUSIVE: [Group; 6] = [
            Group::Preposition,
            Group::TableWord,
            Group::Conjunction,
            Group::SubordinatingConjunction,
            Group::Particle,
            Group::Numeral,
        ];

        /// Number of slots this group occupies.
        #[inline(always)]
        pub const fn width(self) -> usize {
            match self {
                Group::TablePrefix => 5,
                Group::TableEnding => 9,
                Group::Pronoun => 2,
                Group::Ending => 9,
                Group::Prefix => 10,
                Group::Suffix => 51,
                _ => 1,
            }
        }

        /// Index of the group's first slot.
        pub const fn offset(self) -> usize {
            let mut offset = 0;
            let mut i = 0;
            while i < Self::ALL.len() {
                if Self::ALL[i] as u8 == self as u8 {
                    break;
                }
                offset += Self::ALL[i].width();
                i += 1;
            }
            offset
        }

        /// Slot range covered by this group.
        #[inline(always)]
        pub const fn range(self) -> core::ops::Range<usize> {
            self.offset()..self.offset() + self.width()
        }
    }

    /// Total vector length.
    pub const LEN: usize = Group::Incorrect.offset() + Group::Incorrect.width();

    /// Position of the trailing `is_incorrect` bit.
    pub const INCORRECT: usize = Group::Incorrect.offset();

    const _: () = assert!(LEN == 95);
}

use layout::Group;

/// A fixed-length vector of 0/1 features, one per layout slot.
///
/// Built by the encoder; read-only for everyone else except through
/// [`FeatureVector::set`].
#[derive(Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; LEN]);

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl FeatureVector {
    /// Number of slots.
    pub const LEN: usize = LEN;

    /// A vector with every slot cleared.
    #[inline(always)]
    pub const fn zeroed() -> Self {
        Self([0.0; LEN])
    }

    /// The reserved vector for inputs that are not words: all zero except the
    /// final `is_incorrect` slot.
    pub const fn non_word() -> Self {
        let mut slots = [0.0; LEN];
        slots[layout::INCORRECT] = 1.0;
        Self(slots)
    }

    /// Sets one slot to 1.
    ///
    /// Panics if `index` is out of range.
    #[inline(always)]
    pub fn set(&mut self, index: usize) {
        self.0[index] = 1.0;
    }

    /// Returns `true` if the slot holds 1.
    #[inline(always)]
    pub fn is_set(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|&v| v == 1.0)
    }

    /// Number of slots; always [`LEN`].
    #[inline(always)]
    pub const fn len(&self) -> usize {
        LEN
    }

    /// Always `false`: every vector carries the full layout.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        LEN == 0
    }

    /// All slots as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// The slots belonging to one group.
    #[inline(always)]
    pub fn group(&self, group: Group) -> &[f32] {
        &self.0[group.range()]
    }

    /// Returns `true` if no slot of the group is set.
    pub fn group_is_zero(&self, group: Group) -> bool {
        self.group(group).iter().all(|&v| v == 0.0)
    }

    /// Number of set slots.
    pub fn ones(&self) -> usize {
        self.0.iter().filter(|&&v| v == 1.0).count()
    }

}

impl Index<usize> for FeatureVector {
    type Output = f32;

    #[inline(always)]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl From<FeatureVector> for [f32; LEN] {
    fn from(v: FeatureVector) -> Self {
        v.0
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &v in &self.0 {
            f.write_str(if v == 1.0 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureVector({})", self)
    }
}

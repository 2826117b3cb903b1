//! Word classification.
//!
//! This module turns one normalized word into its labels and feature
//! vector:
//! - **Cascade**: ordered closed-class tests followed by the affix fallback
//! - **Encoder**: writes labels and vector slots together at each decision
//!
//! Both outputs are always produced in one pass; callers pick what they
//! need afterwards with [`Analysis::select`].

mod cascade;
mod encoder;

pub use cascade::Classifier;

use smallvec::SmallVec;
use vorto_types::layout::INCORRECT;
use vorto_types::{FeatureVector, Mode};

/// Labels emitted for one word, in test order.
pub type Labels = SmallVec<[&'static str; 8]>;

/// Both outputs of classifying one token.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Human-readable category and affix labels.
    pub labels: Labels,
    /// The 95-slot feature vector.
    pub vector: FeatureVector,
}

impl Analysis {
    /// The reserved result for inputs that are not words.
    pub fn non_word() -> Self {
        Self {
            labels: Labels::new(),
            vector: FeatureVector::non_word(),
        }
    }

    /// Returns `true` if the `is_incorrect` slot is set.
    #[inline]
    pub fn is_incorrect(&self) -> bool {
        self.vector.is_set(INCORRECT)
    }

    /// Keeps only the output requested by `mode`.
    pub fn select(self, mode: Mode) -> Description {
        match mode {
            Mode::Description => Description::Labels(self.labels.into_vec()),
            Mode::Vector => Description::Vector(self.vector),
            Mode::Both => Description::Both(self.labels.into_vec(), self.vector),
        }
    }
}

/// What `describe` returns for each [`Mode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    /// `Mode::Description`
    Labels(Vec<&'static str>),
    /// `Mode::Vector`
    Vector(FeatureVector),
    /// `Mode::Both`, labels first.
    Both(Vec<&'static str>, FeatureVector),
}

impl Description {
    /// The labels, if this mode carries them.
    pub fn labels(&self) -> Option<&[&'static str]> {
        match self {
            Description::Labels(labels) | Description::Both(labels, _) => Some(labels.as_slice()),
            Description::Vector(_) => None,
        }
    }

    /// The vector, if this mode carries it.
    pub fn vector(&self) -> Option<&FeatureVector> {
        match self {
            Description::Vector(vector) | Description::Both(_, vector) => Some(vector),
            Description::Labels(_) => None,
        }
    }
}

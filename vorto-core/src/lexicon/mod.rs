//! Static Esperanto lexicon.
//!
//! Two kinds of data live here:
//! - **Ordered affix tables** ([`ENDINGS`], [`PREFIXES`], [`SUFFIXES`],
//!   [`TABLE_PREFIXES`], [`TABLE_ENDINGS`]): index `i` of a table is bit `i`
//!   of its vector group.
//! - **Closed classes** (prepositions, conjunctions, particles, numerals,
//!   pronouns): membership only, looked up through hash sets built once per
//!   process and shared by reference.

mod tables;

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

pub use tables::*;

/// An affix form paired with its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    /// The affix as it appears in normalized text.
    pub form: &'static str,
    /// Description emitted when the affix matches.
    pub label: &'static str,
}

impl Affix {
    /// Creates a new table entry.
    #[inline(always)]
    pub const fn new(form: &'static str, label: &'static str) -> Self {
        Self { form, label }
    }
}

/// Closed-class membership sets.
pub struct Lexicon {
    prepositions: FxHashSet<&'static str>,
    conjunctions: FxHashSet<&'static str>,
    subordinating_conjunctions: FxHashSet<&'static str>,
    particles: FxHashSet<&'static str>,
    numerals: FxHashSet<&'static str>,
    pronouns: FxHashSet<&'static str>,
}

static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

fn set(words: &'static [&'static str]) -> FxHashSet<&'static str> {
    words.iter().copied().collect()
}

impl Lexicon {
    /// Returns the process-wide lexicon, building it on first use.
    #[inline]
    pub fn get() -> &'static Lexicon {
        &LEXICON
    }

    fn build() -> Self {
        Self {
            prepositions: set(PREPOSITIONS),
            conjunctions: set(CONJUNCTIONS),
            subordinating_conjunctions: set(SUBORDINATING_CONJUNCTIONS),
            particles: set(PARTICLES),
            numerals: set(NUMERALS),
            pronouns: set(PRONOUNS),
        }
    }

    #[inline]
    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.contains(word)
    }

    #[inline]
    pub fn is_conjunction(&self, word: &str) -> bool {
        self.conjunctions.contains(word)
    }

    #[inline]
    pub fn is_subordinating_conjunction(&self, word: &str) -> bool {
        self.subordinating_conjunctions.contains(word)
    }

    #[inline]
    pub fn is_particle(&self, word: &str) -> bool {
        self.particles.contains(word)
    }

    /// Exact numeral membership only; compound tens and hundreds are
    /// recognized by the classifier.
    #[inline]
    pub fn is_numeral(&self, word: &str) -> bool {
        self.numerals.contains(word)
    }

    #[inline]
    pub fn is_pronoun(&self, word: &str) -> bool {
        self.pronouns.contains(word)
    }
}

//! The classification cascade.
//!
//! A word is tested against the closed classes in strict priority order:
//!
//! 1. preposition
//! 2. table word (correlative)
//! 3. conjunction
//! 4. subordinating conjunction
//! 5. particle
//! 6. numeral
//!
//! The first hit wins and every later closed-class group is written as zero.
//! If nothing hit, a trailing accusative `n` and then a trailing plural `j`
//! are stripped from a working copy, the copy is tested against the pronoun
//! set, and finally the *unstripped* word is scanned against the ending,
//! prefix and suffix tables.

use memchr::memmem;
use tracing::trace;
use vorto_types::layout::Group;

use super::encoder::Encoder;
use super::Analysis;
use crate::lexicon::{label, Lexicon, ENDINGS, PREFIXES, SUFFIXES, TABLE_ENDINGS, TABLE_PREFIXES};

/// Tokens made only of case/number markers; they are never stripped.
const BARE_MARKERS: [&str; 3] = ["j", "n", "jn"];

/// Deterministic single-word classifier.
///
/// Holds nothing but a reference to the shared lexicon, so it is `Copy`,
/// `Send` and `Sync`; independent words can be classified on any thread.
///
/// # Example
///
/// ```
/// use vorto_core::classify::Classifier;
///
/// let analysis = Classifier::new().classify("kaj");
/// assert_eq!(analysis.labels.as_slice(), ["conjunction"]);
/// assert!(analysis.vector.is_set(16));
/// ```
#[derive(Clone, Copy)]
pub struct Classifier {
    lexicon: &'static Lexicon,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates a classifier over the process-wide lexicon.
    #[inline]
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::get(),
        }
    }

    /// Classifies one normalized word.
    ///
    /// `word` must be non-empty and contain no spaces; other inputs are the
    /// caller's business (see [`crate::Token::analyze`]).
    pub fn classify(&self, word: &str) -> Analysis {
        debug_assert!(
            !word.is_empty() && !word.contains(' '),
            "classifier: expected a single normalized word, got {word:?}"
        );

        let lex = self.lexicon;
        let mut enc = Encoder::new();
        let mut matched = false;

        closed_class(
            &mut enc,
            &mut matched,
            Group::Preposition,
            label::PREPOSITION,
            || lex.is_preposition(word),
        );

        match table_word(word).filter(|_| !matched) {
            Some((prefix, ending)) => {
                enc.flag(Group::TableWord, true, label::TABLE_WORD);
                enc.label(TABLE_PREFIXES[prefix].label);
                enc.label(TABLE_ENDINGS[ending].label);
                enc.one_hot(Group::TablePrefix, prefix);
                enc.one_hot(Group::TableEnding, ending);
                matched = true;
            }
            None => {
                enc.skip(Group::TableWord);
                enc.skip(Group::TablePrefix);
                enc.skip(Group::TableEnding);
            }
        }

        closed_class(
            &mut enc,
            &mut matched,
            Group::Conjunction,
            label::CONJUNCTION,
            || lex.is_conjunction(word),
        );
        closed_class(
            &mut enc,
            &mut matched,
            Group::SubordinatingConjunction,
            label::SUBORDINATING_CONJUNCTION,
            || lex.is_subordinating_conjunction(word),
        );
        closed_class(
            &mut enc,
            &mut matched,
            Group::Particle,
            label::PARTICLE,
            || lex.is_particle(word),
        );
        closed_class(
            &mut enc,
            &mut matched,
            Group::Numeral,
            label::NUMERAL,
            || lex.is_numeral(word) || is_compound_numeral(word),
        );

        if matched {
            trace!(word, "closed class");
        }

        let stem = if matched || BARE_MARKERS.contains(&word) {
            enc.skip(Group::Accusative);
            enc.skip(Group::Plural);
            word
        } else {
            strip_markers(&mut enc, word)
        };

        if matched {
            enc.skip(Group::Pronoun);
        } else if lex.is_pronoun(stem) {
            trace!(stem, "personal pronoun");
            enc.label(label::PERSONAL_PRONOUN);
            enc.one_hot(Group::Pronoun, 0);
            matched = true;
        } else if possessive_tail(lex, stem) {
            enc.label(label::POSSESSIVE_PRONOUN);
            enc.one_hot(Group::Pronoun, 1);
            matched = true;
        } else {
            enc.skip(Group::Pronoun);
        }

        let incorrect = if matched {
            enc.skip(Group::Ending);
            enc.skip(Group::Prefix);
            enc.skip(Group::Suffix);
            false
        } else {
            // The affix scans read the unstripped word.
            let ended = enc.scan(Group::Ending, &ENDINGS, |form| word.ends_with(form));
            enc.scan(Group::Prefix, &PREFIXES, |form| word.starts_with(form));
            enc.scan(Group::Suffix, &SUFFIXES, |form| {
                memmem::find(word.as_bytes(), form.as_bytes()).is_some_and(|at| at > 0)
            });
            trace!(word, ended, "affix fallback");
            !ended
        };

        if incorrect {
            enc.one_hot(Group::Incorrect, 0);
        } else {
            enc.skip(Group::Incorrect);
        }

        let analysis = enc.finish();
        trace!(word, labels = analysis.labels.len(), incorrect, "classified");
        analysis
    }
}

#[inline]
fn closed_class<F>(
    enc: &mut Encoder,
    matched: &mut bool,
    group: Group,
    label: &'static str,
    test: F,
) where
    F: FnOnce() -> bool,
{
    let hit = !*matched && test();
    enc.flag(group, hit, label);
    *matched |= hit;
}

/// Finds the first table prefix the word starts with and the first table
/// ending it ends with. Only an exact `prefix + ending` reconstruction
/// counts; a later table entry is never tried once an earlier one matched.
fn table_word(word: &str) -> Option<(usize, usize)> {
    let prefix = TABLE_PREFIXES
        .iter()
        .position(|p| word.starts_with(p.form))?;
    let ending = TABLE_ENDINGS
        .iter()
        .position(|e| word.ends_with(e.form))?;

    let (head, tail) = (TABLE_PREFIXES[prefix].form, TABLE_ENDINGS[ending].form);
    (word.len() == head.len() + tail.len()).then_some((prefix, ending))
}

/// Tens and hundreds written as one word, e.g. `dudek`, `kvincent`.
#[inline]
fn is_compound_numeral(word: &str) -> bool {
    word.chars().count() > 4 && (word.ends_with("dek") || word.ends_with("cent"))
}

/// Strips a trailing accusative `n`, then a trailing plural `j`, from a
/// working copy. Words without `j` are labelled singular.
fn strip_markers<'w>(enc: &mut Encoder, word: &'w str) -> &'w str {
    let mut stem = word;

    let accusative = stem.strip_suffix('n');
    enc.flag(Group::Accusative, accusative.is_some(), label::ACCUSATIVE);
    stem = accusative.unwrap_or(stem);

    let plural = stem.strip_suffix('j');
    enc.flag(Group::Plural, plural.is_some(), label::PLURAL);
    if plural.is_none() {
        enc.label(label::SINGULAR);
    }

    trace!(
        word,
        accusative = accusative.is_some(),
        plural = plural.is_some(),
        "markers stripped"
    );
    plural.unwrap_or(stem)
}

/// Possessive pronoun test. Only the final character of the stem is looked
/// up in the pronoun set, and every pronoun is at least two characters long,
/// so this never fires today; the slot stays reserved in the layout.
fn possessive_tail(lex: &Lexicon, stem: &str) -> bool {
    match stem.char_indices().next_back() {
        Some((at, last)) => lex.is_pronoun(&stem[at..]) && last == 'a',
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vorto_types::layout::INCORRECT;

    fn classify(word: &str) -> Analysis {
        Classifier::new().classify(word)
    }

    fn slot(group: Group, index: usize) -> usize {
        group.offset() + index
    }

    fn suffix_slot(form: &str) -> usize {
        let i = SUFFIXES.iter().position(|a| a.form == form).unwrap();
        slot(Group::Suffix, i)
    }

    #[test]
    fn conjunction_only() {
        let a = classify("kaj");
        assert_eq!(a.labels.as_slice(), ["conjunction"]);
        assert!(a.vector.is_set(Group::Conjunction.offset()));
        assert_eq!(a.vector.ones(), 1);
        assert!(!a.vector.is_set(INCORRECT));
    }

    #[test]
    fn personal_pronoun() {
        let a = classify("mi");
        assert_eq!(a.labels.as_slice(), ["singular", "personal pronoun"]);
        assert_eq!(a.vector.group(Group::Pronoun), &[1.0, 0.0]);
        assert_eq!(a.vector.ones(), 1);
    }

    #[test]
    fn accusative_pronoun() {
        let a = classify("min");
        assert_eq!(
            a.labels.as_slice(),
            ["accusative case", "singular", "personal pronoun"]
        );
        assert!(a.vector.is_set(Group::Accusative.offset()));
        assert!(a.vector.is_set(Group::Pronoun.offset()));
        assert!(a.vector.group_is_zero(Group::Ending));
        assert!(!a.vector.is_set(INCORRECT));
    }

    #[test]
    fn noun_ending() {
        let a = classify("hundo");
        assert_eq!(a.labels.as_slice(), ["singular", "noun"]);
        assert!(a.vector.is_set(slot(Group::Ending, 0)));
        assert_eq!(a.vector.ones(), 1);
    }

    #[test]
    fn accusative_scan_uses_unstripped_text() {
        let a = classify("belan");
        assert!(a.vector.is_set(Group::Accusative.offset()));
        assert!(!a.vector.is_set(Group::Plural.offset()));
        assert!(a.vector.group_is_zero(Group::Ending));
        assert!(a.vector.is_set(INCORRECT));
        // "an" occurs past the first character
        assert!(a.vector.is_set(suffix_slot("an")));
        assert_eq!(
            a.labels.as_slice(),
            ["accusative case", "singular", "member, follower, inhabitant"]
        );
    }

    #[test]
    fn plural_accusative_is_incorrect() {
        let a = classify("hundojn");
        assert!(a.vector.is_set(Group::Accusative.offset()));
        assert!(a.vector.is_set(Group::Plural.offset()));
        assert!(a.vector.is_set(INCORRECT));
        assert_eq!(&a.labels[..2], ["accusative case", "plural"]);
    }

    #[test]
    fn prefix_and_suffix_scans() {
        let a = classify("malbela");
        assert!(a.vector.is_set(slot(Group::Ending, 1)));
        assert!(a.vector.is_set(slot(Group::Prefix, 3)));
        assert!(a.vector.is_set(suffix_slot("al")));
        assert_eq!(a.vector.group(Group::Suffix).iter().sum::<f32>(), 1.0);
        assert_eq!(
            a.labels.as_slice(),
            [
                "singular",
                "adjective",
                "direct opposite",
                "botany: order; chemistry: aldehyde; anatomy: bone"
            ]
        );
    }

    #[test]
    fn suffix_at_start_does_not_count() {
        // "ul" first occurs at index 0, so the later occurrence is ignored
        let a = classify("ulul");
        assert!(!a.vector.is_set(suffix_slot("ul")));
        let a = classify("bonulo");
        assert!(a.vector.is_set(suffix_slot("ul")));
    }

    #[test]
    fn multiple_endings_fire_when_they_overlap() {
        let a = classify("estas");
        assert!(a.vector.is_set(slot(Group::Ending, 4)));
        assert_eq!(a.vector.group(Group::Ending).iter().sum::<f32>(), 1.0);
        assert!(a.labels.contains(&"present tense verb"));
    }

    #[test]
    fn table_words() {
        let a = classify("kiu");
        assert_eq!(
            a.labels.as_slice(),
            [
                "table word",
                "question or relative word",
                "individual person or thing"
            ]
        );
        assert!(a.vector.is_set(Group::TableWord.offset()));
        assert_eq!(a.vector.group(Group::TablePrefix), &[1.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(a.vector.is_set(slot(Group::TableEnding, 0)));
        assert_eq!(a.vector.ones(), 3);

        let a = classify("nenies");
        assert!(a.vector.is_set(slot(Group::TablePrefix, 4)));
        assert!(a.vector.is_set(slot(Group::TableEnding, 3)));

        let a = classify("iom");
        assert!(a.vector.is_set(slot(Group::TablePrefix, 2)));
        assert!(a.vector.is_set(slot(Group::TableEnding, 8)));

        assert_eq!(table_word("ĉio"), Some((3, 1)));
        assert_eq!(table_word("kial"), Some((0, 6)));
        assert_eq!(table_word("tiel"), Some((1, 7)));
    }

    #[test]
    fn table_word_needs_exact_reconstruction() {
        assert_eq!(table_word("kiomulo"), None);
        assert_eq!(table_word("tiuj"), None);
        assert_eq!(table_word("hundo"), None);

        let a = classify("tiuj");
        assert!(a.vector.group_is_zero(Group::TableWord));
        assert!(a.vector.is_set(Group::Plural.offset()));
    }

    #[test]
    fn priority_order() {
        // preposition beats subordinating conjunction
        let a = classify("dum");
        assert_eq!(a.labels.as_slice(), ["preposition"]);
        // subordinating conjunction beats particle
        let a = classify("apenaŭ");
        assert_eq!(a.labels.as_slice(), ["subordinating conjunction"]);
        // "ĉi" is not a table word, so it lands on particle
        let a = classify("ĉi");
        assert_eq!(a.labels.as_slice(), ["particle"]);
    }

    #[test]
    fn numerals() {
        for word in ["dek", "cent", "miliono", "dudek", "kvincent", "naŭdek"] {
            let a = classify(word);
            assert_eq!(a.labels.as_slice(), ["numeral"], "{word}");
            assert!(a.vector.is_set(Group::Numeral.offset()));
        }
        assert!(!is_compound_numeral("odek"));
        assert!(is_compound_numeral("tridek"));
    }

    #[test]
    fn bare_markers_are_not_stripped() {
        for word in BARE_MARKERS {
            let a = classify(word);
            assert!(a.labels.is_empty(), "{word}");
            assert_eq!(a.vector.ones(), 1);
            assert!(a.vector.is_set(INCORRECT));
        }
    }

    #[test]
    fn possessive_branch_is_inert() {
        assert!(!possessive_tail(Lexicon::get(), "mia"));
        assert!(!possessive_tail(Lexicon::get(), "a"));
        assert!(!possessive_tail(Lexicon::get(), ""));

        let a = classify("mia");
        assert!(a.vector.group_is_zero(Group::Pronoun));
        assert!(a.vector.is_set(slot(Group::Ending, 1)));
        assert!(a.vector.is_set(suffix_slot("i")));
    }

    #[test]
    fn digits_are_classified_as_words() {
        let a = classify("123");
        assert_eq!(a.labels.as_slice(), ["singular"]);
        assert!(a.vector.is_set(INCORRECT));
    }

    /// Collects formatted trace output for one classification.
    fn traced(word: &str) -> String {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || classify(word));

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn decisions_are_traced() {
        let out = traced("kaj");
        assert!(out.contains("closed class"), "{out}");
        assert!(!out.contains("markers stripped"), "{out}");

        let out = traced("hundojn");
        assert!(out.contains("markers stripped"), "{out}");
        assert!(out.contains("accusative=true"), "{out}");
        assert!(out.contains("plural=true"), "{out}");
        assert!(out.contains("affix fallback"), "{out}");

        let out = traced("min");
        assert!(out.contains("personal pronoun"), "{out}");
        assert!(!out.contains("affix fallback"), "{out}");
    }

    #[test]
    fn classifier_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}

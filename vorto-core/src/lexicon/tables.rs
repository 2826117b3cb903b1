//! Lexicon data.
//!
//! Order inside every `[Affix; N]` table is the bit order of the matching
//! vector group, and for the table-word tables it is also match priority.
//! Reordering or editing any of them changes the meaning of stored vectors.

use vorto_types::layout::Group;

use super::Affix;

/// Category labels emitted by the classifier.
pub mod label {
    pub const PREPOSITION: &str = "preposition";
    pub const TABLE_WORD: &str = "table word";
    pub const CONJUNCTION: &str = "conjunction";
    pub const SUBORDINATING_CONJUNCTION: &str = "subordinating conjunction";
    pub const PARTICLE: &str = "particle";
    pub const NUMERAL: &str = "numeral";
    pub const ACCUSATIVE: &str = "accusative case";
    pub const PLURAL: &str = "plural";
    pub const SINGULAR: &str = "singular";
    pub const PERSONAL_PRONOUN: &str = "personal pronoun";
    pub const POSSESSIVE_PRONOUN: &str = "possessive pronoun";
}

/// Grammatical endings.
pub static ENDINGS: [Affix; Group::Ending.width()] = [
    Affix::new("o", "noun"),
    Affix::new("a", "adjective"),
    Affix::new("e", "adverb"),
    Affix::new("i", "infinitive"),
    Affix::new("as", "present tense verb"),
    Affix::new("is", "past tense verb"),
    Affix::new("os", "future tense verb"),
    Affix::new("us", "conditional verb"),
    Affix::new("u", "imperative verb"),
];

/// Word-building prefixes.
pub static PREFIXES: [Affix; Group::Prefix.width()] = [
    Affix::new("re", "reverse or repeated action"),
    Affix::new("pra", "remote kinship; primordial"),
    Affix::new("mis", "mistaken, wrong"),
    Affix::new("mal", "direct opposite"),
    Affix::new("ge", "both sexes together"),
    Affix::new("fi", "nasty, contemptible"),
    Affix::new("eks", "former, ex-"),
    Affix::new("ek", "beginning or momentary action"),
    Affix::new("dis", "separation, dispersal"),
    Affix::new("bo", "kinship by marriage"),
];

/// Word-building suffixes.
#[rustfmt::skip]
pub static SUFFIXES: [Affix; Group::Suffix.width()] = [
    Affix::new("ut", "passive conditional participle"),
    Affix::new("unt", "active conditional participle"),
    Affix::new("um", "indefinite meaning"),
    Affix::new("ul", "person with the quality"),
    Affix::new("uk", "castrated animal"),
    Affix::new("uj", "container; fruit tree; country"),
    Affix::new("oz", "abundant in, full of"),
    Affix::new("ot", "passive future participle"),
    Affix::new("op", "collective numeral"),
    Affix::new("ont", "active future participle"),
    Affix::new("on", "fractional numeral"),
    Affix::new("ol", "chemistry: alcohol"),
    Affix::new("obl", "multiplicative numeral"),
    Affix::new("nj", "feminine diminutive, shortens the root"),
    Affix::new("iz", "to supply with, cover with"),
    Affix::new("iv", "capable of"),
    Affix::new("it", "passive past participle; chemistry: salt of an oxygen-poor acid; medicine: inflammation"),
    Affix::new("ist", "professional, adherent"),
    Affix::new("ism", "doctrine, movement, idiom"),
    Affix::new("int", "active past participle"),
    Affix::new("ing", "holder, socket"),
    Affix::new("ind", "worthy of"),
    Affix::new("in", "female sex"),
    Affix::new("il", "tool, instrument, means"),
    Affix::new("ik", "art or science named after its agent; chemistry: higher valence"),
    Affix::new("iĝ", "to become"),
    Affix::new("ig", "to cause to be"),
    Affix::new("id", "offspring, young"),
    Affix::new("iĉ", "male sex"),
    Affix::new("i", "country, science, political regime"),
    Affix::new("et", "diminutive"),
    Affix::new("estr", "leader, head"),
    Affix::new("esk", "in the style of"),
    Affix::new("er", "single unit of a whole"),
    Affix::new("end", "which must be done"),
    Affix::new("em", "inclination, tendency"),
    Affix::new("ej", "place, premises"),
    Affix::new("eg", "augmentative"),
    Affix::new("ed", "zoology: family"),
    Affix::new("ec", "abstract quality"),
    Affix::new("ebl", "passive possibility"),
    Affix::new("ĉj", "masculine diminutive, shortens the root"),
    Affix::new("at", "passive present participle; chemistry: salt of an oxygen-rich acid"),
    Affix::new("ar", "collection, group"),
    Affix::new("ant", "active present participle"),
    Affix::new("an", "member, follower, inhabitant"),
    Affix::new("al", "botany: order; chemistry: aldehyde; anatomy: bone"),
    Affix::new("aĵ", "concrete thing showing a quality"),
    Affix::new("ad", "duration of an action"),
    Affix::new("aĉ", "poor quality, pejorative"),
    Affix::new("ac", "botany: family names"),
];

/// Table-word (correlative) prefixes, in match priority order.
pub static TABLE_PREFIXES: [Affix; Group::TablePrefix.width()] = [
    Affix::new("ki", "question or relative word"),
    Affix::new("ti", "demonstrative word"),
    Affix::new("i", "indefinite word"),
    Affix::new("ĉi", "universal word"),
    Affix::new("neni", "negative word"),
];

/// Table-word (correlative) endings, in match priority order.
pub static TABLE_ENDINGS: [Affix; Group::TableEnding.width()] = [
    Affix::new("u", "individual person or thing"),
    Affix::new("o", "thing"),
    Affix::new("a", "quality, kind"),
    Affix::new("es", "possessor"),
    Affix::new("e", "place"),
    Affix::new("am", "time, occasion"),
    Affix::new("al", "reason"),
    Affix::new("el", "manner, degree"),
    Affix::new("om", "quantity"),
];

pub static PREPOSITIONS: &[&str] = &[
    "al", "anstataŭ", "antaŭ", "apud", "ĉe", "ĉirkaŭ", "da", "de", "dum", "ekster", "el", "en",
    "ĝis", "inter", "je", "kontraŭ", "krom", "kun", "laŭ", "malgraŭ", "per", "po", "por", "post",
    "preter", "pri", "pro", "sen", "sub", "super", "sur", "tra", "trans",
];

pub static PRONOUNS: &[&str] = &["mi", "ni", "vi", "li", "ŝi", "ĝi", "ili", "oni", "si"];

pub static NUMERALS: &[&str] = &[
    "nul", "unu", "du", "tri", "kvar", "kvin", "ses", "sep", "ok", "naŭ", "dek", "cent", "mil",
    "miliono", "miliardo", "biliono", "triliono",
];

pub static CONJUNCTIONS: &[&str] = &["kaj", "aŭ", "sed", "plus", "minus", "nek"];

pub static SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "ke", "ĉu", "se", "ĉar", "dum", "ĝis", "kvankam", "kvazaŭ", "ol", "apenaŭ",
];

pub static PARTICLES: &[&str] = &[
    "pli", "plej", "ne", "ĉi", "for", "ankoraŭ", "baldaŭ", "hodiaŭ", "hieraŭ", "morgaŭ", "jam",
    "ĵus", "nun", "plu", "tuj", "ajn", "almenaŭ", "ankaŭ", "apenaŭ", "des", "do", "eĉ", "ja",
    "jen", "jes", "ju", "kvazaŭ", "mem", "nur", "preskaŭ", "tamen", "tre", "tro",
];

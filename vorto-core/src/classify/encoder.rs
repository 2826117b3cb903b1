//! Lock-step label and vector writer.
//!
//! The cascade never builds the vector after the fact. At every decision
//! point it tells the encoder which group it is deciding, and the encoder
//! fills that group's slots and appends the matching labels in the same
//! call. Groups must be visited in vector order; debug builds check it.

use vorto_types::layout::{Group, LEN};
use vorto_types::FeatureVector;

use super::{Analysis, Labels};
use crate::lexicon::Affix;

pub(crate) struct Encoder {
    labels: Labels,
    vector: FeatureVector,
    cursor: usize,
}

impl Encoder {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            labels: Labels::new(),
            vector: FeatureVector::zeroed(),
            cursor: 0,
        }
    }

    #[inline(always)]
    fn enter(&mut self, group: Group) -> usize {
        debug_assert_eq!(
            self.cursor,
            group.offset(),
            "encoder: {:?} written out of order",
            group
        );
        let offset = self.cursor;
        self.cursor += group.width();
        offset
    }

    /// Leaves every slot of `group` at zero.
    #[inline]
    pub(crate) fn skip(&mut self, group: Group) {
        self.enter(group);
    }

    /// Writes a single-slot group, emitting `label` when `set`.
    #[inline]
    pub(crate) fn flag(&mut self, group: Group, set: bool, label: &'static str) {
        debug_assert_eq!(group.width(), 1);
        let offset = self.enter(group);
        if set {
            self.vector.set(offset);
            self.labels.push(label);
        }
    }

    /// Sets slot `index` of `group` without emitting a label.
    #[inline]
    pub(crate) fn one_hot(&mut self, group: Group, index: usize) {
        debug_assert!(index < group.width());
        let offset = self.enter(group);
        self.vector.set(offset + index);
    }

    /// Sets bit `i` of `group` for every table entry `i` accepted by
    /// `matches`, emitting each entry's label. Returns whether any entry
    /// matched.
    pub(crate) fn scan<F>(&mut self, group: Group, table: &[Affix], mut matches: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        debug_assert_eq!(table.len(), group.width());
        let offset = self.enter(group);
        let mut any = false;
        for (i, affix) in table.iter().enumerate() {
            if matches(affix.form) {
                self.vector.set(offset + i);
                self.labels.push(affix.label);
                any = true;
            }
        }
        any
    }

    /// Appends a label without touching the vector.
    #[inline]
    pub(crate) fn label(&mut self, label: &'static str) {
        self.labels.push(label);
    }

    pub(crate) fn finish(self) -> Analysis {
        debug_assert_eq!(self.cursor, LEN, "encoder: vector not fully written");
        Analysis {
            labels: self.labels,
            vector: self.vector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip_to(enc: &mut Encoder, target: Group) {
        for group in Group::ALL {
            if group == target {
                break;
            }
            enc.skip(group);
        }
    }

    fn skip_from(enc: &mut Encoder, after: Group) {
        let mut seen = false;
        for group in Group::ALL {
            if seen {
                enc.skip(group);
            }
            seen |= group == after;
        }
    }

    #[test]
    fn all_skipped_is_zero() {
        let mut enc = Encoder::new();
        for group in Group::ALL {
            enc.skip(group);
        }
        let a = enc.finish();
        assert!(a.labels.is_empty());
        assert_eq!(a.vector.ones(), 0);
    }

    #[test]
    fn flag_writes_bit_and_label() {
        let mut enc = Encoder::new();
        enc.flag(Group::Preposition, true, "preposition");
        skip_from(&mut enc, Group::Preposition);
        let a = enc.finish();
        assert_eq!(a.labels.as_slice(), ["preposition"]);
        assert!(a.vector.is_set(0));
        assert_eq!(a.vector.ones(), 1);
    }

    #[test]
    fn unset_flag_emits_nothing() {
        let mut enc = Encoder::new();
        enc.flag(Group::Preposition, false, "preposition");
        skip_from(&mut enc, Group::Preposition);
        let a = enc.finish();
        assert!(a.labels.is_empty());
        assert_eq!(a.vector.ones(), 0);
    }

    #[test]
    fn one_hot_lands_inside_group() {
        let mut enc = Encoder::new();
        skip_to(&mut enc, Group::TableEnding);
        enc.one_hot(Group::TableEnding, 8);
        skip_from(&mut enc, Group::TableEnding);
        let a = enc.finish();
        assert!(a.vector.is_set(Group::TableEnding.offset() + 8));
        assert!(a.labels.is_empty());
    }

    #[test]
    fn scan_is_multi_hot() {
        let table = [
            Affix::new("o", "first"),
            Affix::new("x", "second"),
            Affix::new("lo", "third"),
            Affix::new("a", "fourth"),
            Affix::new("b", "fifth"),
        ];
        let mut enc = Encoder::new();
        skip_to(&mut enc, Group::TablePrefix);
        let any = enc.scan(Group::TablePrefix, &table, |form| "halo".ends_with(form));
        skip_from(&mut enc, Group::TablePrefix);
        let a = enc.finish();

        assert!(any);
        assert_eq!(a.labels.as_slice(), ["first", "third"]);
        assert_eq!(a.vector.group(Group::TablePrefix), &[1.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of order")]
    #[cfg(debug_assertions)]
    fn out_of_order_write_panics() {
        let mut enc = Encoder::new();
        enc.skip(Group::TableWord);
    }
}

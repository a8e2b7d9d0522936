//! # Label overlay
//!
//! ## Overview
//!
//! An [OverlayStore] keeps track of every label currently drawn over the viewport, grouped by
//! label, along with the character each label covers. Labels are handed out round-robin from an
//! [Alphabet], so when there are more occurrences than labels, several occurrences share a label;
//! the occurrences under one label are called a bucket.
//!
//! Occurrences live in a single arena, and buckets are lists of indices into it, kept in the
//! order the occurrences were labeled.
use crate::config::{Alphabet, LabelStyle};
use crate::scan::Occurrence;
use crate::view::JumpView;

/// The labels currently drawn over a viewport.
#[derive(Clone, Debug, Default)]
pub struct OverlayStore {
    arena: Vec<Occurrence>,
    buckets: Vec<Vec<usize>>,
}

impl OverlayStore {
    /// Create an empty store with room for `labels` buckets.
    pub fn new(labels: usize) -> Self {
        OverlayStore { arena: Vec::new(), buckets: vec![Vec::new(); labels] }
    }

    /// Number of labeled occurrences.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether nothing is currently labeled.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Label each occurrence in order, and return how many were labeled.
    ///
    /// The n-th occurrence labeled since the store was last empty gets label `n % alphabet.len()`.
    /// Each occurrence's cell is overwritten with its label, and the occurrence is added to the
    /// bucket for that label.
    pub fn label<V, I>(
        &mut self,
        view: &mut V,
        occurrences: I,
        alphabet: &Alphabet,
        style: &LabelStyle,
    ) -> usize
    where
        V: JumpView + ?Sized,
        I: IntoIterator<Item = Occurrence>,
    {
        if self.buckets.len() < alphabet.len() {
            self.buckets.resize(alphabet.len(), Vec::new());
        }

        let start = self.arena.len();

        for occ in occurrences {
            let idx = self.arena.len();
            let bucket = idx % alphabet.len();
            let label = alphabet.get(bucket);

            log::trace!("labeling {:?} at {:?} with {:?}", occ.glyph, occ.screen, label);

            view.draw_label(occ.screen, label, style);
            self.buckets[bucket].push(idx);
            self.arena.push(occ);
        }

        return self.arena.len() - start;
    }

    /// Iterate over the occurrences shown under a label index, in the order they were labeled.
    pub fn bucket(&self, idx: usize) -> impl Iterator<Item = &Occurrence> + '_ {
        self.buckets
            .get(idx)
            .into_iter()
            .flat_map(|b| b.iter())
            .map(|i| &self.arena[*i])
    }

    /// Number of occurrences shown under a label index.
    pub fn bucket_len(&self, idx: usize) -> usize {
        self.buckets.get(idx).map(Vec::len).unwrap_or(0)
    }

    /// Copy out the occurrences under a label index, so that they outlive [OverlayStore::restore].
    pub fn snapshot(&self, idx: usize) -> Vec<Occurrence> {
        self.bucket(idx).copied().collect()
    }

    /// Put back every covered character, clear all label styling, and empty the store.
    ///
    /// Calling this on an empty store does nothing.
    pub fn restore<V: JumpView + ?Sized>(&mut self, view: &mut V) {
        if self.arena.is_empty() {
            return;
        }

        log::trace!("restoring {} labeled cells", self.arena.len());

        // Work backwards, so that if a cell was covered twice, its oldest glyph wins.
        for occ in self.arena.drain(..).rev() {
            view.erase_label(occ.screen, occ.glyph);
        }

        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }
}

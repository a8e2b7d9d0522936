//! # Occurrence scanning
//!
//! ## Overview
//!
//! This module finds the places in a viewport that a jump can go to: every cell holding the
//! target character at the start of a word.
//!
//! A cell starts a word when the cell before it holds whitespace, when it is the first character
//! of a line, or when it is the very first cell of the viewport. The cell before is looked up
//! across row boundaries, so a soft-wrapped row continues the word from the row above it.
//! Punctuation is not a boundary: in `(foo`, only the `(` starts a word.
use crate::view::{JumpView, ScreenPos, TextPos};

/// A candidate jump target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Occurrence {
    /// Where the label for this occurrence gets drawn.
    pub screen: ScreenPos,

    /// Where the cursor goes if this occurrence is chosen.
    pub logical: TextPos,

    /// The character that a label covers up, and that gets put back afterwards.
    pub glyph: char,
}

fn same_char(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Find every word-initial occurrence of `target` in the viewport, in reading order.
///
/// Matching ignores case, so a target of `t` also finds `T`.
pub fn scan<V: JumpView + ?Sized>(view: &V, target: char) -> Vec<Occurrence> {
    let mut found = Vec::new();
    let mut prev: Option<char> = None;

    for row in 0..view.height() {
        let mut col = 0;

        while let Some(cell) = view.cell(ScreenPos::new(row, col)) {
            let word_start = cell.pos.column == 0 || prev.map_or(true, char::is_whitespace);

            if word_start && same_char(cell.glyph, target) {
                let screen = ScreenPos::new(row, col);
                found.push(Occurrence { screen, logical: cell.pos, glyph: cell.glyph });
            }

            prev = Some(cell.glyph);
            col += 1;
        }
    }

    log::trace!("found {} occurrences of {:?}", found.len(), target);

    return found;
}

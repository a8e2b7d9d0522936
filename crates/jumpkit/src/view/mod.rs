//! # Viewport services
//!
//! ## Overview
//!
//! A jump needs a few things from the application it runs in: a way to read what's on screen,
//! a way to draw and erase single-cell labels, a way to move the cursor, and a status line for
//! prompts and messages. This module defines those as the [JumpView], [CursorPositioner] and
//! [StatusLine] traits, which together make up a [JumpHost].
//!
//! [TextView] is a ready-made [JumpView] and [CursorPositioner] over a string.
use std::io;

use crate::config::LabelStyle;

mod text;

pub use self::text::{GridCell, TextView, DEFAULT_TABSTOP};

/// A cell in the viewport, counted from the top-left.
///
/// The column addresses the viewport's cells, and not terminal columns: a double-width character
/// occupies a single cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ScreenPos {
    /// The row, starting from zero at the top of the viewport.
    pub row: usize,

    /// The cell within the row, starting from zero.
    pub col: usize,
}

impl ScreenPos {
    /// Create a new screen position.
    pub fn new(row: usize, col: usize) -> Self {
        ScreenPos { row, col }
    }
}

/// A position in the underlying text, independent of wrapping and scrolling.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TextPos {
    /// The line, starting from zero.
    pub line: usize,

    /// The character within the line, starting from zero.
    pub column: usize,
}

impl TextPos {
    /// Create a new text position.
    pub fn new(line: usize, column: usize) -> Self {
        TextPos { line, column }
    }
}

/// The contents of a single viewport cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewCell {
    /// The character currently displayed.
    pub glyph: char,

    /// Where the character is located in the text.
    pub pos: TextPos,
}

/// A viewport that jump labels can be drawn into.
pub trait JumpView {
    /// Number of visible rows.
    fn height(&self) -> usize;

    /// Get the cell at a position, or `None` if the position is past the end of its row's content
    /// or below the last row.
    fn cell(&self, pos: ScreenPos) -> Option<ViewCell>;

    /// Cover the cell at `pos` with a label.
    fn draw_label(&mut self, pos: ScreenPos, label: char, style: &LabelStyle);

    /// Put the original character back into a labeled cell, and clear its label styling.
    fn erase_label(&mut self, pos: ScreenPos, glyph: char);

    /// Make the current contents visible to the user.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Moves the application's cursor.
pub trait CursorPositioner {
    /// Move the cursor to a line and column in the text.
    ///
    /// The line is zero-based, and the column is one-based, so that the first character of the
    /// third line is `(2, 1)`.
    fn move_cursor_to(&mut self, line: usize, column: usize);

    /// Note that the view should be redrawn before the next input is handled.
    fn set_refresh_needed(&mut self);
}

/// A line for showing prompts and short messages.
pub trait StatusLine {
    /// Show a prompt that the user is expected to answer.
    fn show_prompt(&mut self, prompt: &str);

    /// Show an informational message.
    fn report_status(&mut self, msg: &str);

    /// Clear whatever is currently shown.
    fn blank_status(&mut self);

    /// Show a reminder of how to cancel next to the current prompt.
    ///
    /// This is called right after [StatusLine::show_prompt], and lasts until the status changes.
    /// Hosts without room for it can ignore it.
    fn show_cancel_hint(&mut self, hint: &str) {
        let _ = hint;
    }
}

/// Everything a [JumpController](crate::controller::JumpController) needs from its application.
pub trait JumpHost: JumpView + CursorPositioner + StatusLine {}

impl<T> JumpHost for T where T: JumpView + CursorPositioner + StatusLine {}

/// Implement [JumpView] and [CursorPositioner] for a struct by forwarding to one of its fields.
///
/// This is useful when an application keeps a [TextView] alongside its own status line.
#[macro_export]
macro_rules! delegate_view {
    ($host: ty, $field: ident) => {
        impl $crate::view::JumpView for $host {
            fn height(&self) -> usize {
                $crate::view::JumpView::height(&self.$field)
            }

            fn cell(&self, pos: $crate::view::ScreenPos) -> Option<$crate::view::ViewCell> {
                $crate::view::JumpView::cell(&self.$field, pos)
            }

            fn draw_label(
                &mut self,
                pos: $crate::view::ScreenPos,
                label: char,
                style: &$crate::config::LabelStyle,
            ) {
                $crate::view::JumpView::draw_label(&mut self.$field, pos, label, style)
            }

            fn erase_label(&mut self, pos: $crate::view::ScreenPos, glyph: char) {
                $crate::view::JumpView::erase_label(&mut self.$field, pos, glyph)
            }

            fn flush(&mut self) -> ::std::io::Result<()> {
                $crate::view::JumpView::flush(&mut self.$field)
            }
        }

        impl $crate::view::CursorPositioner for $host {
            fn move_cursor_to(&mut self, line: usize, column: usize) {
                $crate::view::CursorPositioner::move_cursor_to(&mut self.$field, line, column)
            }

            fn set_refresh_needed(&mut self) {
                $crate::view::CursorPositioner::set_refresh_needed(&mut self.$field)
            }
        }
    };
}

//! # Reference viewport
//!
//! ## Overview
//!
//! [TextView] lays text out into a fixed-size grid of cells, soft-wrapping lines that don't fit,
//! and implements [JumpView] and [CursorPositioner] on top of it.
use std::mem;

use ropey::{Rope, RopeSlice};
use unicode_width::UnicodeWidthChar;

use super::{CursorPositioner, JumpView, ScreenPos, TextPos, ViewCell};
use crate::config::LabelStyle;

/// Default distance between tab stops.
pub const DEFAULT_TABSTOP: usize = 8;

/// A laid-out cell in a [TextView].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridCell {
    /// The character currently shown in this cell.
    pub glyph: char,

    /// Where the cell's character comes from in the text.
    pub pos: TextPos,

    /// The terminal column where this cell starts, relative to the left of the view.
    pub x: usize,

    /// How many terminal columns this cell covers.
    pub width: usize,

    /// The style of the label covering this cell, if there is one.
    pub label: Option<LabelStyle>,
}

/// A soft-wrapping view over some text.
#[derive(Clone, Debug)]
pub struct TextView {
    text: Rope,
    width: usize,
    height: usize,
    tabstop: usize,
    top: usize,
    rows: Vec<Vec<GridCell>>,
    cursor: TextPos,
    refresh: bool,
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Remove the line break (including a CRLF pair) that ends a line of the rope.
fn trimnl(line: RopeSlice<'_>) -> RopeSlice<'_> {
    let len = line.len_chars();

    match line.get_char(len.saturating_sub(1)) {
        Some('\n') if len >= 2 && line.get_char(len - 2) == Some('\r') => line.slice(..len - 2),
        Some(c) if is_line_break(c) => line.slice(..len - 1),
        _ => line,
    }
}

fn line_chars(line: RopeSlice<'_>) -> impl Iterator<Item = char> + '_ {
    trimnl(line).chars()
}

impl TextView {
    /// Create a view of `text` that is `width` columns wide and `height` rows tall.
    pub fn new(text: &str, width: usize, height: usize) -> Self {
        let mut view = TextView {
            text: Rope::from_str(text),
            width,
            height,
            tabstop: DEFAULT_TABSTOP,
            top: 0,
            rows: Vec::new(),
            cursor: TextPos::default(),
            refresh: false,
        };

        view.layout();
        view
    }

    /// Replace the text being shown, and move back to the top.
    pub fn set_text(&mut self, text: &str) {
        self.text = Rope::from_str(text);
        self.top = 0;
        self.cursor = TextPos::default();
        self.layout();
    }

    /// Change the dimensions of the view.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.layout();
    }

    /// Change the distance between tab stops.
    pub fn set_tabstop(&mut self, tabstop: usize) {
        self.tabstop = tabstop.max(1);
        self.layout();
    }

    /// Scroll so that `line` is the first line shown.
    pub fn scroll_to(&mut self, line: usize) {
        self.top = line.min(self.last_line());
        self.layout();
    }

    /// The first line shown.
    pub fn top_line(&self) -> usize {
        self.top
    }

    /// Number of lines in the text.
    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    /// Number of characters in a line, not counting the line ending.
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.text.len_lines() {
            return 0;
        }

        line_chars(self.text.line(line)).count()
    }

    /// The width and height of the view.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The current cursor position.
    pub fn cursor(&self) -> TextPos {
        self.cursor
    }

    /// The laid-out rows, from top to bottom.
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    /// Where the cursor is on screen, as a row and a terminal column.
    pub fn cursor_screen_pos(&self) -> Option<(usize, usize)> {
        let mut end = None;

        for (y, row) in self.rows.iter().enumerate() {
            for cell in row {
                if cell.pos == self.cursor {
                    return Some((y, cell.x));
                }

                if cell.pos.line == self.cursor.line {
                    end = Some((y, cell.x + cell.width));
                }
            }

            if row.is_empty() && end.is_none() && self.row_line(y) == self.cursor.line {
                end = Some((y, 0));
            }
        }

        end
    }

    /// Returns whether a refresh was requested since the last call, and clears the request.
    pub fn take_refresh(&mut self) -> bool {
        mem::take(&mut self.refresh)
    }

    fn last_line(&self) -> usize {
        self.text.len_lines().saturating_sub(1)
    }

    fn row_line(&self, y: usize) -> usize {
        // Empty rows only come from empty lines, so count the lines that came before.
        let mut line = self.top;

        for row in self.rows.iter().take(y) {
            match row.last() {
                Some(cell) if cell.pos.column + 1 < self.line_len(cell.pos.line) => {},
                Some(cell) => line = cell.pos.line + 1,
                None => line += 1,
            }
        }

        line
    }

    fn char_width(&self, c: char, x: usize) -> usize {
        if c == '\t' {
            let w = self.tabstop - x % self.tabstop;
            return w.min(self.width.saturating_sub(x)).max(1);
        }

        c.width().unwrap_or(1).max(1)
    }

    fn layout(&mut self) {
        self.rows.clear();

        let width = self.width.max(1);
        let mut line = self.top;

        'lines: while self.rows.len() < self.height && line < self.text.len_lines() {
            let mut row = Vec::new();
            let mut x = 0;

            for (column, c) in line_chars(self.text.line(line)).enumerate() {
                let mut w = self.char_width(c, x);

                if x + w > width && !row.is_empty() {
                    self.rows.push(mem::take(&mut row));
                    x = 0;

                    if self.rows.len() >= self.height {
                        break 'lines;
                    }

                    w = self.char_width(c, x);
                }

                let pos = TextPos::new(line, column);
                row.push(GridCell { glyph: c, pos, x, width: w, label: None });
                x += w;
            }

            self.rows.push(row);
            line += 1;
        }
    }

    fn is_line_visible(&self, line: usize) -> bool {
        match self.rows.len().checked_sub(1) {
            Some(y) => self.top <= line && line <= self.row_line(y),
            None => false,
        }
    }
}

impl JumpView for TextView {
    fn height(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, pos: ScreenPos) -> Option<ViewCell> {
        let cell = self.rows.get(pos.row)?.get(pos.col)?;

        Some(ViewCell { glyph: cell.glyph, pos: cell.pos })
    }

    fn draw_label(&mut self, pos: ScreenPos, label: char, style: &LabelStyle) {
        if let Some(cell) = self.rows.get_mut(pos.row).and_then(|r| r.get_mut(pos.col)) {
            cell.glyph = label;
            cell.label = Some(*style);
        }
    }

    fn erase_label(&mut self, pos: ScreenPos, glyph: char) {
        if let Some(cell) = self.rows.get_mut(pos.row).and_then(|r| r.get_mut(pos.col)) {
            cell.glyph = glyph;
            cell.label = None;
        }
    }
}

impl CursorPositioner for TextView {
    fn move_cursor_to(&mut self, line: usize, column: usize) {
        let line = line.min(self.last_line());
        let column = column.saturating_sub(1).min(self.line_len(line));

        self.cursor = TextPos::new(line, column);

        if !self.is_line_visible(line) {
            self.scroll_to(line);
        }
    }

    fn set_refresh_needed(&mut self) {
        self.refresh = true;
    }
}

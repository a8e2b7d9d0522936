//! # Jump screen
//!
//! ## Overview
//!
//! [JumpScreen] fills a terminal with a [TextView] and a status line along the bottom row, and
//! implements all of the [JumpHost](jumpkit::view::JumpHost) traits, so that it can be handed
//! directly to [JumpController::run](jumpkit::controller::JumpController::run).
//!
//! The text itself is drawn by the [TextViewWidget], which can also be used on its own inside a
//! larger layout.
use std::io;

use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier as StyleModifier, Style},
    widgets::Widget,
    Frame,
    Terminal,
};

use unicode_width::UnicodeWidthStr;

use jumpkit::config::LabelStyle;
use jumpkit::view::{CursorPositioner, JumpView, ScreenPos, StatusLine, TextView, ViewCell};

use super::label_style;

/// What the status line is currently showing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum StatusMessage {
    /// Nothing.
    #[default]
    Blank,

    /// A prompt waiting on the user.
    Prompt(String),

    /// An informational message.
    Info(String),
}

impl StatusMessage {
    /// The text being shown.
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Blank => "",
            StatusMessage::Prompt(s) => s.as_str(),
            StatusMessage::Info(s) => s.as_str(),
        }
    }
}

/// Widget for drawing the contents of a [TextView], including any jump labels.
pub struct TextViewWidget<'a> {
    view: &'a TextView,
}

impl<'a> TextViewWidget<'a> {
    /// Create a widget for drawing a view.
    pub fn new(view: &'a TextView) -> Self {
        TextViewWidget { view }
    }
}

impl<'a> Widget for TextViewWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in self.view.rows().iter().enumerate() {
            if y >= area.height as usize {
                break;
            }

            let y = area.top() + y as u16;

            for cell in row {
                if cell.x >= area.width as usize {
                    break;
                }

                let x = area.left() + cell.x as u16;
                let max = area.width as usize - cell.x;

                let (symbol, style) = match &cell.label {
                    Some(style) => {
                        let pad = " ".repeat(cell.width.saturating_sub(1));
                        (format!("{}{}", cell.glyph, pad), label_style(style))
                    },
                    None if cell.glyph == '\t' => (" ".repeat(cell.width), Style::default()),
                    None => (cell.glyph.to_string(), Style::default()),
                };

                buf.set_stringn(x, y, symbol, max, style);
            }
        }
    }
}

/// A terminal screen showing a [TextView] above a status line.
pub struct JumpScreen<B: Backend> {
    terminal: Terminal<B>,
    view: TextView,
    status: StatusMessage,
    hint: Option<String>,
}

impl<B: Backend> JumpScreen<B> {
    /// Create a screen that shows `text` using the given terminal backend.
    pub fn new(backend: B, text: &str) -> io::Result<Self> {
        let terminal = Terminal::new(backend)?;
        let size = terminal.size()?;
        let height = size.height.saturating_sub(1) as usize;
        let view = TextView::new(text, size.width as usize, height);

        Ok(JumpScreen { terminal, view, status: StatusMessage::Blank, hint: None })
    }

    /// The text view being shown.
    pub fn view(&self) -> &TextView {
        &self.view
    }

    /// Mutable access to the text view, for scrolling or replacing the text.
    pub fn view_mut(&mut self) -> &mut TextView {
        &mut self.view
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// What the status line is currently showing.
    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// The cancel reminder shown at the right of the status line, if any.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Fit the text view to the current size of the terminal.
    ///
    /// This shouldn't be called while a jump is in progress, since laying the text out again
    /// drops any labels that are currently drawn.
    pub fn resize(&mut self) -> io::Result<()> {
        let size = self.terminal.size()?;
        let dims = (size.width as usize, size.height.saturating_sub(1) as usize);

        if self.view.dimensions() != dims {
            self.view.resize(dims.0, dims.1);
        }

        Ok(())
    }

    /// Draw the text and status line to the terminal.
    ///
    /// If the view asked for a refresh, the whole terminal gets repainted instead of only the
    /// cells that changed.
    pub fn draw(&mut self) -> io::Result<()> {
        let JumpScreen { terminal, view, status, hint } = self;

        if view.take_refresh() {
            terminal.clear()?;
        }

        terminal.draw(|f| render(f, view, status, hint.as_deref()))?;

        Ok(())
    }
}

fn render(f: &mut Frame, view: &TextView, status: &StatusMessage, hint: Option<&str>) {
    let area = f.area();

    if area.height == 0 {
        return;
    }

    let text_area = Rect::new(area.x, area.y, area.width, area.height - 1);
    let bar_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);

    f.render_widget(TextViewWidget::new(view), text_area);

    let text = status.text();
    let style = match status {
        StatusMessage::Prompt(_) => Style::default().add_modifier(StyleModifier::BOLD),
        _ => Style::default(),
    };

    f.buffer_mut().set_stringn(bar_area.x, bar_area.y, text, bar_area.width as usize, style);

    if let Some(hint) = hint {
        // Only shown when it fits to the right of the prompt, with a space between them.
        let hint_width = hint.width() as u16;

        if text.width() as u16 + hint_width < bar_area.width {
            let x = bar_area.right() - hint_width;
            f.buffer_mut().set_string(x, bar_area.y, hint, Style::default());
        }
    }

    match status {
        StatusMessage::Prompt(_) => {
            let x = (text.width() as u16).min(bar_area.width.saturating_sub(1));
            f.set_cursor_position((bar_area.x + x, bar_area.y));
        },
        _ => {
            if let Some((y, x)) = view.cursor_screen_pos() {
                if y < text_area.height as usize && x < text_area.width as usize {
                    f.set_cursor_position((text_area.x + x as u16, text_area.y + y as u16));
                }
            }
        },
    }
}

impl<B: Backend> JumpView for JumpScreen<B> {
    fn height(&self) -> usize {
        self.view.height()
    }

    fn cell(&self, pos: ScreenPos) -> Option<ViewCell> {
        self.view.cell(pos)
    }

    fn draw_label(&mut self, pos: ScreenPos, label: char, style: &LabelStyle) {
        self.view.draw_label(pos, label, style)
    }

    fn erase_label(&mut self, pos: ScreenPos, glyph: char) {
        self.view.erase_label(pos, glyph)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.draw()
    }
}

impl<B: Backend> CursorPositioner for JumpScreen<B> {
    fn move_cursor_to(&mut self, line: usize, column: usize) {
        self.view.move_cursor_to(line, column)
    }

    fn set_refresh_needed(&mut self) {
        self.view.set_refresh_needed()
    }
}

impl<B: Backend> StatusLine for JumpScreen<B> {
    fn show_prompt(&mut self, prompt: &str) {
        self.status = StatusMessage::Prompt(prompt.into());
        self.hint = None;
    }

    fn report_status(&mut self, msg: &str) {
        self.status = StatusMessage::Info(msg.into());
        self.hint = None;
    }

    fn blank_status(&mut self) {
        self.status = StatusMessage::Blank;
        self.hint = None;
    }

    fn show_cancel_hint(&mut self, hint: &str) {
        self.hint = Some(hint.into());
    }
}

//! # jumpkit-ratatui
//!
//! ## Overview
//!
//! This crate contains a screen and a key prompt that can be used to run [jumpkit] jumps in a
//! terminal using the [ratatui] and [crossterm] crates.
//!
//! ## Example
//!
//! The following example shows a program that displays some text, and starts a jump whenever
//! `<C-j>` is pressed. For a more complete example that loads files and scrolls, see
//! `examples/jump.rs` in the source repository.
//!
//! ```no_run
//! use jumpkit::{config::JumpConfig, controller::JumpController};
//! use jumpkit_ratatui::{prompt::TerminalPrompt, screen::JumpScreen};
//!
//! use crossterm::event::{read, Event, KeyCode, KeyModifiers};
//! use crossterm::terminal::EnterAlternateScreen;
//! use ratatui::backend::CrosstermBackend;
//! use std::io::stdout;
//!
//! fn main() -> std::io::Result<()> {
//!     let mut stdout = stdout();
//!
//!     crossterm::terminal::enable_raw_mode()?;
//!     crossterm::execute!(stdout, EnterAlternateScreen)?;
//!
//!     let config = JumpConfig::default();
//!     let mut prompt = TerminalPrompt::new(&config);
//!     let jumper = JumpController::new(config);
//!     let mut screen = JumpScreen::new(CrosstermBackend::new(stdout), "some text to jump in")?;
//!
//!     loop {
//!         screen.draw()?;
//!
//!         if let Event::Key(key) = read()? {
//!             match (key.code, key.modifiers) {
//!                 (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
//!                     let _ = jumper.run(&mut screen, &mut prompt);
//!                 },
//!                 (KeyCode::Char('q'), _) => break,
//!                 _ => continue,
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]
use ratatui::style::{Modifier as StyleModifier, Style};

use jumpkit::config::{LabelAttrs, LabelStyle};

pub mod prompt;
pub mod screen;

/// Convert a [LabelStyle] into the [Style] used to draw it.
pub fn label_style(style: &LabelStyle) -> Style {
    let mut res = Style::default();

    if style.attrs.contains(LabelAttrs::REVERSED) {
        res = res.add_modifier(StyleModifier::REVERSED);
    }

    if style.attrs.contains(LabelAttrs::BOLD) {
        res = res.add_modifier(StyleModifier::BOLD);
    }

    if style.attrs.contains(LabelAttrs::UNDERLINED) {
        res = res.add_modifier(StyleModifier::UNDERLINED);
    }

    if let Some(fg) = style.fg {
        res = res.fg(fg.into());
    }

    if let Some(bg) = style.bg {
        res = res.bg(bg.into());
    }

    return res;
}

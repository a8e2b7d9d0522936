//! # Input keys
//!
//! ## Overview
//!
//! This module contains code for representing keys, and for reading the single characters that
//! a jump prompts for.
//!
//! A [CharPrompt] blocks until the user presses a key, and then sorts it into one of the three
//! [PromptInput] outcomes. [TerminalKey::classify] does the sorting, so that every prompt
//! implementation agrees on what counts as printable.
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use self::parse::{parse_key_seq, parse_key_str};
use crate::errors::JumpResult;

mod parse;

/// Errors that occur while interpreting key strings.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyError {
    /// Failure to interpret key string.
    #[error("Invalid key string: {0:?}")]
    InvalidKey(String),

    /// Empty key string.
    #[error("Empty key string")]
    EmptyKey,
}

/// A key pressed in a terminal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TerminalKey {
    code: KeyCode,
    modifiers: KeyModifiers,
}

/// What a [CharPrompt] read from the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PromptInput {
    /// The user pressed one of the cancel keys.
    Cancel,

    /// An ordinary, visible character (or a space).
    Printable(char),

    /// Any other key.
    Unprintable,
}

/// Blocking single-character input.
///
/// This is the only place where a jump waits on the user.
pub trait CharPrompt {
    /// Wait for the next keypress and classify it.
    fn read_char(&mut self) -> JumpResult<PromptInput>;
}

impl TerminalKey {
    pub(crate) fn new(code: KeyCode, mut modifiers: KeyModifiers) -> Self {
        if let KeyCode::Char(_) = code {
            // SHIFT is included for things like ':' and '?' on Windows, but not on *nix systems,
            // so remove it for characters, so that it doesn't break hashing and comparisons.
            modifiers -= KeyModifiers::SHIFT;
        }

        Self { code, modifiers }
    }

    /// Return the character typed with this key, if it was typed without any modifiers.
    pub fn get_char(&self) -> Option<char> {
        if let KeyCode::Char(c) = self.code {
            if self.modifiers.is_empty() {
                return Some(c);
            }
        }

        None
    }

    /// Sort this key into one of the [PromptInput] outcomes.
    ///
    /// Cancel keys take priority, so that something like `<Esc>` or a printable character can be
    /// configured to cancel. Only the printable ASCII range counts as [PromptInput::Printable].
    pub fn classify(&self, cancel: &[TerminalKey]) -> PromptInput {
        if cancel.contains(self) {
            return PromptInput::Cancel;
        }

        match self.get_char() {
            Some(c) if (' '..='~').contains(&c) => PromptInput::Printable(c),
            _ => PromptInput::Unprintable,
        }
    }
}

impl FromStr for TerminalKey {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(KeyError::EmptyKey);
        } else if let Ok((_, key)) = parse_key_str(input) {
            return Ok(key);
        } else {
            return Err(KeyError::InvalidKey(input.to_string()));
        }
    }
}

impl fmt::Display for TerminalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut mods = String::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            mods.push_str("C-");
        }

        if self.modifiers.contains(KeyModifiers::SHIFT) {
            mods.push_str("S-");
        }

        if self.modifiers.contains(KeyModifiers::ALT) {
            mods.push_str("A-");
        }

        let name = match self.code {
            KeyCode::Char('<') => "lt".to_string(),
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) if mods.is_empty() => return write!(f, "{c}"),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Backspace => "BS".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::Null => "Nul".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Delete => "Del".into(),
            KeyCode::Insert => "Insert".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::BackTab => return write!(f, "<S-Tab>"),
            KeyCode::F(n) => format!("F{n}"),
            _ => "Unknown".into(),
        };

        write!(f, "<{mods}{name}>")
    }
}

impl From<KeyCode> for TerminalKey {
    fn from(code: KeyCode) -> Self {
        TerminalKey::new(code, KeyModifiers::NONE)
    }
}

impl From<KeyEvent> for TerminalKey {
    fn from(ke: KeyEvent) -> Self {
        TerminalKey::new(ke.code, ke.modifiers)
    }
}

/// A [CharPrompt] that replays a queue of keys.
///
/// Once the queue runs dry, every read is treated as a cancellation, so a script that ends early
/// can never leave a jump waiting.
#[derive(Clone, Debug)]
pub struct KeyReplay {
    keys: VecDeque<TerminalKey>,
    cancel: Vec<TerminalKey>,
}

impl KeyReplay {
    /// Create a new replay, using `<C-c>` and `<Esc>` as the cancel keys.
    pub fn new<I: IntoIterator<Item = TerminalKey>>(keys: I) -> Self {
        let cancel = vec![
            TerminalKey::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            TerminalKey::from(KeyCode::Esc),
        ];

        KeyReplay { keys: keys.into_iter().collect(), cancel }
    }

    /// Parse a sequence like `"e<C-c>"` into a replay.
    pub fn from_keys(input: &str) -> Result<Self, KeyError> {
        if input.is_empty() {
            return Ok(KeyReplay::new(None));
        }

        match parse_key_seq(input) {
            Ok((_, keys)) => Ok(KeyReplay::new(keys)),
            Err(_) => Err(KeyError::InvalidKey(input.to_string())),
        }
    }

    /// Replace the keys that count as cancelling.
    pub fn with_cancel_keys(mut self, cancel: Vec<TerminalKey>) -> Self {
        self.cancel = cancel;
        self
    }

    /// How many keys are still waiting to be read.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl CharPrompt for KeyReplay {
    fn read_char(&mut self) -> JumpResult<PromptInput> {
        let input = match self.keys.pop_front() {
            Some(key) => key.classify(&self.cancel),
            None => PromptInput::Cancel,
        };

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let cancel = vec![ctl!('c'), key!(KeyCode::Esc)];

        assert_eq!(key!('a').classify(&cancel), PromptInput::Printable('a'));
        assert_eq!(key!('Z').classify(&cancel), PromptInput::Printable('Z'));
        assert_eq!(key!(' ').classify(&cancel), PromptInput::Printable(' '));
        assert_eq!(key!('~').classify(&cancel), PromptInput::Printable('~'));

        assert_eq!(ctl!('c').classify(&cancel), PromptInput::Cancel);
        assert_eq!(key!(KeyCode::Esc).classify(&cancel), PromptInput::Cancel);

        assert_eq!(ctl!('a').classify(&cancel), PromptInput::Unprintable);
        assert_eq!(key!(KeyCode::Enter).classify(&cancel), PromptInput::Unprintable);
        assert_eq!(key!(KeyCode::Left).classify(&cancel), PromptInput::Unprintable);
        assert_eq!(key!('é').classify(&cancel), PromptInput::Unprintable);
        assert_eq!(key!('a', KeyModifiers::ALT).classify(&cancel), PromptInput::Unprintable);

        // Escape isn't special unless it's configured to cancel.
        assert_eq!(key!(KeyCode::Esc).classify(&[]), PromptInput::Unprintable);

        // Printable characters can be made into cancel keys.
        assert_eq!(key!('q').classify(&[key!('q')]), PromptInput::Cancel);
    }

    #[test]
    fn test_shift_normalized() {
        let shifted = TerminalKey::from(KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT));
        assert_eq!(shifted, key!(':'));
        assert_eq!(shifted.get_char(), Some(':'));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(TerminalKey::from_str("a"), Ok(key!('a')));
        assert_eq!(TerminalKey::from_str("<C-c>"), Ok(ctl!('c')));
        assert_eq!(TerminalKey::from_str("<Esc>"), Ok(key!(KeyCode::Esc)));
        assert_eq!(TerminalKey::from_str(""), Err(KeyError::EmptyKey));
        assert_eq!(TerminalKey::from_str("ab"), Err(KeyError::InvalidKey("ab".into())));
        assert_eq!(TerminalKey::from_str("<Nope>"), Err(KeyError::InvalidKey("<Nope>".into())));
    }

    #[test]
    fn test_display() {
        assert_eq!(key!('a').to_string(), "a");
        assert_eq!(key!('<').to_string(), "<lt>");
        assert_eq!(key!(' ').to_string(), "<Space>");
        assert_eq!(ctl!('c').to_string(), "<C-c>");
        assert_eq!(key!(KeyCode::Esc).to_string(), "<Esc>");
        assert_eq!(key!(KeyCode::F(5)).to_string(), "<F5>");
        assert_eq!(key!(KeyCode::BackTab).to_string(), "<S-Tab>");

        // Displayed keys parse back to themselves.
        for key in [ctl!('c'), key!(KeyCode::Esc), key!('<'), key!(KeyCode::PageDown)] {
            assert_eq!(TerminalKey::from_str(&key.to_string()), Ok(key));
        }
    }

    #[test]
    fn test_replay() {
        let mut keys = KeyReplay::from_keys("e<Esc><C-a>").unwrap();
        assert_eq!(keys.remaining(), 3);

        assert_eq!(keys.read_char().unwrap(), PromptInput::Printable('e'));
        assert_eq!(keys.read_char().unwrap(), PromptInput::Cancel);
        assert_eq!(keys.read_char().unwrap(), PromptInput::Unprintable);

        // Running out of keys cancels.
        assert_eq!(keys.remaining(), 0);
        assert_eq!(keys.read_char().unwrap(), PromptInput::Cancel);
    }

    #[test]
    fn test_replay_cancel_keys() {
        let mut keys = KeyReplay::from_keys("<Esc>q").unwrap().with_cancel_keys(vec![key!('q')]);

        assert_eq!(keys.read_char().unwrap(), PromptInput::Unprintable);
        assert_eq!(keys.read_char().unwrap(), PromptInput::Cancel);
    }

    #[test]
    fn test_replay_invalid() {
        let err = KeyReplay::from_keys("a<Bogus>").unwrap_err();
        assert_eq!(err, KeyError::InvalidKey("a<Bogus>".into()));
    }
}

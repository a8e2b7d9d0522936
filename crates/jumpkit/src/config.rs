//! # Jump configuration
//!
//! ## Overview
//!
//! A [JumpConfig] holds everything about a jump that an application might want to change: which
//! characters are used as labels, how labels are drawn, how deep narrowing may go, which keys
//! cancel, and what the prompts say.
//!
//! ## Example
//!
//! ```
//! use jumpkit::config::{Alphabet, JumpConfig, LabelAttrs, LabelStyle};
//!
//! let config = JumpConfig::builder()
//!     .alphabet(Alphabet::new("asdfghjkl").unwrap())
//!     .style(LabelStyle::new(LabelAttrs::UNDERLINED))
//!     .max_depth(4)
//!     .cancel_keys(&["<Esc>", "q"])
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(config.alphabet().len(), 9);
//! assert_eq!(config.max_depth(), 4);
//! ```
use std::str::FromStr;

use bitflags::bitflags;
use crossterm::style::Color;

use crate::errors::{ConfigError, ConfigResult};
use crate::key::TerminalKey;

/// Default maximum number of narrowing rounds.
pub const DEFAULT_MAX_DEPTH: usize = 10;

const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DEFAULT_CANCEL_KEYS: [&str; 2] = ["<C-c>", "<Esc>"];
const DEFAULT_TARGET_PROMPT: &str = "Jump to: ";
const DEFAULT_SELECT_PROMPT: &str = "Select: ";

/// The ordered set of characters used as labels.
///
/// The position of a character in the alphabet is its label index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    labels: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from the characters of a string, in order.
    ///
    /// Every label must be typeable at the label prompt, which means printable ASCII that isn't a
    /// space. Labels must also be unique, since otherwise a label couldn't pick out one group.
    pub fn new(labels: &str) -> ConfigResult<Self> {
        let mut res: Vec<char> = Vec::with_capacity(labels.len());

        for c in labels.chars() {
            if !c.is_ascii_graphic() {
                return Err(ConfigError::UntypeableLabel(c));
            }

            if res.contains(&c) {
                return Err(ConfigError::DuplicateLabel(c));
            }

            res.push(c);
        }

        if res.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        Ok(Alphabet { labels: res })
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// The label for a given index, wrapping around once the labels run out.
    pub fn get(&self, idx: usize) -> char {
        self.labels[idx % self.labels.len()]
    }

    /// The index of a label, if it belongs to this alphabet.
    pub fn index_of(&self, label: char) -> Option<usize> {
        self.labels.iter().position(|c| *c == label)
    }

    /// Iterate over the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.labels.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet { labels: DEFAULT_ALPHABET.chars().collect() }
    }
}

impl FromStr for Alphabet {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Alphabet::new(s)
    }
}

bitflags! {
    /// Text attributes applied to a drawn label.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct LabelAttrs: u8 {
        /// Swap the foreground and background colors.
        const REVERSED = 0b00000001;

        /// Draw the label in bold.
        const BOLD = 0b00000010;

        /// Underline the label.
        const UNDERLINED = 0b00000100;
    }
}

/// How a label stands out from the text around it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LabelStyle {
    /// Text attributes.
    pub attrs: LabelAttrs,

    /// Foreground color, if the terminal supports colors.
    pub fg: Option<Color>,

    /// Background color, if the terminal supports colors.
    pub bg: Option<Color>,
}

impl LabelStyle {
    /// Create a style with the given attributes and no colors.
    pub fn new(attrs: LabelAttrs) -> Self {
        LabelStyle { attrs, fg: None, bg: None }
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle::new(LabelAttrs::REVERSED | LabelAttrs::BOLD)
    }
}

/// Settings for a [JumpController](crate::controller::JumpController).
#[derive(Clone, Debug)]
pub struct JumpConfig {
    alphabet: Alphabet,
    style: LabelStyle,
    max_depth: usize,
    cancel_keys: Vec<TerminalKey>,
    target_prompt: String,
    select_prompt: String,
}

impl JumpConfig {
    /// Start building a new configuration from the defaults.
    pub fn builder() -> JumpConfigBuilder {
        JumpConfigBuilder::default()
    }

    /// The label alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The style labels are drawn with.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// The maximum number of narrowing rounds before giving up.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Keys that cancel a prompt.
    pub fn cancel_keys(&self) -> &[TerminalKey] {
        &self.cancel_keys
    }

    /// Text shown when asking for the target character.
    pub fn target_prompt(&self) -> &str {
        &self.target_prompt
    }

    /// Text shown when asking for a label.
    pub fn select_prompt(&self) -> &str {
        &self.select_prompt
    }

    /// A reminder of how to cancel, shown alongside the prompts.
    ///
    /// This names the first cancel key, and is `None` when there aren't any.
    pub fn cancel_hint(&self) -> Option<String> {
        self.cancel_keys.first().map(|key| format!("{key} Cancel"))
    }
}

impl Default for JumpConfig {
    fn default() -> Self {
        let cancel_keys = DEFAULT_CANCEL_KEYS
            .iter()
            .filter_map(|k| TerminalKey::from_str(k).ok())
            .collect();

        JumpConfig {
            alphabet: Alphabet::default(),
            style: LabelStyle::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            cancel_keys,
            target_prompt: DEFAULT_TARGET_PROMPT.into(),
            select_prompt: DEFAULT_SELECT_PROMPT.into(),
        }
    }
}

/// Build a new [JumpConfig].
#[derive(Default)]
pub struct JumpConfigBuilder(JumpConfig);

impl JumpConfigBuilder {
    /// Finish building the [JumpConfig].
    pub fn build(self) -> JumpConfig {
        self.0
    }

    /// Set the [Alphabet].
    pub fn alphabet(mut self, v: Alphabet) -> Self {
        self.0.alphabet = v;
        self
    }

    /// Set the [LabelStyle].
    pub fn style(mut self, v: LabelStyle) -> Self {
        self.0.style = v;
        self
    }

    /// Set how many rounds of narrowing are allowed.
    pub fn max_depth(mut self, v: usize) -> Self {
        self.0.max_depth = v;
        self
    }

    /// Set the keys that cancel, written like `"<Esc>"` or `"<C-g>"`.
    pub fn cancel_keys(mut self, keys: &[&str]) -> ConfigResult<Self> {
        self.0.cancel_keys = keys
            .iter()
            .map(|k| TerminalKey::from_str(k))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self)
    }

    /// Set the prompt shown when asking for the target character.
    pub fn target_prompt(mut self, v: impl Into<String>) -> Self {
        self.0.target_prompt = v.into();
        self
    }

    /// Set the prompt shown when asking for a label.
    pub fn select_prompt(mut self, v: impl Into<String>) -> Self {
        self.0.select_prompt = v.into();
        self
    }
}

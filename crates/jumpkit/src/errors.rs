//! # Error Types
//!
//! ## Overview
//!
//! This module contains the errors that can end a jump early. Every one of them is reported to
//! the user through the [StatusLine] using its [Display] output, so the messages here are
//! written for the status bar.
//!
//! [StatusLine]: crate::view::StatusLine
//! [Display]: std::fmt::Display
use crate::key::KeyError;

/// Reasons a jump can finish without moving the cursor.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum JumpError {
    /// The user pressed a cancel key at one of the prompts.
    #[error("Cancelled")]
    Cancelled,

    /// The target character could not be typed as a printable character.
    #[error("Unprintable character")]
    Unprintable,

    /// The user asked to jump to a space, which can never start a word.
    #[error("Cannot jump to a space")]
    SpaceTarget,

    /// No word in the viewport starts with the target character.
    #[error("No matches found")]
    NoMatch,

    /// The typed label isn't currently displayed.
    #[error("No such jump label")]
    InvalidSelection,

    /// Narrowing went this many levels deep without reaching a single candidate.
    #[error("Too many candidates, selection aborted")]
    RecursionLimit(usize),

    /// Failure while reading input or updating the display.
    #[error("Input/Output Error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Errors from building a [JumpConfig].
///
/// [JumpConfig]: crate::config::JumpConfig
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The label alphabet has no characters.
    #[error("Label alphabet is empty")]
    EmptyAlphabet,

    /// A character appears in the label alphabet more than once.
    #[error("Label {0:?} appears more than once")]
    DuplicateLabel(char),

    /// A character in the label alphabet can't be typed at the label prompt.
    #[error("Label {0:?} cannot be typed at the prompt")]
    UntypeableLabel(char),

    /// A cancel key could not be parsed.
    #[error("Invalid cancel key: {0}")]
    InvalidKey(#[from] KeyError),
}

/// Common result type for jump operations.
pub type JumpResult<V> = Result<V, JumpError>;

/// Result type for configuration.
pub type ConfigResult<V> = Result<V, ConfigError>;

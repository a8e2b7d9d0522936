//! # jumpkit
//!
//! ## Overview
//!
//! This crate implements labeled jump navigation for terminal text views, in the style of Vim's
//! EasyMotion and Emacs' ace-jump.
//!
//! The user types a target character, every word that starts with that character in the visible
//! viewport gets covered with a single-character label, and typing a label moves the cursor
//! there. When there are more occurrences than labels, the labels get reused, and selecting one
//! of them narrows the candidates down to that group and labels them again.
//!
//! The [controller::JumpController] drives this process. It talks to the application through a
//! small set of traits in [view] and [key], so that it can be used with any rendering layer.
//! A soft-wrapping reference viewport, [view::TextView], is included for applications that don't
//! already have one, and the [jumpkit-ratatui] crate provides a terminal screen and a key prompt.
//!
//! ## Example
//!
//! ```
//! use jumpkit::{
//!     config::JumpConfig,
//!     controller::JumpController,
//!     key::KeyReplay,
//!     view::{StatusLine, TextView},
//! };
//!
//! struct Host {
//!     view: TextView,
//!     status: Option<String>,
//! }
//!
//! jumpkit::delegate_view!(Host, view);
//!
//! impl StatusLine for Host {
//!     fn show_prompt(&mut self, prompt: &str) {
//!         self.status = Some(prompt.into());
//!     }
//!
//!     fn report_status(&mut self, msg: &str) {
//!         self.status = Some(msg.into());
//!     }
//!
//!     fn blank_status(&mut self) {
//!         self.status = None;
//!     }
//! }
//!
//! let mut host = Host { view: TextView::new("hello there\nthe end", 20, 5), status: None };
//! let mut keys = KeyReplay::from_keys("tb").unwrap();
//!
//! let jumper = JumpController::new(JumpConfig::default());
//! let target = jumper.run(&mut host, &mut keys).unwrap();
//!
//! assert_eq!(target.line, 1);
//! assert_eq!(target.column, 0);
//! assert_eq!(host.view.cursor(), target);
//! ```
//!
//! [jumpkit-ratatui]: https://docs.rs/jumpkit-ratatui/latest/jumpkit_ratatui/

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

#[macro_use]
mod util;

pub mod config;
pub mod controller;
pub mod errors;
pub mod key;
pub mod overlay;
pub mod scan;
pub mod view;

pub use crossterm;

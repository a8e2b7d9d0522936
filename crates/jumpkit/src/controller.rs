//! # Jump controller
//!
//! ## Overview
//!
//! [JumpController] runs a complete jump: it prompts for a target character, labels every word
//! in the viewport that starts with it, prompts for a label, and moves the cursor.
//!
//! When there are more candidates than labels, the labels get reused, and picking one of them
//! only narrows things down to the candidates sharing that label. Those get labeled again from
//! the start of the alphabet, and the user is asked again. This repeats at most
//! [JumpConfig::max_depth] times.
//!
//! However a jump ends, every label is erased before [JumpController::run] returns, and the
//! outcome is shown on the host's [StatusLine](crate::view::StatusLine).
use crate::config::JumpConfig;
use crate::errors::{JumpError, JumpResult};
use crate::key::{CharPrompt, PromptInput};
use crate::overlay::OverlayStore;
use crate::scan::{scan, Occurrence};
use crate::view::{CursorPositioner, JumpHost, JumpView, StatusLine, TextPos};

const ONE_CANDIDATE: &str = "One candidate, jumping to it directly";

/// Where the candidates for a highlighting pass come from.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Candidates {
    /// Scan the viewport for a target character.
    Scan(char),

    /// Reuse the occurrences from a bucket picked during the previous pass.
    Saved(Vec<Occurrence>),
}

/// The steps of a jump.
#[derive(Clone, Debug, Eq, PartialEq)]
enum JumpState {
    /// Waiting for the user to type the target character.
    AwaitTarget,

    /// Labeling a set of candidates.
    Highlight(Candidates),

    /// Waiting for the user to pick one of this many labeled candidates.
    AwaitLabel(usize),
}

/// Drives jumps using a fixed [JumpConfig].
#[derive(Clone, Debug, Default)]
pub struct JumpController {
    config: JumpConfig,
}

impl JumpController {
    /// Create a controller that uses the given configuration.
    pub fn new(config: JumpConfig) -> Self {
        JumpController { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &JumpConfig {
        &self.config
    }

    /// Run a jump from start to finish.
    ///
    /// On success the cursor has been moved, and the new position is returned. On failure the
    /// cursor hasn't moved, and the reason has already been shown to the user; the error is only
    /// returned so that callers can react to it if they want to.
    pub fn run<H, P>(&self, host: &mut H, prompt: &mut P) -> JumpResult<TextPos>
    where
        H: JumpHost + ?Sized,
        P: CharPrompt + ?Sized,
    {
        let mut overlay = OverlayStore::new(self.config.alphabet().len());
        let res = self.select(host, prompt, &mut overlay);

        overlay.restore(host);

        if let Err(e) = host.flush() {
            log::warn!("Failed to redraw view after removing jump labels: {e}");
        }

        match res {
            Ok(target) => {
                log::debug!("jumping to {target:?}");
                host.move_cursor_to(target.line, target.column + 1);
                host.set_refresh_needed();

                Ok(target)
            },
            Err(e) => {
                log::debug!("jump ended without moving: {e}");
                host.report_status(&e.to_string());

                Err(e)
            },
        }
    }

    fn select<H, P>(
        &self,
        host: &mut H,
        prompt: &mut P,
        overlay: &mut OverlayStore,
    ) -> JumpResult<TextPos>
    where
        H: JumpHost + ?Sized,
        P: CharPrompt + ?Sized,
    {
        let alphabet = self.config.alphabet();
        let mut state = JumpState::AwaitTarget;
        let mut depth = 0;

        loop {
            state = match state {
                JumpState::AwaitTarget => {
                    let target = self.read_target(host, prompt)?;
                    log::debug!("jump target is {target:?}");

                    JumpState::Highlight(Candidates::Scan(target))
                },
                JumpState::Highlight(candidates) => {
                    host.blank_status();

                    let occurrences = match candidates {
                        Candidates::Scan(target) => scan(&*host, target),
                        Candidates::Saved(saved) => saved,
                    };

                    let style = self.config.style();
                    let count = overlay.label(host, occurrences, alphabet, style);
                    host.flush()?;

                    log::debug!("labeled {count} candidates at depth {depth}");

                    match count {
                        0 => return Err(JumpError::NoMatch),
                        1 => {
                            if depth == 0 {
                                host.report_status(ONE_CANDIDATE);
                            }

                            return first_in_bucket(overlay, 0);
                        },
                        n => JumpState::AwaitLabel(n),
                    }
                },
                JumpState::AwaitLabel(count) => {
                    self.prompt_user(host, self.config.select_prompt())?;

                    let input = prompt.read_char()?;
                    host.blank_status();

                    let label = match input {
                        PromptInput::Cancel => return Err(JumpError::Cancelled),
                        PromptInput::Unprintable => return Err(JumpError::InvalidSelection),
                        PromptInput::Printable(c) => c,
                    };

                    let idx = match alphabet.index_of(label) {
                        Some(idx) if idx < count => idx,
                        _ => {
                            log::debug!("no candidate labeled {label:?}");
                            return Err(JumpError::InvalidSelection);
                        },
                    };

                    if count <= alphabet.len() || overlay.bucket_len(idx) == 1 {
                        return first_in_bucket(overlay, idx);
                    }

                    if depth >= self.config.max_depth() {
                        return Err(JumpError::RecursionLimit(depth));
                    }

                    let saved = overlay.snapshot(idx);
                    overlay.restore(host);
                    depth += 1;

                    log::debug!("narrowing to {} candidates under {label:?}", saved.len());

                    JumpState::Highlight(Candidates::Saved(saved))
                },
            };
        }
    }

    fn read_target<H, P>(&self, host: &mut H, prompt: &mut P) -> JumpResult<char>
    where
        H: JumpHost + ?Sized,
        P: CharPrompt + ?Sized,
    {
        self.prompt_user(host, self.config.target_prompt())?;

        match prompt.read_char()? {
            PromptInput::Cancel => Err(JumpError::Cancelled),
            PromptInput::Unprintable => Err(JumpError::Unprintable),
            PromptInput::Printable(' ') => Err(JumpError::SpaceTarget),
            PromptInput::Printable(c) => Ok(c.to_ascii_lowercase()),
        }
    }

    fn prompt_user<H: JumpHost + ?Sized>(&self, host: &mut H, msg: &str) -> JumpResult<()> {
        host.show_prompt(msg);

        if let Some(hint) = self.config.cancel_hint() {
            host.show_cancel_hint(&hint);
        }

        host.flush()?;

        Ok(())
    }
}

fn first_in_bucket(overlay: &OverlayStore, idx: usize) -> JumpResult<TextPos> {
    overlay
        .bucket(idx)
        .next()
        .map(|occ| occ.logical)
        .ok_or(JumpError::InvalidSelection)
}

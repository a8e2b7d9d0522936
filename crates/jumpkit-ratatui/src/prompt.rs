//! # Terminal prompt
//!
//! ## Overview
//!
//! [TerminalPrompt] reads jump input straight from the terminal using [crossterm]. It blocks until
//! a key is pressed; mouse, focus, paste and resize events are skipped, as are key releases on
//! terminals that report them.
use crossterm::event::{read, Event, KeyEventKind};

use jumpkit::config::JumpConfig;
use jumpkit::errors::JumpResult;
use jumpkit::key::{CharPrompt, PromptInput, TerminalKey};

/// Sort a terminal event into a prompt outcome, or return `None` if it should be ignored.
pub fn classify_event(event: &Event, cancel: &[TerminalKey]) -> Option<PromptInput> {
    match event {
        Event::Key(ke) if ke.kind != KeyEventKind::Release => {
            Some(TerminalKey::from(*ke).classify(cancel))
        },
        _ => None,
    }
}

/// A [CharPrompt] that reads keys from the terminal.
#[derive(Clone, Debug)]
pub struct TerminalPrompt {
    cancel: Vec<TerminalKey>,
}

impl TerminalPrompt {
    /// Create a prompt that cancels on the keys in the given configuration.
    pub fn new(config: &JumpConfig) -> Self {
        TerminalPrompt { cancel: config.cancel_keys().to_vec() }
    }
}

impl CharPrompt for TerminalPrompt {
    fn read_char(&mut self) -> JumpResult<PromptInput> {
        loop {
            let event = read()?;

            if let Some(input) = classify_event(&event, &self.cancel) {
                return Ok(input);
            }

            log::trace!("ignoring event while prompting: {event:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_classify_keys() {
        let config = JumpConfig::default();
        let cancel = config.cancel_keys();

        let ev = key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(classify_event(&ev, cancel), Some(PromptInput::Printable('a')));

        let ev = key(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(classify_event(&ev, cancel), Some(PromptInput::Printable('A')));

        let ev = key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(classify_event(&ev, cancel), Some(PromptInput::Cancel));

        let ev = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(classify_event(&ev, cancel), Some(PromptInput::Cancel));

        let ev = key(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(classify_event(&ev, cancel), Some(PromptInput::Unprintable));

        let ev = key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(classify_event(&ev, cancel), Some(PromptInput::Unprintable));

        let ev = key(KeyCode::Char('é'), KeyModifiers::NONE);
        assert_eq!(classify_event(&ev, cancel), Some(PromptInput::Unprintable));
    }

    #[test]
    fn test_ignored_events() {
        let cancel = JumpConfig::default().cancel_keys().to_vec();

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(classify_event(&release, &cancel), None);

        let repeat = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        });
        assert_eq!(classify_event(&repeat, &cancel), Some(PromptInput::Printable('a')));

        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(classify_event(&mouse, &cancel), None);
        assert_eq!(classify_event(&Event::Resize(80, 24), &cancel), None);
        assert_eq!(classify_event(&Event::FocusGained, &cancel), None);
    }

    #[test]
    fn test_custom_cancel() {
        let config = JumpConfig::builder().cancel_keys(&["q"]).unwrap().build();
        let prompt = TerminalPrompt::new(&config);

        let ev = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(classify_event(&ev, &prompt.cancel), Some(PromptInput::Cancel));

        let ev = key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(classify_event(&ev, &prompt.cancel), Some(PromptInput::Unprintable));
    }
}

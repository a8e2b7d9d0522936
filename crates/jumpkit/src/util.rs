#[allow(unused)]
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[allow(unused_macros)]
macro_rules! key_event {
    ($ch: literal) => {
        KeyEvent::new(KeyCode::Char($ch), match $ch.is_ascii_uppercase() {
            true => crossterm::event::KeyModifiers::SHIFT,
            false => crossterm::event::KeyModifiers::NONE,
        })
    };
    ($kc: expr) => {
        KeyEvent::new($kc, crossterm::event::KeyModifiers::NONE)
    };
    ($kc: literal, $km: expr) => {
        KeyEvent::new(KeyCode::Char($kc), $km)
    };
    ($kc: expr, $km: expr) => {
        KeyEvent::new($kc, $km)
    };
}

#[allow(unused_macros)]
macro_rules! key {
    ($ch: literal) => {
        $crate::key::TerminalKey::from(key_event!($ch))
    };
    ($kc: expr) => {
        $crate::key::TerminalKey::from(key_event!($kc))
    };
    ($kc: literal, $km: expr) => {
        $crate::key::TerminalKey::from(key_event!($kc, $km))
    };
    ($kc: expr, $km: expr) => {
        $crate::key::TerminalKey::from(key_event!($kc, $km))
    };
}

#[allow(unused_macros)]
macro_rules! ctl {
    ($ch: literal) => {
        key!(KeyCode::Char($ch.to_ascii_lowercase()), KeyModifiers::CONTROL)
    };
}

/// Generate the text for a viewport where every word starts with the same character.
#[cfg(test)]
pub(crate) fn repeated_words(word: &str, count: usize, per_line: usize) -> String {
    let mut s = String::new();

    for i in 0..count {
        if i > 0 {
            s.push(if i % per_line == 0 { '\n' } else { ' ' });
        }

        s.push_str(word);
    }

    s
}

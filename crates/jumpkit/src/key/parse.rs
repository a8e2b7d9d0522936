use std::ops::BitOr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, satisfy},
    combinator::{eof, map_res, value},
    multi::{many0, many1},
    IResult,
};

use super::TerminalKey;

fn parse_modifier(input: &str) -> IResult<&str, KeyModifiers> {
    alt((
        value(KeyModifiers::ALT, tag("A-")),
        value(KeyModifiers::ALT, tag("M-")),
        value(KeyModifiers::CONTROL, tag("C-")),
        value(KeyModifiers::SHIFT, tag("S-")),
    ))(input)
}

fn parse_arrow(input: &str) -> IResult<&str, KeyCode> {
    alt((
        value(KeyCode::Left, tag("Left")),
        value(KeyCode::Right, tag("Right")),
        value(KeyCode::Up, tag("Up")),
        value(KeyCode::Down, tag("Down")),
    ))(input)
}

fn parse_named_ascii(input: &str) -> IResult<&str, KeyCode> {
    alt((
        value(KeyCode::Char(' '), tag("Space")),
        value(KeyCode::Char('|'), tag("Bar")),
        value(KeyCode::Char('\\'), tag("Bslash")),
        value(KeyCode::Char('<'), tag("lt")),
    ))(input)
}

fn parse_named_ctl(input: &str) -> IResult<&str, KeyCode> {
    alt((
        value(KeyCode::Esc, tag("Esc")),
        value(KeyCode::Tab, tag("Tab")),
        value(KeyCode::Backspace, alt((tag("BackSpace"), tag("BS")))),
        value(KeyCode::Char('\n'), alt((tag("NL"), tag("NewLine"), tag("LineFeed"), tag("LF")))),
        value(KeyCode::Enter, alt((tag("CR"), tag("Return"), tag("Enter")))),
        value(KeyCode::Null, tag("Nul")),
    ))(input)
}

fn parse_keyname(input: &str) -> IResult<&str, KeyCode> {
    alt((
        parse_arrow,
        parse_named_ascii,
        parse_named_ctl,
        value(KeyCode::PageUp, tag("PageUp")),
        value(KeyCode::PageDown, tag("PageDown")),
        value(KeyCode::Home, tag("Home")),
        value(KeyCode::End, tag("End")),
        value(KeyCode::Insert, alt((tag("Insert"), tag("Ins")))),
        value(KeyCode::Delete, alt((tag("Delete"), tag("Del")))),
    ))(input)
}

fn parse_base10_u8(input: &str) -> Result<u8, std::num::ParseIntError> {
    input.parse::<u8>()
}

fn parse_function(input: &str) -> IResult<&str, KeyCode> {
    let (input, _) = char('F')(input)?;
    let (input, n) = map_res(digit1, parse_base10_u8)(input)?;

    Ok((input, KeyCode::F(n)))
}

fn parse_control(input: &str) -> IResult<&str, KeyCode> {
    let (input, c) = alt((
        char('@'),
        satisfy(|c| c.is_ascii_alphanumeric()),
        char('['),
        char('\\'),
        char(']'),
        char('^'),
        char('_'),
        char('?'),
    ))(input)?;

    Ok((input, KeyCode::Char(c)))
}

fn parse_special(input: &str) -> IResult<&str, TerminalKey> {
    let (input, _) = char('<')(input)?;
    let (input, m) = many0(parse_modifier)(input)?;
    let (input, mut k) = alt((parse_keyname, parse_function, parse_control))(input)?;
    let (input, _) = char('>')(input)?;

    let mut m = m.into_iter().fold(KeyModifiers::NONE, BitOr::bitor);

    if let KeyCode::Char(c) = k {
        if m == KeyModifiers::CONTROL {
            let key = match c.to_ascii_lowercase() {
                'i' => key!(KeyCode::Tab),
                'j' => key!(KeyCode::Char('\n')),
                'm' => key!(KeyCode::Enter),
                '[' => key!(KeyCode::Esc),
                '?' => key!(KeyCode::Backspace),
                c => key!(KeyCode::Char(c), m),
            };

            return Ok((input, key));
        }

        if m.contains(KeyModifiers::SHIFT) {
            k = KeyCode::Char(c.to_ascii_uppercase());
        }

        if m.contains(KeyModifiers::ALT) && c.is_uppercase() {
            m |= KeyModifiers::SHIFT;
        }
    } else if let KeyCode::Tab = k {
        if m == KeyModifiers::SHIFT {
            return Ok((input, key!(KeyCode::BackTab)));
        }
    }

    return Ok((input, key!(k, m)));
}

fn parse_key_simple(input: &str) -> IResult<&str, TerminalKey> {
    // A literal '<' has to be written as "<lt>", so that misspelled names are errors.
    let (input, c) = satisfy(|c| c != '<')(input)?;

    Ok((input, key!(KeyCode::Char(c))))
}

fn parse_key(input: &str) -> IResult<&str, TerminalKey> {
    alt((parse_special, parse_key_simple))(input)
}

pub(super) fn parse_key_str(input: &str) -> IResult<&str, TerminalKey> {
    let (input, key) = parse_key(input)?;
    let (input, _) = eof(input)?;

    Ok((input, key))
}

pub(super) fn parse_key_seq(input: &str) -> IResult<&str, Vec<TerminalKey>> {
    let (input, keys) = many1(parse_key)(input)?;
    let (input, _) = eof(input)?;

    Ok((input, keys))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! res {
        ( $( $x: expr ),* ) => {
            Ok(("", vec![ $( $x, )* ]))
        };
    }

    fn parse(input: &str) -> IResult<&str, Vec<TerminalKey>> {
        parse_key_seq(input)
    }

    #[test]
    fn test_ctl_case() {
        assert_eq!(parse("<C-A>"), res![ctl!('a')]);
        assert_eq!(parse("<C-c>"), res![ctl!('c')]);
    }

    #[test]
    fn test_shift() {
        let mods = KeyModifiers::SHIFT;

        assert_eq!(parse("<S-a>"), res![key!(KeyCode::Char('A'), mods)]);
        assert_eq!(parse("<S-A>"), res![key!('A')]);
        assert_eq!(parse("<S-Tab>"), res![key!(KeyCode::BackTab)]);
    }

    #[test]
    fn test_alt() {
        assert_eq!(parse("<A-a>"), res![key!('a', KeyModifiers::ALT)]);
        assert_eq!(parse("<M-a>"), res![key!('a', KeyModifiers::ALT)]);
        assert_eq!(parse("<A-B>"), res![key!('B', KeyModifiers::ALT | KeyModifiers::SHIFT)]);
    }

    #[test]
    fn test_ctl_rename() {
        assert_eq!(parse("<C-?>"), res![key!(KeyCode::Backspace)]);
        assert_eq!(parse("<C-I>"), res![key!(KeyCode::Tab)]);
        assert_eq!(parse("<C-J>"), res![key!('\n')]);
        assert_eq!(parse("<C-M>"), res![key!(KeyCode::Enter)]);
        assert_eq!(parse("<C-[>"), res![key!(KeyCode::Esc)]);
    }

    #[test]
    fn test_named() {
        assert_eq!(parse("<Space>"), res![key!(' ')]);
        assert_eq!(parse("<Bar>"), res![key!('|')]);
        assert_eq!(parse("<lt>"), res![key!('<')]);
        assert_eq!(parse("<BS>"), res![key!(KeyCode::Backspace)]);
        assert_eq!(parse("<BackSpace>"), res![key!(KeyCode::Backspace)]);
        assert_eq!(parse("<CR>"), res![key!(KeyCode::Enter)]);
        assert_eq!(parse("<Esc>"), res![key!(KeyCode::Esc)]);
        assert_eq!(parse("<Del>"), res![key!(KeyCode::Delete)]);
        assert_eq!(parse("<PageUp>"), res![key!(KeyCode::PageUp)]);
        assert_eq!(parse("<Left>"), res![key!(KeyCode::Left)]);
        assert_eq!(parse("<F10>"), res![key!(KeyCode::F(10))]);
    }

    #[test]
    fn test_sequence() {
        assert_eq!(parse("eab"), res![key!('e'), key!('a'), key!('b')]);
        assert_eq!(parse("t<C-c>"), res![key!('t'), ctl!('c')]);
        assert_eq!(parse("<lt>>"), res![key!('<'), key!('>')]);
        assert!(parse("").is_err());
    }

    #[test]
    fn test_bad_names() {
        assert!(parse("a<Bogus>").is_err());
        assert!(parse("t<Esx>").is_err());
        assert!(parse("<").is_err());
        assert!(parse("a<C-c").is_err());
        assert!(parse_key_str("<Esx>").is_err());
    }

    #[test]
    fn test_single() {
        assert_eq!(parse_key_str("x"), Ok(("", key!('x'))));
        assert_eq!(parse_key_str("<Esc>"), Ok(("", key!(KeyCode::Esc))));
        assert!(parse_key_str("xy").is_err());
    }
}

//! Display commands
//!
//! One command per text line, a name followed by an optional argument:
//!
//! ```text
//! color 255,0,0
//! foreground 255,255,0
//! background 0,0,32
//! power 0.4
//! fx 12,20
//! spectrum 5
//! cycle
//! write hello world
//! alert OPEN
//! clock 1496320496
//! chase
//! noise 3
//! time
//! ```
//!
//! Names are case-insensitive. Everything after the first whitespace is
//! the argument, with surrounding whitespace removed.

mod line;

pub use line::{LineError, LineReader, MAX_LINE_LEN};

use heapless::String;

use crate::color::Color;
use crate::config::{parse_color, parse_power, ParseError};

/// Longest text a single command can carry
pub const MAX_TEXT_LEN: usize = 64;

/// Text argument of [`Command::Write`] and [`Command::Alert`]
pub type Text = String<MAX_TEXT_LEN>;

/// A request to change what the bar shows
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Fill the whole bar with a color
    Color(Color),
    /// Set the text color
    Foreground(Color),
    /// Set the background color and fill the bar with it
    Background(Color),
    /// Set the brightness multiplier
    Power(f32),
    /// Roll the hue line up the bar, then clear it
    Effect { offset: usize, delay_ms: u32 },
    /// Paint the hue line on every row
    Spectrum { offset: usize },
    /// Rotate every row one pixel left
    Cycle,
    /// Scroll a framed message
    Write(Text),
    /// Flash a short centered notice
    Alert(Text),
    /// Set the wall clock from a Unix timestamp (seconds)
    SetClock(u32),
    /// Show the current time
    ShowTime,
    /// Walk one lit LED along the strip
    Chase,
    /// Show frames of random pixels
    Noise { times: usize },
}

/// Command parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line is empty or names no known command
    UnknownCommand,
    /// Command needs an argument and got none
    MissingArgument,
    /// Argument could not be parsed
    InvalidArgument,
    /// Text is longer than [`MAX_TEXT_LEN`] bytes
    TextTooLong,
}

impl From<ParseError> for CommandError {
    fn from(_: ParseError) -> Self {
        CommandError::InvalidArgument
    }
}

impl Command {
    /// Parse a single command line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name {
            n if n.eq_ignore_ascii_case("color") => Command::Color(parse_color(required(arg)?)?),
            n if n.eq_ignore_ascii_case("foreground") => {
                Command::Foreground(parse_color(required(arg)?)?)
            }
            n if n.eq_ignore_ascii_case("background") => {
                Command::Background(parse_color(required(arg)?)?)
            }
            n if n.eq_ignore_ascii_case("power") => Command::Power(parse_power(required(arg)?)?),
            n if n.eq_ignore_ascii_case("fx") => parse_effect(required(arg)?)?,
            n if n.eq_ignore_ascii_case("spectrum") => Command::Spectrum {
                offset: if arg.is_empty() { 0 } else { number(arg)? },
            },
            n if n.eq_ignore_ascii_case("cycle") => Command::Cycle,
            n if n.eq_ignore_ascii_case("write") => Command::Write(text(required(arg)?)?),
            n if n.eq_ignore_ascii_case("alert") => Command::Alert(text(required(arg)?)?),
            n if n.eq_ignore_ascii_case("clock") => Command::SetClock(number(required(arg)?)?),
            n if n.eq_ignore_ascii_case("time") => Command::ShowTime,
            n if n.eq_ignore_ascii_case("chase") => Command::Chase,
            n if n.eq_ignore_ascii_case("noise") => Command::Noise {
                times: if arg.is_empty() { 1 } else { number(arg)? },
            },
            _ => return Err(CommandError::UnknownCommand),
        };

        Ok(command)
    }
}

fn required(arg: &str) -> Result<&str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument)
    } else {
        Ok(arg)
    }
}

fn number<T: core::str::FromStr>(value: &str) -> Result<T, CommandError> {
    value
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidArgument)
}

fn text(value: &str) -> Result<Text, CommandError> {
    let mut text = Text::new();
    text.push_str(value)
        .map_err(|_| CommandError::TextTooLong)?;
    Ok(text)
}

/// `offset[,delay]`, delay defaulting to 0 ms
fn parse_effect(arg: &str) -> Result<Command, CommandError> {
    let (offset, delay_ms) = match arg.split_once(',') {
        Some((offset, delay)) => (number(offset)?, number(delay)?),
        None => (number(arg)?, 0),
    };
    Ok(Command::Effect { offset, delay_ms })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(s: &str) -> Text {
        let mut t = Text::new();
        t.push_str(s).unwrap();
        t
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(
            Command::parse("color 255,0,0"),
            Ok(Command::Color(Color::new(255, 0, 0)))
        );
        assert_eq!(
            Command::parse("  Foreground 1, 2, 3 "),
            Ok(Command::Foreground(Color::new(1, 2, 3)))
        );
        assert_eq!(
            Command::parse("BACKGROUND 0,0,32"),
            Ok(Command::Background(Color::new(0, 0, 32)))
        );
    }

    #[test]
    fn test_parse_effects() {
        assert_eq!(
            Command::parse("fx 12,20"),
            Ok(Command::Effect {
                offset: 12,
                delay_ms: 20
            })
        );
        assert_eq!(
            Command::parse("fx 3"),
            Ok(Command::Effect {
                offset: 3,
                delay_ms: 0
            })
        );
        assert_eq!(Command::parse("spectrum"), Ok(Command::Spectrum { offset: 0 }));
        assert_eq!(Command::parse("spectrum 7"), Ok(Command::Spectrum { offset: 7 }));
        assert_eq!(Command::parse("cycle"), Ok(Command::Cycle));
        assert_eq!(Command::parse("chase"), Ok(Command::Chase));
        assert_eq!(Command::parse("noise"), Ok(Command::Noise { times: 1 }));
        assert_eq!(Command::parse("NOISE 4"), Ok(Command::Noise { times: 4 }));
        assert_eq!(
            Command::parse("noise lots"),
            Err(CommandError::InvalidArgument)
        );
    }

    #[test]
    fn test_parse_text_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("write hello   world "),
            Ok(Command::Write(text_of("hello   world")))
        );
        assert_eq!(Command::parse("alert OPEN"), Ok(Command::Alert(text_of("OPEN"))));
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(
            Command::parse("clock 1496320496"),
            Ok(Command::SetClock(1_496_320_496))
        );
        assert_eq!(Command::parse("time"), Ok(Command::ShowTime));
    }

    #[test]
    fn test_parse_power() {
        assert_eq!(Command::parse("power 0.5"), Ok(Command::Power(0.5)));
        assert_eq!(
            Command::parse("power -1"),
            Err(CommandError::InvalidArgument)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse(""), Err(CommandError::UnknownCommand));
        assert_eq!(Command::parse("blink"), Err(CommandError::UnknownCommand));
        assert_eq!(Command::parse("color"), Err(CommandError::MissingArgument));
        assert_eq!(Command::parse("write   "), Err(CommandError::MissingArgument));
        assert_eq!(
            Command::parse("color 300,0,0"),
            Err(CommandError::InvalidArgument)
        );
        assert_eq!(Command::parse("fx a,b"), Err(CommandError::InvalidArgument));
        assert_eq!(
            Command::parse("clock yesterday"),
            Err(CommandError::InvalidArgument)
        );
    }

    #[test]
    fn test_parse_text_too_long() {
        let mut line = std::string::String::from("write ");
        line.push_str(&"x".repeat(MAX_TEXT_LEN + 1));
        assert_eq!(Command::parse(&line), Err(CommandError::TextTooLong));

        let mut line = std::string::String::from("write ");
        line.push_str(&"x".repeat(MAX_TEXT_LEN));
        assert!(Command::parse(&line).is_ok());
    }
}

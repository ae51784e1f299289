//! Path-data scanner.
//!
//! A single left-to-right pass over the input bytes. The scanner is either before the first
//! command letter or inside the argument text of the most recent command; every alphabetic byte
//! closes the current command and opens the next one. Exponent markers (`1e-3`) are the only
//! alphabetic bytes that stay inside argument text.

use crate::command::{Command, CommandKind, Path};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Leading,
    Arguments {
        letter: char,
        kind: CommandKind,
        letter_offset: usize,
        text_start: usize,
    },
}

/// Unicode `White_Space` plus the byte-order mark, matching ECMAScript's `\s`.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_separator(c: char) -> bool {
    is_space(c) || c == ','
}

fn is_exponent_marker(bytes: &[u8], i: usize) -> bool {
    if !matches!(bytes[i], b'e' | b'E') || i == 0 {
        return false;
    }
    let prev = bytes[i - 1];
    if !(prev.is_ascii_digit() || prev == b'.') {
        return false;
    }
    match bytes.get(i + 1) {
        Some(&next) => next.is_ascii_digit() || matches!(next, b'+' | b'-'),
        None => false,
    }
}

/// Parses a path-data string (the value of an SVG `d` attribute) into a [`Path`].
///
/// Commands keep their input order and their letter case. Fails with [`Error::EmptyPath`] when
/// the input contains no command letters at all.
pub fn parse(d: &str) -> Result<Path> {
    let bytes = d.as_bytes();
    let mut commands: Vec<Command> = Vec::new();
    let mut state = ScanState::Leading;

    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_alphabetic() || is_exponent_marker(bytes, i) {
            i += 1;
            continue;
        }

        let letter = b as char;
        let Some(kind) = CommandKind::from_letter(letter) else {
            return Err(Error::UnknownCommand { letter, offset: i });
        };
        match state {
            ScanState::Leading => {
                let leading = d[..i].trim_matches(is_space);
                if !leading.is_empty() {
                    return Err(Error::LeadingText {
                        text: leading.to_string(),
                    });
                }
            }
            ScanState::Arguments {
                letter: prev,
                kind,
                letter_offset,
                text_start,
            } => {
                let command = finish_command(
                    commands.len(),
                    prev,
                    kind,
                    letter_offset,
                    &d[text_start..i],
                    text_start,
                )?;
                commands.push(command);
            }
        }

        state = ScanState::Arguments {
            letter,
            kind,
            letter_offset: i,
            text_start: i + 1,
        };
        i += 1;
    }

    match state {
        ScanState::Leading => return Err(Error::EmptyPath),
        ScanState::Arguments {
            letter,
            kind,
            letter_offset,
            text_start,
        } => {
            let command = finish_command(
                commands.len(),
                letter,
                kind,
                letter_offset,
                &d[text_start..],
                text_start,
            )?;
            commands.push(command);
        }
    }

    tracing::debug!(
        commands = commands.len(),
        input_bytes = d.len(),
        "parsed path data"
    );
    Ok(Path::new(commands))
}

fn finish_command(
    index: usize,
    letter: char,
    kind: CommandKind,
    letter_offset: usize,
    text: &str,
    text_offset: usize,
) -> Result<Command> {
    let relative = letter.is_ascii_lowercase();

    if kind == CommandKind::ClosePath {
        let trimmed = text.trim_start_matches(is_space);
        if !trimmed.trim_end_matches(is_space).is_empty() {
            return Err(Error::UnexpectedArguments {
                index,
                command: letter,
                text: trimmed.trim_end_matches(is_space).to_string(),
                offset: text_offset + (text.len() - trimmed.len()),
            });
        }
        tracing::trace!(index, command = %letter, "close path");
        return Ok(Command::new(kind, relative, Vec::new()));
    }

    let mut args = Vec::new();
    for (token, offset) in tokens(text) {
        let value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::MalformedNumber {
                index,
                command: letter,
                token: token.to_string(),
                offset: text_offset + offset,
            })?;
        args.push(value);
    }

    let arity = kind.arity();
    if args.is_empty() || args.len() % arity != 0 {
        return Err(Error::ArgumentCount {
            index,
            command: letter,
            found: args.len(),
            arity,
        });
    }

    tracing::trace!(index, command = %letter, offset = letter_offset, args = args.len(), "command");
    Ok(Command::new(kind, relative, args))
}

/// Splits argument text on runs of whitespace and/or commas, yielding each token with its
/// byte offset inside `text`.
fn tokens(text: &str) -> impl Iterator<Item = (&str, usize)> {
    let mut rest = 0usize;
    std::iter::from_fn(move || {
        let start = rest + text[rest..].find(|c: char| !is_separator(c))?;
        let end = text[start..]
            .find(is_separator)
            .map_or(text.len(), |n| start + n);
        rest = end;
        Some((&text[start..end], start))
    })
}

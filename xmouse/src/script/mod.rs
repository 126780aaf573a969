//! Pointer event scripts.
//!
//! Each non-blank line describes one pointer event or a mode switch:
//!
//! ```text
//! press   <button> <x> <y> [shift] [ctrl] [meta]
//! release <button> <x> <y> [modifiers...]
//! move    <x> <y> [modifiers...]
//! drag    <button> <x> <y> [modifiers...]
//! mode    <none|x10|vt200|vt200-highlight|button-event|any-event>
//! ```
//!
//! Positions are surface pixels. `#` starts a comment.

use std::fmt;

use xmouse_core::{Modifiers, MouseButton, PointerAction, PointerEvent, TrackingMode};

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Event(PointerEvent),
    /// The program switched tracking modes.
    Mode(TrackingMode),
}

/// What was wrong with a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidButton(String),
    InvalidPosition(String),
    UnknownModifier(String),
    UnknownMode(String),
    UnexpectedArgument(String),
}

/// A script line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::UnknownCommand(c) => write!(f, "unknown command {c:?}"),
            ParseErrorKind::MissingArgument(what) => write!(f, "missing {what}"),
            ParseErrorKind::InvalidButton(b) => write!(f, "invalid button {b:?}"),
            ParseErrorKind::InvalidPosition(p) => write!(f, "invalid position {p:?}"),
            ParseErrorKind::UnknownModifier(m) => write!(f, "unknown modifier {m:?}"),
            ParseErrorKind::UnknownMode(m) => write!(f, "unknown mouse mode {m:?}"),
            ParseErrorKind::UnexpectedArgument(a) => write!(f, "unexpected argument {a:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse one script line. Blank and comment-only lines yield `Ok(None)`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ParseError> {
    let text = text.split('#').next().unwrap_or_default();
    let mut tokens = text.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "press" => button_event(PointerAction::Press, tokens),
        "release" => button_event(PointerAction::Release, tokens),
        "move" => motion_event(None, tokens),
        "drag" => tokens
            .next()
            .ok_or(ParseErrorKind::MissingArgument("button"))
            .and_then(parse_button)
            .and_then(|held| motion_event(Some(held), tokens)),
        "mode" => mode_switch(tokens),
        _ => Err(ParseErrorKind::UnknownCommand(keyword.to_owned())),
    };
    command.map(Some).map_err(|kind| ParseError { line, kind })
}

fn button_event<'a>(
    action: PointerAction,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<Command, ParseErrorKind> {
    let button = parse_button(
        tokens
            .next()
            .ok_or(ParseErrorKind::MissingArgument("button"))?,
    )?;
    let (x, y) = parse_position(&mut tokens)?;
    let modifiers = parse_modifiers(tokens)?;
    Ok(Command::Event(PointerEvent {
        action,
        button: Some(button),
        modifiers,
        x,
        y,
    }))
}

fn motion_event<'a>(
    held: Option<MouseButton>,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<Command, ParseErrorKind> {
    let (x, y) = parse_position(&mut tokens)?;
    let modifiers = parse_modifiers(tokens)?;
    Ok(Command::Event(
        PointerEvent::motion(held, x, y).with_modifiers(modifiers),
    ))
}

fn mode_switch<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Command, ParseErrorKind> {
    let name = tokens.next().ok_or(ParseErrorKind::MissingArgument("mode"))?;
    let mode = TrackingMode::from_name(name)
        .ok_or_else(|| ParseErrorKind::UnknownMode(name.to_owned()))?;
    if let Some(extra) = tokens.next() {
        return Err(ParseErrorKind::UnexpectedArgument(extra.to_owned()));
    }
    Ok(Command::Mode(mode))
}

fn parse_button(token: &str) -> Result<MouseButton, ParseErrorKind> {
    let button = match token.to_ascii_lowercase().as_str() {
        "left" => Some(MouseButton::Button1),
        "middle" => Some(MouseButton::Button2),
        "right" => Some(MouseButton::Button3),
        "wheel-up" => Some(MouseButton::Button4),
        "wheel-down" => Some(MouseButton::Button5),
        n => n.parse().ok().and_then(MouseButton::from_ordinal),
    };
    button.ok_or_else(|| ParseErrorKind::InvalidButton(token.to_owned()))
}

fn parse_position<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<(f64, f64), ParseErrorKind> {
    let mut coordinate = |what: &'static str| -> Result<f64, ParseErrorKind> {
        let token = tokens.next().ok_or(ParseErrorKind::MissingArgument(what))?;
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseErrorKind::InvalidPosition(token.to_owned()))
    };
    let x = coordinate("x position")?;
    let y = coordinate("y position")?;
    Ok((x, y))
}

fn parse_modifiers<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Modifiers, ParseErrorKind> {
    let mut mods = Modifiers::empty();
    for token in tokens {
        let flag = match token.to_ascii_lowercase().as_str() {
            "shift" => Modifiers::SHIFT,
            "ctrl" | "control" => Modifiers::CONTROL,
            "meta" | "alt" | "super" => Modifiers::META,
            _ => return Err(ParseErrorKind::UnknownModifier(token.to_owned())),
        };
        mods |= flag;
    }
    Ok(mods)
}

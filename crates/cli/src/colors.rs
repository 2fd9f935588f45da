// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI colors for help text.
//!
//! `NO_COLOR=1` turns colors off; `COLOR=1` turns them on without a TTY.

use std::io::IsTerminal;

use anstyle::{Ansi256Color, Color, Style};

const fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Section headers.
pub const HEADER: Style = fg(74);
/// Commands and flags.
pub const LITERAL: Style = fg(250);
/// Flag values, placeholders, and quoted JQL.
pub const CONTEXT: Style = fg(245);

pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    crate::env::force_color() || std::io::stdout().is_terminal()
}

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

pub fn header(text: &str) -> String {
    paint(HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(CONTEXT, text)
}

/// Colorize an examples block.
///
/// Lines ending in `:` are headers. `  <command>  <description>` lines get
/// their command colorized, and `Label: value` lines their value.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    text.lines()
        .map(example_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn example_line(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    if body.ends_with(':') && !body.contains("  ") {
        return format!("{indent}{}", header(body));
    }
    if let Some(end) = find_description_start(body) {
        let (cmd, desc) = body.split_at(end);
        return format!("{indent}{}{desc}", colorize_command(cmd));
    }
    if let Some((label, value)) = body.split_once(": ") {
        return format!("{indent}{label}: {}", literal(value));
    }
    line.to_string()
}

/// Split off the leading word, quoted string, or `<placeholder>`.
fn split_token(s: &str) -> (&str, &str) {
    let end = match s.as_bytes().first() {
        Some(b'"') => s[1..].find('"').map_or(s.len(), |i| i + 2),
        Some(b'<') => s.find('>').map_or(s.len(), |i| i + 1),
        _ => s.find(' ').unwrap_or(s.len()),
    };
    s.split_at(end)
}

/// Colorize an example command line.
///
/// Words are literals; quoted strings, placeholders, and the word after a
/// flag are context.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = String::with_capacity(cmd.len() * 2);
    let mut flag_value = false;
    let mut rest = cmd;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(' ') {
            out.push(' ');
            rest = tail;
            continue;
        }
        let (token, tail) = split_token(rest);
        let is_value = flag_value || token.starts_with('"') || token.starts_with('<');
        flag_value = !is_value && token.starts_with('-') && !token.contains('=');
        out.push_str(&paint(if is_value { CONTEXT } else { LITERAL }, token));
        rest = tail;
    }
    out
}

/// Byte offset of the description: the first run of two or more spaces
/// followed by more text.
pub fn find_description_start(line: &str) -> Option<usize> {
    line.trim_end().find("  ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;

// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Template formatting of parsed numbers.
//!
//! A template is free text with tokens referring to the segments of a
//! [`ParsedNumber`]:
//! - `{area}` / `{number}` take whatever is left of the segment;
//! - `{area:N}` / `{number:N}` take the next `N` digits of the segment.
//!
//! Every segment has its own cursor, so consecutive tokens on the same
//! segment consume contiguous slices in template order. For example
//! `+386 (0){area} {number:3} {number:4}`.

use std::str::FromStr;

use log::trace;
use regex::{Captures, Regex};

use super::{enums::{Field, NumberKind}, helper_types::ParsedNumber, PHONY_REG_EXPS};
use crate::string_util::clamped_slice;

/// A template shared by every number, or one per number kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormatTemplate<'a> {
    /// No template: the built-in display format is used.
    #[default]
    Display,
    Shared(&'a str),
    ByKind { mobile: &'a str, fixed: &'a str },
}

impl<'a> FormatTemplate<'a> {
    /// Template text for numbers of `kind`, `None` for the display format.
    pub fn select(&self, kind: NumberKind) -> Option<&'a str> {
        match (*self, kind) {
            (FormatTemplate::Display, _) => None,
            (FormatTemplate::Shared(template), _) => Some(template),
            (FormatTemplate::ByKind { mobile, .. }, NumberKind::Mobile) => Some(mobile),
            (FormatTemplate::ByKind { fixed, .. }, NumberKind::Fixed) => Some(fixed),
        }
    }
}

/// An empty template counts as no template.
impl<'a> From<&'a str> for FormatTemplate<'a> {
    fn from(value: &'a str) -> Self {
        if value.is_empty() {
            return FormatTemplate::Display;
        }
        FormatTemplate::Shared(value)
    }
}

impl<'a> From<&'a String> for FormatTemplate<'a> {
    fn from(value: &'a String) -> Self {
        FormatTemplate::from(value.as_str())
    }
}

impl<'a, T: Into<FormatTemplate<'a>>> From<Option<T>> for FormatTemplate<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// `[mobile, fixed]`
impl<'a> From<[&'a str; 2]> for FormatTemplate<'a> {
    fn from([mobile, fixed]: [&'a str; 2]) -> Self {
        FormatTemplate::ByKind { mobile, fixed }
    }
}

/// `(mobile, fixed)`
impl<'a> From<(&'a str, &'a str)> for FormatTemplate<'a> {
    fn from((mobile, fixed): (&'a str, &'a str)) -> Self {
        FormatTemplate::ByKind { mobile, fixed }
    }
}

/// One resolved template token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text as written in the template, e.g. `{number:3}`.
    pub raw: String,
    pub field: Field,
    /// Digits requested from the segment.
    pub width: usize,
    /// Position of the segment cursor before this token.
    pub start: usize,
    /// Digits substituted for the token. Shorter than `width` when the
    /// segment runs out.
    pub value: String,
}

/// Per-segment cursors shared by every token of one template.
struct TokenCursor<'p> {
    parsed: &'p ParsedNumber,
    area: usize,
    number: usize,
}

impl<'p> TokenCursor<'p> {
    fn new(parsed: &'p ParsedNumber) -> Self {
        Self { parsed, area: 0, number: 0 }
    }

    fn position(&mut self, field: Field) -> &mut usize {
        match field {
            Field::Area => &mut self.area,
            Field::Number => &mut self.number,
        }
    }

    fn resolve(&mut self, captures: &Captures<'_>) -> Option<Token> {
        let raw = captures.get(0)?.as_str();
        let field = Field::from_str(captures.get(1)?.as_str()).ok()?;
        let parsed = self.parsed;
        let segment = parsed.segment(field);

        let start = *self.position(field);
        let width = match captures.get(2) {
            // Widths too large to represent just take the whole remainder.
            Some(width) => width.as_str().parse::<usize>().unwrap_or(usize::MAX),
            None => segment.len().saturating_sub(start),
        };
        let value = clamped_slice(segment, start, width).to_owned();
        *self.position(field) = start.saturating_add(width);

        trace!("Token '{raw}' resolved to '{value}'");
        Some(Token { raw: raw.to_owned(), field, width, start, value })
    }
}

fn render_tokens_with(token_pattern: &Regex, template: &str, parsed: &ParsedNumber) -> (String, Vec<Token>) {
    let mut cursor = TokenCursor::new(parsed);
    let mut tokens = Vec::new();
    let rendered = token_pattern.replace_all(template, |captures: &Captures<'_>| {
        match cursor.resolve(captures) {
            Some(token) => {
                let value = token.value.clone();
                tokens.push(token);
                value
            }
            None => captures[0].to_owned(),
        }
    });
    (rendered.into_owned(), tokens)
}

/// Substitutes every token of `template` and returns the rendered string
/// together with the tokens in template order.
///
/// Tokens are resolved in the same pass that replaces them, so the n-th
/// token always fills the n-th placeholder.
pub fn render_tokens(template: &str, parsed: &ParsedNumber) -> (String, Vec<Token>) {
    render_tokens_with(&PHONY_REG_EXPS.token_pattern, template, parsed)
}

/// Parses `template` into its tokens, resolved against `parsed`.
///
/// A token without a width consumes the rest of its segment, so any later
/// token on the same segment resolves to an empty string.
pub fn tokenize(template: &str, parsed: &ParsedNumber) -> Vec<Token> {
    render_tokens(template, parsed).1
}

/// Renders `template` for `parsed`. Text without tokens is returned as is.
pub fn render(template: &str, parsed: &ParsedNumber) -> String {
    render_tokens(template, parsed).0
}

/// Splits `digits` into space separated groups of the given widths.
pub fn group_digits(digits: &str, widths: &[usize]) -> String {
    let mut grouped = String::with_capacity(digits.len() + widths.len());
    let mut offset = 0;
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            grouped.push(' ');
        }
        grouped.push_str(clamped_slice(digits, offset, *width));
        offset += width;
    }
    grouped
}

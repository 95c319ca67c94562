//! Positional template formatting
//!
//! Substitutes `{N}` and `{N,W}` placeholders with `Display` arguments.
//! `{{` and `}}` produce literal braces. Arguments that no placeholder
//! references are ignored.

use std::fmt::{self, Write as _};

use crate::error::FormatError;

/// Alignment widths at or beyond this magnitude are rejected.
pub const MAX_ALIGNMENT: u64 = 1_000_000;

/// Format `template` with positional `args`.
pub fn format_template(template: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut body = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(FormatError::MalformedPlaceholder { position }),
                        _ => body.push(c),
                    }
                }
                if !closed {
                    return Err(FormatError::MalformedPlaceholder { position });
                }

                let placeholder = Placeholder::parse(&body, position)?;
                let arg = args.get(placeholder.index).ok_or(FormatError::IndexOutOfRange {
                    index: placeholder.index,
                    arg_count: args.len(),
                })?;
                placeholder.write(&mut out, *arg);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnmatchedClosingBrace { position });
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

#[derive(Debug, PartialEq, Eq)]
struct Placeholder {
    index: usize,
    /// Positive pads on the left (right-aligned), negative on the right.
    alignment: Option<i64>,
}

impl Placeholder {
    fn parse(body: &str, position: usize) -> Result<Self, FormatError> {
        let malformed = || FormatError::MalformedPlaceholder { position };

        let (head, specifier) = match body.split_once(':') {
            Some((head, spec)) => (head, Some(spec)),
            None => (body, None),
        };
        if let Some(specifier) = specifier {
            return Err(FormatError::UnsupportedFormatSpecifier {
                position,
                specifier: specifier.to_string(),
            });
        }

        let (index, alignment) = match head.split_once(',') {
            Some((index, width)) => (index, Some(width)),
            None => (head, None),
        };

        let index = index.trim();
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let index = index.parse::<usize>().map_err(|_| malformed())?;

        let alignment = alignment
            .map(|w| w.trim().parse::<i64>().map_err(|_| malformed()))
            .transpose()?;
        if alignment.is_some_and(|w| w.unsigned_abs() >= MAX_ALIGNMENT) {
            return Err(malformed());
        }

        Ok(Self { index, alignment })
    }

    fn write(&self, out: &mut String, arg: &dyn fmt::Display) {
        let value = arg.to_string();
        let Some(alignment) = self.alignment else {
            out.push_str(&value);
            return;
        };

        let width = usize::try_from(alignment.unsigned_abs()).unwrap_or(usize::MAX);
        let pad = width.saturating_sub(value.chars().count());
        if alignment >= 0 {
            let _ = write!(out, "{}{}", " ".repeat(pad), value);
        } else {
            let _ = write!(out, "{}{}", value, " ".repeat(pad));
        }
    }
}

//! Message formatting helpers
//!
//! Templates use `{}` placeholders filled left to right from a slice of
//! [`Display`] values. Unlike `format!`, the argument count is not checked:
//! placeholders without a matching argument are kept as literal text and
//! surplus arguments are ignored.

use std::error::Error;
use std::fmt::{Display, Write};

/// Placeholder token recognised in message templates.
pub const PLACEHOLDER: &str = "{}";

const ESCAPE: char = '\\';

/// Substitute `{}` placeholders in `template` with `args`, in order.
///
/// A placeholder preceded by a single backslash is escaped and rendered as
/// `{}` without consuming an argument; a double backslash renders one literal
/// backslash followed by the substituted argument.
///
/// # Examples
///
/// ```
/// use logcat_facade::core::formatter::format_message;
///
/// assert_eq!(format_message("{} of {}", &[&3, &5]), "3 of 5");
/// assert_eq!(format_message("{} and {}", &[&"one"]), "one and {}");
/// assert_eq!(format_message("{}", &[&1, &2]), "1");
/// assert_eq!(format_message(r"\{} is {}", &[&"literal"]), "{} is literal");
/// ```
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    let mut next_arg = 0;

    loop {
        if next_arg >= args.len() {
            out.push_str(rest);
            break;
        }

        let Some(pos) = rest.find(PLACEHOLDER) else {
            out.push_str(rest);
            break;
        };

        let before = &rest[..pos];
        let after = &rest[pos + PLACEHOLDER.len()..];
        let escaped = before.ends_with(ESCAPE);
        let double_escaped = before.ends_with("\\\\");

        if escaped && !double_escaped {
            out.push_str(&before[..before.len() - 1]);
            out.push_str(PLACEHOLDER);
        } else {
            if double_escaped {
                out.push_str(&before[..before.len() - 1]);
            } else {
                out.push_str(before);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", args[next_arg]);
            next_arg += 1;
        }

        rest = after;
    }

    out
}

/// Render an error and its chain of sources, one cause per line.
pub fn render_error(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {}", cause);
        source = cause.source();
    }
    out
}

/// Split `text` into consecutive pieces of at most `max_chars` characters.
///
/// Always yields at least one piece; a `max_chars` of zero disables splitting.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    if max_chars == 0 {
        return vec![text];
    }

    let mut chunks = Vec::with_capacity(text.len() / max_chars + 1);
    let mut rest = text;
    while let Some((byte_index, _)) = rest.char_indices().nth(max_chars) {
        let (chunk, tail) = rest.split_at(byte_index);
        chunks.push(chunk);
        rest = tail;
    }
    chunks.push(rest);
    chunks
}

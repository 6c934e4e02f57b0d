//! Comment and string-literal stripping.
//!
//! [`strip`] removes comment spans and empties string/char literals so the
//! regex analyzers do not trip over keywords inside prose. Newlines are
//! always preserved, including those inside block comments and multiline
//! strings, so line numbers computed against the cleaned content remain
//! valid against the original.
//!
//! This is a best-effort scanner, not a lexer. Known approximations: nested
//! block comments close at the first terminator, JS regex literals are
//! treated as code, and `${}` interpolations inside template literals are
//! stripped along with the literal. These are accepted trade-offs of the
//! pattern-table approach, not bugs to fix silently.

use crate::language::Language;
use crate::patterns::QuoteStyle;

/// Strip comments and string literals from `content` per the language's
/// syntax profile. The returned string has exactly as many newlines as the
/// input.
pub fn strip(content: &str, language: Language) -> String {
    let profile = language.profile();
    let mut out = String::with_capacity(content.len());
    let mut i = 0;

    // `i` only ever advances by whole characters or by the length of an
    // ASCII marker, so slicing at `i` stays on a char boundary.
    while i < content.len() {
        let rest = &content[i..];

        if rest.starts_with(profile.comments.line) {
            // Drop to end of line; the newline itself is copied by the loop.
            i += rest.find('\n').unwrap_or(rest.len());
            continue;
        }

        if let Some((open, close)) = profile.comments.block {
            if rest.starts_with(open) {
                i += block_comment(rest, open, close, &mut out);
                continue;
            }
        }

        if let Some(quote) = profile.quotes.iter().find(|q| rest.starts_with(q.delimiter)) {
            if quote.char_like {
                if let Some(consumed) = char_literal(rest, quote) {
                    out.push_str(quote.delimiter);
                    out.push_str(quote.delimiter);
                    i += consumed;
                    continue;
                }
                // Not a short literal: a lifetime or stray quote, keep as code.
            } else {
                i += string_literal(rest, quote, &mut out);
                continue;
            }
        }

        if let Some(ch) = rest.chars().next() {
            out.push(ch);
            i += ch.len_utf8();
        } else {
            break;
        }
    }

    out
}

/// Consume a block comment starting at `rest`, emitting only its newlines.
/// Returns the number of bytes consumed; an unterminated comment runs to
/// end of input.
fn block_comment(rest: &str, open: &str, close: &str, out: &mut String) -> usize {
    let mut i = open.len();
    while i < rest.len() {
        if rest[i..].starts_with(close) {
            return i + close.len();
        }
        let Some(ch) = rest[i..].chars().next() else {
            break;
        };
        if ch == '\n' {
            out.push('\n');
        }
        i += ch.len_utf8();
    }
    rest.len()
}

/// Consume a string literal starting at `rest`, emitting an empty literal
/// plus any interior newlines. A single-line literal that never closes is
/// terminated at the end of its line; the newline is left for the caller.
fn string_literal(rest: &str, quote: &QuoteStyle, out: &mut String) -> usize {
    let delim = quote.delimiter;
    out.push_str(delim);
    let mut i = delim.len();

    while i < rest.len() {
        if rest[i..].starts_with(delim) {
            out.push_str(delim);
            return i + delim.len();
        }
        let Some(ch) = rest[i..].chars().next() else {
            break;
        };
        if ch == '\\' && quote.escape {
            i += 1;
            if let Some(escaped) = rest[i..].chars().next() {
                if escaped == '\n' {
                    // Line continuation inside the literal.
                    out.push('\n');
                }
                i += escaped.len_utf8();
            }
            continue;
        }
        if ch == '\n' {
            if quote.multiline {
                out.push('\n');
                i += 1;
                continue;
            }
            out.push_str(delim);
            return i;
        }
        i += ch.len_utf8();
    }

    out.push_str(delim);
    rest.len()
}

/// Match a character literal of at most one (possibly escaped) character,
/// like `'x'` or `'\n'`. Returns the bytes consumed, or `None` when the
/// quote does not open such a literal.
fn char_literal(rest: &str, quote: &QuoteStyle) -> Option<usize> {
    let delim = quote.delimiter;
    let body = &rest[delim.len()..];
    let mut chars = body.chars();
    let first = chars.next()?;

    let content_len = if first == '\\' && quote.escape {
        let escaped = chars.next()?;
        if escaped == '\n' {
            return None;
        }
        1 + escaped.len_utf8()
    } else if first == '\n' || body.starts_with(delim) {
        return None;
    } else {
        first.len_utf8()
    };

    body[content_len..]
        .starts_with(delim)
        .then(|| delim.len() + content_len + delim.len())
}

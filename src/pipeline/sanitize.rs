//! Pre-parse cleanup of raw completion text.
//!
//! Models occasionally decorate an otherwise well-formed response in ways
//! that would confuse the section splitter: wrapping the whole plan in
//! ` ```markdown ` fences despite the prompt's format instructions, using
//! `\r\n` line endings, or sprinkling zero-width characters that break
//! keyword containment checks. These rules are cheap, deterministic, and
//! content-preserving — for a response that needs none of them, the text
//! passes through byte-identical.
//!
//! Anything heavier (trimming field values, fixing table shapes) is
//! deliberately absent: the parser's contract is to read the text as-is,
//! and its warnings are the place where deviations become visible.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all cleanup rules to a raw completion.
///
/// Rules (applied in order):
/// 1. Strip an outer markdown fence wrapping the entire response
/// 2. Normalise line endings (CRLF/CR → LF)
/// 3. Strip invisible Unicode (zero-width spaces, BOM, soft hyphens)
pub fn sanitize_response(input: &str) -> String {
    let s = strip_outer_fences(input);
    let s = normalise_line_endings(&s);
    remove_invisible_chars(&s)
}

// ── Rule 1: Strip outer markdown fences ──────────────────────────────────────

static RE_OUTER_FENCES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:markdown)?\n(.*)\n```\s*$").unwrap());

fn strip_outer_fences(input: &str) -> String {
    if let Some(caps) = RE_OUTER_FENCES.captures(input.trim()) {
        caps[1].to_string()
    } else {
        input.to_string()
    }
}

// ── Rule 2: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 3: Remove invisible Unicode characters ─────────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input.replace(
        [
            '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}',
        ],
        "",
    )
}

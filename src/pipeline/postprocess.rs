//! Post-processing: deterministic cleanup of model-generated summaries.
//!
//! Even well-prompted models decorate their answers: a leading
//! `Summary:` label, the whole reply wrapped in quotes or a code fence,
//! Markdown line breaks in what should be a single paragraph. These rules
//! strip the decoration without touching the words, so the joined summary
//! reads as continuous prose.
//!
//! ## Rule Order
//!
//! Fences go first so the label and quote rules see the real first line;
//! whitespace is collapsed last so earlier rules can anchor on line starts.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all post-processing rules to a raw model reply.
///
/// Rules (applied in order):
/// 1. Strip an outer code fence
/// 2. Strip a leading "Summary:" / "Here is a summary …:" label
/// 3. Strip quotes wrapping the whole reply
/// 4. Strip invisible Unicode (zero-width spaces, BOM, soft hyphens, etc.)
/// 5. Collapse all whitespace runs to a single space and trim
pub fn clean_summary(input: &str) -> String {
    let s = strip_code_fences(input);
    let s = strip_summary_label(&s);
    let s = strip_wrapping_quotes(&s);
    let s = remove_invisible_chars(&s);
    collapse_whitespace(&s)
}

// ── Rule 1: Strip outer code fences ──────────────────────────────────────────

static RE_OUTER_FENCES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```[A-Za-z]*\n(.*)\n```$").unwrap());

fn strip_code_fences(input: &str) -> String {
    let trimmed = input.trim();
    if let Some(caps) = RE_OUTER_FENCES.captures(trimmed) {
        caps[1].to_string()
    } else {
        trimmed.to_string()
    }
}

// ── Rule 2: Strip a leading label ────────────────────────────────────────────

static RE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:\*\*)?(?:summary|here\s+is\s+(?:a|the|your)\s+summary[^:\n]*)(?:\*\*)?\s*:(?:\*\*)?\s*")
        .unwrap()
});

fn strip_summary_label(input: &str) -> String {
    RE_LABEL.replace(input, "").to_string()
}

// ── Rule 3: Strip wrapping quotes ────────────────────────────────────────────

fn strip_wrapping_quotes(input: &str) -> String {
    let trimmed = input.trim();
    for (open, close) in [('"', '"'), ('“', '”'), ('\'', '\'')] {
        if let Some(inner) = trimmed
            .strip_prefix(open)
            .and_then(|s| s.strip_suffix(close))
        {
            // Only strip when the quotes wrap the whole reply, not a quoted
            // phrase at each end.
            if !inner.contains(open) && !inner.contains(close) {
                return inner.to_string();
            }
        }
    }
    trimmed.to_string()
}

// ── Rule 4: Remove invisible Unicode characters ─────────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input.replace(
        [
            '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}',
        ],
        "",
    )
}

// ── Rule 5: Collapse whitespace ──────────────────────────────────────────────

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn collapse_whitespace(input: &str) -> String {
    RE_WHITESPACE.replace_all(input.trim(), " ").to_string()
}

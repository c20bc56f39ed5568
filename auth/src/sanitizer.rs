//! Neutralizes attacker-supplied markup before it is echoed back.
//!
//! `sanitize` strips markup structure with a real HTML parser and an empty
//! allow-list; `escape_html` preserves structure but neutralizes its
//! interpretation. Both are pure functions over their input and safe to
//! call from any number of requests at once.

use std::collections::HashSet;

use ammonia::Builder;

/// Strip all markup from untrusted text, keeping plain text content.
///
/// Input is parsed as HTML (not pattern-matched), so mixed-case tags,
/// null-byte insertion, and other encoded variants cannot smuggle
/// structure through. No tag survives; the contents of `<script>` and
/// `<style>` elements are dropped entirely rather than unwrapped.
///
/// Idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize(input: &str) -> String {
    Builder::default()
        .tags(HashSet::new())
        .clean(input)
        .to_string()
}

/// Escape HTML-significant characters with character references.
///
/// Replaces `& < > " '` and `/`. Applied independently of [`sanitize`];
/// callers may want a raw-but-escaped rendition alongside the structurally
/// cleaned one.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            other => escaped.push(other),
        }
    }
    escaped
}

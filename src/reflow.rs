// src/reflow.rs
//
// Paragraph reflow:
//   1. flatten the block's lines into one string (single space joins);
//   2. collapse runs of spaces to one space;
//   3. locate protected spans (`open … close`, shortest match, no nesting)
//      and record them as byte ranges;
//   4. split on spaces that are not inside a protected range;
//   5. greedily fill output lines up to the row limit.
//
// Width is counted in chars. A token wider than the limit is emitted alone
// and never truncated.

use std::ops::Range;

use log::trace;
use memchr::{memchr_iter, memmem};

use crate::config::{ProtectedPair, WrapConfig};
use crate::line::Line;

/* ============================ Flatten/collapse =========================== */

/// Join line contents with a single space, dropping terminators.
pub fn flatten(lines: &[Line]) -> String {
    let cap = lines.iter().map(|l| l.content.len() + 1).sum();
    let mut flat = String::with_capacity(cap);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            flat.push(' ');
        }
        flat.push_str(&line.content);
    }
    flat
}

/// Collapse every run of two or more spaces into one. Only U+0020 is
/// touched; tabs and other whitespace are ordinary characters here.
pub fn collapse_spaces(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut seg_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] == b' ' {
            // keep the first space of the run, skip the rest
            out.push_str(&text[seg_start..=i]);
            i += 1;
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            seg_start = i;
        } else {
            i += 1;
        }
    }
    if seg_start < bytes.len() {
        out.push_str(&text[seg_start..]);
    }
    out
}

/* =========================== Protected spans ============================= */

/// Byte ranges of every `open … close` span in `text`, for every pair,
/// sorted and merged.
///
/// Each pair is scanned left to right: the closest `close` after an `open`
/// ends the span, and scanning resumes after it. An `open` with no later
/// `close` ends the scan for that pair; the marker is then plain text.
pub fn protected_ranges(text: &str, pairs: &[ProtectedPair]) -> Vec<Range<usize>> {
    let hay = text.as_bytes();
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for pair in pairs {
        let open = pair.open.as_bytes();
        let close = pair.close.as_bytes();
        let mut pos = 0usize;
        while pos < hay.len() {
            let Some(o) = memmem::find(&hay[pos..], open).map(|off| pos + off) else {
                break;
            };
            let body = o + open.len();
            let Some(c) = memmem::find(&hay[body..], close).map(|off| body + off) else {
                break;
            };
            let end = c + close.len();
            ranges.push(o..end);
            pos = end;
        }
    }

    merge_ranges(ranges)
}

fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| (r.start, r.end));
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if r.start < last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    merged
}

/* ============================== Tokenizer =============================== */

/// Split `text` on spaces that fall outside every `protected` range.
/// `protected` must be sorted and non-overlapping. Empty tokens (from a
/// leading or trailing space) are dropped.
pub fn tokenize<'t>(text: &'t str, protected: &[Range<usize>]) -> Vec<&'t str> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut ri = 0usize;

    for sp in memchr_iter(b' ', text.as_bytes()) {
        while ri < protected.len() && protected[ri].end <= sp {
            ri += 1;
        }
        if ri < protected.len() && protected[ri].start <= sp {
            continue;
        }
        if sp > start {
            tokens.push(&text[start..sp]);
        }
        start = sp + 1;
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/* ============================= Line filling ============================= */

/// Greedy fill. A token joins the current line only while
/// `token + line + 2 <= row_limit`: one for the separating space, one for
/// the line terminator. An empty line is never emitted.
pub fn fill<'t, I>(tokens: I, row_limit: usize) -> Vec<Line>
where
    I: IntoIterator<Item = &'t str>,
{
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut width = 0usize;

    for token in tokens {
        let token_width = token.chars().count();
        if !buf.is_empty() && token_width + width + 2 > row_limit {
            out.push(Line::output(std::mem::take(&mut buf)));
            width = 0;
        }
        if !buf.is_empty() {
            buf.push(' ');
            width += 1;
        }
        buf.push_str(token);
        width += token_width;
    }
    if !buf.is_empty() {
        out.push(Line::output(buf));
    }
    out
}

/// Reflow the lines of one reflowable block.
pub fn reflow(lines: &[Line], cfg: &WrapConfig) -> Vec<Line> {
    let flat = collapse_spaces(&flatten(lines));
    let protected = protected_ranges(&flat, cfg.protected_pairs());
    let tokens = tokenize(&flat, &protected);
    let out = fill(tokens.iter().copied(), cfg.row_limit());
    trace!(
        "reflowed {} line(s) into {} ({} token(s), {} protected span(s))",
        lines.len(),
        out.len(),
        tokens.len(),
        protected.len()
    );
    out
}

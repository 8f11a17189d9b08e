// src/line.rs
//
// Splitting a document into lines. A line keeps its content and remembers
// which terminator (if any) ended it; `\r\n` counts as one terminator.

use memchr::memchr_iter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Lf,
    CrLf,
}

impl Terminator {
    pub fn as_str(self) -> &'static str {
        match self {
            Terminator::Lf => "\n",
            Terminator::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub content: String,
    pub terminator: Option<Terminator>,
}

impl Line {
    pub fn new(content: impl Into<String>, terminator: Option<Terminator>) -> Self {
        Self {
            content: content.into(),
            terminator,
        }
    }

    /// A line as emitted by the pipeline: content followed by `\n`.
    pub fn output(content: impl Into<String>) -> Self {
        Self::new(content, Some(Terminator::Lf))
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Content plus original terminator.
    pub fn to_original(&self) -> String {
        let mut s = self.content.clone();
        if let Some(t) = self.terminator {
            s.push_str(t.as_str());
        }
        s
    }
}

/// Split `text` into lines. Empty text yields no lines; a trailing line
/// without a terminator is kept with `terminator: None`.
pub fn split_lines(text: &str) -> Vec<Line> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;

    for nl in memchr_iter(b'\n', bytes) {
        let (end, term) = if nl > start && bytes[nl - 1] == b'\r' {
            (nl - 1, Terminator::CrLf)
        } else {
            (nl, Terminator::Lf)
        };
        // '\r' and '\n' are ASCII, so both slice points are char boundaries.
        lines.push(Line::new(&text[start..end], Some(term)));
        start = nl + 1;
    }
    if start < bytes.len() {
        lines.push(Line::new(&text[start..], None));
    }
    lines
}

/// Join lines back into text, each terminated by `\n`.
pub fn join_lines(lines: &[Line]) -> String {
    let cap = lines.iter().map(|l| l.content.len() + 1).sum();
    let mut out = String::with_capacity(cap);
    for line in lines {
        out.push_str(&line.content);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn keeps_terminators_and_unterminated_tail() {
        let lines = split_lines("a\r\nb\n\nc");
        assert_eq!(
            lines,
            vec![
                Line::new("a", Some(Terminator::CrLf)),
                Line::new("b", Some(Terminator::Lf)),
                Line::new("", Some(Terminator::Lf)),
                Line::new("c", None),
            ]
        );
        assert!(lines[2].is_blank());
        assert_eq!(lines[0].to_original(), "a\r\n");
        assert_eq!(lines[3].to_original(), "c");
    }

    #[test]
    fn lone_carriage_return_is_content() {
        let lines = split_lines("\r\n\rx\n");
        assert_eq!(lines[0], Line::new("", Some(Terminator::CrLf)));
        assert_eq!(lines[1], Line::new("\rx", Some(Terminator::Lf)));
    }

    #[test]
    fn join_always_uses_lf() {
        let lines = split_lines("one\r\ntwo");
        assert_eq!(join_lines(&lines), "one\ntwo\n");
    }
}

// src/lib.rs
//
// reflowtext — paragraph reflow for plain-text documents.
//
// A document is split into blocks (`segment`). Blank lines and indent-marked
// content are copied through unchanged; every other block is re-wrapped to
// the configured row limit (`reflow`), never breaking inside a protected
// span such as `‹…›` or `«…»`. The whole pipeline is pure: lines in, lines
// out, no I/O.

pub mod config;
pub mod error;
pub mod line;
pub mod reflow;
pub mod segment;

use log::debug;

pub use config::{
    ProtectedPair, VerbatimRuns, WrapConfig, WrapConfigBuilder, DEFAULT_INDENT_MARKERS,
    DEFAULT_PROTECTED_PAIRS, DEFAULT_ROW_LIMIT,
};
pub use error::ConfigError;
pub use line::{join_lines, split_lines, Line, Terminator};
pub use reflow::reflow;
pub use segment::{segment, Block};

/// Reflow a document given as lines. Output lines all end in `\n`.
pub fn wrap<I>(lines: I, cfg: &WrapConfig) -> Vec<Line>
where
    I: IntoIterator<Item = Line>,
{
    let blocks = segment(lines, cfg);
    let verbatim = blocks.iter().filter(|b| b.is_verbatim()).count();
    debug!(
        "segmented into {} block(s): {} reflowable, {} verbatim",
        blocks.len(),
        blocks.len() - verbatim,
        verbatim
    );

    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::Verbatim(lines) => out.extend(lines.into_iter().map(|l| Line::output(l.content))),
            Block::Reflowable(lines) => out.extend(reflow(&lines, cfg)),
        }
    }
    out
}

/// Reflow a whole document held in memory.
pub fn wrap_str(text: &str, cfg: &WrapConfig) -> String {
    join_lines(&wrap(split_lines(text), cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_stays_empty() {
        assert_eq!(wrap_str("", &WrapConfig::default()), "");
    }

    #[test]
    fn verbatim_terminators_are_normalised() {
        let out = wrap_str("\tcode\r\n\r\nplain\r\n", &WrapConfig::default());
        assert_eq!(out, "\tcode\n\nplain\n");
    }

    #[test]
    fn unterminated_last_line_gets_newline() {
        assert_eq!(wrap_str("last words", &WrapConfig::default()), "last words\n");
    }
}

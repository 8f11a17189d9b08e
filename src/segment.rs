// src/segment.rs
//
// Groups document lines into blocks:
// - a blank line is always a one-line verbatim block;
// - an indent-marked line starts verbatim content (see `VerbatimRuns`);
// - every other run of lines is a reflowable paragraph.

use crate::config::{VerbatimRuns, WrapConfig};
use crate::line::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Reflowable(Vec<Line>),
    Verbatim(Vec<Line>),
}

impl Block {
    pub fn lines(&self) -> &[Line] {
        match self {
            Block::Reflowable(lines) | Block::Verbatim(lines) => lines,
        }
    }

    pub fn is_verbatim(&self) -> bool {
        matches!(self, Block::Verbatim(_))
    }
}

/* ============================== Segmenter =============================== */

enum Pending {
    Empty,
    Reflow(Vec<Line>),
    Verbatim(Vec<Line>),
}

struct Segmenter<'a> {
    cfg: &'a WrapConfig,
    pending: Pending,
    blocks: Vec<Block>,
}

impl<'a> Segmenter<'a> {
    fn new(cfg: &'a WrapConfig) -> Self {
        Self {
            cfg,
            pending: Pending::Empty,
            blocks: Vec::new(),
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.pending, Pending::Empty) {
            Pending::Empty => {}
            Pending::Reflow(lines) => self.blocks.push(Block::Reflowable(lines)),
            Pending::Verbatim(lines) => self.blocks.push(Block::Verbatim(lines)),
        }
    }

    fn push(&mut self, line: Line) {
        if line.is_blank() {
            self.flush();
            self.blocks.push(Block::Verbatim(vec![line]));
            return;
        }

        let policy = self.cfg.verbatim_runs();

        // An open verbatim run absorbs everything up to the next blank line.
        if policy == VerbatimRuns::Coalesce {
            if let Pending::Verbatim(lines) = &mut self.pending {
                lines.push(line);
                return;
            }
        }

        if self.cfg.indent_marker_of(&line.content).is_some() {
            self.flush();
            match policy {
                VerbatimRuns::Coalesce => self.pending = Pending::Verbatim(vec![line]),
                VerbatimRuns::PerLine => self.blocks.push(Block::Verbatim(vec![line])),
            }
            return;
        }

        if let Pending::Reflow(lines) = &mut self.pending {
            lines.push(line);
            return;
        }
        self.flush();
        self.pending = Pending::Reflow(vec![line]);
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

/// Split `lines` into blocks, preserving order.
pub fn segment<I>(lines: I, cfg: &WrapConfig) -> Vec<Block>
where
    I: IntoIterator<Item = Line>,
{
    let mut seg = Segmenter::new(cfg);
    for line in lines {
        seg.push(line);
    }
    seg.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::split_lines;
    use pretty_assertions::assert_eq;

    fn contents(block: &Block) -> Vec<&str> {
        block.lines().iter().map(|l| l.content.as_str()).collect()
    }

    fn kinds(blocks: &[Block]) -> Vec<char> {
        blocks
            .iter()
            .map(|b| if b.is_verbatim() { 'V' } else { 'R' })
            .collect()
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(segment(Vec::new(), &WrapConfig::default()).is_empty());
    }

    #[test]
    fn plain_text_is_one_reflowable_block() {
        let blocks = segment(split_lines("one\ntwo\nthree\n"), &WrapConfig::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(contents(&blocks[0]), vec!["one", "two", "three"]);
        assert!(!blocks[0].is_verbatim());
    }

    #[test]
    fn blank_lines_separate_paragraphs() {
        let blocks = segment(split_lines("para one\n\npara two\n"), &WrapConfig::default());
        assert_eq!(kinds(&blocks), vec!['R', 'V', 'R']);
        assert_eq!(contents(&blocks[1]), vec![""]);
    }

    #[test]
    fn consecutive_blank_lines_are_separate_blocks() {
        let blocks = segment(split_lines("a\n\n\nb\n"), &WrapConfig::default());
        assert_eq!(kinds(&blocks), vec!['R', 'V', 'V', 'R']);
    }

    #[test]
    fn coalesce_keeps_indented_run_until_blank() {
        let text = "intro\n\tcode one\n    code two\ncontinued\n\noutro\n";
        let blocks = segment(split_lines(text), &WrapConfig::default());
        assert_eq!(kinds(&blocks), vec!['R', 'V', 'V', 'R']);
        assert_eq!(
            contents(&blocks[1]),
            vec!["\tcode one", "    code two", "continued"]
        );
    }

    #[test]
    fn per_line_emits_each_indented_line_alone() {
        let cfg = WrapConfig::builder()
            .verbatim_runs(VerbatimRuns::PerLine)
            .build()
            .unwrap();
        let text = "intro\n\tcode one\n    code two\ncontinued\nmore\n";
        let blocks = segment(split_lines(text), &cfg);
        assert_eq!(kinds(&blocks), vec!['R', 'V', 'V', 'R']);
        assert_eq!(contents(&blocks[1]), vec!["\tcode one"]);
        assert_eq!(contents(&blocks[3]), vec!["continued", "more"]);
    }

    #[test]
    fn three_spaces_is_not_an_indent_marker() {
        let blocks = segment(split_lines("a\n   b\n"), &WrapConfig::default());
        assert_eq!(kinds(&blocks), vec!['R']);
    }
}

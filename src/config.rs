// src/config.rs
//
// Run configuration. Built once from caller-supplied values, validated, and
// then only read by the segmenter and reflower.

use crate::error::ConfigError;

pub const DEFAULT_ROW_LIMIT: usize = 80;

/// Built-in protected spans: `‹…›` and `«…»`.
pub const DEFAULT_PROTECTED_PAIRS: &[(&str, &str)] = &[("‹", "›"), ("«", "»")];

/// Built-in indent markers: one tab, or four spaces.
pub const DEFAULT_INDENT_MARKERS: &[&str] = &["\t", "    "];

/// How lines following an indent-marked line are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerbatimRuns {
    /// An indent-marked line opens a verbatim block that runs until the next
    /// blank line.
    #[default]
    Coalesce,
    /// Each indent-marked line is a block of its own; following plain lines
    /// are reflowed.
    PerLine,
}

/// An opening/closing marker pair whose interior spaces never break a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedPair {
    pub open: String,
    pub close: String,
}

impl ProtectedPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    row_limit: usize,
    protected_pairs: Vec<ProtectedPair>,
    indent_markers: Vec<String>,
    verbatim_runs: VerbatimRuns,
    inplace: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            row_limit: DEFAULT_ROW_LIMIT,
            protected_pairs: DEFAULT_PROTECTED_PAIRS
                .iter()
                .map(|&(open, close)| ProtectedPair::new(open, close))
                .collect(),
            indent_markers: DEFAULT_INDENT_MARKERS.iter().map(|m| m.to_string()).collect(),
            verbatim_runs: VerbatimRuns::default(),
            inplace: false,
        }
    }
}

impl WrapConfig {
    pub fn builder() -> WrapConfigBuilder {
        WrapConfigBuilder {
            inner: WrapConfig::default(),
        }
    }

    /// Default configuration with a custom row limit.
    pub fn with_row_limit(row_limit: usize) -> Result<Self, ConfigError> {
        Self::builder().row_limit(row_limit).build()
    }

    pub fn row_limit(&self) -> usize {
        self.row_limit
    }

    pub fn protected_pairs(&self) -> &[ProtectedPair] {
        &self.protected_pairs
    }

    pub fn indent_markers(&self) -> &[String] {
        &self.indent_markers
    }

    pub fn verbatim_runs(&self) -> VerbatimRuns {
        self.verbatim_runs
    }

    /// Whether the caller should write the result back over its source.
    pub fn inplace(&self) -> bool {
        self.inplace
    }

    /// First configured indent marker that prefixes `content`, if any.
    pub fn indent_marker_of(&self, content: &str) -> Option<&str> {
        self.indent_markers
            .iter()
            .map(String::as_str)
            .find(|m| content.starts_with(m))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.row_limit < 1 {
            return Err(ConfigError::RowLimit(self.row_limit));
        }
        for (index, pair) in self.protected_pairs.iter().enumerate() {
            if pair.open.is_empty() || pair.close.is_empty() {
                return Err(ConfigError::EmptyMarker {
                    index,
                    open: pair.open.clone(),
                    close: pair.close.clone(),
                });
            }
        }
        if let Some(index) = self.indent_markers.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyIndentMarker(index));
        }
        Ok(())
    }
}

/// Collects settings for a [`WrapConfig`]; nothing is checked until `build`.
#[derive(Debug, Clone)]
pub struct WrapConfigBuilder {
    inner: WrapConfig,
}

impl WrapConfigBuilder {
    pub fn row_limit(mut self, row_limit: usize) -> Self {
        self.inner.row_limit = row_limit;
        self
    }

    pub fn protected_pairs<I, O, C>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (O, C)>,
        O: Into<String>,
        C: Into<String>,
    {
        self.inner.protected_pairs = pairs
            .into_iter()
            .map(|(open, close)| ProtectedPair::new(open, close))
            .collect();
        self
    }

    pub fn indent_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.indent_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn verbatim_runs(mut self, policy: VerbatimRuns) -> Self {
        self.inner.verbatim_runs = policy;
        self
    }

    pub fn inplace(mut self, inplace: bool) -> Self {
        self.inner.inplace = inplace;
        self
    }

    pub fn build(self) -> Result<WrapConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

//! Regex-driven syntax highlighting.
//!
//! A [`Highlighter`] holds an ordered list of [`SyntaxRule`]s, each pairing a
//! compiled regular expression with a color callback. At paint time the
//! widget asks for the full segmentation of the current text; the result is
//! a contiguous, non-overlapping list of [`ColoredSegment`]s covering the
//! whole string, with unmatched spans carrying the default color.
//!
//! Rules are greedy in registration order: a match is taken whole or not at
//! all — if any byte of its range was already claimed by an earlier rule
//! (or an earlier match of the same rule), the match is skipped entirely.
//!
//! Segmentation is recomputed from scratch on every call. For single-line
//! input fields the text is short and this keeps the engine stateless;
//! callers with unusually long text can memoize on the text content.

use regex::Regex;
use thiserror::Error;

use crate::color::Color;

/// Maps a matched substring to its display color.
pub type ColorFn = Box<dyn Fn(&str) -> Color + Send + Sync>;

/// Error raised when registering a syntax rule.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// The rule's pattern is not a valid regular expression.
    #[error("invalid syntax rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// One highlighting rule: a pattern and the color callback applied to each
/// of its matches.
pub struct SyntaxRule {
    pattern: Regex,
    color: ColorFn,
}

impl std::fmt::Debug for SyntaxRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxRule")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// A run of text assigned a single display color.
///
/// `start` and `len` are byte offsets into the text the segmentation was
/// computed for. Regex matches always fall on character boundaries, so
/// segment edges do too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredSegment {
    pub start: usize,
    pub len: usize,
    pub color: Color,
}

impl ColoredSegment {
    /// One-past-the-end byte offset of the segment.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Ordered rule set producing a full-coverage segmentation of a string.
#[derive(Debug, Default)]
pub struct Highlighter {
    rules: Vec<SyntaxRule>,
}

impl Highlighter {
    /// Create a highlighter with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Rules are evaluated in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::InvalidPattern`] when `pattern` does not
    /// compile; the rule list is left unchanged in that case.
    pub fn add_rule(
        &mut self,
        pattern: &str,
        color: impl Fn(&str) -> Color + Send + Sync + 'static,
    ) -> Result<(), HighlightError> {
        let pattern = Regex::new(pattern)?;
        tracing::debug!(pattern = pattern.as_str(), "syntax rule registered");
        self.rules.push(SyntaxRule {
            pattern,
            color: Box::new(color),
        });
        Ok(())
    }

    /// Remove all rules.
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Segment `text` into colored runs.
    ///
    /// The result is contiguous, non-overlapping, and covers
    /// `0..text.len()` exactly; it is empty only when `text` is empty.
    /// Unmatched spans are filled with `default_color`. Zero-length matches
    /// are discarded.
    pub fn segments(&self, text: &str, default_color: Color) -> Vec<ColoredSegment> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut claimed = vec![false; text.len()];
        let mut matches: Vec<ColoredSegment> = Vec::new();

        for rule in &self.rules {
            for m in rule.pattern.find_iter(text) {
                if m.start() == m.end() {
                    continue;
                }
                if claimed[m.start()..m.end()].iter().any(|&c| c) {
                    // Partial claiming is not allowed: an earlier rule owns
                    // part of this range, so the whole match is skipped.
                    continue;
                }
                for c in &mut claimed[m.start()..m.end()] {
                    *c = true;
                }
                matches.push(ColoredSegment {
                    start: m.start(),
                    len: m.end() - m.start(),
                    color: (rule.color)(m.as_str()),
                });
            }
        }

        // Matches from different rules interleave; order them by position
        // before gap-filling.
        matches.sort_by_key(|s| s.start);

        let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
        let mut pos = 0;
        for seg in matches {
            if pos < seg.start {
                segments.push(ColoredSegment {
                    start: pos,
                    len: seg.start - pos,
                    color: default_color,
                });
            }
            pos = seg.end();
            segments.push(seg);
        }
        if pos < text.len() {
            segments.push(ColoredSegment {
                start: pos,
                len: text.len() - pos,
                color: default_color,
            });
        }

        segments
    }
}

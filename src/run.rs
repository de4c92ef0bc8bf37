//! Literal runs and tagged sequences.
//!
//! A [`LiteralRun`] is a span of template text that remembers how it was
//! written: plain, inside a `'quoted'` block, or `\`-escaped. A
//! [`TaggedSeq`] is one concrete variant of a template, an ordered list of
//! runs.
//!
//! Only [`Origin::Plain`] runs are scanned for tokens. Escaped runs are
//! copied to the output unchanged, which is how `\Y` stays a literal `Y`.
//!
//! ## Normalization
//!
//! A `TaggedSeq` never stores an empty run. Adjacent escaped runs of the same
//! origin merge, since neither is ever scanned. Plain runs never merge: each
//! one is lexed on its own, so a group or quote boundary also ends a token.
//! `D[D]` yields `D` and `D` + `D`, never `DD`.
//!
//! ```rust
//! use flexlayout::{LiteralRun, Origin, TaggedSeq};
//!
//! let mut seq = TaggedSeq::new();
//! seq.push(LiteralRun::plain("D"));
//! seq.push(LiteralRun::plain("D"));
//! seq.push(LiteralRun::new("T", Origin::SlashEscaped));
//! seq.push(LiteralRun::new("Z", Origin::SlashEscaped));
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.render(), "DDTZ");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a run of template text was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Unescaped text, subject to token translation.
    #[default]
    Plain,
    /// Text from a `'quoted'` block.
    QuoteEscaped,
    /// A single character written as `\x`.
    SlashEscaped,
}

impl Origin {
    /// Returns `true` for runs that bypass token translation.
    #[inline]
    #[must_use]
    pub const fn is_escaped(&self) -> bool {
        !matches!(self, Origin::Plain)
    }
}

/// A contiguous span of text sharing one escaping origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiteralRun {
    text: String,
    origin: Origin,
}

impl LiteralRun {
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        LiteralRun {
            text: text.into(),
            origin,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Plain)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One concrete variant of a template: an ordered, normalized list of runs.
///
/// # Examples
///
/// ```rust
/// use flexlayout::{LiteralRun, Origin, TaggedSeq};
///
/// let date: TaggedSeq = vec![LiteralRun::plain("YYYY")].into_iter().collect();
/// let month: TaggedSeq = vec![LiteralRun::plain("-MM")].into_iter().collect();
///
/// let joined = date.concat(&month);
/// assert_eq!(joined.render(), "YYYY-MM");
/// assert_eq!(joined.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TaggedSeq(Vec<LiteralRun>);

impl TaggedSeq {
    #[must_use]
    pub fn new() -> Self {
        TaggedSeq(Vec::new())
    }

    /// Appends a run, dropping it if empty. An escaped run merges into the
    /// last run when the origins match; a plain run is always kept apart.
    pub fn push(&mut self, run: LiteralRun) {
        if run.is_empty() {
            return;
        }
        if run.origin.is_escaped() {
            if let Some(last) = self.0.last_mut().filter(|last| last.origin == run.origin) {
                last.text.push_str(&run.text);
                return;
            }
        }
        self.0.push(run);
    }

    /// Appends every run of `other`.
    pub fn extend_from(&mut self, other: &TaggedSeq) {
        for run in &other.0 {
            self.push(run.clone());
        }
    }

    /// Returns `self ++ other` without modifying either.
    #[must_use]
    pub fn concat(&self, other: &TaggedSeq) -> TaggedSeq {
        let mut out = TaggedSeq(Vec::with_capacity(self.0.len() + other.0.len()));
        out.extend_from(self);
        out.extend_from(other);
        out
    }

    /// Concatenates the run texts, ignoring their origins.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.0.iter().map(|r| r.text.len()).sum());
        for run in &self.0 {
            out.push_str(&run.text);
        }
        out
    }

    /// Returns `true` if the sequence renders to the empty string.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of runs after normalization.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn runs(&self) -> std::slice::Iter<'_, LiteralRun> {
        self.0.iter()
    }
}

impl fmt::Display for TaggedSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.0 {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

impl FromIterator<LiteralRun> for TaggedSeq {
    fn from_iter<T: IntoIterator<Item = LiteralRun>>(iter: T) -> Self {
        let mut seq = TaggedSeq::new();
        for run in iter {
            seq.push(run);
        }
        seq
    }
}

impl IntoIterator for TaggedSeq {
    type Item = LiteralRun;
    type IntoIter = std::vec::IntoIter<LiteralRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaggedSeq {
    type Item = &'a LiteralRun;
    type IntoIter = std::slice::Iter<'a, LiteralRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(runs: &[(&str, Origin)]) -> TaggedSeq {
        runs.iter().map(|(t, o)| LiteralRun::new(*t, *o)).collect()
    }

    #[test]
    fn test_push_keeps_plain_boundaries() {
        let s = seq(&[("YY", Origin::Plain), ("YY", Origin::Plain)]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.render(), "YYYY");
        assert_ne!(s, seq(&[("YYYY", Origin::Plain)]));
    }

    #[test]
    fn test_push_merges_escaped_same_origin() {
        let s = seq(&[("a", Origin::SlashEscaped), ("t", Origin::SlashEscaped)]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.runs().next().unwrap().text(), "at");

        let mixed = seq(&[("a", Origin::SlashEscaped), ("t", Origin::QuoteEscaped)]);
        assert_eq!(mixed.len(), 2);
    }

    #[test]
    fn test_push_keeps_origin_boundaries() {
        let s = seq(&[
            ("YYYY", Origin::Plain),
            ("T", Origin::SlashEscaped),
            ("hh", Origin::Plain),
        ]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.render(), "YYYYThh");
        assert_eq!(s.to_string(), "YYYYThh");
    }

    #[test]
    fn test_push_drops_empty() {
        let s = seq(&[("", Origin::Plain), ("", Origin::QuoteEscaped)]);
        assert!(s.is_empty());
        assert_eq!(s.render(), "");
    }

    #[test]
    fn test_concat_is_associative() {
        let a = seq(&[("a", Origin::Plain)]);
        let b = seq(&[("b", Origin::QuoteEscaped)]);
        let c = seq(&[("c", Origin::QuoteEscaped)]);
        assert_eq!(a.concat(&b).concat(&c), a.concat(&b.concat(&c)));
    }

    #[test]
    fn test_same_text_different_origin_not_equal() {
        let plain = seq(&[("Y", Origin::Plain)]);
        let escaped = seq(&[("Y", Origin::SlashEscaped)]);
        assert_eq!(plain.render(), escaped.render());
        assert_ne!(plain, escaped);
    }

    #[test]
    fn test_origin_is_escaped() {
        assert!(!Origin::Plain.is_escaped());
        assert!(Origin::QuoteEscaped.is_escaped());
        assert!(Origin::SlashEscaped.is_escaped());
    }
}

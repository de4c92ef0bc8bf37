//! Configuration options for template compilation.
//!
//! - [`CompileOptions`]: main configuration struct
//! - [`Dialect`]: the layout vocabulary produced by the translator
//!
//! Options derive serde's `Serialize`/`Deserialize`, so an application can
//! embed them in its own configuration file. Missing fields fall back to
//! their defaults.
//!
//! ## Examples
//!
//! ```rust
//! use flexlayout::{compile_with_options, CompileOptions, Dialect};
//!
//! let options = CompileOptions::new().with_dialect(Dialect::Strftime);
//! let layout = compile_with_options("YYYY-MM-DD", &options).unwrap();
//! assert_eq!(layout, "%Y-%m-%d");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output vocabulary for compiled layouts.
///
/// # Examples
///
/// ```rust
/// use flexlayout::Dialect;
///
/// assert_eq!(Dialect::default(), Dialect::Reference);
/// assert_eq!(Dialect::Strftime.as_str(), "strftime");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Example-date layouts such as `2006-01-02 15:04:05`.
    #[default]
    Reference,
    /// `%`-specifier layouts understood by `chrono`'s `format` functions.
    Strftime,
}

impl Dialect {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::Reference => "reference",
            Dialect::Strftime => "strftime",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration options for expansion and translation.
///
/// # Examples
///
/// ```rust
/// use flexlayout::{CompileOptions, Dialect};
///
/// let options = CompileOptions::new()
///     .with_dialect(Dialect::Strftime)
///     .with_max_depth(8)
///     .with_max_variants(256);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub dialect: Dialect,
    /// Deepest allowed nesting of optional groups.
    pub max_depth: usize,
    /// Largest number of variants a single template may expand to.
    pub max_variants: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            dialect: Dialect::default(),
            max_depth: 4096,
            max_variants: 4096,
        }
    }
}

impl CompileOptions {
    /// Creates default options (reference dialect, depth 4096, 4096 variants).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flexlayout::{CompileOptions, Dialect};
    ///
    /// let options = CompileOptions::new();
    /// assert_eq!(options.dialect, Dialect::Reference);
    /// assert_eq!(options.max_variants, 4096);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the deepest allowed nesting of optional groups.
    ///
    /// `YYYY[-MM[-DD]]` has depth 2. Templates nested deeper fail with
    /// [`Error::NestingTooDeep`](crate::Error::NestingTooDeep).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the largest number of variants a template may expand to.
    ///
    /// Each independent optional group can double the variant count, so this
    /// bounds the work done for templates with many sibling groups.
    #[must_use]
    pub fn with_max_variants(mut self, max_variants: usize) -> Self {
        self.max_variants = max_variants;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = CompileOptions::new()
            .with_dialect(Dialect::Strftime)
            .with_max_depth(3)
            .with_max_variants(10);
        assert_eq!(options.dialect, Dialect::Strftime);
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.max_variants, 10);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: CompileOptions = serde_json::from_str(r#"{"dialect":"strftime"}"#).unwrap();
        assert_eq!(options.dialect, Dialect::Strftime);
        assert_eq!(options.max_depth, 4096);
        assert_eq!(options.max_variants, 4096);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let options = CompileOptions::new().with_max_depth(5);
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r#""dialect":"reference""#));
        let back: CompileOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}

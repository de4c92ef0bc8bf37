//! Error types for template expansion and layout translation.
//!
//! Every failure is an ordinary value: the grammar never panics on bad input
//! and a failed compile never returns a partial result.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the optional-segment grammar could not consume the
//!   whole template (unbalanced brackets, unterminated quote, dangling `\`)
//! - **Token Errors**: a token-like prefix had a spelling the vocabulary does
//!   not contain, such as `YYY` or a lone `H`
//! - **Limit Errors**: nesting or variant count went past the configured
//!   [`CompileOptions`](crate::CompileOptions) bounds
//! - **Dialect Errors**: a token has no equivalent in the selected output
//!   dialect
//!
//! ## Examples
//!
//! ```rust
//! use flexlayout::{expand_strings, Error};
//!
//! let err = expand_strings("YYYY[-MM").unwrap_err();
//! match err {
//!     Error::Syntax { parsed, .. } => assert_eq!(parsed, "YYYY"),
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use crate::options::Dialect;
use crate::token::Token;
use thiserror::Error;

/// Represents all possible errors produced while compiling a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grammar could not consume the whole input.
    ///
    /// `parsed` is the longest top-level prefix that was consumed
    /// successfully, which points right before the offending group, quote or
    /// escape.
    #[error("Syntax error: unbalanced brackets or quotes? parsed {parsed:?} of input {input:?}")]
    Syntax { input: String, parsed: String },

    /// A token-like prefix had an unsupported length or spelling.
    #[error("Token error at index {offset}: must be prefixed with one of {expected:?}, found {actual:?}")]
    Token {
        offset: usize,
        expected: Vec<&'static str>,
        actual: String,
    },

    /// Optional groups were nested deeper than allowed.
    #[error("Optional groups nested deeper than {limit} levels at index {offset}")]
    NestingTooDeep { limit: usize, offset: usize },

    /// The template expands to more variants than allowed.
    #[error("Template expands to more than {limit} variants")]
    TooManyVariants { limit: usize },

    /// The token cannot be expressed in the selected dialect.
    #[error("Token {token} has no {dialect} equivalent")]
    Unsupported { token: Token, dialect: Dialect },

    /// The host time library rejected a produced layout.
    #[error("Invalid {dialect} layout produced: {layout:?}")]
    InvalidLayout { layout: String, dialect: Dialect },

    /// A single layout was requested but the template has several variants.
    #[error("Template has {count} variants, expected exactly one")]
    MultipleVariants { count: usize },
}

impl Error {
    /// Creates a syntax error from the original input and the consumed prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flexlayout::Error;
    ///
    /// let err = Error::syntax("ab]c", "ab");
    /// assert!(err.to_string().contains("\"ab\""));
    /// ```
    pub fn syntax(input: &str, parsed: &str) -> Self {
        Error::Syntax {
            input: input.to_string(),
            parsed: parsed.to_string(),
        }
    }

    /// Creates a token error at `offset` (in characters).
    pub fn token(offset: usize, expected: &[&'static str], actual: &str) -> Self {
        Error::Token {
            offset,
            expected: expected.to_vec(),
            actual: actual.to_string(),
        }
    }

    pub fn nesting_too_deep(limit: usize, offset: usize) -> Self {
        Error::NestingTooDeep { limit, offset }
    }

    pub fn too_many_variants(limit: usize) -> Self {
        Error::TooManyVariants { limit }
    }

    pub fn unsupported(token: Token, dialect: Dialect) -> Self {
        Error::Unsupported { token, dialect }
    }

    pub fn invalid_layout(layout: &str, dialect: Dialect) -> Self {
        Error::InvalidLayout {
            layout: layout.to_string(),
            dialect,
        }
    }

    /// Returns `true` for errors caused by the template's bracket, quote or
    /// escape structure.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. } | Error::NestingTooDeep { .. })
    }

    /// Returns `true` for errors raised while recognizing tokens.
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Error::Token { .. } | Error::Unsupported { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

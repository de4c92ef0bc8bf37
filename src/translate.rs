//! Translation of tagged sequences into layouts.
//!
//! Plain runs go through the [`Lexer`](crate::lexer::Lexer) and each token is
//! replaced by its [`Dialect`] equivalent. Escaped runs are copied verbatim,
//! never scanned, so `\Y` or `'Y'` stays a literal `Y`.
//!
//! The strftime dialect treats `%` as its escape character, so literal `%`
//! is written as `%%`. Every strftime layout is then checked with `chrono`'s
//! own format-string parser before it is returned.
//!
//! ## Direct Translator Usage
//!
//! ```rust
//! use flexlayout::translate::Translator;
//! use flexlayout::{CompileOptions, LiteralRun, Origin, TaggedSeq};
//!
//! let seq: TaggedSeq = vec![
//!     LiteralRun::plain("YYYY"),
//!     LiteralRun::new("Y", Origin::SlashEscaped),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut translator = Translator::new(CompileOptions::new());
//! translator.write_seq(&seq).unwrap();
//! assert_eq!(translator.into_inner(), "2006Y");
//! ```

use crate::lexer::{Lexer, Piece};
use crate::run::TaggedSeq;
use crate::{CompileOptions, Dialect, Error, Result};
use chrono::format::{Item, StrftimeItems};

/// Writes translated layouts into an output buffer.
pub struct Translator {
    output: String,
    options: CompileOptions,
    // Characters of template text consumed so far, for error offsets.
    offset: usize,
}

impl Translator {
    pub fn new(options: CompileOptions) -> Self {
        Translator {
            output: String::with_capacity(32),
            options,
            offset: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Translates every run of `seq` and appends the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Token`] for malformed tokens and
    /// [`Error::Unsupported`] for tokens the dialect cannot express.
    pub fn write_seq(&mut self, seq: &TaggedSeq) -> Result<()> {
        for run in seq {
            if run.origin().is_escaped() {
                self.write_literal(run.text());
                self.offset += run.text().chars().count();
            } else {
                self.write_plain(run.text())?;
            }
        }
        Ok(())
    }

    /// Lexes `text` as unescaped template text and appends the result.
    pub fn write_plain(&mut self, text: &str) -> Result<()> {
        for piece in Lexer::new(text).with_offset(self.offset) {
            match piece? {
                Piece::Literal(literal) => self.write_literal(literal),
                Piece::Token(token) => {
                    let translated = token.translate(self.options.dialect)?;
                    self.output.push_str(&translated);
                }
            }
        }
        self.offset += text.chars().count();
        Ok(())
    }

    fn write_literal(&mut self, text: &str) {
        match self.options.dialect {
            Dialect::Reference => self.output.push_str(text),
            Dialect::Strftime => {
                for ch in text.chars() {
                    if ch == '%' {
                        self.output.push_str("%%");
                    } else {
                        self.output.push(ch);
                    }
                }
            }
        }
    }

    /// Consumes the translator and returns the layout, checked against the
    /// host library when the dialect has a parser for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if `chrono` rejects a strftime layout.
    pub fn finish(self) -> Result<String> {
        if self.options.dialect == Dialect::Strftime {
            validate_strftime(&self.output)?;
        }
        Ok(self.output)
    }
}

/// Checks that `chrono` parses `layout` without errors.
pub fn validate_strftime(layout: &str) -> Result<()> {
    if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
        debug!("chrono rejected strftime layout {:?}", layout);
        return Err(Error::invalid_layout(layout, Dialect::Strftime));
    }
    Ok(())
}

//! Optional-segment grammar.
//!
//! This module turns raw template text into a [`Template`]: a list of
//! [`Item`]s where each item is either a literal run or a bracketed optional
//! group holding more items.
//!
//! ## Syntax
//!
//! ```text
//! template := (group | content)*
//! group    := '[' (group | content)* ']'
//! content  := plain | '\' any | quoted
//! plain    := [^\[\]\\']+
//! quoted   := '\'' ('\' any | [^'\\])* '\''
//! ```
//!
//! Inside a quoted block `[` and `]` are ordinary characters and `\x` still
//! escapes `x`, so `'\''` is a quoted `'` and `'\\'` is a quoted `\`.
//!
//! ## Errors
//!
//! The parser is a single left-to-right pass with an explicit stack of open
//! groups, so nesting depth never grows the call stack. When the input cannot
//! be consumed completely it returns [`Error::Syntax`] with the longest
//! top-level prefix that parsed cleanly:
//!
//! ```rust
//! use flexlayout::grammar::parse;
//! use flexlayout::{CompileOptions, Error};
//!
//! let err = parse("YYYY-MM]DD", &CompileOptions::new()).unwrap_err();
//! assert_eq!(err, Error::syntax("YYYY-MM]DD", "YYYY-MM"));
//! ```

use crate::run::{LiteralRun, Origin, TaggedSeq};
use crate::{CompileOptions, Error, Result};

// Characters that end a plain stretch.
const TEMPLATE_SPECIAL: &[char] = &['[', ']', '\\', '\''];
const ESCAPE_SPECIAL: &[char] = &['\\', '\''];

/// One element of a parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Run(LiteralRun),
    /// A `[...]` group and the items between its brackets.
    Optional(Vec<Item>),
}

/// A parsed template.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Template {
    items: Vec<Item>,
    groups: usize,
}

impl Template {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total number of optional groups, at every nesting level.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups
    }
}

impl Drop for Template {
    fn drop(&mut self) {
        // Unnest iteratively so dropping deeply nested groups stays flat.
        let mut pending = std::mem::take(&mut self.items);
        while let Some(item) = pending.pop() {
            if let Item::Optional(inner) = item {
                pending.extend(inner);
            }
        }
    }
}

/// Parses `input` into a [`Template`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] on unbalanced brackets, an unterminated quote or
/// a trailing `\`, and [`Error::NestingTooDeep`] when groups nest deeper than
/// `options.max_depth`.
pub fn parse(input: &str, options: &CompileOptions) -> Result<Template> {
    Parser::new(input, options.max_depth).parse()
}

/// Splits token text with no optional groups into runs, honouring `\x` escapes and
/// `'quoted'` blocks with the same rules as [`parse`]. `[` and `]` are plain
/// text here.
///
/// ```rust
/// use flexlayout::grammar::parse_literals;
/// use flexlayout::{LiteralRun, Origin};
///
/// let seq = parse_literals(r"hh 'at' [mm]").unwrap();
/// let runs: Vec<&LiteralRun> = seq.runs().collect();
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs[1], &LiteralRun::new("at", Origin::QuoteEscaped));
/// assert_eq!(runs[2].text(), " [mm]");
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] on an unterminated quote or a trailing `\`.
pub fn parse_literals(input: &str) -> Result<TaggedSeq> {
    Parser::new(input, 0).parse_literals()
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
    max_depth: usize,
    // End of the last top-level element that parsed completely.
    committed: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, max_depth: usize) -> Self {
        Parser {
            input,
            position: 0,
            max_depth,
            committed: 0,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn syntax_error(&self) -> Error {
        Error::syntax(self.input, &self.input[..self.committed])
    }

    fn parse(mut self) -> Result<Template> {
        // Items of every enclosing group, innermost last.
        let mut open: Vec<Vec<Item>> = Vec::new();
        let mut items: Vec<Item> = Vec::new();
        let mut groups = 0;

        while let Some(ch) = self.peek_char() {
            match ch {
                '[' => {
                    if open.len() >= self.max_depth {
                        return Err(Error::nesting_too_deep(
                            self.max_depth,
                            self.input[..self.position].chars().count(),
                        ));
                    }
                    self.next_char();
                    open.push(std::mem::take(&mut items));
                }
                ']' => {
                    let outer = open.pop().ok_or_else(|| self.syntax_error())?;
                    self.next_char();
                    let inner = std::mem::replace(&mut items, outer);
                    items.push(Item::Optional(inner));
                    groups += 1;
                }
                '\\' => {
                    self.next_char();
                    let escaped = self.next_char().ok_or_else(|| self.syntax_error())?;
                    items.push(Item::Run(LiteralRun::new(
                        escaped.to_string(),
                        Origin::SlashEscaped,
                    )));
                }
                '\'' => {
                    let quoted = self.parse_quoted()?;
                    if !quoted.is_empty() {
                        items.push(Item::Run(LiteralRun::new(quoted, Origin::QuoteEscaped)));
                    }
                }
                _ => {
                    let plain = self.parse_plain(TEMPLATE_SPECIAL);
                    items.push(Item::Run(LiteralRun::plain(plain)));
                }
            }

            if open.is_empty() {
                self.committed = self.position;
            }
        }

        if !open.is_empty() {
            return Err(self.syntax_error());
        }

        trace!("parsed {:?} into {} items, {} groups", self.input, items.len(), groups);
        Ok(Template { items, groups })
    }

    fn parse_literals(mut self) -> Result<TaggedSeq> {
        let mut seq = TaggedSeq::new();

        while let Some(ch) = self.peek_char() {
            match ch {
                '\\' => {
                    self.next_char();
                    let escaped = self.next_char().ok_or_else(|| self.syntax_error())?;
                    seq.push(LiteralRun::new(escaped.to_string(), Origin::SlashEscaped));
                }
                '\'' => {
                    let quoted = self.parse_quoted()?;
                    seq.push(LiteralRun::new(quoted, Origin::QuoteEscaped));
                }
                _ => seq.push(LiteralRun::plain(self.parse_plain(ESCAPE_SPECIAL))),
            }
            self.committed = self.position;
        }

        trace!("split {:?} into {} runs", self.input, seq.len());
        Ok(seq)
    }

    fn parse_plain(&mut self, special: &[char]) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if special.contains(&ch) {
                break;
            }
            self.next_char();
        }
        &self.input[start..self.position]
    }

    fn parse_quoted(&mut self) -> Result<String> {
        self.next_char(); // consume opening quote
        let mut result = String::new();

        while let Some(ch) = self.next_char() {
            match ch {
                '\'' => return Ok(result),
                '\\' => match self.next_char() {
                    Some(escaped) => result.push(escaped),
                    None => return Err(self.syntax_error()),
                },
                other => result.push(other),
            }
        }
        Err(self.syntax_error())
    }
}

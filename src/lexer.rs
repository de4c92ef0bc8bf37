//! Token lexer.
//!
//! Splits plain template text into literal text and [`Token`]s. Recognition
//! is driven by a table keyed on a token's first character. Each entry lists
//! the candidate spellings longest or most specific first, and the first
//! candidate that prefixes the remaining input wins. The order is load
//! bearing: `MMM` must be tried before `MM`, and `MST` before `MM` as well.
//!
//! Two characters need lookahead instead of a plain table hit:
//!
//! - `.` starts a fraction only when followed by `S`, `0` or `9`; the token
//!   then runs as long as that same character repeats (`.SSS`, `.000000`).
//! - `-` starts an offset only when one of the offset spellings matches;
//!   otherwise it is literal text, as in `YYYY-MM`.
//!
//! Any other table character with no matching candidate is an error. `YYY`
//! fails because only `YYYY` and `YY` exist.
//!
//! ```rust
//! use flexlayout::lexer::{Lexer, Piece};
//! use flexlayout::Token;
//!
//! let pieces: Vec<Piece> = Lexer::new("YYYY-MM").collect::<Result<_, _>>().unwrap();
//! assert_eq!(
//!     pieces,
//!     [
//!         Piece::Token(Token::YearLong),
//!         Piece::Literal("-"),
//!         Piece::Token(Token::MonthZero),
//!     ]
//! );
//! ```

use crate::token::Token;
use crate::{Error, Result};

type Candidates = &'static [(&'static str, Token)];

const MONTH: Candidates = &[
    ("MMMM", Token::MonthLong),
    ("MMM", Token::MonthShort),
    ("MST", Token::ZoneAbbrev),
    ("MM", Token::MonthZero),
    ("M", Token::Month),
];
const WEEKDAY: Candidates = &[("ww", Token::WeekdayLong), ("w", Token::WeekdayShort)];
const DAY_LOWER: Candidates = &[
    ("ddd", Token::DayOfYear),
    ("dd", Token::DayZero),
    ("d", Token::Day),
];
const DAY_UPPER: Candidates = &[
    ("DDD", Token::DayOfYear),
    ("DD", Token::DayZero),
    ("D", Token::Day),
];
const HOUR_24: Candidates = &[("HH", Token::Hour24Zero)];
const HOUR_12: Candidates = &[("hh", Token::Hour12Zero), ("h", Token::Hour12)];
const MINUTE: Candidates = &[("mm", Token::MinuteZero), ("m", Token::Minute)];
const SECOND: Candidates = &[("ss", Token::SecondZero), ("s", Token::Second)];
const YEAR_UPPER: Candidates = &[("YYYY", Token::YearLong), ("YY", Token::YearShort)];
const YEAR_LOWER: Candidates = &[("yyyy", Token::YearLong), ("yy", Token::YearShort)];
const MERIDIEM_UPPER: Candidates = &[("A", Token::MeridiemUpper)];
const MERIDIEM_LOWER: Candidates = &[("a", Token::MeridiemLower)];
const ZONE: Candidates = &[
    ("Z07:00:00", Token::ZoneZColonSeconds),
    ("Z070000", Token::ZoneZSeconds),
    ("Z07", Token::ZoneZHours),
    ("ZZ", Token::ZoneZCompact),
    ("Z", Token::ZoneZ),
];
const OFFSET: Candidates = &[
    ("-07:00:00", Token::OffsetColonSeconds),
    ("-070000", Token::OffsetSeconds),
    ("-07:00", Token::OffsetColon),
    ("-0700", Token::Offset),
    ("-07", Token::OffsetHours),
];

/// Candidate spellings for tokens starting with `first`, most specific first.
#[must_use]
pub fn candidates(first: char) -> Option<Candidates> {
    let table = match first {
        'M' => MONTH,
        'w' => WEEKDAY,
        'd' => DAY_LOWER,
        'D' => DAY_UPPER,
        'H' => HOUR_24,
        'h' => HOUR_12,
        'm' => MINUTE,
        's' => SECOND,
        'Y' => YEAR_UPPER,
        'y' => YEAR_LOWER,
        'A' => MERIDIEM_UPPER,
        'a' => MERIDIEM_LOWER,
        'Z' => ZONE,
        '-' => OFFSET,
        _ => return None,
    };
    Some(table)
}

/// A piece of lexed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    Literal(&'a str),
    Token(Token),
}

/// One scan step: literal `prefix`, then an optional `token`, then `rest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub prefix: &'a str,
    pub token: Option<Token>,
    pub rest: &'a str,
}

/// Scans `input` up to and including its first token.
///
/// When no token is found the whole input is returned as `prefix` and
/// `rest` is empty.
///
/// # Errors
///
/// Returns [`Error::Token`] when a token character starts a spelling not in
/// the table. `offset` counts characters from the start of `input`.
///
/// # Examples
///
/// ```rust
/// use flexlayout::lexer::next_chunk;
/// use flexlayout::Token;
///
/// let chunk = next_chunk("at hh:mm").unwrap();
/// assert_eq!(chunk.prefix, "");
/// assert_eq!(chunk.token, Some(Token::MeridiemLower));
/// assert_eq!(chunk.rest, "t hh:mm");
///
/// assert!(next_chunk("YYY").is_err());
/// ```
pub fn next_chunk(input: &str) -> Result<Chunk<'_>> {
    for (i, ch) in input.char_indices() {
        let tail = &input[i..];

        if ch == '.' {
            if let Some(len) = fraction_len(tail) {
                let digit = tail[1..].chars().next();
                return Ok(Chunk {
                    prefix: &input[..i],
                    token: Some(Token::Fraction {
                        digits: len - 1,
                        trimmed: digit == Some('9'),
                    }),
                    rest: &tail[len..],
                });
            }
            continue;
        }

        let Some(table) = candidates(ch) else {
            continue;
        };
        if let Some((spelling, token)) = table.iter().find(|(s, _)| tail.starts_with(s)) {
            return Ok(Chunk {
                prefix: &input[..i],
                token: Some(*token),
                rest: &tail[spelling.len()..],
            });
        }
        if ch == '-' {
            continue;
        }

        let expected: Vec<&'static str> = table.iter().map(|(s, _)| *s).collect();
        return Err(Error::token(input[..i].chars().count(), &expected, tail));
    }

    Ok(Chunk {
        prefix: input,
        token: None,
        rest: "",
    })
}

// Byte length of a `.` fraction token at the start of `tail`, if any.
fn fraction_len(tail: &str) -> Option<usize> {
    let digit = tail[1..].chars().next()?;
    if !matches!(digit, 'S' | '0' | '9') {
        return None;
    }
    let repeated = tail[1..].chars().take_while(|&c| c == digit).count();
    Some(1 + repeated)
}

/// Iterator over the [`Piece`]s of plain template text.
///
/// Errors are reported once; the iterator is exhausted afterwards. Error
/// offsets are shifted by `base`, set with [`Lexer::with_offset`], so a
/// caller lexing one run of a longer sequence can report positions in the
/// whole sequence.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pending: Option<Token>,
    base: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pending: None,
            base: 0,
            failed: false,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, base: usize) -> Self {
        self.base = base;
        self
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Piece<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(Piece::Token(token)));
        }
        if self.failed || self.input.is_empty() {
            return None;
        }

        match next_chunk(self.input) {
            Ok(chunk) => {
                self.base += chunk.prefix.chars().count();
                if let Some(token) = chunk.token {
                    self.base += self.input[chunk.prefix.len()..].len() - chunk.rest.len();
                    self.pending = Some(token);
                }
                self.input = chunk.rest;
                if chunk.prefix.is_empty() {
                    return self.next();
                }
                Some(Ok(Piece::Literal(chunk.prefix)))
            }
            Err(Error::Token {
                offset,
                expected,
                actual,
            }) => {
                self.failed = true;
                Some(Err(Error::Token {
                    offset: offset + self.base,
                    expected,
                    actual,
                }))
            }
            Err(other) => {
                self.failed = true;
                Some(Err(other))
            }
        }
    }
}

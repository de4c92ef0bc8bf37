//! Template Syntax Reference
//!
//! This module documents the template language accepted by this crate. It
//! contains no code.
//!
//! # Overview
//!
//! A template is read in two layers:
//!
//! 1. The **segment layer** handles `[`optional groups`]`, `'quoted blocks'`
//!    and `\` escapes, and expands the template into concrete variants.
//! 2. The **token layer** scans the unescaped text of each variant for
//!    tokens such as `YYYY` and replaces them with layout fragments.
//!
//! # Segment Layer
//!
//! | Syntax | Meaning | Example | Variants |
//! |--------|---------|---------|----------|
//! | text | plain text | `YYYY-MM` | `YYYY-MM` |
//! | `[...]` | optional group | `YYYY[-MM]` | `YYYY`, `YYYY-MM` |
//! | `[..[..]..]` | nested groups | `a[b[c]]` | `a`, `ab`, `abc` |
//! | `\x` | escaped character | `\T` | literal `T` |
//! | `'...'` | quoted block | `'[at]'` | literal `[at]` |
//!
//! **Rules**:
//! - Groups nest to any depth up to
//!   [`CompileOptions::max_depth`](crate::CompileOptions::max_depth).
//! - An inner group is only present when its enclosing group is: `a[b[c]]`
//!   never yields `ac`.
//! - Sibling groups are independent: `a[b][c]` yields `a`, `ab`, `ac` and
//!   `abc`.
//! - Empty groups (`[]`) and empty quotes (`''`) contribute no text.
//! - Inside a quoted block, `\x` still escapes `x`. The block ends at the
//!   first `'` not consumed by an escape, so `'\''` quotes a single `'`
//!   while `'\\'` quotes a single `\`.
//! - Escaped and quoted text is never scanned for tokens.
//!
//! **Errors**: an unmatched `[` or `]`, an unterminated quote or a trailing
//! `\` fail with [`Error::Syntax`](crate::Error::Syntax). The error carries
//! the longest top-level prefix that parsed, so `YYYY[-MM` reports `YYYY`.
//!
//! # Token Layer
//!
//! Tokens are case sensitive. Text that does not start a token is copied
//! unchanged.
//!
//! ## Date
//!
//! | Token | Field | Example output |
//! |-------|-------|----------------|
//! | `YYYY` `yyyy` | year | `2024` |
//! | `YY` `yy` | two-digit year | `24` |
//! | `MMMM` | month name | `January` |
//! | `MMM` | short month name | `Jan` |
//! | `MM` | zero-padded month | `01` |
//! | `M` | month | `1` |
//! | `DD` `dd` | zero-padded day of month | `05` |
//! | `D` `d` | day of month | `5` |
//! | `DDD` `ddd` | day of year | `005` |
//! | `ww` | weekday name | `Friday` |
//! | `w` | short weekday name | `Fri` |
//!
//! ## Time
//!
//! | Token | Field | Example output |
//! |-------|-------|----------------|
//! | `HH` | zero-padded 24-hour | `17` |
//! | `hh` | zero-padded 12-hour | `05` |
//! | `h` | 12-hour | `5` |
//! | `mm` / `m` | minute | `07` / `7` |
//! | `ss` / `s` | second | `09` / `9` |
//! | `A` / `a` | meridiem | `PM` / `pm` |
//! | `.SSS` `.000` | fraction, fixed width | `.120` |
//! | `.999` | fraction, trailing zeros trimmed | `.12` |
//!
//! A fraction token is `.` followed by a run of one repeated character; its
//! length sets the number of digits. `.` followed by anything else is plain
//! text.
//!
//! ## Zone
//!
//! | Token | Field | Example output |
//! |-------|-------|----------------|
//! | `MST` | zone abbreviation | `JST` |
//! | `-0700` | offset | `+0900` |
//! | `-07:00` | offset with colon | `+09:00` |
//! | `-07:00:00` `-070000` | offset with seconds | `+09:00:00` |
//! | `-07` | offset hours | `+09` |
//! | `Z` | offset, `Z` for UTC | `Z`, `+09:00` |
//! | `ZZ` | compact offset, `Z` for UTC | `Z`, `+0900` |
//! | `Z07`, `Z070000`, `Z07:00:00` | other `Z`-style offsets | |
//!
//! A `-` that does not start one of the offset spellings is plain text, so
//! `YYYY-MM` needs no escaping.
//!
//! ## Matching
//!
//! At each position the longest listed spelling wins. `MMMMM` is `MMMM`
//! followed by `M`. A token letter that starts no valid spelling is an
//! error rather than literal text:
//!
//! | Input | Result |
//! |-------|--------|
//! | `YYY` | `YY`, then an error at the last `Y` |
//! | `H` | error, only `HH` exists |
//! | `Y` | error |
//!
//! Escape token letters that should appear literally: `\at` or `'at'`.
//!
//! A bracket or a quote, even an empty `''`, also ends a token: `D[D]`
//! compiles to `2` and `22`, and `M''M` to `11`.
//!
//! # Dialects
//!
//! | Dialect | `YYYY-MM-DD hh:mm:ss A` compiles to |
//! |---------|-------------------------------------|
//! | [`Reference`](crate::Dialect::Reference) | `2006-01-02 03:04:05 PM` |
//! | [`Strftime`](crate::Dialect::Strftime) | `%Y-%m-%d %I:%M:%S %p` |
//!
//! The strftime dialect doubles literal `%` characters and rejects tokens
//! `chrono` cannot print: `Z`-style zones, `-070000`, trimmed fractions and
//! fixed fractions other than 3, 6 or 9 digits. See [`Token`](crate::Token)
//! for the full table.

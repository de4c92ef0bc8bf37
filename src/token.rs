//! Format tokens and their layout equivalents.
//!
//! [`Token`] is the closed set of fields a template can name. Each token
//! translates to exactly one layout fragment per [`Dialect`]:
//!
//! | Template | Field | Reference | Strftime |
//! |----------|-------|-----------|----------|
//! | `YYYY` `yyyy` | 4-digit year | `2006` | `%Y` |
//! | `YY` `yy` | 2-digit year | `06` | `%y` |
//! | `MMMM` | month name | `January` | `%B` |
//! | `MMM` | short month name | `Jan` | `%b` |
//! | `MM` | zero-padded month | `01` | `%m` |
//! | `M` | month | `1` | `%-m` |
//! | `ww` | weekday name | `Monday` | `%A` |
//! | `w` | short weekday name | `Mon` | `%a` |
//! | `DDD` `ddd` | day of year | `002` | `%j` |
//! | `DD` `dd` | zero-padded day | `02` | `%d` |
//! | `D` `d` | day | `2` | `%-d` |
//! | `HH` | zero-padded 24-hour | `15` | `%H` |
//! | `hh` | zero-padded 12-hour | `03` | `%I` |
//! | `h` | 12-hour | `3` | `%-I` |
//! | `mm` / `m` | minute | `04` / `4` | `%M` / `%-M` |
//! | `ss` / `s` | second | `05` / `5` | `%S` / `%-S` |
//! | `A` / `a` | meridiem | `PM` / `pm` | `%p` / `%P` |
//! | `MST` | zone abbreviation | `MST` | `%Z` |
//! | `-0700` `-07:00` `-07:00:00` `-07` | offset | same | `%z` `%:z` `%::z` `%:::z` |
//! | `.SSS` `.000` | fixed fraction | `.000` | `%.3f` |
//! | `.999` | trimmed fraction | `.999` | n/a |
//!
//! `Z`-style zones (`Z`, `ZZ`, `Z07`, `Z070000`, `Z07:00:00`) print `Z` for
//! UTC in the reference dialect, which strftime cannot express.

use crate::options::Dialect;
use crate::{Error, Result};
use std::borrow::Cow;
use std::fmt;

/// A recognized template token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    YearLong,
    YearShort,
    MonthLong,
    MonthShort,
    MonthZero,
    Month,
    WeekdayLong,
    WeekdayShort,
    DayOfYear,
    DayZero,
    Day,
    Hour24Zero,
    Hour12Zero,
    Hour12,
    MinuteZero,
    Minute,
    SecondZero,
    Second,
    MeridiemUpper,
    MeridiemLower,
    ZoneAbbrev,
    /// `Z`: `Z` for UTC, else `-07:00`.
    ZoneZ,
    /// `ZZ`: `Z` for UTC, else `-0700`.
    ZoneZCompact,
    ZoneZHours,
    ZoneZSeconds,
    ZoneZColonSeconds,
    Offset,
    OffsetHours,
    OffsetColon,
    OffsetSeconds,
    OffsetColonSeconds,
    /// Fractional seconds with `digits` places. `trimmed` drops trailing
    /// zeros (the `.999` spelling).
    Fraction { digits: usize, trimmed: bool },
}

impl Token {
    /// Canonical template spelling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flexlayout::Token;
    ///
    /// assert_eq!(Token::YearLong.spelling(), "YYYY");
    /// assert_eq!(Token::Fraction { digits: 3, trimmed: false }.spelling(), ".SSS");
    /// ```
    #[must_use]
    pub fn spelling(&self) -> Cow<'static, str> {
        let fixed = match self {
            Token::YearLong => "YYYY",
            Token::YearShort => "YY",
            Token::MonthLong => "MMMM",
            Token::MonthShort => "MMM",
            Token::MonthZero => "MM",
            Token::Month => "M",
            Token::WeekdayLong => "ww",
            Token::WeekdayShort => "w",
            Token::DayOfYear => "DDD",
            Token::DayZero => "DD",
            Token::Day => "D",
            Token::Hour24Zero => "HH",
            Token::Hour12Zero => "hh",
            Token::Hour12 => "h",
            Token::MinuteZero => "mm",
            Token::Minute => "m",
            Token::SecondZero => "ss",
            Token::Second => "s",
            Token::MeridiemUpper => "A",
            Token::MeridiemLower => "a",
            Token::ZoneAbbrev => "MST",
            Token::ZoneZ => "Z",
            Token::ZoneZCompact => "ZZ",
            Token::ZoneZHours => "Z07",
            Token::ZoneZSeconds => "Z070000",
            Token::ZoneZColonSeconds => "Z07:00:00",
            Token::Offset => "-0700",
            Token::OffsetHours => "-07",
            Token::OffsetColon => "-07:00",
            Token::OffsetSeconds => "-070000",
            Token::OffsetColonSeconds => "-07:00:00",
            Token::Fraction { digits, trimmed } => {
                let digit = if *trimmed { "9" } else { "S" };
                return Cow::Owned(format!(".{}", digit.repeat(*digits)));
            }
        };
        Cow::Borrowed(fixed)
    }

    /// Translates this token into `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] when the dialect has no equivalent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flexlayout::{Dialect, Token};
    ///
    /// assert_eq!(Token::MonthZero.translate(Dialect::Reference).unwrap(), "01");
    /// assert_eq!(Token::MonthZero.translate(Dialect::Strftime).unwrap(), "%m");
    /// assert!(Token::ZoneZ.translate(Dialect::Strftime).is_err());
    /// ```
    pub fn translate(&self, dialect: Dialect) -> Result<Cow<'static, str>> {
        match dialect {
            Dialect::Reference => Ok(self.to_reference()),
            Dialect::Strftime => self
                .to_strftime()
                .ok_or_else(|| Error::unsupported(*self, dialect)),
        }
    }

    fn to_reference(self) -> Cow<'static, str> {
        let fixed = match self {
            Token::YearLong => "2006",
            Token::YearShort => "06",
            Token::MonthLong => "January",
            Token::MonthShort => "Jan",
            Token::MonthZero => "01",
            Token::Month => "1",
            Token::WeekdayLong => "Monday",
            Token::WeekdayShort => "Mon",
            Token::DayOfYear => "002",
            Token::DayZero => "02",
            Token::Day => "2",
            Token::Hour24Zero => "15",
            Token::Hour12Zero => "03",
            Token::Hour12 => "3",
            Token::MinuteZero => "04",
            Token::Minute => "4",
            Token::SecondZero => "05",
            Token::Second => "5",
            Token::MeridiemUpper => "PM",
            Token::MeridiemLower => "pm",
            Token::ZoneAbbrev => "MST",
            Token::ZoneZ => "Z07:00",
            Token::ZoneZCompact => "Z0700",
            Token::ZoneZHours => "Z07",
            Token::ZoneZSeconds => "Z070000",
            Token::ZoneZColonSeconds => "Z07:00:00",
            Token::Offset => "-0700",
            Token::OffsetHours => "-07",
            Token::OffsetColon => "-07:00",
            Token::OffsetSeconds => "-070000",
            Token::OffsetColonSeconds => "-07:00:00",
            Token::Fraction { digits, trimmed } => {
                let digit = if trimmed { "9" } else { "0" };
                return Cow::Owned(format!(".{}", digit.repeat(digits)));
            }
        };
        Cow::Borrowed(fixed)
    }

    fn to_strftime(self) -> Option<Cow<'static, str>> {
        let fixed = match self {
            Token::YearLong => "%Y",
            Token::YearShort => "%y",
            Token::MonthLong => "%B",
            Token::MonthShort => "%b",
            Token::MonthZero => "%m",
            Token::Month => "%-m",
            Token::WeekdayLong => "%A",
            Token::WeekdayShort => "%a",
            Token::DayOfYear => "%j",
            Token::DayZero => "%d",
            Token::Day => "%-d",
            Token::Hour24Zero => "%H",
            Token::Hour12Zero => "%I",
            Token::Hour12 => "%-I",
            Token::MinuteZero => "%M",
            Token::Minute => "%-M",
            Token::SecondZero => "%S",
            Token::Second => "%-S",
            Token::MeridiemUpper => "%p",
            Token::MeridiemLower => "%P",
            Token::ZoneAbbrev => "%Z",
            Token::Offset => "%z",
            Token::OffsetHours => "%:::z",
            Token::OffsetColon => "%:z",
            Token::OffsetColonSeconds => "%::z",
            Token::Fraction {
                digits: 3,
                trimmed: false,
            } => "%.3f",
            Token::Fraction {
                digits: 6,
                trimmed: false,
            } => "%.6f",
            Token::Fraction {
                digits: 9,
                trimmed: false,
            } => "%.9f",
            Token::ZoneZ
            | Token::ZoneZCompact
            | Token::ZoneZHours
            | Token::ZoneZSeconds
            | Token::ZoneZColonSeconds
            | Token::OffsetSeconds
            | Token::Fraction { .. } => return None,
        };
        Some(Cow::Borrowed(fixed))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fixed() {
        assert_eq!(Token::YearLong.translate(Dialect::Reference).unwrap(), "2006");
        assert_eq!(Token::Hour24Zero.translate(Dialect::Reference).unwrap(), "15");
        assert_eq!(Token::MeridiemLower.translate(Dialect::Reference).unwrap(), "pm");
        assert_eq!(Token::ZoneZ.translate(Dialect::Reference).unwrap(), "Z07:00");
        assert_eq!(Token::ZoneZCompact.translate(Dialect::Reference).unwrap(), "Z0700");
    }

    #[test]
    fn test_reference_fraction() {
        let fixed = Token::Fraction {
            digits: 4,
            trimmed: false,
        };
        assert_eq!(fixed.translate(Dialect::Reference).unwrap(), ".0000");

        let trimmed = Token::Fraction {
            digits: 2,
            trimmed: true,
        };
        assert_eq!(trimmed.translate(Dialect::Reference).unwrap(), ".99");
    }

    #[test]
    fn test_strftime_fraction() {
        let millis = Token::Fraction {
            digits: 3,
            trimmed: false,
        };
        assert_eq!(millis.translate(Dialect::Strftime).unwrap(), "%.3f");

        let odd = Token::Fraction {
            digits: 4,
            trimmed: false,
        };
        assert_eq!(
            odd.translate(Dialect::Strftime).unwrap_err(),
            Error::unsupported(odd, Dialect::Strftime)
        );

        let trimmed = Token::Fraction {
            digits: 3,
            trimmed: true,
        };
        assert!(trimmed.translate(Dialect::Strftime).is_err());
    }

    #[test]
    fn test_strftime_zones() {
        assert_eq!(Token::Offset.translate(Dialect::Strftime).unwrap(), "%z");
        assert_eq!(Token::OffsetColon.translate(Dialect::Strftime).unwrap(), "%:z");
        assert!(Token::OffsetSeconds.translate(Dialect::Strftime).is_err());
        assert!(Token::ZoneZHours.translate(Dialect::Strftime).is_err());
    }

    #[test]
    fn test_display_uses_spelling() {
        assert_eq!(Token::DayOfYear.to_string(), "DDD");
        assert_eq!(
            Token::Fraction {
                digits: 2,
                trimmed: true
            }
            .to_string(),
            ".99"
        );
    }
}

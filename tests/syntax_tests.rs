use flexlayout::{compile, compile_all, expand_strings, translate_str, Error, Token};

fn layouts(template: &str) -> Vec<String> {
    compile_all(template).unwrap().into()
}

#[test]
fn test_plain_text() {
    assert_eq!(expand_strings("YYYY-MM").unwrap(), ["YYYY-MM"]);
}

#[test]
fn test_optional_group() {
    assert_eq!(expand_strings("YYYY[-MM]").unwrap(), ["YYYY", "YYYY-MM"]);
}

#[test]
fn test_nested_groups() {
    assert_eq!(expand_strings("a[b[c]]").unwrap(), ["a", "ab", "abc"]);
}

#[test]
fn test_sibling_groups() {
    assert_eq!(
        expand_strings("a[b][c]").unwrap(),
        ["a", "ac", "ab", "abc"]
    );
}

#[test]
fn test_leading_group() {
    assert_eq!(expand_strings("[a]b").unwrap(), ["b", "ab"]);
}

#[test]
fn test_group_only_template() {
    assert_eq!(expand_strings("[a]").unwrap(), ["", "a"]);
}

#[test]
fn test_empty_template() {
    assert_eq!(expand_strings("").unwrap(), [""]);
}

#[test]
fn test_empty_group_and_quote() {
    assert_eq!(expand_strings("a[]").unwrap(), ["a"]);
    assert_eq!(expand_strings("a''b").unwrap(), ["ab"]);
}

#[test]
fn test_escaped_character() {
    assert_eq!(expand_strings(r"\[a\]").unwrap(), ["[a]"]);
}

#[test]
fn test_quoted_block() {
    assert_eq!(expand_strings("'[at]'").unwrap(), ["[at]"]);
}

#[test]
fn test_escapes_inside_quotes() {
    assert_eq!(expand_strings(r"'\''").unwrap(), ["'"]);
    assert_eq!(expand_strings(r"'\\'").unwrap(), ["\\"]);
}

#[test]
fn test_group_inside_quote_is_literal() {
    assert_eq!(compile("YYYY' [MM]'").unwrap(), "2006 [MM]");
}

#[test]
fn test_syntax_errors() {
    for template in ["YYYY[-MM", "YYYY]", "'abc", r"abc\", "[[a]"] {
        let err = expand_strings(template).unwrap_err();
        assert!(err.is_syntax(), "{template:?} gave {err}");
    }
}

#[test]
fn test_syntax_error_prefix() {
    assert_eq!(
        expand_strings("YYYY[-MM").unwrap_err(),
        Error::syntax("YYYY[-MM", "YYYY")
    );
    assert_eq!(
        expand_strings("[a]b]").unwrap_err(),
        Error::syntax("[a]b]", "[a]b")
    );
}

#[test]
fn test_date_tokens() {
    let cases = [
        ("YYYY", "2006"),
        ("yyyy", "2006"),
        ("YY", "06"),
        ("yy", "06"),
        ("MMMM", "January"),
        ("MMM", "Jan"),
        ("MM", "01"),
        ("M", "1"),
        ("DD", "02"),
        ("dd", "02"),
        ("D", "2"),
        ("d", "2"),
        ("DDD", "002"),
        ("ddd", "002"),
        ("ww", "Monday"),
        ("w", "Mon"),
    ];
    for (input, expected) in cases {
        assert_eq!(translate_str(input).unwrap(), expected, "token {input}");
    }
}

#[test]
fn test_time_tokens() {
    let cases = [
        ("HH", "15"),
        ("hh", "03"),
        ("h", "3"),
        ("mm", "04"),
        ("m", "4"),
        ("ss", "05"),
        ("s", "5"),
        ("A", "PM"),
        ("a", "pm"),
        (".SSS", ".000"),
        (".000000", ".000000"),
        (".999", ".999"),
    ];
    for (input, expected) in cases {
        assert_eq!(translate_str(input).unwrap(), expected, "token {input}");
    }
}

#[test]
fn test_zone_tokens() {
    let cases = [
        ("MST", "MST"),
        ("-0700", "-0700"),
        ("-07:00", "-07:00"),
        ("-07:00:00", "-07:00:00"),
        ("-070000", "-070000"),
        ("-07", "-07"),
        ("Z", "Z07:00"),
        ("ZZ", "Z0700"),
        ("Z07", "Z07"),
        ("Z070000", "Z070000"),
        ("Z07:00:00", "Z07:00:00"),
    ];
    for (input, expected) in cases {
        assert_eq!(translate_str(input).unwrap(), expected, "token {input}");
    }
}

#[test]
fn test_longest_spelling_wins() {
    assert_eq!(translate_str("MMMMM").unwrap(), "January1");
    assert_eq!(translate_str("MMMMMM").unwrap(), "January01");
}

#[test]
fn test_dash_is_literal_unless_offset() {
    assert_eq!(layouts("YYYY-MM-DD"), ["2006-01-02"]);
    assert_eq!(translate_str("- -").unwrap(), "- -");
}

#[test]
fn test_dot_is_literal_unless_fraction() {
    assert_eq!(translate_str("ss.x").unwrap(), "05.x");
    assert_eq!(translate_str("D.M.YYYY").unwrap(), "2.1.2006");
}

#[test]
fn test_malformed_tokens() {
    assert_eq!(
        translate_str("YYY").unwrap_err(),
        Error::token(2, &["YYYY", "YY"], "Y")
    );
    assert_eq!(translate_str("H").unwrap_err(), Error::token(0, &["HH"], "H"));
    assert!(translate_str("Y").unwrap_err().is_token());
}

#[test]
fn test_escaped_token_letters() {
    assert_eq!(compile(r"h \at hh").unwrap(), "3 at 03");
    assert_eq!(compile("h 'at' hh").unwrap(), "3 at 03");
}

#[test]
fn test_token_spellings_display() {
    assert_eq!(Token::YearLong.to_string(), "YYYY");
    assert_eq!(Token::OffsetColon.to_string(), "-07:00");
    assert_eq!(
        Token::Fraction {
            digits: 3,
            trimmed: false
        }
        .to_string(),
        ".SSS"
    );
}

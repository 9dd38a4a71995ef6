//! Parsing of textual label matchers.

use kiora_model::Matcher;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Pattern for a textual matcher: a label name, one of the four operator
/// tokens, and a double-quoted value. The value capture is greedy, running
/// to the last `"` in the input.
static MATCHER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z0-9_]+)(!=|!~|=~|=)"(.*)""#).unwrap_or_else(|_| unreachable!())
});

/// The four valid matcher operators.
const VALID_OPERATORS: &[&str] = &["=", "!=", "=~", "!~"];

/// Parses a textual matcher such as `env="prod"` into a [`Matcher`].
///
/// Returns `None` if the input does not match the matcher syntax, or if a
/// regex operator (`=~`, `!~`) carries a value that is not a valid regular
/// expression. Patterns are validated against the Rust `regex` dialect,
/// which rejects lookaround and backreferences that some other engines
/// accept.
///
/// The value is captured verbatim between the first `"` after the operator
/// and the last `"` in the input: embedded quotes are kept literally, no
/// unescaping is applied, and an empty value (`env=""`) is valid.
///
/// ```rust
/// use kiora_silence::parse_matcher;
///
/// let matcher = parse_matcher(r#"env=~"prod.*""#).unwrap();
/// assert_eq!(matcher.label, "env");
/// assert_eq!(matcher.value, "prod.*");
/// assert!(matcher.is_regex);
/// assert!(!matcher.is_negative);
///
/// assert_eq!(parse_matcher("bad matcher"), None);
/// ```
#[must_use]
pub fn parse_matcher(input: &str) -> Option<Matcher> {
    let Some(captures) = MATCHER_REGEX.captures(input) else {
        debug!(input, "invalid matcher");
        return None;
    };

    let label = &captures[1];
    let operator = &captures[2];
    let value = &captures[3];

    // Unreachable while the pattern only captures the four tokens, but kept
    // as an explicit validation step.
    if !VALID_OPERATORS.contains(&operator) {
        debug!(input, operator, "invalid operator for matcher");
        return None;
    }

    let is_regex = operator.contains('~');
    if is_regex && Regex::new(value).is_err() {
        debug!(input, value, "invalid regex for matcher");
        return None;
    }

    Some(Matcher {
        label: label.to_string(),
        value: value.to_string(),
        is_regex,
        is_negative: operator.contains('!'),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn parse_equality() {
        let matcher = parse_matcher(r#"env="prod""#).unwrap();
        assert_eq!(matcher.label, "env");
        assert_eq!(matcher.value, "prod");
        assert!(!matcher.is_regex);
        assert!(!matcher.is_negative);
    }

    #[test]
    fn parse_negated_equality() {
        let matcher = parse_matcher(r#"env!="prod""#).unwrap();
        assert!(!matcher.is_regex);
        assert!(matcher.is_negative);
    }

    #[test]
    fn parse_regex() {
        let matcher = parse_matcher(r#"env=~"prod.*""#).unwrap();
        assert_eq!(matcher.value, "prod.*");
        assert!(matcher.is_regex);
        assert!(!matcher.is_negative);
    }

    #[test]
    fn parse_negated_regex() {
        let matcher = parse_matcher(r#"env!~"prod.*""#).unwrap();
        assert!(matcher.is_regex);
        assert!(matcher.is_negative);
    }

    #[test]
    fn invalid_regex_is_rejected() {
        // Unbalanced parenthesis does not compile.
        assert_eq!(parse_matcher(r#"env=~"prod(""#), None);
        assert_eq!(parse_matcher(r#"env!~"[a-""#), None);
    }

    #[test]
    fn invalid_regex_is_fine_as_literal() {
        // The same value is a perfectly good literal under `=`.
        let matcher = parse_matcher(r#"env="prod(""#).unwrap();
        assert_eq!(matcher.value, "prod(");
        assert!(!matcher.is_regex);
    }

    #[test_case("bad matcher" ; "no operator")]
    #[test_case("" ; "empty input")]
    #[test_case(r#"="prod""# ; "missing label")]
    #[test_case("env=prod" ; "unquoted value")]
    #[test_case(r#"env="prod"# ; "unterminated quote")]
    fn invalid_syntax(input: &str) {
        assert_eq!(parse_matcher(input), None);
    }

    #[test]
    fn empty_value_is_valid() {
        let matcher = parse_matcher(r#"env="""#).unwrap();
        assert_eq!(matcher.value, "");
    }

    #[test]
    fn value_capture_is_greedy_to_last_quote() {
        let matcher = parse_matcher(r#"env="a"extra"b""#).unwrap();
        assert_eq!(matcher.value, r#"a"extra"b"#);
    }

    #[test]
    fn label_allows_digits_and_underscores() {
        let matcher = parse_matcher(r#"node_1="ready""#).unwrap();
        assert_eq!(matcher.label, "node_1");
    }

    #[test]
    fn roundtrip_through_display() {
        for input in [
            r#"env="prod""#,
            r#"env!="prod""#,
            r#"env=~"prod.*""#,
            r#"env!~"prod.*""#,
            r#"env="""#,
        ] {
            let matcher = parse_matcher(input).unwrap();
            let reparsed = parse_matcher(&matcher.to_string()).unwrap();
            assert_eq!(reparsed, matcher);
        }
    }

    proptest! {
        // Round-trip stability: whenever a generated matcher string parses,
        // re-parsing its rendered form yields an equal matcher. Values are
        // kept quote-free; embedded quotes shift what the greedy capture
        // considers the value.
        #[test]
        fn prop_roundtrip_stable(
            label in "[A-Za-z0-9_]{1,12}",
            operator in prop::sample::select(vec!["=", "!=", "=~", "!~"]),
            value in "[^\"]{0,20}",
        ) {
            let input = format!("{label}{operator}\"{value}\"");
            if let Some(matcher) = parse_matcher(&input) {
                let reparsed = parse_matcher(&matcher.to_string());
                prop_assert_eq!(reparsed, Some(matcher));
            }
        }

        // A parsed matcher's flags always agree with its operator token.
        #[test]
        fn prop_flags_follow_operator(
            label in "[A-Za-z0-9_]{1,12}",
            operator in prop::sample::select(vec!["=", "!=", "=~", "!~"]),
            value in "[A-Za-z0-9 ]{0,20}",
        ) {
            let input = format!("{label}{operator}\"{value}\"");
            let matcher = parse_matcher(&input).unwrap();
            prop_assert_eq!(matcher.is_regex, operator.contains('~'));
            prop_assert_eq!(matcher.is_negative, operator.contains('!'));
            prop_assert_eq!(matcher.operator(), operator);
        }
    }
}

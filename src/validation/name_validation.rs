use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Names double as path segments, so the dot is reserved and the length cap
/// matches the 25-character stored field limit.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_]{0,24}$").expect("static pattern compiles"));

pub(crate) fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub(crate) fn validate_name_segment(value: &str) -> Result<(), ValidationError> {
    if is_valid_name(value) {
        Ok(())
    } else {
        Err(ValidationError::new("name_segment").with_message(
            "names are lowercase alphanumeric/underscore, 1-25 characters, no '.'".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("visit_schedule1")]
    #[case("a")]
    #[case("1000")]
    #[case("twenty_five_chars_exactly")]
    fn accepts_well_formed_names(#[case] name: &str) {
        assert!(is_valid_name(name));
    }

    #[rstest]
    #[case("")]
    #[case("Visit")]
    #[case("visit schedule")]
    #[case("visit.schedule")]
    #[case("_leading_underscore")]
    #[case("twenty_six_characters_here")]
    fn rejects_malformed_names(#[case] name: &str) {
        assert!(!is_valid_name(name));
    }

    #[rstest]
    fn validator_function_reports_code() {
        let err = validate_name_segment("BAD.NAME").unwrap_err();
        assert_eq!(err.code, "name_segment");
    }
}

//! Tests for the fluent assertion API.

use super::*;

#[test]
fn test_expect_none() {
    let value: Option<String> = None;

    // Should not panic
    expect(&value).to_be_none();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_expect_none_fails_on_some() {
    let value = Some("value");

    // Should panic - the container holds a payload
    expect(&value).to_be_none();
}

#[test]
fn test_expect_some() {
    let value = Some("value");

    expect(&value).to_be_some();
}

#[test]
#[should_panic(expected = "expected to be Some, but was None")]
fn test_expect_some_fails_on_none() {
    let value: Option<&str> = None;

    expect(&value).to_be_some();
}

#[test]
fn test_expect_some_holding() {
    let value = Some("value");

    expect(&value).holding(&"value").to_be_some();
}

#[test]
#[should_panic(expected = "to_be_some")]
fn test_expect_some_holding_wrong_payload() {
    let value = Some("wrong value");

    // The panic message carries the matcher header and the diff.
    expect(&value).holding(&"value").colors(false).to_be_some();
}

#[test]
fn test_expect_some_with_eq() {
    let value = Some(String::from("VALUE"));
    let want = String::from("value");

    expect(&value)
        .holding(&want)
        .with_eq(|a, b| a.eq_ignore_ascii_case(b))
        .to_be_some();
}

#[test]
fn test_expect_ok_and_err() {
    let good: Result<u32, String> = Ok(42);
    let bad: Result<u32, String> = Err(String::from("boom"));

    expect(&good).to_be_ok();
    expect(&good).ok_holding(&42).to_be_ok();
    expect(&bad).to_be_err();
    expect(&bad).err_holding(&String::from("boom")).to_be_err();
}

#[test]
#[should_panic(expected = "expected to be Err, but was Ok")]
fn test_expect_err_fails_on_ok() {
    let value: Result<u32, String> = Ok(42);

    expect(&value).to_be_err();
}

#[test]
#[should_panic(expected = "expected to be Ok, but was Err")]
fn test_expect_ok_fails_on_err_despite_expected_payload() {
    let value: Result<u32, String> = Err(String::from("boom"));

    // The branch mismatch short-circuits; the payload never gets compared.
    expect(&value).ok_holding(&42).to_be_ok();
}

#[test]
fn test_expect_err_with_eq() {
    let value: Result<(), String> = Err(String::from("TIMEOUT"));
    let want = String::from("timeout");

    expect(&value)
        .err_holding(&want)
        .with_err_eq(|a, b| a.eq_ignore_ascii_case(b))
        .to_be_err();
}

#[test]
fn test_evaluate_does_not_panic() {
    let value: Option<&str> = None;
    let want = "value";

    let outcome = expect(&value).holding(&want).evaluate_some();
    assert!(!outcome.passed());
    assert!(outcome
        .message()
        .contains("expected to be Some, but was None"));
}

#[test]
fn test_evaluate_reports_diff_markers() {
    let value = Some("wrong value");
    let want = "value";

    let outcome = expect(&value)
        .holding(&want)
        .colors(false)
        .evaluate_some();
    assert!(!outcome.passed());
    let message = outcome.message();
    assert!(message.contains("- value"));
    assert!(message.contains("+ wrong value"));
}

#[test]
fn test_expanded_diff_via_builder() {
    let value: Result<Vec<u32>, ()> = Ok(vec![1, 2, 3]);
    let want = vec![1, 9, 3];

    let outcome = expect(&value)
        .ok_holding(&want)
        .expand(true)
        .colors(false)
        .evaluate_ok();
    assert!(!outcome.passed());
    let message = outcome.message();
    assert!(message.contains("-     9,"));
    assert!(message.contains("+     2,"));
    // Shared elements stay visible as context.
    assert!(message.contains("      1,"));
}

#[test]
fn test_empty_string_expectation_is_not_skipped() {
    let value = Some("x");
    let want = "";

    let outcome = expect(&value).holding(&want).colors(false).evaluate_some();
    assert!(!outcome.passed());
}

#[cfg(feature = "patterns")]
mod patterns {
    use super::*;

    #[test]
    fn test_some_matching_glob() {
        let value = Some("report.txt");

        expect(&value).to_be_some_matching("*.txt");
    }

    #[test]
    fn test_some_matching_regex() {
        let value = Some(String::from("v1.42"));

        expect(&value).to_be_some_matching(r"^v\d+\.\d+$");
    }

    #[test]
    #[should_panic(expected = "does not match pattern")]
    fn test_some_matching_fails() {
        let value = Some("report.rs");

        expect(&value).to_be_some_matching("*.txt");
    }

    #[test]
    #[should_panic(expected = "expected to be Some, but was None")]
    fn test_some_matching_fails_on_none() {
        let value: Option<String> = None;

        expect(&value).to_be_some_matching("*");
    }

    #[test]
    fn test_err_matching() {
        let value: Result<(), String> = Err(String::from("connection to db-7 refused"));

        expect(&value).to_be_err_matching("connection to .* refused");
    }

    #[test]
    #[should_panic(expected = "expected to be Err, but was Ok")]
    fn test_err_matching_fails_on_ok() {
        let value: Result<u32, String> = Ok(1);

        expect(&value).to_be_err_matching("*");
    }

    #[test]
    fn test_ok_matching_exact() {
        let value: Result<String, ()> = Ok(String::from("ready"));

        expect(&value).to_be_ok_matching("ready");
    }

    #[test]
    fn test_evaluate_matching_reports_rendering() {
        let value = Some("report.rs");

        let outcome = expect(&value).evaluate_some_matching("*.txt");
        assert!(!outcome.passed());
        let message = outcome.message();
        assert!(message.contains("report.rs"));
        assert!(message.contains("*.txt"));
    }
}

use crate::error::FormatError;
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SECONDS_LEN: usize = "YYYY-MM-DDTHH:MM:SS".len();
const MAX_FRACTION_DIGITS: usize = 6;

/// Parses a UTC timestamp as reported by the API, either `2019-07-02T06:53:33Z`
/// or `2019-07-02T06:53:33.123456Z`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, FormatError> {
    let invalid = || FormatError::Timestamp { value: value.to_string() };

    let (seconds, suffix) = value.split_at_checked(SECONDS_LEN).ok_or_else(invalid)?;
    if !has_seconds_shape(seconds) {
        return Err(invalid());
    }

    let micros = match suffix {
        "Z" => 0,
        _ => {
            let fraction = suffix.strip_prefix('.').and_then(|s| s.strip_suffix('Z')).ok_or_else(invalid)?;
            parse_fraction(fraction).ok_or_else(invalid)?
        }
    };

    let naive = NaiveDateTime::parse_from_str(seconds, SECONDS_FORMAT).map_err(|_| invalid())?;
    Ok((naive + TimeDelta::microseconds(micros)).and_utc())
}

// Leap seconds are not accepted
fn has_seconds_shape(seconds: &str) -> bool {
    let shaped = seconds.bytes().enumerate().all(|(index, b)| match index {
        4 | 7 => b == b'-',
        10 => b == b'T',
        13 | 16 => b == b':',
        _ => b.is_ascii_digit(),
    });

    shaped && &seconds[17..] != "60"
}

// Fractions are right-padded like strptime's %f, so ".5" is half a second
fn parse_fraction(fraction: &str) -> Option<i64> {
    if fraction.is_empty() || fraction.len() > MAX_FRACTION_DIGITS || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits: i64 = fraction.parse().ok()?;
    Some(digits * 10_i64.pow((MAX_FRACTION_DIGITS - fraction.len()) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2019-07-02T06:53:33Z", Utc.with_ymd_and_hms(2019, 7, 2, 6, 53, 33).unwrap())]
    #[case("2019-07-02T06:53:33.000000Z", Utc.with_ymd_and_hms(2019, 7, 2, 6, 53, 33).unwrap())]
    #[case("2019-07-02T06:53:33.5Z", Utc.with_ymd_and_hms(2019, 7, 2, 6, 53, 33).unwrap() + TimeDelta::milliseconds(500))]
    #[case("2019-07-02T06:53:33.000123Z", Utc.with_ymd_and_hms(2019, 7, 2, 6, 53, 33).unwrap() + TimeDelta::microseconds(123))]
    #[case("2020-02-29T23:59:59Z", Utc.with_ymd_and_hms(2020, 2, 29, 23, 59, 59).unwrap())]
    fn parses_a_valid_timestamp(#[case] value: &str, #[case] expected: DateTime<Utc>) -> Result<(), FormatError> {
        let result = parse_timestamp(value)?;

        assert_eq!(result, expected);
        Ok(())
    }

    #[test]
    fn both_forms_yield_the_same_instant_for_whole_seconds() -> Result<(), FormatError> {
        assert_eq!(parse_timestamp("2019-07-02T06:53:33Z")?, parse_timestamp("2019-07-02T06:53:33.000000Z")?);
        Ok(())
    }

    #[rstest]
    #[case::missing_z("2019-07-02T06:53:33")]
    #[case::offset("2019-07-02T06:53:33+00:00")]
    #[case::non_utc_offset("2019-07-02T06:53:33+08:00")]
    #[case::lower_case_z("2019-07-02T06:53:33z")]
    #[case::space_separator("2019-07-02 06:53:33Z")]
    #[case::date_only("2019-07-02")]
    #[case::short_month("2019-7-02T06:53:33Z")]
    #[case::empty_fraction("2019-07-02T06:53:33.Z")]
    #[case::nanoseconds("2019-07-02T06:53:33.123456789Z")]
    #[case::fraction_without_z("2019-07-02T06:53:33.123")]
    #[case::invalid_month("2019-13-02T06:53:33Z")]
    #[case::invalid_hour("2019-07-02T24:53:33Z")]
    #[case::leap_second("2016-12-31T23:59:60Z")]
    #[case::leap_second_with_fraction("2016-12-31T23:59:60.5Z")]
    #[case::empty("")]
    fn fails_for_an_invalid_timestamp(#[case] value: &str) {
        let result = parse_timestamp(value);

        assert!(matches!(result, Err(FormatError::Timestamp { .. })), "expected '{}' to be rejected", value);
    }
}

use chrono::{offset::Utc, DateTime, TimeZone};

use reqwest::header::HeaderMap;

const REMAINING_HEADER: &str = "X-Ratelimit-Remaining";
const LIMIT_HEADER: &str = "X-Ratelimit-Limit";
const RESET_HEADER: &str = "X-Ratelimit-Reset";

/// Quota counters reported by the API alongside the last response.
///
/// Each field is `None` when the corresponding header was missing from the response, which is
/// not the same thing as a header reporting `0`. Values are read from their leading integer:
/// `"199 req"` reads as `199`, and a value with no leading digits (e.g. `"lots"`) reads as `0`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct RateLimits {
    /// Requests left in the current period (`X-Ratelimit-Remaining`).
    pub remaining: Option<i64>,
    /// Requests allowed per period (`X-Ratelimit-Limit`).
    pub limit: Option<i64>,
    /// UNIX timestamp at which the period resets (`X-Ratelimit-Reset`).
    pub reset: Option<i64>,
}

impl RateLimits {
    /// Extract the counters from raw `Name: Value` header lines.
    ///
    /// Lines are split on their first colon and names are matched exactly, case included. Lines
    /// without a colon (such as the status line) are skipped.
    ///
    /// ```
    /// # use pexels::client::RateLimits;
    /// let limits = RateLimits::from_header_lines(&[
    ///     "HTTP/1.1 200 OK",
    ///     "X-Ratelimit-Remaining: 199",
    ///     "X-Ratelimit-Limit: 200",
    /// ]);
    ///
    /// assert_eq!(limits.remaining, Some(199));
    /// assert_eq!(limits.limit, Some(200));
    /// assert_eq!(limits.reset, None);
    /// ```
    pub fn from_header_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut limits = RateLimits::default();

        for line in lines {
            let (name, value) = match line.as_ref().split_once(':') {
                Some(pair) => pair,
                None => continue,
            };

            match name {
                REMAINING_HEADER => limits.remaining = Some(parse_value(value)),
                LIMIT_HEADER => limits.limit = Some(parse_value(value)),
                RESET_HEADER => limits.reset = Some(parse_value(value)),
                _ => (),
            }
        }

        limits
    }

    /// Extract the counters from the headers of a response.
    ///
    /// Header names are case-insensitive here: `reqwest` normalizes them to lowercase.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        RateLimits {
            remaining: header_value(headers, REMAINING_HEADER).map(parse_value),
            limit: header_value(headers, LIMIT_HEADER).map(parse_value),
            reset: header_value(headers, RESET_HEADER).map(parse_value),
        }
    }

    /// When the current period resets, if the API reported it.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset.and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name.to_ascii_lowercase())
        .and_then(|v| v.to_str().ok())
}

/// Leading integer of `value`, ignoring surrounding whitespace. Out of range values saturate.
fn parse_value(value: &str) -> i64 {
    let value = value.trim();
    let digits_start = match value.as_bytes().first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    let digits_end = value[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(value.len(), |i| digits_start + i);

    if digits_end == digits_start {
        return 0;
    }

    match value[..digits_end].parse() {
        Ok(n) => n,
        Err(_) if value.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn all_headers_present() {
        let limits = RateLimits::from_header_lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: application/json",
            "X-Ratelimit-Remaining: 199",
            "X-Ratelimit-Limit: 200",
            "X-Ratelimit-Reset: 1700000000",
        ]);

        assert_eq!(
            limits,
            RateLimits {
                remaining: Some(199),
                limit: Some(200),
                reset: Some(1700000000),
            }
        );
    }

    #[test]
    fn no_headers_present() {
        let limits = RateLimits::from_header_lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: application/json",
            "Date: Tue, 14 Nov 2023 22:13:20 GMT",
        ]);

        assert_eq!(limits, RateLimits::default());
        assert_eq!(limits.remaining, None);
        assert_eq!(limits.limit, None);
        assert_eq!(limits.reset, None);
    }

    #[test]
    fn zero_is_not_absent() {
        let limits = RateLimits::from_header_lines(&["X-Ratelimit-Remaining:0"]);

        assert_eq!(limits.remaining, Some(0));
        assert_eq!(limits.limit, None);
    }

    #[test]
    fn header_lines_are_case_sensitive() {
        let limits = RateLimits::from_header_lines(vec![
            String::from("x-ratelimit-remaining: 5"),
            String::from("X-RATELIMIT-LIMIT: 200"),
        ]);

        assert_eq!(limits, RateLimits::default());
    }

    #[test]
    fn values_are_read_from_their_leading_integer() {
        let limits = RateLimits::from_header_lines(&[
            "X-Ratelimit-Remaining: lots",
            "X-Ratelimit-Limit: 199 req",
            "X-Ratelimit-Reset: -1",
        ]);

        assert_eq!(
            limits,
            RateLimits {
                remaining: Some(0),
                limit: Some(199),
                reset: Some(-1),
            }
        );
    }

    #[test]
    fn lines_without_colon_are_skipped() {
        let limits = RateLimits::from_header_lines(&["X-Ratelimit-Limit", "X-Ratelimit-Reset -"]);

        assert_eq!(limits, RateLimits::default());
    }

    #[test]
    fn parse_value_edge_cases() {
        assert_eq!(parse_value(""), 0);
        assert_eq!(parse_value("-"), 0);
        assert_eq!(parse_value("+7"), 7);
        assert_eq!(parse_value(" 12:30 "), 12);
        assert_eq!(parse_value("99999999999999999999"), i64::MAX);
        assert_eq!(parse_value("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn from_response_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static(" 42 "));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));

        let limits = RateLimits::from_headers(&headers);

        assert_eq!(
            limits,
            RateLimits {
                remaining: Some(42),
                limit: None,
                reset: Some(1700000000),
            }
        );
        assert_eq!(
            limits.reset_at().map(|t| t.to_rfc3339()),
            Some(String::from("2023-11-14T22:13:20+00:00"))
        );
    }
}

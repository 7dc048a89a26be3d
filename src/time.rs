use chrono::{DateTime, NaiveDateTime, Utc};

const ZONED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const NANOS_PER_MINUTE: i64 = 60_000_000_000;

/// Parses an ISO-8601 timestamp into a UTC instant.
///
/// Accepts a trailing `Z`, an explicit offset (`+02:00`, `+0200`, `+02`), or
/// no offset at all, in which case the timestamp is taken to be UTC already.
/// Seconds and fractional seconds are optional.
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();
    let zoned = match value.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{}+00:00", local),
        None => value.to_string(),
    };
    match DateTime::parse_from_rfc3339(&zoned) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(err) => ZONED_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(&zoned, fmt).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| {
                NAIVE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                    .map(|naive| naive.and_utc())
            })
            .ok_or(err),
    }
}

/// Whole minutes from `from` to `to`, rounded towards negative infinity.
pub fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let delta = to - from;
    match delta.num_nanoseconds() {
        Some(nanos) => nanos.div_euclid(NANOS_PER_MINUTE),
        // nanoseconds overflow past ~292 years
        None => delta.num_seconds().div_euclid(60),
    }
}

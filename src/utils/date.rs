//! Publish-date synthesis and timestamp formatting.
//!
//! Timestamps are written the way the site has always stored them:
//! `2024-09-01T09:00:00.000Z`.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Spread `count` publish dates backward from `now`.
///
/// Date `i` lies `round(spread_days * i / (count - 1))` days before `now`,
/// normalized to `hour`:00:00.000 UTC. A batch of one (or none) gets `now`
/// unmodified.
pub fn spread_published_dates(
    count: usize,
    now: DateTime<Utc>,
    spread_days: u32,
    hour: u32,
) -> Vec<DateTime<Utc>> {
    if count <= 1 {
        return vec![now; count];
    }

    let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or_default();
    let last = (count - 1) as f64;

    (0..count)
        .map(|i| {
            let offset = (f64::from(spread_days) * i as f64 / last).round() as i64;
            let day = (now - Duration::days(offset)).date_naive();
            Utc.from_utc_datetime(&day.and_time(time))
        })
        .collect()
}

/// Format as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Serde adapter for required timestamp fields.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`")))
    }
}

/// Serde adapter for optional timestamp fields.
pub mod timestamp_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_str(&super::format_timestamp(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 17, 42, 5).unwrap()
    }

    #[test]
    fn test_spread_single_uses_now() {
        let now = fixed_now();
        assert_eq!(spread_published_dates(1, now, 365, 9), vec![now]);
        assert!(spread_published_dates(0, now, 365, 9).is_empty());
    }

    #[test]
    fn test_spread_batch_of_five() {
        let now = fixed_now();
        let dates = spread_published_dates(5, now, 365, 9);
        assert_eq!(dates.len(), 5);

        assert_eq!(dates[0].date_naive(), now.date_naive());
        assert_eq!(dates[4].date_naive(), (now - Duration::days(365)).date_naive());

        // 365 * 1 / 4 = 91.25 -> 91, 365 * 2 / 4 = 182.5 -> 183
        assert_eq!(dates[1].date_naive(), (now - Duration::days(91)).date_naive());
        assert_eq!(dates[2].date_naive(), (now - Duration::days(183)).date_naive());

        for date in &dates {
            assert_eq!(date.hour(), 9);
            assert_eq!(date.minute(), 0);
            assert_eq!(date.second(), 0);
            assert_eq!(date.nanosecond(), 0);
        }
    }

    #[test]
    fn test_spread_is_descending() {
        let dates = spread_published_dates(12, fixed_now(), 365, 9);
        assert!(dates.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "2024-09-01T09:00:00.000Z");
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let dt = parse_timestamp("2024-09-01T09:00:00.000Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2024, 9, 1, 9));

        let offset = parse_timestamp("2024-09-01T11:00:00+02:00").unwrap();
        assert_eq!(offset, dt);
    }

    #[test]
    fn test_parse_timestamp_date_only() {
        let dt = parse_timestamp("2024-07-20").unwrap();
        assert_eq!(format_timestamp(&dt), "2024-07-20T00:00:00.000Z");
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-01").is_none());
    }
}

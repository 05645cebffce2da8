use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Resolves a raw timestamp cell into the wall-clock datetime it was recorded in.
///
/// Values carrying an offset keep their local time; the offset is not applied.
/// Date-only values resolve to midnight.
pub trait AnyTimestamp {
    fn to_naive_local(self) -> Option<NaiveDateTime>;

    /// Calendar month (1-12) of the resolved timestamp.
    fn calendar_month(self) -> Option<u32>
    where
        Self: Sized,
    {
        self.to_naive_local().map(|dt| dt.month())
    }
}

impl AnyTimestamp for &str {
    fn to_naive_local(self) -> Option<NaiveDateTime> {
        let text = self.trim();
        if text.is_empty() {
            return None;
        }
        // Offset or `Z` suffix, e.g. 2021-05-01T00:30:00+02:00
        if let Ok(dt) = text.parse::<DateTime<FixedOffset>>() {
            return Some(dt.naive_local());
        }
        if let Some(dt) = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        {
            return Some(dt);
        }
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

impl AnyTimestamp for Option<&str> {
    fn to_naive_local(self) -> Option<NaiveDateTime> {
        self.and_then(AnyTimestamp::to_naive_local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_station_style_timestamps() {
        let dt = "2000-01-04 12:00".to_naive_local().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2000, 1, 4, 12));
        assert_eq!("2019-07-31 23:59:59".calendar_month(), Some(7));
        assert_eq!("2019-07-31T23:59:59.250".calendar_month(), Some(7));
        assert_eq!("12/25/2005 06:00".calendar_month(), Some(12));
        assert_eq!("2005/03/01".calendar_month(), Some(3));
    }

    #[test]
    fn offsets_keep_the_local_month() {
        // 00:30 at +02:00 is April in UTC but May on the station's clock.
        assert_eq!("2021-05-01T00:30:00+02:00".calendar_month(), Some(5));
        assert_eq!("2021-05-31T23:30:00-05:00".calendar_month(), Some(5));
        assert_eq!("2021-05-01T00:30:00Z".calendar_month(), Some(5));

        let dt = "2021-05-01 00:30:00+02:00".to_naive_local().unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour(), dt.minute()), (5, 1, 0, 30));
    }

    #[test]
    fn date_only_resolves_to_midnight() {
        let dt = "2010-02-28".to_naive_local().unwrap();
        assert_eq!((dt.hour(), dt.minute()), (0, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".calendar_month(), None);
        assert_eq!("   ".calendar_month(), None);
        assert_eq!("not a date".calendar_month(), None);
        assert_eq!("2010-13-01".calendar_month(), None);
        assert_eq!(None::<&str>.calendar_month(), None);
    }
}

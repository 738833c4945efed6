use crate::models::DateBannerResponse;
use crate::page::Page;
use chrono::{DateTime, Duration, FixedOffset, Local, Locale, NaiveDate, TimeZone, Utc};
use std::fmt::Display;
use tracing::warn;

const LONG_FORMAT: &str = "%A, %-d. %B %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBanner {
    pub today_long: String,
    pub today: NaiveDate,
    pub yesterday: NaiveDate,
}

impl DateBanner {
    /// Banner for a viewer whose clock is `offset_minutes` east of UTC, as
    /// reported by the page script. Without a usable offset the server's
    /// zone stands in.
    pub fn for_viewer(offset_minutes: Option<i32>) -> Self {
        Self::for_viewer_at(Utc::now(), offset_minutes)
    }

    pub fn for_viewer_at(now: DateTime<Utc>, offset_minutes: Option<i32>) -> Self {
        match offset_minutes.map(|minutes| (minutes, viewer_offset(minutes))) {
            Some((_, Some(offset))) => Self::at(&now.with_timezone(&offset)),
            Some((minutes, None)) => {
                warn!("ignoring out of range viewer offset {minutes}");
                Self::at(&now.with_timezone(&Local))
            }
            None => Self::at(&now.with_timezone(&Local)),
        }
    }

    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        let today = now.date_naive();
        Self {
            today_long: now.format_localized(LONG_FORMAT, Locale::de_AT).to_string(),
            today,
            yesterday: today - Duration::days(1),
        }
    }

    /// Writes the banner text and bounds the archive picker so that only
    /// completed days can be selected.
    pub fn apply(&self, page: &mut Page) {
        page.current_date.html = self.today_long.clone();
        page.archive.picker.max = date_key(self.yesterday);
        page.archive.picker.value = date_key(self.today);
    }

    pub fn to_response(&self) -> DateBannerResponse {
        DateBannerResponse {
            today_long: self.today_long.clone(),
            today: date_key(self.today),
            yesterday: date_key(self.yesterday),
        }
    }
}

fn viewer_offset(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_formats_long_german_date_and_yesterday() {
        let now = Utc.with_ymd_and_hms(2024, 2, 13, 9, 30, 0).unwrap();
        let banner = DateBanner::at(&now);
        assert_eq!(banner.today_long, "Dienstag, 13. Februar 2024");
        assert_eq!(date_key(banner.yesterday), "2024-02-12");
    }

    #[test]
    fn yesterday_crosses_month_and_year() {
        let vienna = FixedOffset::east_opt(3600).unwrap();
        let now = vienna.with_ymd_and_hms(2025, 1, 1, 0, 15, 0).unwrap();
        let banner = DateBanner::at(&now);
        assert_eq!(date_key(banner.today), "2025-01-01");
        assert_eq!(date_key(banner.yesterday), "2024-12-31");

        let now = vienna.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(date_key(DateBanner::at(&now).yesterday), "2024-02-29");
    }

    #[test]
    fn apply_sets_picker_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 2, 13, 9, 30, 0).unwrap();
        let mut page = Page::default();
        DateBanner::at(&now).apply(&mut page);

        assert_eq!(page.current_date.html, "Dienstag, 13. Februar 2024");
        assert_eq!(page.archive.picker.max, "2024-02-12");
        assert_eq!(page.archive.picker.value, "2024-02-13");
    }

    #[test]
    fn viewer_offset_decides_the_day() {
        // 2024-02-14 00:30 in Graz (UTC+1) while a UTC server is still on the 13th.
        let now = Utc.with_ymd_and_hms(2024, 2, 13, 23, 30, 0).unwrap();

        let graz = DateBanner::for_viewer_at(now, Some(60));
        assert_eq!(graz.today_long, "Mittwoch, 14. Februar 2024");
        assert_eq!(date_key(graz.today), "2024-02-14");
        assert_eq!(date_key(graz.yesterday), "2024-02-13");

        let utc = DateBanner::for_viewer_at(now, Some(0));
        assert_eq!(date_key(utc.today), "2024-02-13");

        let early = Utc.with_ymd_and_hms(2024, 2, 14, 3, 0, 0).unwrap();
        let west = DateBanner::for_viewer_at(early, Some(-300));
        assert_eq!(date_key(west.today), "2024-02-13");
    }

    #[test]
    fn out_of_range_offset_falls_back_to_server_zone() {
        let now = Utc.with_ymd_and_hms(2024, 2, 13, 12, 0, 0).unwrap();
        let fallback = DateBanner::for_viewer_at(now, Some(24 * 60));
        assert_eq!(fallback, DateBanner::at(&now.with_timezone(&Local)));
        assert_eq!(DateBanner::for_viewer_at(now, Some(i32::MAX)), fallback);
    }
}

use std::fmt::Write;

use chrono::NaiveDateTime;

use photospot_shared::RegionGradeDetail;

/// Measurement time for display: `YYYY-MM-DD HH:MM (n분 전)` when the backend
/// timestamp parses, the raw string otherwise.
pub fn format_measured_at(detail: &RegionGradeDetail, now: NaiveDateTime) -> Option<String> {
    let Some(measured) = detail.measured_at() else {
        return detail.data_time.clone();
    };
    let mut out = measured.format("%Y-%m-%d %H:%M").to_string();
    if let Some(relative) = format_relative(measured, now) {
        let _ = write!(out, " ({relative})");
    }
    Some(out)
}

/// Relative age in Korean; `None` for future or week-old timestamps.
pub fn format_relative(measured: NaiveDateTime, now: NaiveDateTime) -> Option<String> {
    let secs = (now - measured).num_seconds();
    if secs < 0 {
        return None;
    }
    if secs < 60 {
        return Some("방금 전".to_string());
    }
    let mins = secs / 60;
    if mins < 60 {
        return Some(format!("{mins}분 전"));
    }
    let hours = secs / 3600;
    if hours < 24 {
        return Some(format!("{hours}시간 전"));
    }
    let days = secs / 86_400;
    (days < 7).then(|| format!("{days}일 전"))
}

/// Numeric reading with its unit, dropping a trailing `.0`.
pub fn format_reading(value: f64, unit: &str) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}{unit}", value as i64)
    } else {
        format!("{value:.1}{unit}")
    }
}

pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use photospot_shared::Grade;

    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid time")
    }

    #[test]
    fn relative_minutes_and_hours() {
        assert_eq!(format_relative(at(12, 0), at(12, 0)).as_deref(), Some("방금 전"));
        assert_eq!(format_relative(at(12, 0), at(12, 5)).as_deref(), Some("5분 전"));
        assert_eq!(format_relative(at(9, 0), at(12, 30)).as_deref(), Some("3시간 전"));
    }

    #[test]
    fn relative_skips_future_times() {
        assert_eq!(format_relative(at(13, 0), at(12, 0)), None);
    }

    #[test]
    fn measured_at_combines_absolute_and_relative() {
        let detail = RegionGradeDetail {
            data_time: Some("202405011200".into()),
            ..RegionGradeDetail::degraded(Grade::Good)
        };
        assert_eq!(
            format_measured_at(&detail, at(12, 10)).as_deref(),
            Some("2024-05-01 12:00 (10분 전)")
        );
    }

    #[test]
    fn unparseable_measured_at_is_shown_raw() {
        let detail = RegionGradeDetail {
            data_time: Some("오늘 정오".into()),
            ..RegionGradeDetail::degraded(Grade::Good)
        };
        assert_eq!(format_measured_at(&detail, at(12, 0)).as_deref(), Some("오늘 정오"));
        assert_eq!(
            format_measured_at(&RegionGradeDetail::degraded(Grade::Bad), at(12, 0)),
            None
        );
    }

    #[test]
    fn readings_drop_trailing_zero() {
        assert_eq!(format_reading(18.0, "°C"), "18°C");
        assert_eq!(format_reading(3.46, "m/s"), "3.5m/s");
        assert_eq!(format_reading(-2.0, "°C"), "-2°C");
    }
}

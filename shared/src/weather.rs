use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::grade::Grade;

/// Region code -> raw grade string, as returned by `GET /weather/map`.
pub type RegionGradeSnapshot = HashMap<String, String>;

/// Grade of a region code in a snapshot; absent codes are `Failed`.
pub fn snapshot_grade(snapshot: &RegionGradeSnapshot, code: &str) -> Grade {
    snapshot
        .get(code)
        .map_or(Grade::Failed, |raw| Grade::parse(raw))
}

pub fn decode_snapshot(body: &str) -> Result<RegionGradeSnapshot, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Per-region reading returned by `GET /weather/grade/{code}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionGradeDetail {
    pub grade: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_time: Option<String>,
    /// Response time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl RegionGradeDetail {
    /// Grade-only record used when the detail request failed.
    pub fn degraded(grade: Grade) -> Self {
        Self {
            grade,
            score: None,
            region_name: None,
            temperature: None,
            humidity: None,
            wind_speed: None,
            pm10: None,
            pm25: None,
            condition: None,
            data_time: None,
            timestamp: None,
        }
    }

    pub fn has_readings(&self) -> bool {
        self.temperature.is_some()
            || self.humidity.is_some()
            || self.wind_speed.is_some()
            || self.pm10.is_some()
            || self.pm25.is_some()
            || self.condition.is_some()
    }

    /// Parsed measurement time. Accepts RFC 3339, ISO local time and the
    /// compact `YYYYMMDDHHMM` form used by the forecast feeds. Without
    /// `dataTime`, falls back to the response `timestamp` in local time.
    pub fn measured_at(&self) -> Option<NaiveDateTime> {
        let Some(raw) = self.data_time.as_deref().map(str::trim) else {
            let millis = self.timestamp?;
            return DateTime::from_timestamp_millis(millis)
                .map(|dt| dt.with_timezone(&Local).naive_local());
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y%m%d%H%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }
}

pub fn decode_detail(body: &str) -> Result<RegionGradeDetail, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// State of the snapshot load shown above the map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Carries the error text; the view offers a retry.
    Failed(String),
}

impl LoadStatus {
    pub fn can_retry(&self) -> bool {
        matches!(self, LoadStatus::Failed(_))
    }
}

/// Fold one snapshot fetch into the current snapshot. A success replaces it
/// wholesale; a failure leaves the previous snapshot untouched.
pub fn apply_snapshot_result(
    current: &mut RegionGradeSnapshot,
    result: Result<RegionGradeSnapshot, FetchError>,
) -> LoadStatus {
    match result {
        Ok(next) => {
            *current = next;
            LoadStatus::Ready
        }
        Err(e) => LoadStatus::Failed(e.to_string()),
    }
}

//! Selection state for the region map and the region grade strip.
//!
//! The two widgets use different click conventions: a map region
//! click always (re)selects, while a strip card click toggles.

use crate::catalog;
use crate::error::FetchError;
use crate::grade::Grade;
use crate::weather::{RegionGradeDetail, RegionGradeSnapshot, snapshot_grade};

pub const PHOTO_SPOTS_PATH: &str = "/photo-spots";

/// Request for `GET /weather/grade/{code}`, tagged with an issue sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub seq: u64,
    pub code: String,
}

/// Ask the router to show photo spots of a region filtered by district.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub code: String,
    pub district: String,
}

impl NavigationIntent {
    /// Path without the query string.
    pub fn path(&self) -> String {
        format!("{PHOTO_SPOTS_PATH}/{}", self.code)
    }

    /// Full href; `encode` percent-encodes one query component.
    pub fn href_with(&self, encode: impl Fn(&str) -> String) -> String {
        format!("{}?district={}", self.path(), encode(&self.district))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Pending,
    Loaded(RegionGradeDetail),
    Absent,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    None,
    Region {
        region: String,
    },
    District {
        region: String,
        district: String,
        detail: DetailState,
    },
}

impl Selection {
    pub fn region(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Region { region } | Selection::District { region, .. } => {
                Some(region.as_str())
            }
        }
    }

    pub fn district(&self) -> Option<&str> {
        match self {
            Selection::District { district, .. } => Some(district.as_str()),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailState> {
        match self {
            Selection::District { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistrictOutcome {
    /// No region selected, or the district is not one of its districts.
    Ignored,
    /// Selected, but the region has no backend code: nothing fetched, no navigation.
    NoCode,
    Dispatched {
        request: DetailRequest,
        navigation: NavigationIntent,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was already issued; applied anyway (last response wins).
    AppliedOutOfOrder,
    /// No district is selected any more.
    Discarded,
}

/// Map-side selection controller.
#[derive(Debug, Clone)]
pub struct MapSelection {
    state: Selection,
    last_issued: u64,
    code_for: fn(&str) -> Option<&'static str>,
    districts_for: fn(&str) -> &'static [&'static str],
}

impl Default for MapSelection {
    fn default() -> Self {
        Self::with_tables(catalog::code_for_name, catalog::districts_for)
    }
}

impl MapSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(
        code_for: fn(&str) -> Option<&'static str>,
        districts_for: fn(&str) -> &'static [&'static str],
    ) -> Self {
        Self {
            state: Selection::None,
            last_issued: 0,
            code_for,
            districts_for,
        }
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    /// Districts of the selected region, empty when nothing is selected.
    pub fn districts(&self) -> &'static [&'static str] {
        self.state
            .region()
            .map(|region| (self.districts_for)(region))
            .unwrap_or(&[])
    }

    pub fn region_code(&self) -> Option<&'static str> {
        self.state.region().and_then(|region| (self.code_for)(region))
    }

    /// Unconditional: re-selecting the current region resets the district.
    pub fn select_region(&mut self, region: &str) {
        self.state = Selection::Region {
            region: region.to_string(),
        };
    }

    pub fn select_district(&mut self, district: &str) -> DistrictOutcome {
        let Some(region) = self.state.region().map(str::to_string) else {
            return DistrictOutcome::Ignored;
        };
        if !(self.districts_for)(&region).iter().any(|d| *d == district) {
            return DistrictOutcome::Ignored;
        }

        let code = (self.code_for)(&region);
        self.state = Selection::District {
            region,
            district: district.to_string(),
            detail: if code.is_some() {
                DetailState::Pending
            } else {
                DetailState::Absent
            },
        };

        let Some(code) = code else {
            return DistrictOutcome::NoCode;
        };

        self.last_issued += 1;
        DistrictOutcome::Dispatched {
            request: DetailRequest {
                seq: self.last_issued,
                code: code.to_string(),
            },
            navigation: NavigationIntent {
                code: code.to_string(),
                district: district.to_string(),
            },
        }
    }

    /// Store a detail response. Responses are applied in arrival order.
    pub fn resolve_detail(
        &mut self,
        seq: u64,
        result: Result<RegionGradeDetail, FetchError>,
    ) -> Resolution {
        let Selection::District { detail, .. } = &mut self.state else {
            return Resolution::Discarded;
        };
        *detail = match result {
            Ok(loaded) => DetailState::Loaded(loaded),
            Err(_) => DetailState::Absent,
        };
        if seq < self.last_issued {
            Resolution::AppliedOutOfOrder
        } else {
            Resolution::Applied
        }
    }

    /// What the detail panel shows: the loaded record, or the snapshot grade
    /// alone when the fetch failed. `None` while pending or without a district.
    pub fn detail_view(&self, snapshot: &RegionGradeSnapshot) -> Option<RegionGradeDetail> {
        match self.state.detail()? {
            DetailState::Pending => None,
            DetailState::Loaded(detail) => Some(detail.clone()),
            DetailState::Absent => {
                let grade = self
                    .region_code()
                    .map_or(Grade::Failed, |code| snapshot_grade(snapshot, code));
                Some(RegionGradeDetail::degraded(grade))
            }
        }
    }
}

/// Strip-side selection: clicking the selected card closes it.
#[derive(Debug, Clone, Default)]
pub struct StripSelection {
    selected: Option<String>,
    detail: Option<RegionGradeDetail>,
    last_issued: u64,
}

impl StripSelection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn detail(&self) -> Option<&RegionGradeDetail> {
        self.detail.as_ref()
    }

    pub fn click(&mut self, code: &str) -> Option<DetailRequest> {
        self.detail = None;
        if self.selected.as_deref() == Some(code) {
            self.selected = None;
            return None;
        }
        self.selected = Some(code.to_string());
        self.last_issued += 1;
        Some(DetailRequest {
            seq: self.last_issued,
            code: code.to_string(),
        })
    }

    /// Returns false when the response no longer matches the open card.
    pub fn resolve(
        &mut self,
        request: &DetailRequest,
        result: Result<RegionGradeDetail, FetchError>,
        snapshot: &RegionGradeSnapshot,
    ) -> bool {
        if self.selected.as_deref() != Some(request.code.as_str())
            || request.seq != self.last_issued
        {
            return false;
        }
        self.detail = Some(result.unwrap_or_else(|_| {
            RegionGradeDetail::degraded(snapshot_grade(snapshot, &request.code))
        }));
        true
    }
}

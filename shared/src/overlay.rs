use std::collections::HashMap;

use crate::catalog::{self, RegionEntry};
use crate::grade::Grade;
use crate::weather::RegionGradeSnapshot;

pub const DIMMED_OPACITY: f64 = 0.3;
pub const SELECTED_STROKE: &str = "#000000";
pub const SELECTED_STROKE_WIDTH: f64 = 1.5;
pub const DEFAULT_STROKE: &str = "#ffffff";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// One drawable region of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub name: &'static str,
    pub path: &'static str,
    pub grade: Grade,
    pub fill: &'static str,
    pub opacity: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub selected: bool,
}

/// Snapshot grades re-keyed by region name, plus the codes that had no
/// catalog region.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NamedGrades {
    pub grades: HashMap<&'static str, Grade>,
    pub unknown_codes: Vec<String>,
}

pub fn grades_by_name(snapshot: &RegionGradeSnapshot) -> NamedGrades {
    let mut named = NamedGrades::default();
    for (code, raw) in snapshot {
        match catalog::name_for_code(code) {
            Some(name) => {
                named.grades.insert(name, Grade::parse(raw));
            }
            None => named.unknown_codes.push(code.clone()),
        }
    }
    named.unknown_codes.sort();
    named
}

/// Visual tree of the map for the given overlay and selection.
///
/// Regions without a boundary path are skipped and reported in the second
/// element so callers can log them.
pub fn build_overlay(
    named: &NamedGrades,
    selected: Option<&str>,
) -> (Vec<RegionShape>, Vec<&'static str>) {
    let mut shapes = Vec::with_capacity(catalog::regions().len());
    let mut missing = Vec::new();

    for entry in catalog::regions() {
        match shape(entry, named, selected) {
            Some(shape) => shapes.push(shape),
            None => missing.push(entry.name),
        }
    }

    (shapes, missing)
}

fn shape(entry: &RegionEntry, named: &NamedGrades, selected: Option<&str>) -> Option<RegionShape> {
    let path = entry.path?;
    let grade = named
        .grades
        .get(entry.name)
        .copied()
        .unwrap_or(Grade::Failed);
    let is_selected = selected == Some(entry.name);

    let (opacity, stroke, stroke_width) = match selected {
        None => (1.0, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH),
        Some(_) if is_selected => (1.0, SELECTED_STROKE, SELECTED_STROKE_WIDTH),
        Some(_) => (DIMMED_OPACITY, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH),
    };

    Some(RegionShape {
        name: entry.name,
        path,
        grade,
        fill: grade.style().fill_color,
        opacity,
        stroke,
        stroke_width,
        selected: is_selected,
    })
}

/// One card of the region grade strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripCard {
    pub code: String,
    /// Region name, or the raw code when the catalog does not know it.
    pub label: String,
    pub grade: Grade,
}

/// Cards for every code in the snapshot: catalog order first, then unknown
/// codes sorted.
pub fn strip_cards(snapshot: &RegionGradeSnapshot) -> Vec<StripCard> {
    let mut cards: Vec<StripCard> = catalog::regions()
        .iter()
        .filter_map(|entry| {
            let code = entry.code?;
            let raw = snapshot.get(code)?;
            Some(StripCard {
                code: code.to_string(),
                label: entry.name.to_string(),
                grade: Grade::parse(raw),
            })
        })
        .collect();

    let mut unknown: Vec<StripCard> = snapshot
        .iter()
        .filter(|(code, _)| catalog::name_for_code(code).is_none())
        .map(|(code, raw)| StripCard {
            code: code.clone(),
            label: code.clone(),
            grade: Grade::parse(raw),
        })
        .collect();
    unknown.sort_by(|a, b| a.code.cmp(&b.code));
    cards.extend(unknown);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> RegionGradeSnapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn seoul_good_and_everything_else_gray() {
        let named = grades_by_name(&snapshot(&[("SEOUL", "GOOD")]));
        let (shapes, missing) = build_overlay(&named, None);

        assert!(missing.is_empty());
        assert_eq!(shapes.len(), 17);
        for shape in &shapes {
            if shape.name == "서울특별시" {
                assert_eq!(shape.fill, Grade::Good.style().fill_color);
            } else {
                assert_eq!(shape.fill, Grade::Failed.style().fill_color, "{}", shape.name);
            }
        }
    }

    #[test]
    fn unknown_codes_are_dropped_from_overlay() {
        let named = grades_by_name(&snapshot(&[("SEOUL", "BAD"), ("PYONGYANG", "GOOD")]));
        assert_eq!(named.grades.len(), 1);
        assert_eq!(named.unknown_codes, vec!["PYONGYANG".to_string()]);
    }

    #[test]
    fn empty_overlay_renders_all_failed() {
        let (shapes, _) = build_overlay(&NamedGrades::default(), None);
        assert!(
            shapes
                .iter()
                .all(|s| s.fill == Grade::Failed.style().fill_color && s.grade == Grade::Failed)
        );
    }

    #[test]
    fn no_selection_uses_uniform_thin_light_outline() {
        let (shapes, _) = build_overlay(&NamedGrades::default(), None);
        for shape in shapes {
            assert_eq!(shape.opacity, 1.0);
            assert_eq!(shape.stroke, DEFAULT_STROKE);
            assert_eq!(shape.stroke_width, DEFAULT_STROKE_WIDTH);
            assert!(!shape.selected);
        }
    }

    #[test]
    fn selection_dims_others_and_outlines_selected() {
        let (shapes, _) = build_overlay(&NamedGrades::default(), Some("경기도"));
        for shape in shapes {
            if shape.name == "경기도" {
                assert!(shape.selected);
                assert_eq!(shape.opacity, 1.0);
                assert_eq!(shape.stroke, SELECTED_STROKE);
                assert_eq!(shape.stroke_width, SELECTED_STROKE_WIDTH);
            } else {
                assert_eq!(shape.opacity, DIMMED_OPACITY);
                assert_eq!(shape.stroke, DEFAULT_STROKE);
            }
        }
    }

    #[test]
    fn strip_cards_follow_catalog_order_then_unknown_codes() {
        let cards = strip_cards(&snapshot(&[
            ("JEJU", "GOOD"),
            ("ZETA", "BAD"),
            ("SEOUL", "NORMAL"),
            ("ALPHA", "FAIR"),
        ]));
        let codes: Vec<_> = cards.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["SEOUL", "JEJU", "ALPHA", "ZETA"]);
        assert_eq!(cards[0].label, "서울특별시");
        assert_eq!(cards[2].label, "ALPHA");
        assert_eq!(cards[2].grade, Grade::Failed);
    }
}

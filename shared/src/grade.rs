use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Photography-suitability rating the backend assigns to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Good,
    Normal,
    Bad,
    /// Also covers every grade string the client does not recognize.
    Failed,
}

impl Grade {
    /// Legend order.
    pub const ALL: [Grade; 4] = [Grade::Good, Grade::Normal, Grade::Bad, Grade::Failed];

    /// Total parse: anything other than the four exact codes is `Failed`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "GOOD" => Grade::Good,
            "NORMAL" => Grade::Normal,
            "BAD" => Grade::Bad,
            _ => Grade::Failed,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Grade::Good => "GOOD",
            Grade::Normal => "NORMAL",
            Grade::Bad => "BAD",
            Grade::Failed => "FAILED",
        }
    }

    pub const fn style(self) -> &'static GradeStyle {
        match self {
            Grade::Good => &GOOD_STYLE,
            Grade::Normal => &NORMAL_STYLE,
            Grade::Bad => &BAD_STYLE,
            Grade::Failed => &FAILED_STYLE,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Grade::parse(&raw))
    }
}

/// Display attributes for one grade.
#[derive(Debug, PartialEq, Eq)]
pub struct GradeStyle {
    pub fill_color: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

const GOOD_STYLE: GradeStyle = GradeStyle {
    fill_color: "#0ea5e9",
    label: "좋음",
    icon: "☀️",
    description: "사진 촬영에 매우 좋은 날씨입니다!",
};

const NORMAL_STYLE: GradeStyle = GradeStyle {
    fill_color: "#f59e0b",
    label: "보통",
    icon: "⛅",
    description: "사진 촬영에 적당한 날씨입니다.",
};

const BAD_STYLE: GradeStyle = GradeStyle {
    fill_color: "#ef4444",
    label: "나쁨",
    icon: "🌧️",
    description: "사진 촬영에 좋지 않은 날씨입니다.",
};

const FAILED_STYLE: GradeStyle = GradeStyle {
    fill_color: "#e5e7eb",
    label: "데이터 없음",
    icon: "❓",
    description: "날씨 데이터를 가져올 수 없습니다.",
};

/// Style for a raw grade string as received from the backend.
pub fn style_for(raw: &str) -> &'static GradeStyle {
    Grade::parse(raw).style()
}

#[cfg(test)]
mod tests {
    use super::{Grade, style_for};
    use proptest::prelude::*;

    #[test]
    fn known_codes_parse_exactly() {
        assert_eq!(Grade::parse("GOOD"), Grade::Good);
        assert_eq!(Grade::parse("NORMAL"), Grade::Normal);
        assert_eq!(Grade::parse("BAD"), Grade::Bad);
        assert_eq!(Grade::parse("FAILED"), Grade::Failed);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Grade::parse("good"), Grade::Failed);
        assert_eq!(Grade::parse(" GOOD"), Grade::Failed);
    }

    #[test]
    fn backend_fallback_codes_render_as_failed() {
        // The backend's canned fallback map uses FAIR/POOR.
        assert_eq!(style_for("FAIR"), style_for("FAILED"));
        assert_eq!(style_for("POOR"), style_for("FAILED"));
        assert_eq!(style_for(""), style_for("FAILED"));
    }

    #[test]
    fn fill_colors_are_distinct_per_grade() {
        let colors: Vec<_> = Grade::ALL.iter().map(|g| g.style().fill_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Grade::Failed.style().fill_color, "#e5e7eb");
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&Grade::Normal).unwrap();
        assert_eq!(json, "\"NORMAL\"");
        let parsed: Grade = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(parsed, Grade::Failed);
    }

    proptest! {
        #[test]
        fn unrecognized_grades_style_like_failed(raw in "\\PC*") {
            prop_assume!(!matches!(raw.as_str(), "GOOD" | "NORMAL" | "BAD" | "FAILED"));
            prop_assert_eq!(style_for(&raw), style_for("FAILED"));
        }
    }
}

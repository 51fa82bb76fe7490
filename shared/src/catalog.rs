//! Static region catalog: boundary paths, districts and backend codes.
//!
//! Paths are drawn in a `0 0 800 900` SVG viewBox and are only used for
//! rendering. Region names are the keys of this catalog; backend codes are
//! the keys of weather snapshots.

pub const MAP_VIEW_BOX: &str = "0 0 800 900";

#[derive(Debug)]
pub struct RegionEntry {
    pub name: &'static str,
    /// Backend region code. `None` would make the region unfetchable.
    pub code: Option<&'static str>,
    pub path: Option<&'static str>,
    pub districts: &'static [&'static str],
}

static REGIONS: [RegionEntry; 17] = [
    RegionEntry {
        name: "서울특별시",
        code: Some("SEOUL"),
        path: Some("M290 170 L330 160 L350 185 L335 210 L300 212 L282 192 Z"),
        districts: &[
            "강남구", "강동구", "강북구", "강서구", "관악구", "광진구", "구로구", "금천구",
            "노원구", "도봉구", "동대문구", "동작구", "마포구", "서대문구", "서초구", "성동구",
            "성북구", "송파구", "양천구", "영등포구", "용산구", "은평구", "종로구", "중구",
            "중랑구",
        ],
    },
    RegionEntry {
        name: "부산광역시",
        code: Some("BUSAN"),
        path: Some("M575 560 L615 555 L625 585 L595 600 L568 585 Z"),
        districts: &[
            "강서구", "금정구", "남구", "동구", "동래구", "부산진구", "북구", "사상구", "사하구",
            "서구", "수영구", "연제구", "영도구", "중구", "해운대구", "기장군",
        ],
    },
    RegionEntry {
        name: "대구광역시",
        code: Some("DAEGU"),
        path: Some("M500 470 L540 462 L552 490 L528 510 L498 500 Z"),
        districts: &[
            "남구", "달서구", "달성군", "동구", "북구", "서구", "수성구", "중구",
        ],
    },
    RegionEntry {
        name: "인천광역시",
        code: Some("INCHEON"),
        path: Some("M215 175 L255 170 L270 205 L245 230 L210 215 Z"),
        districts: &[
            "계양구", "남구", "남동구", "동구", "부평구", "서구", "연수구", "중구", "강화군",
            "옹진군",
        ],
    },
    RegionEntry {
        name: "광주광역시",
        code: Some("GWANGJU"),
        path: Some("M250 590 L285 585 L292 612 L268 625 L245 610 Z"),
        districts: &["광산구", "남구", "동구", "북구", "서구"],
    },
    RegionEntry {
        name: "대전광역시",
        code: Some("DAEJEON"),
        path: Some("M345 390 L375 385 L382 412 L358 425 L340 410 Z"),
        districts: &["대덕구", "동구", "서구", "유성구", "중구"],
    },
    RegionEntry {
        name: "울산광역시",
        code: Some("ULSAN"),
        path: Some("M600 500 L640 490 L650 530 L620 550 L595 530 Z"),
        districts: &["남구", "동구", "북구", "중구", "울주군"],
    },
    RegionEntry {
        name: "세종특별자치시",
        code: Some("SEJONG"),
        path: Some("M320 350 L345 345 L352 372 L330 385 L315 370 Z"),
        districts: &["세종특별자치시"],
    },
    RegionEntry {
        name: "경기도",
        code: Some("GYEONGGI"),
        path: Some("M230 120 L330 90 L400 130 L410 210 L380 260 L300 280 L240 250 L215 190 Z"),
        districts: &[
            "수원시", "성남시", "의정부시", "안양시", "부천시", "광명시", "평택시", "동두천시",
            "안산시", "고양시", "과천시", "구리시", "남양주시", "오산시", "시흥시", "군포시",
            "의왕시", "하남시", "용인시", "파주시", "이천시", "안성시", "김포시", "화성시",
            "광주시", "여주시", "양평군", "고양군", "연천군", "포천군", "가평군",
        ],
    },
    RegionEntry {
        name: "강원특별자치도",
        code: Some("GANGWON"),
        path: Some("M330 90 L420 40 L520 60 L600 200 L590 260 L470 270 L410 210 L400 130 Z"),
        districts: &[
            "춘천시", "원주시", "강릉시", "동해시", "태백시", "속초시", "삼척시", "홍천군",
            "횡성군", "영월군", "평창군", "정선군", "철원군", "화천군", "양구군", "인제군",
            "고성군", "양양군",
        ],
    },
    RegionEntry {
        name: "충청북도",
        code: Some("CHUNGBUK"),
        path: Some("M380 260 L470 270 L490 330 L450 380 L420 440 L380 420 L360 360 L330 320 Z"),
        districts: &[
            "청주시", "충주시", "제천시", "청원군", "보은군", "옥천군", "영동군", "증평군",
            "진천군", "괴산군", "음성군", "단양군",
        ],
    },
    RegionEntry {
        name: "충청남도",
        code: Some("CHUNGNAM"),
        path: Some(
            "M190 290 L300 280 L330 320 L360 360 L380 420 L340 450 L270 440 L210 400 L180 340 Z",
        ),
        districts: &[
            "천안시", "공주시", "보령시", "아산시", "서산시", "논산시", "계룡시", "당진시",
            "금산군", "연기군", "부여군", "서천군", "청양군", "홍성군", "예산군", "태안군",
        ],
    },
    RegionEntry {
        name: "전라북도",
        code: Some("JEONBUK"),
        path: Some("M210 400 L270 440 L340 450 L390 510 L340 540 L260 540 L200 500 Z"),
        districts: &[
            "전주시", "군산시", "익산시", "정읍시", "남원시", "김제시", "완주군", "진안군",
            "무주군", "장수군", "임실군", "순창군", "고창군", "부안군",
        ],
    },
    RegionEntry {
        name: "전라남도",
        code: Some("JEONNAM"),
        path: Some("M170 540 L260 540 L340 540 L400 590 L360 650 L270 680 L190 660 L150 600 Z"),
        districts: &[
            "목포시", "여수시", "순천시", "나주시", "광양시", "담양군", "곡성군", "구례군",
            "고흥군", "보성군", "화순군", "장흥군", "강진군", "해남군", "영암군", "무안군",
            "함평군", "영광군", "장성군", "완도군", "진도군", "신안군",
        ],
    },
    RegionEntry {
        name: "경상북도",
        code: Some("GYEONGBUK"),
        path: Some(
            "M470 270 L590 260 L640 340 L630 470 L560 500 L480 490 L420 440 L450 380 L490 330 Z",
        ),
        districts: &[
            "포항시", "경주시", "김천시", "안동시", "구미시", "영주시", "영천시", "상주시",
            "문경시", "경산시", "군위군", "의성군", "청송군", "영양군", "영덕군", "청도군",
            "고령군", "성주군", "칠곡군", "예천군", "봉화군", "울진군", "울릉군",
        ],
    },
    RegionEntry {
        name: "경상남도",
        code: Some("GYEONGNAM"),
        path: Some(
            "M420 440 L480 490 L560 500 L600 520 L575 560 L540 600 L460 620 L400 590 L390 510 Z",
        ),
        districts: &[
            "창원시", "진주시", "통영시", "사천시", "김해시", "밀양시", "거제시", "양산시",
            "의령군", "함안군", "창녕군", "고성군", "남해군", "하동군", "산청군", "함양군",
            "거창군", "합천군",
        ],
    },
    RegionEntry {
        name: "제주특별자치도",
        code: Some("JEJU"),
        path: Some("M200 800 L300 785 L330 810 L290 840 L210 840 L185 820 Z"),
        districts: &["제주시", "서귀포시"],
    },
];

/// All catalog regions in draw order.
pub fn regions() -> &'static [RegionEntry] {
    &REGIONS
}

pub fn region(name: &str) -> Option<&'static RegionEntry> {
    REGIONS.iter().find(|entry| entry.name == name)
}

pub fn shape_for(name: &str) -> Option<&'static str> {
    region(name).and_then(|entry| entry.path)
}

/// Ordered districts of a region; empty when the region is unknown.
pub fn districts_for(name: &str) -> &'static [&'static str] {
    region(name).map(|entry| entry.districts).unwrap_or(&[])
}

pub fn code_for_name(name: &str) -> Option<&'static str> {
    region(name).and_then(|entry| entry.code)
}

pub fn name_for_code(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|entry| entry.code == Some(code))
        .map(|entry| entry.name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_seventeen_regions() {
        assert_eq!(regions().len(), 17);
    }

    #[test]
    fn every_region_has_districts_within_bounds() {
        for entry in regions() {
            let count = districts_for(entry.name).len();
            assert!(
                (1..=31).contains(&count),
                "{} has {count} districts",
                entry.name
            );
        }
    }

    #[test]
    fn names_and_codes_are_unique() {
        let names: HashSet<_> = regions().iter().map(|e| e.name).collect();
        let codes: HashSet<_> = regions().iter().filter_map(|e| e.code).collect();
        assert_eq!(names.len(), 17);
        assert_eq!(codes.len(), 17);
    }

    #[test]
    fn translation_round_trips_for_every_region() {
        for entry in regions() {
            let code = code_for_name(entry.name).expect("catalog region has a code");
            assert_eq!(name_for_code(code), Some(entry.name));
        }
    }

    #[test]
    fn districts_keep_catalog_order() {
        let districts = districts_for("강원특별자치도");
        assert_eq!(districts.first(), Some(&"춘천시"));
        assert_eq!(districts.last(), Some(&"양양군"));
    }

    #[test]
    fn reference_district_lists_are_pinned() {
        assert_eq!(
            districts_for("인천광역시"),
            [
                "계양구", "남구", "남동구", "동구", "부평구", "서구", "연수구", "중구", "강화군",
                "옹진군",
            ]
        );
        let gyeonggi = districts_for("경기도");
        assert_eq!(gyeonggi.len(), 31);
        assert_eq!(
            &gyeonggi[24..],
            ["광주시", "여주시", "양평군", "고양군", "연천군", "포천군", "가평군"]
        );
        assert!(districts_for("충청북도").contains(&"청원군"));
        assert!(districts_for("충청남도").contains(&"연기군"));
        assert!(districts_for("경상북도").contains(&"군위군"));
    }

    #[test]
    fn unknown_lookups_are_absent() {
        assert_eq!(shape_for("강원도"), None);
        assert!(districts_for("강원도").is_empty());
        assert_eq!(code_for_name("Atlantis"), None);
        assert_eq!(name_for_code("ATLANTIS"), None);
        assert_eq!(name_for_code("seoul"), None);
    }

    #[test]
    fn every_region_has_a_closed_path() {
        for entry in regions() {
            let path = shape_for(entry.name).expect("path");
            assert!(path.starts_with('M') && path.ends_with('Z'), "{}", entry.name);
        }
    }
}

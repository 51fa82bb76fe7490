pub mod catalog;
pub mod colors;
pub mod error;
pub mod grade;
pub mod overlay;
pub mod selection;
pub mod weather;

pub use catalog::{code_for_name, districts_for, name_for_code, shape_for};
pub use error::FetchError;
pub use grade::{Grade, GradeStyle, style_for};
pub use overlay::{NamedGrades, RegionShape, StripCard, build_overlay, grades_by_name, strip_cards};
pub use selection::*;
pub use weather::*;

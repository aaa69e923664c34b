use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in layout pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BBox) -> BBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        BBox {
            x,
            y,
            width: (self.x + self.width).max(other.x + other.width) - x,
            height: (self.y + self.height).max(other.y + other.height) - y,
        }
    }

    pub fn contains(&self, other: &BBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

/// One positioned day cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    /// `YYYY-MM-DD` identity key; external data records are matched against
    /// this.
    pub day: String,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

/// One month's footprint within its year band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLayout {
    pub date: NaiveDate,
    pub year: i32,
    /// Zero-based month index (0 = January).
    pub month: u32,
    /// Closed step polygon around the month's cells, in the `M`/`H`/`V`/`Z`
    /// SVG path subset.
    pub path: String,
    pub bbox: BBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearLayout {
    pub year: i32,
    pub bbox: BBox,
}

/// Aggregate geometry for one configuration: the single authoritative
/// snapshot consumed by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarLayout {
    pub years: Vec<YearLayout>,
    pub months: Vec<MonthLayout>,
    pub days: Vec<DayLayout>,
    pub cell_size: f64,
    pub calendar_width: f64,
    pub calendar_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

/// External per-day datum bound onto the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDatum {
    pub day: String,
    pub value: f64,
    /// Opaque payload carried through to the bound day untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A day cell with its bound value and resolved color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundDay {
    #[serde(flatten)]
    pub cell: DayLayout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CalendarDatum>,
}

/// Year record augmented with a label anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearLegendLayout {
    pub year: i32,
    pub bbox: BBox,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// Month record augmented with a label anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLegendLayout {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub bbox: BBox,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

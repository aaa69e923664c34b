//! Typed configuration for a layout computation.

use crate::error::{Error, Result};
use crate::geom::Align;
use crate::time;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Layout orientation: the axis along which week columns advance.
///
/// Horizontal runs weeks left-to-right with the days of the week stacked
/// top-to-bottom; vertical swaps the two axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// Which side of its bounding box a legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Before,
    After,
}

/// Inclusive calendar-year range: every year from `from`'s to `to`'s gets a
/// full band of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Range from two `YYYY-MM-DD` day keys.
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            from: time::parse_day(from)?,
            to: time::parse_day(to)?,
        })
    }

    /// Every calendar year covered by the range, in order.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.from.year()..=self.to.year()
    }
}

/// Full configuration for one layout computation.
///
/// Serialized form uses camelCase keys and `YYYY-MM-DD` dates; the week start
/// travels in the 0=Sunday..6=Saturday convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub range: DateRange,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_year_spacing")]
    pub year_spacing: f64,
    #[serde(default)]
    pub day_spacing: f64,
    #[serde(default)]
    pub align: Align,
    #[serde(default = "default_week_start", with = "weekday_index")]
    pub first_day_of_week: Weekday,
}

fn default_year_spacing() -> f64 {
    30.0
}

fn default_week_start() -> Weekday {
    Weekday::Sun
}

/// Serde adapter carrying the week start as its 0=Sunday..6=Saturday index.
mod weekday_index {
    use crate::time;
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(day.num_days_from_sunday())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let index = u32::deserialize(deserializer)?;
        time::weekday_from_index(index).map_err(serde::de::Error::custom)
    }
}

impl CalendarConfig {
    /// Configuration with the library defaults for everything but the target
    /// size and the date range.
    pub fn new(width: f64, height: f64, range: DateRange) -> Self {
        Self {
            width,
            height,
            range,
            direction: Direction::default(),
            year_spacing: default_year_spacing(),
            day_spacing: 0.0,
            align: Align::default(),
            first_day_of_week: default_week_start(),
        }
    }

    /// Boundary validation: the geometry kernel itself has no error paths, so
    /// degenerate inputs are rejected here.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(Error::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.range.to < self.range.from {
            return Err(Error::InvertedDateRange {
                from: self.range.from,
                to: self.range.to,
            });
        }
        Ok(())
    }
}

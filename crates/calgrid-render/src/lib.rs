#![forbid(unsafe_code)]

//! Headless layout engine for calendar heatmaps.
//!
//! Turns a date range plus per-day values into renderer-agnostic geometry:
//! positioned day cells, month outlines as SVG-style path strings, year
//! bounding boxes, and legend anchors. Drawing is out of scope; consumers
//! feed the serializable layout records to whatever renderer they use.
//!
//! ```
//! use calgrid_render::{CalendarConfig, CalendarEngine, DateRange, bind_days_data};
//! use calgrid_render::model::CalendarDatum;
//!
//! let range = DateRange::parse("2018-01-01", "2018-12-31")?;
//! let config = CalendarConfig::new(800.0, 200.0, range);
//!
//! let mut engine = CalendarEngine::new();
//! let layout = engine.compute_layout(&config)?;
//! assert_eq!(layout.days.len(), 365);
//!
//! let data = vec![CalendarDatum {
//!     day: "2018-03-14".to_string(),
//!     value: 3.0,
//!     extra: Default::default(),
//! }];
//! let scale = |value: f64| format!("rgb(0, {}, 0)", (value * 10.0) as u8);
//! let bound = bind_days_data(&layout.days, &data, &scale, "#eeeeee");
//! assert_eq!(bound.len(), layout.days.len());
//! # Ok::<(), calgrid_render::Error>(())
//! ```

pub mod calendar;
pub mod data;
pub mod legend;
pub mod model;

pub use calendar::{CalendarEngine, MonthOutline, MonthOutlineParams, compute_cell_size};
pub use calgrid_core::{
    Align, CalendarConfig, DateRange, Direction, Error, LegendPosition, Result,
};
pub use data::{ColorScale, bind_days_data};
pub use legend::{compute_month_legend_positions, compute_year_legend_positions};
pub use model::{
    BBox, BoundDay, CalendarDatum, CalendarLayout, DayLayout, MonthLayout, MonthLegendLayout,
    YearLayout, YearLegendLayout,
};

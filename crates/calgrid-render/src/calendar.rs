//! The cell grid: cell sizing, month outlines, and the layout builder.

use crate::model::{BBox, CalendarLayout, DayLayout, MonthLayout, YearLayout};
use calgrid_core::geom::{self, align_box};
use calgrid_core::time;
use calgrid_core::{CalendarConfig, Direction, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use rustc_hash::FxHashMap;
use std::fmt::Write as _;
use tracing::debug;

/// Largest uniform square cell that fits the target box.
///
/// One candidate fits `max_weeks` columns along the weeks axis, the other
/// fits the stacked year bands along the years axis; the result is the
/// smaller of the two so neither axis overflows. Degenerate inputs yield a
/// non-positive size rather than an error; `CalendarEngine` validates before
/// calling.
pub fn compute_cell_size(
    width: f64,
    height: f64,
    direction: Direction,
    year_count: usize,
    year_spacing: f64,
    day_spacing: f64,
    max_weeks: i64,
) -> f64 {
    let years = year_count as f64;
    let weeks = max_weeks as f64;
    let weeks_fit = |span: f64| (span - day_spacing * weeks) / weeks;
    let years_fit =
        |span: f64| (span - (years - 1.0) * year_spacing - years * 8.0 * day_spacing) / (years * 7.0);

    let (width_fit, height_fit) = match direction {
        Direction::Horizontal => (weeks_fit(width), years_fit(height)),
        Direction::Vertical => (years_fit(width), weeks_fit(height)),
    };
    width_fit.min(height_fit)
}

/// Closed outline and bounding box of one month's cells.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthOutline {
    pub path: String,
    pub bbox: BBox,
}

/// Inputs that determine one month outline.
#[derive(Debug, Clone, Copy)]
pub struct MonthOutlineParams {
    /// First day of the month.
    pub month_start: NaiveDate,
    pub cell_size: f64,
    /// Zero-based index of the month's year within the overall range.
    pub year_index: usize,
    pub year_spacing: f64,
    pub day_spacing: f64,
    pub direction: Direction,
    pub origin_x: f64,
    pub origin_y: f64,
    pub week_start: Weekday,
}

/// Memo key for month outlines. Float parameters are keyed by their bit
/// patterns, so configurations differing in any coordinate hash apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct OutlineKey {
    month_start: NaiveDate,
    cell_size: u64,
    year_index: usize,
    year_spacing: u64,
    day_spacing: u64,
    direction: Direction,
    origin_x: u64,
    origin_y: u64,
    week_start: Weekday,
}

impl MonthOutlineParams {
    fn key(&self) -> OutlineKey {
        OutlineKey {
            month_start: self.month_start,
            cell_size: self.cell_size.to_bits(),
            year_index: self.year_index,
            year_spacing: self.year_spacing.to_bits(),
            day_spacing: self.day_spacing.to_bits(),
            direction: self.direction,
            origin_x: self.origin_x.to_bits(),
            origin_y: self.origin_y.to_bits(),
            week_start: self.week_start,
        }
    }
}

/// Emits path commands in (weeks-axis, days-axis) coordinates, mapping them
/// to x/y per the layout direction: the weeks axis is x when horizontal and y
/// when vertical, so one vertex sequence serves both orientations.
struct PathTracer {
    direction: Direction,
    out: String,
}

impl PathTracer {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            out: String::new(),
        }
    }

    fn move_to(&mut self, u: f64, v: f64) {
        match self.direction {
            Direction::Horizontal => {
                let _ = write!(self.out, "M{u},{v}");
            }
            Direction::Vertical => {
                let _ = write!(self.out, "M{v},{u}");
            }
        }
    }

    /// Line along the weeks axis to `u`.
    fn line_weeks(&mut self, u: f64) {
        let command = match self.direction {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        };
        let _ = write!(self.out, "{command}{u}");
    }

    /// Line along the days axis to `v`.
    fn line_days(&mut self, v: f64) {
        let command = match self.direction {
            Direction::Horizontal => 'V',
            Direction::Vertical => 'H',
        };
        let _ = write!(self.out, "{command}{v}");
    }

    fn close(mut self) -> String {
        self.out.push('Z');
        self.out
    }
}

/// Traces the step polygon around every cell of the month and derives its
/// bounding box.
///
/// The outline starts at the top edge of the first day's column, drops to the
/// bottom of the 7-day band, runs across to the last week, climbs past the
/// last day and returns along the top. Months therefore interlock exactly in
/// the columns they share with their neighbors.
fn month_path_and_bbox(p: &MonthOutlineParams) -> MonthOutline {
    let month_end = time::month_end(p.month_start);

    let first_week = time::week_of_year(p.month_start, p.week_start) as f64;
    let last_week = time::week_of_year(month_end, p.week_start) as f64;
    let first_day = f64::from(time::day_of_week_index(p.month_start, p.week_start));
    let last_day = f64::from(time::day_of_week_index(month_end, p.week_start));

    let step = p.cell_size + p.day_spacing;

    // Year bands stack along the days axis.
    let year_offset = p.year_index as f64 * (7.0 * step + p.year_spacing);
    let (origin_u, origin_v) = match p.direction {
        Direction::Horizontal => (p.origin_x, p.origin_y + year_offset),
        Direction::Vertical => (p.origin_y, p.origin_x + year_offset),
    };

    let mut tracer = PathTracer::new(p.direction);
    tracer.move_to(origin_u + (first_week + 1.0) * step, origin_v + first_day * step);
    tracer.line_weeks(origin_u + first_week * step);
    tracer.line_days(origin_v + 7.0 * step);
    tracer.line_weeks(origin_u + last_week * step);
    tracer.line_days(origin_v + (last_day + 1.0) * step);
    tracer.line_weeks(origin_u + (last_week + 1.0) * step);
    tracer.line_days(origin_v);
    let path = tracer.close();

    let min_u = origin_u + first_week * step;
    let span_u = (last_week + 1.0 - first_week) * step;
    let span_v = 7.0 * step;
    let bbox = match p.direction {
        Direction::Horizontal => BBox {
            x: min_u,
            y: origin_v,
            width: span_u,
            height: span_v,
        },
        Direction::Vertical => BBox {
            x: origin_v,
            y: min_u,
            width: span_v,
            height: span_u,
        },
    };

    MonthOutline { path, bbox }
}

fn cell_position(
    date: NaiveDate,
    year_index: usize,
    cell_size: f64,
    config: &CalendarConfig,
    origin_x: f64,
    origin_y: f64,
) -> (f64, f64) {
    let step = cell_size + config.day_spacing;
    let week_start = config.first_day_of_week;

    let along_weeks =
        time::week_of_year(date, week_start) as f64 * step + config.day_spacing / 2.0;
    let along_days = f64::from(time::day_of_week_index(date, week_start)) * step
        + config.day_spacing / 2.0
        + year_index as f64 * (config.year_spacing + 7.0 * step);

    match config.direction {
        Direction::Horizontal => (origin_x + along_weeks, origin_y + along_days),
        Direction::Vertical => (origin_x + along_days, origin_y + along_weeks),
    }
}

const OUTLINE_CACHE_CAP: usize = 1024;

/// Layout entry point.
///
/// Owns the month-outline memo cache so that recomputing an unchanged
/// configuration (the common re-render case) reuses the traced outlines. The
/// cache is bounded: once `OUTLINE_CACHE_CAP` entries accumulate it is
/// cleared wholesale, and a miss only ever costs recomputation.
#[derive(Debug, Default)]
pub struct CalendarEngine {
    outlines: FxHashMap<OutlineKey, MonthOutline>,
}

impl CalendarEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline and bounding box for one month, served from the memo cache
    /// when the parameter tuple has been traced before.
    pub fn month_outline(&mut self, params: &MonthOutlineParams) -> MonthOutline {
        let key = params.key();
        if let Some(hit) = self.outlines.get(&key) {
            return hit.clone();
        }
        let outline = month_path_and_bbox(params);
        if self.outlines.len() >= OUTLINE_CACHE_CAP {
            self.outlines.clear();
        }
        self.outlines.insert(key, outline.clone());
        outline
    }

    /// Computes the full geometry snapshot for the given configuration.
    ///
    /// Rejects inverted date ranges and non-positive target dimensions; for
    /// valid inputs the output is deterministic and every coordinate finite.
    pub fn compute_layout(&mut self, config: &CalendarConfig) -> Result<CalendarLayout> {
        config.validate()?;

        let week_start = config.first_day_of_week;
        let years: Vec<i32> = config.range.years().collect();
        let max_weeks = years
            .iter()
            .map(|&year| time::weeks_spanned(year, week_start))
            .max()
            .unwrap_or(0);

        let cell_size = compute_cell_size(
            config.width,
            config.height,
            config.direction,
            years.len(),
            config.year_spacing,
            config.day_spacing,
            max_weeks,
        );

        let step = cell_size + config.day_spacing;
        let months_size = max_weeks as f64 * step;
        let years_size =
            7.0 * step * years.len() as f64 + config.year_spacing * (years.len() as f64 - 1.0);

        let (calendar_width, calendar_height) = match config.direction {
            Direction::Horizontal => (months_size, years_size),
            Direction::Vertical => (years_size, months_size),
        };

        let offset = align_box(
            geom::size(calendar_width, calendar_height),
            geom::size(config.width, config.height),
            config.align,
        );
        let (origin_x, origin_y) = (offset.x, offset.y);

        debug!(
            years = years.len(),
            max_weeks, cell_size, "computed calendar grid"
        );

        let mut year_layouts = Vec::with_capacity(years.len());
        let mut months = Vec::with_capacity(years.len() * 12);
        let mut days = Vec::new();

        for (year_index, &year) in years.iter().enumerate() {
            for date in time::days_of_year(year) {
                let (x, y) = cell_position(date, year_index, cell_size, config, origin_x, origin_y);
                days.push(DayLayout {
                    date,
                    day: time::format_day(date),
                    size: cell_size,
                    x,
                    y,
                });
            }

            let first_month_index = months.len();
            for month_start in time::months_of_year(year) {
                let outline = self.month_outline(&MonthOutlineParams {
                    month_start,
                    cell_size,
                    year_index,
                    year_spacing: config.year_spacing,
                    day_spacing: config.day_spacing,
                    direction: config.direction,
                    origin_x,
                    origin_y,
                    week_start,
                });
                months.push(MonthLayout {
                    date: month_start,
                    year,
                    month: month_start.month0(),
                    path: outline.path,
                    bbox: outline.bbox,
                });
            }

            let mut bbox = months[first_month_index].bbox;
            for month in &months[first_month_index + 1..] {
                bbox = bbox.union(&month.bbox);
            }
            year_layouts.push(YearLayout { year, bbox });
        }

        Ok(CalendarLayout {
            years: year_layouts,
            months,
            days,
            cell_size,
            calendar_width,
            calendar_height,
            origin_x,
            origin_y,
        })
    }
}

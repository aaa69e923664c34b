//! Label anchor computation for year and month legends.
//!
//! Year and month legends share one positional rule over different bounding
//! boxes; which of the two anchor styles applies swaps with the layout
//! direction, and it swaps in opposite ways for years and months.

use crate::model::{BBox, MonthLayout, MonthLegendLayout, YearLayout, YearLegendLayout};
use calgrid_core::{Direction, LegendPosition};

/// Anchor beside the box on the x axis, vertically centered, with the label
/// rotated to run along the band.
fn rotated_anchor(bbox: &BBox, position: LegendPosition, offset: f64) -> (f64, f64, f64) {
    let x = match position {
        LegendPosition::Before => bbox.x - offset,
        LegendPosition::After => bbox.x + bbox.width + offset,
    };
    (x, bbox.y + bbox.height / 2.0, -90.0)
}

/// Anchor above or below the box, horizontally centered, upright.
fn upright_anchor(bbox: &BBox, position: LegendPosition, offset: f64) -> (f64, f64, f64) {
    let y = match position {
        LegendPosition::Before => bbox.y - offset,
        LegendPosition::After => bbox.y + bbox.height + offset,
    };
    (bbox.x + bbox.width / 2.0, y, 0.0)
}

/// Year labels run rotated down the side of each year band in horizontal
/// layouts, and sit upright above/below the band in vertical ones.
pub fn compute_year_legend_positions(
    years: &[YearLayout],
    direction: Direction,
    position: LegendPosition,
    offset: f64,
) -> Vec<YearLegendLayout> {
    years
        .iter()
        .map(|year| {
            let (x, y, rotation) = match direction {
                Direction::Horizontal => rotated_anchor(&year.bbox, position, offset),
                Direction::Vertical => upright_anchor(&year.bbox, position, offset),
            };
            YearLegendLayout {
                year: year.year,
                bbox: year.bbox,
                x,
                y,
                rotation,
            }
        })
        .collect()
}

/// Month labels use the inverse rule: upright above/below each month in
/// horizontal layouts, rotated beside it in vertical ones.
pub fn compute_month_legend_positions(
    months: &[MonthLayout],
    direction: Direction,
    position: LegendPosition,
    offset: f64,
) -> Vec<MonthLegendLayout> {
    months
        .iter()
        .map(|month| {
            let (x, y, rotation) = match direction {
                Direction::Horizontal => upright_anchor(&month.bbox, position, offset),
                Direction::Vertical => rotated_anchor(&month.bbox, position, offset),
            };
            MonthLegendLayout {
                date: month.date,
                year: month.year,
                month: month.month,
                bbox: month.bbox,
                x,
                y,
                rotation,
            }
        })
        .collect()
}

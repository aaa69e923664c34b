//! Binds external day-keyed values onto a computed layout.

use crate::model::{BoundDay, CalendarDatum, DayLayout};
use rustc_hash::FxHashMap;

/// Maps a bound value to a fill color.
///
/// Implemented for any `Fn(f64) -> String`, so callers can hand in a closure
/// over whatever scale construction they use.
pub trait ColorScale {
    fn color(&self, value: f64) -> String;
}

impl<F> ColorScale for F
where
    F: Fn(f64) -> String,
{
    fn color(&self, value: f64) -> String {
        self(value)
    }
}

/// Attaches values and colors to day cells.
///
/// Days without a matching datum keep `empty_color` and carry no value. When
/// several data records share one day key, the last record in `data` wins;
/// rebinding the same data is consequently a no-op. Returns new records, so
/// the layout the days came from stays untouched.
pub fn bind_days_data(
    days: &[DayLayout],
    data: &[CalendarDatum],
    color_scale: &dyn ColorScale,
    empty_color: &str,
) -> Vec<BoundDay> {
    let mut by_day: FxHashMap<&str, &CalendarDatum> = FxHashMap::default();
    for datum in data {
        by_day.insert(datum.day.as_str(), datum);
    }

    days.iter()
        .map(|cell| match by_day.get(cell.day.as_str()) {
            Some(&datum) => BoundDay {
                cell: cell.clone(),
                value: Some(datum.value),
                color: color_scale.color(datum.value),
                data: Some(datum.clone()),
            },
            None => BoundDay {
                cell: cell.clone(),
                value: None,
                color: empty_color.to_string(),
                data: None,
            },
        })
        .collect()
}

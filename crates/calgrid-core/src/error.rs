use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid date `{input}`: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid week start index {index} (expected 0-6, 0 = Sunday)")]
    InvalidWeekStart { index: u32 },

    #[error("inverted date range: `{to}` is before `{from}`")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },

    #[error("non-positive layout dimensions: {width}x{height}")]
    NonPositiveDimensions { width: f64, height: f64 },
}

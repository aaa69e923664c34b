#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// One of the nine standard box-alignment positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Align {
    /// Interpolation factors along x and y: 0 pins to the near edge, 1 to the
    /// far edge.
    fn factors(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::Top => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::Left => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::Right => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::Bottom => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Offset that places `inner` within `outer` at the given alignment, with both
/// boxes anchored at the origin.
pub fn align_box(inner: Size, outer: Size, align: Align) -> Vector {
    let (fx, fy) = align.factors();
    vector((outer.width - inner.width) * fx, (outer.height - inner.height) * fy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_box_covers_all_nine_positions() {
        let inner = size(10.0, 10.0);
        let outer = size(100.0, 50.0);

        let cases = [
            (Align::TopLeft, 0.0, 0.0),
            (Align::Top, 45.0, 0.0),
            (Align::TopRight, 90.0, 0.0),
            (Align::Left, 0.0, 20.0),
            (Align::Center, 45.0, 20.0),
            (Align::Right, 90.0, 20.0),
            (Align::BottomLeft, 0.0, 40.0),
            (Align::Bottom, 45.0, 40.0),
            (Align::BottomRight, 90.0, 40.0),
        ];
        for (align, x, y) in cases {
            let offset = align_box(inner, outer, align);
            assert_eq!((offset.x, offset.y), (x, y), "{align:?}");
        }
    }

    #[test]
    fn align_box_with_matching_sizes_is_zero() {
        let b = size(42.0, 17.0);
        let offset = align_box(b, b, Align::BottomRight);
        assert_eq!((offset.x, offset.y), (0.0, 0.0));
    }

    #[test]
    fn align_keywords_use_kebab_case() {
        assert_eq!(serde_json::to_string(&Align::TopLeft).unwrap(), "\"top-left\"");
        let parsed: Align = serde_json::from_str("\"bottom-right\"").unwrap();
        assert_eq!(parsed, Align::BottomRight);
    }
}

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Rectangle dimensions
pub struct Rect {
    /// Left point of the rectangle
    #[serde(default, deserialize_with = "crate::lenient::coordinate")]
    pub x: i32,
    /// Top point of the rectangle
    #[serde(default, deserialize_with = "crate::lenient::coordinate")]
    pub y: i32,
    /// Width of the rectangle (from the left point)
    #[serde(default, deserialize_with = "crate::lenient::coordinate")]
    pub width: i32,
    /// Height of the rectangle (from the top point)
    #[serde(default, deserialize_with = "crate::lenient::coordinate")]
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// x coordinate one past the right edge, saturating at the coordinate range
    #[must_use]
    pub const fn right_edge(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// y coordinate one past the bottom edge, saturating at the coordinate range
    #[must_use]
    pub const fn bottom_edge(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// A full-height strip of self starting at `x` and spanning `width`.
    #[must_use]
    pub const fn column(&self, x: i32, width: i32) -> Self {
        Self {
            x,
            y: self.y,
            width,
            height: self.height,
        }
    }

    /// The full-height strip of self between `from` and `to`, never narrower than zero.
    #[must_use]
    pub fn span(&self, from: i32, to: i32) -> Self {
        self.column(from, to.saturating_sub(from).max(0))
    }

    #[must_use]
    pub const fn contains_point(&self, point: (i32, i32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.right_edge()
            && point.1 >= self.y
            && point.1 <= self.bottom_edge()
    }

    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right_edge() <= self.right_edge()
            && other.bottom_edge() <= self.bottom_edge()
    }
}

/// Rounds half-way cases towards positive infinity, the way host scripting runtimes do.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

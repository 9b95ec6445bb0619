use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Tap location in surface-local pixels (origin top-left, x right, y down)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Parses `"x,y"` or `"x y"` (surrounding whitespace allowed).
impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (xs, ys) = trimmed
            .split_once(',')
            .or_else(|| trimmed.split_once(char::is_whitespace))
            .ok_or_else(|| Error::InvalidTap(s.to_string()))?;
        let x = xs.trim().parse::<f64>();
        let y = ys.trim().parse::<f64>();
        match (x, y) {
            (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
            _ => Err(Error::InvalidTap(s.to_string())),
        }
    }
}

/// Acute/obtuse angle pair in degrees — fields in alphabetical order.
///
/// For two or more points `small + large == 180` and
/// `0 <= small <= 90 <= large <= 180`. Fewer points give the zero pair.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct AnglePair {
    pub large: f64,
    pub small: f64,
}

impl AnglePair {
    pub const ZERO: AnglePair = AnglePair {
        large: 0.0,
        small: 0.0,
    };
}

/// Position in the two-segment entry sequence, derived from the point count.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No points yet
    Empty,
    /// First segment started, waiting for its end point
    FirstOpen,
    /// First segment complete
    FirstDone,
    /// Second segment started
    SecondOpen,
    /// Both segments complete; further taps are ignored until reset
    SecondDone,
}

impl Phase {
    pub fn from_len(len: usize) -> Self {
        match len {
            0 => Phase::Empty,
            1 => Phase::FirstOpen,
            2 => Phase::FirstDone,
            3 => Phase::SecondOpen,
            _ => Phase::SecondDone,
        }
    }
}

/// What an accepted tap did to the segment sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapEvent {
    /// The tap opened a new segment at `at`
    SegmentStarted { at: Point },
    /// The tap closed the open segment that began at `from`
    SegmentCompleted { from: Point, to: Point },
}

impl TapEvent {
    /// The tapped location itself.
    pub fn location(&self) -> Point {
        match *self {
            TapEvent::SegmentStarted { at } => at,
            TapEvent::SegmentCompleted { to, .. } => to,
        }
    }
}

/// Instruction for the rendering collaborator (tagged for JSON).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Wipe the surface, paint `fill`, then draw the background image
    Clear { fill: String, image_url: String },
    /// Square marker of side `size` centred on `center`
    Marker {
        center: Point,
        size: f64,
        color: String,
    },
    /// Start tracking a line at `from`; nothing is stroked yet
    BeginLine {
        from: Point,
        color: String,
        width: f64,
    },
    /// Stroke the straight line `from` → `to`
    FinishLine {
        from: Point,
        to: Point,
        color: String,
        width: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma() {
        let p: Point = "12.5,40".parse().unwrap();
        assert_eq!(p, Point::new(12.5, 40.0));
    }

    #[test]
    fn test_parse_whitespace() {
        let p: Point = "  3 7 ".parse().unwrap();
        assert_eq!(p, Point::new(3.0, 7.0));
        let p: Point = "3, 7".parse().unwrap();
        assert_eq!(p, Point::new(3.0, 7.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("12".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
        assert!("".parse::<Point>().is_err());
    }

    #[test]
    fn test_phase_from_len() {
        assert_eq!(Phase::from_len(0), Phase::Empty);
        assert_eq!(Phase::from_len(1), Phase::FirstOpen);
        assert_eq!(Phase::from_len(2), Phase::FirstDone);
        assert_eq!(Phase::from_len(3), Phase::SecondOpen);
        assert_eq!(Phase::from_len(4), Phase::SecondDone);
    }

    #[test]
    fn test_draw_op_json_tag() {
        let op = DrawOp::Marker {
            center: Point::new(1.0, 2.0),
            size: 10.0,
            color: "yellow".into(),
        };
        let v = serde_json::to_value(&op).unwrap();
        assert_eq!(v["op"], "marker");
        assert_eq!(v["center"]["x"], 1.0);
    }
}

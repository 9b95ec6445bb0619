use serde::Serialize;

use crate::options::OverlayStyle;
use crate::types::{DrawOp, Point, TapEvent};

/// Draw operations for one accepted tap: the marker, then the line step.
pub fn tap_ops(event: &TapEvent, style: &OverlayStyle) -> Vec<DrawOp> {
    let marker = DrawOp::Marker {
        center: event.location(),
        size: style.marker_size,
        color: style.marker_color.clone(),
    };
    let line = match *event {
        TapEvent::SegmentStarted { at } => DrawOp::BeginLine {
            from: at,
            color: style.line_color.clone(),
            width: style.line_width,
        },
        TapEvent::SegmentCompleted { from, to } => DrawOp::FinishLine {
            from,
            to,
            color: style.line_color.clone(),
            width: style.line_width,
        },
    };
    vec![marker, line]
}

/// Draw operation that wipes the surface and shows `image_url`.
pub fn clear_op(image_url: &str, style: &OverlayStyle) -> DrawOp {
    DrawOp::Clear {
        fill: style.background_fill.clone(),
        image_url: image_url.to_string(),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerShape {
    pub center: Point,
    pub size: f64,
    pub color: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineShape {
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub width: f64,
}

/// Retained scene built by replaying draw operations.
///
/// Stands in for a canvas: a `Clear` drops everything, markers and stroked
/// lines accumulate, and a begun line stays pending until finished.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    pub fill: Option<String>,
    pub image_url: Option<String>,
    pub lines: Vec<LineShape>,
    pub markers: Vec<MarkerShape>,
    pub pending: Option<Point>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Clear { fill, image_url } => {
                *self = Overlay {
                    fill: Some(fill.clone()),
                    image_url: Some(image_url.clone()),
                    ..Overlay::default()
                };
            }
            DrawOp::Marker {
                center,
                size,
                color,
            } => self.markers.push(MarkerShape {
                center: *center,
                size: *size,
                color: color.clone(),
            }),
            DrawOp::BeginLine { from, .. } => self.pending = Some(*from),
            DrawOp::FinishLine {
                from,
                to,
                color,
                width,
            } => {
                self.pending = None;
                self.lines.push(LineShape {
                    from: *from,
                    to: *to,
                    color: color.clone(),
                    width: *width,
                });
            }
        }
    }

    pub fn replay<'a>(&mut self, ops: impl IntoIterator<Item = &'a DrawOp>) {
        for op in ops {
            self.apply(op);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_start_ops() {
        let ops = tap_ops(
            &TapEvent::SegmentStarted { at: p(4.0, 5.0) },
            &OverlayStyle::default(),
        );
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], DrawOp::Marker { size, .. } if size == 10.0));
        assert!(matches!(ops[1], DrawOp::BeginLine { from, width, .. } if from == p(4.0, 5.0) && width == 3.0));
    }

    #[test]
    fn test_complete_ops() {
        let ops = tap_ops(
            &TapEvent::SegmentCompleted {
                from: p(0.0, 0.0),
                to: p(9.0, 9.0),
            },
            &OverlayStyle::default(),
        );
        assert!(matches!(ops[0], DrawOp::Marker { center, .. } if center == p(9.0, 9.0)));
        assert!(matches!(ops[1], DrawOp::FinishLine { from, to, .. } if from == p(0.0, 0.0) && to == p(9.0, 9.0)));
    }

    #[test]
    fn test_replay_builds_scene() {
        let style = OverlayStyle::default();
        let mut ops = vec![clear_op("img/1.jpg", &style)];
        ops.extend(tap_ops(&TapEvent::SegmentStarted { at: p(1.0, 1.0) }, &style));
        let mut overlay = Overlay::new();
        overlay.replay(&ops);
        assert_eq!(overlay.markers.len(), 1);
        assert_eq!(overlay.pending, Some(p(1.0, 1.0)));
        assert!(overlay.lines.is_empty());

        overlay.replay(&tap_ops(
            &TapEvent::SegmentCompleted {
                from: p(1.0, 1.0),
                to: p(2.0, 8.0),
            },
            &style,
        ));
        assert_eq!(overlay.markers.len(), 2);
        assert_eq!(overlay.lines.len(), 1);
        assert_eq!(overlay.pending, None);
        assert_eq!(overlay.image_url.as_deref(), Some("img/1.jpg"));
    }

    #[test]
    fn test_clear_drops_shapes() {
        let style = OverlayStyle::default();
        let mut overlay = Overlay::new();
        overlay.replay(&tap_ops(&TapEvent::SegmentStarted { at: p(1.0, 1.0) }, &style));
        overlay.apply(&clear_op("img/2.jpg", &style));
        assert!(overlay.markers.is_empty());
        assert_eq!(overlay.pending, None);
        assert_eq!(overlay.fill.as_deref(), Some("#ddd"));
    }
}

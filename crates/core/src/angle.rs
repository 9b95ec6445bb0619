use crate::types::{AnglePair, Point};

/// Decimal places kept for every reported angle.
pub const PRECISION: i32 = 5;

const RIGHT: f64 = 90.0;
const STRAIGHT: f64 = 180.0;

/// Round to [`PRECISION`] decimals, halves away from zero.
pub fn round5(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    (value * scale).round() / scale
}

/// Display form with exactly [`PRECISION`] decimals.
pub fn format_degrees(value: f64) -> String {
    format!("{:.*}", PRECISION as usize, value)
}

/// Signed angle of segment `p0 → p1` against the vertical axis, in degrees.
///
/// tan(theta) = -dx / dy. A segment with `dy == 0` takes `-dx` itself as the
/// tangent, so horizontal segments do not report ±90°; callers that need true
/// geometry must special-case them.
pub fn segment_angle(p0: Point, p1: Point) -> f64 {
    let dy = p1.y - p0.y;
    let negdx = p0.x - p1.x;
    let slope = if dy == 0.0 { negdx } else { negdx / dy };
    round5(slope.atan().to_degrees())
}

/// Split an unsigned angle into its acute/obtuse pair.
fn split(angle: f64) -> AnglePair {
    let complement = round5(STRAIGHT - angle);
    if angle >= RIGHT {
        AnglePair {
            large: angle,
            small: complement,
        }
    } else {
        AnglePair {
            large: complement,
            small: angle,
        }
    }
}

/// Acute/obtuse angles for the current point sequence.
///
/// - fewer than 2 points: zero pair
/// - 2 or 3 points: first segment against the vertical axis
/// - 4 points: between the two segments
pub fn calculate_angle(points: &[Point]) -> AnglePair {
    if points.len() < 2 {
        return AnglePair::ZERO;
    }

    let theta1 = segment_angle(points[0], points[1]);
    if points.len() < 4 {
        log::trace!("theta1={theta1}");
        return split(theta1.abs());
    }

    let theta2 = segment_angle(points[2], points[3]);
    let between = round5((theta2 - theta1).abs());
    log::trace!("theta1={theta1} theta2={theta2} between={between}");
    split(between)
}

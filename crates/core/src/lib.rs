mod angle;
mod collector;
mod error;
pub mod options;
pub mod overlay;
mod session;
pub mod svg;
mod types;

pub use angle::{calculate_angle, format_degrees, round5, segment_angle, PRECISION};
pub use collector::{accept_tap, reset, TapState, MAX_POINTS};
pub use error::Error;
pub use options::{ImageSource, OverlayStyle, SessionOptions};
pub use session::{Session, Snapshot};
pub use types::*;

/// Angle pair for a JSON array of `{x, y}` points, as a JSON string.
///
/// Returns an empty string if `points_json` is not a point array.
pub fn angles_json(points_json: &str) -> String {
    serde_json::from_str::<Vec<Point>>(points_json)
        .ok()
        .map(|points| calculate_angle(&points))
        .and_then(|pair| serde_json::to_string(&pair).ok())
        .unwrap_or_default()
}

/// Replay `taps` on a fresh session for image `image_index`.
///
/// Taps beyond the fourth are ignored, as they are interactively.
pub fn label(
    taps: &[Point],
    image_index: u32,
    options: SessionOptions,
) -> Result<Session, Error> {
    let mut session = Session::with_image(options, image_index)?;
    for &tap in taps {
        session.tap(tap);
    }
    Ok(session)
}

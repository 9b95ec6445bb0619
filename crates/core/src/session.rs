use serde::Serialize;

use crate::angle::calculate_angle;
use crate::collector::{accept_tap, reset, TapState};
use crate::error::Error;
use crate::options::{ImageSource, OverlayStyle, SessionOptions};
use crate::overlay::{clear_op, tap_ops, Overlay};
use crate::types::{AnglePair, DrawOp, Phase, Point};

/// One labelling session: the selected image and the taps made on it.
///
/// Tap state lives exactly as long as the image selection; switching image
/// or resetting starts over from an empty state.
#[derive(Clone, Debug)]
pub struct Session {
    images: ImageSource,
    style: OverlayStyle,
    image_index: u32,
    taps: TapState,
    overlay: Overlay,
}

/// Serializable view of a session — fields in alphabetical order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub angles: AnglePair,
    pub drawing: bool,
    pub image_index: u32,
    pub image_url: String,
    pub phase: Phase,
    pub points: Vec<Point>,
}

impl Session {
    /// Start on image 1 with an empty tap state.
    ///
    /// Fails only if `images.count` is zero.
    pub fn new(options: SessionOptions) -> Result<Self, Error> {
        Self::with_image(options, 1)
    }

    pub fn with_image(options: SessionOptions, image_index: u32) -> Result<Self, Error> {
        let mut session = Session {
            images: options.images,
            style: options.style,
            image_index,
            taps: TapState::new(),
            overlay: Overlay::new(),
        };
        session.select_image(image_index)?;
        Ok(session)
    }

    /// Feed one tap. Returns the draw operations it produced, empty if ignored.
    pub fn tap(&mut self, location: Point) -> Vec<DrawOp> {
        let (next, event) = accept_tap(std::mem::take(&mut self.taps), location);
        self.taps = next;
        let ops = event
            .map(|ev| tap_ops(&ev, &self.style))
            .unwrap_or_default();
        self.overlay.replay(&ops);
        ops
    }

    /// Drop all taps and redraw the current image.
    pub fn reset(&mut self) -> Vec<DrawOp> {
        self.taps = reset();
        // The index was validated when selected
        let url = self.image_url();
        let op = clear_op(&url, &self.style);
        self.overlay.apply(&op);
        log::debug!("session reset on image {}", self.image_index);
        vec![op]
    }

    /// Switch to image `index` (1-based). Always resets the taps.
    pub fn select_image(&mut self, index: u32) -> Result<Vec<DrawOp>, Error> {
        self.images.url(index)?;
        self.image_index = index;
        log::info!("selected image {index}");
        Ok(self.reset())
    }

    pub fn angles(&self) -> AnglePair {
        calculate_angle(self.taps.points())
    }

    pub fn points(&self) -> &[Point] {
        self.taps.points()
    }

    pub fn is_drawing(&self) -> bool {
        self.taps.is_drawing()
    }

    pub fn phase(&self) -> Phase {
        self.taps.phase()
    }

    pub fn image_index(&self) -> u32 {
        self.image_index
    }

    pub fn image_url(&self) -> String {
        self.images.url(self.image_index).unwrap_or_default()
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Scene produced by every draw operation since the last reset.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            angles: self.angles(),
            drawing: self.is_drawing(),
            image_index: self.image_index,
            image_url: self.image_url(),
            phase: self.phase(),
            points: self.points().to_vec(),
        }
    }

    /// Render the current overlay as SVG.
    pub fn svg(&self) -> String {
        crate::svg::render(&self.overlay, &self.angles(), &self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(SessionOptions::default()).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session();
        assert_eq!(s.image_index(), 1);
        assert_eq!(s.phase(), Phase::Empty);
        assert_eq!(s.angles(), AnglePair::ZERO);
        assert!(s.overlay().image_url.as_deref().unwrap().ends_with("/1.jpg"));
    }

    #[test]
    fn test_zero_images_rejected() {
        let mut opts = SessionOptions::default();
        opts.images.count = 0;
        assert!(Session::new(opts).is_err());
    }

    #[test]
    fn test_tap_ops_and_angles() {
        let mut s = session();
        let ops = s.tap(Point::new(0.0, 0.0));
        assert!(matches!(ops[1], DrawOp::BeginLine { .. }));
        let ops = s.tap(Point::new(10.0, 10.0));
        assert!(matches!(ops[1], DrawOp::FinishLine { .. }));
        assert_eq!(s.angles(), AnglePair { large: 135.0, small: 45.0 });
        assert_eq!(s.overlay().lines.len(), 1);
    }

    #[test]
    fn test_locked_tap_returns_no_ops() {
        let mut s = session();
        for (x, y) in [(0.0, 0.0), (0.0, 10.0), (5.0, 5.0), (9.0, 1.0)] {
            s.tap(Point::new(x, y));
        }
        assert!(s.tap(Point::new(1.0, 1.0)).is_empty());
        assert_eq!(s.points().len(), 4);
        assert_eq!(s.overlay().markers.len(), 4);
    }

    #[test]
    fn test_select_image_resets() {
        let mut s = session();
        s.tap(Point::new(0.0, 0.0));
        s.tap(Point::new(0.0, 10.0));
        let ops = s.select_image(7).unwrap();
        assert_eq!(s.image_index(), 7);
        assert!(s.points().is_empty());
        assert!(!s.is_drawing());
        assert!(matches!(&ops[0], DrawOp::Clear { image_url, .. } if image_url.ends_with("/7.jpg")));
        assert!(s.overlay().markers.is_empty());
    }

    #[test]
    fn test_select_invalid_image_keeps_state() {
        let mut s = session();
        s.tap(Point::new(3.0, 3.0));
        assert!(s.select_image(15).is_err());
        assert_eq!(s.image_index(), 1);
        assert_eq!(s.points().len(), 1);
    }

    #[test]
    fn test_snapshot_json() {
        let mut s = session();
        s.tap(Point::new(0.0, 0.0));
        let v = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(v["phase"], "first_open");
        assert_eq!(v["drawing"], true);
        assert_eq!(v["image_index"], 1);
        assert_eq!(v["points"].as_array().unwrap().len(), 1);
        assert_eq!(v["angles"]["small"], 0.0);
    }
}

use tapangle_core::{Point, Session, SessionOptions};
use wasm_bindgen::prelude::*;

/// Angle pair for a JSON array of `{x, y}` points, as JSON.
#[wasm_bindgen]
pub fn calculate_angle_json(points_json: &str) -> String {
    tapangle_core::angles_json(points_json)
}

/// A labelling session bound to one image at a time.
#[wasm_bindgen]
pub struct LabelSession {
    inner: Session,
}

#[wasm_bindgen]
impl LabelSession {
    /// `opts_json` is parsed as `SessionOptions` with `#[serde(default)]`,
    /// so any omitted field uses the default value.
    #[wasm_bindgen(constructor)]
    pub fn new(opts_json: &str) -> Result<LabelSession, JsError> {
        let opts = SessionOptions::from_json(opts_json).unwrap_or_default();
        let inner = Session::new(opts)?;
        Ok(LabelSession { inner })
    }

    /// Record a tap; returns the draw operations as a JSON array
    /// (`[]` when the tap was ignored).
    pub fn tap(&mut self, x: f64, y: f64) -> String {
        let ops = self.inner.tap(Point::new(x, y));
        serde_json::to_string(&ops).unwrap_or_default()
    }

    /// Clear all taps; returns the redraw operations as JSON.
    pub fn reset(&mut self) -> String {
        let ops = self.inner.reset();
        serde_json::to_string(&ops).unwrap_or_default()
    }

    /// Switch image (1-based) and reset; returns the redraw operations as JSON.
    pub fn select_image(&mut self, index: u32) -> Result<String, JsError> {
        let ops = self.inner.select_image(index)?;
        Ok(serde_json::to_string(&ops)?)
    }

    pub fn small(&self) -> f64 {
        self.inner.angles().small
    }

    pub fn large(&self) -> f64 {
        self.inner.angles().large
    }

    pub fn angles_json(&self) -> String {
        serde_json::to_string(&self.inner.angles()).unwrap_or_default()
    }

    pub fn points_json(&self) -> String {
        serde_json::to_string(self.inner.points()).unwrap_or_default()
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.inner.snapshot()).unwrap_or_default()
    }

    pub fn image_index(&self) -> u32 {
        self.inner.image_index()
    }

    pub fn image_url(&self) -> String {
        self.inner.image_url()
    }

    pub fn is_drawing(&self) -> bool {
        self.inner.is_drawing()
    }

    /// Current overlay rendered as SVG.
    pub fn svg(&self) -> String {
        self.inner.svg()
    }
}

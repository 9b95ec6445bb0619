use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Bucket holding the labelling images.
pub const DEFAULT_BASE_URL: &str = "https://labelling-app-test.s3.ap-northeast-2.amazonaws.com";
/// Images are numbered `1..=DEFAULT_IMAGE_COUNT`.
pub const DEFAULT_IMAGE_COUNT: u32 = 14;

/// Where background images come from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ImageSource {
    /// URL prefix, without trailing slash
    pub base_url: String,
    /// Number of images available (default: 14)
    pub count: u32,
}

impl Default for ImageSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            count: DEFAULT_IMAGE_COUNT,
        }
    }
}

impl ImageSource {
    /// `<base-url>/{index}.jpg`, for `index` in `1..=count`.
    pub fn url(&self, index: u32) -> Result<String, Error> {
        if index == 0 || index > self.count {
            return Err(Error::ImageIndexOutOfRange {
                index,
                count: self.count,
            });
        }
        Ok(format!("{}/{}.jpg", self.base_url.trim_end_matches('/'), index))
    }
}

/// Appearance of the tap overlay.
///
/// Defaults match the labelling app: yellow 10px markers, yellow 3px lines
/// over a light grey fill.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OverlayStyle {
    /// Side of the square drawing surface in pixels (default: 400.0)
    pub surface_size: f64,
    /// Marker square side (default: 10.0)
    pub marker_size: f64,
    /// Marker fill color (default: "yellow")
    pub marker_color: String,
    /// Segment stroke color (default: "yellow")
    pub line_color: String,
    /// Segment stroke width (default: 3.0)
    pub line_width: f64,
    /// Fill painted under the image on reset (default: "#ddd")
    pub background_fill: String,
    /// Whether SVG output carries an acute/obtuse caption (default: false)
    pub show_angles: bool,
    /// Caption font size in pixels (default: 14.0)
    pub font_size: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            surface_size: 400.0,
            marker_size: 10.0,
            marker_color: "yellow".into(),
            line_color: "yellow".into(),
            line_width: 3.0,
            background_fill: "#ddd".into(),
            show_angles: false,
            font_size: 14.0,
        }
    }
}

impl OverlayStyle {
    /// Parse from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything a labelling session is configured with.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SessionOptions {
    pub images: ImageSource,
    pub style: OverlayStyle,
}

impl SessionOptions {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

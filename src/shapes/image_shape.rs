use serde::{Deserialize, Serialize};

/// A placed raster image. `href` is a URL or data URL; decoding is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageShape {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
	pub href: String,
}

impl ImageShape {
	pub fn new(x: f64, y: f64, width: f64, height: f64, href: impl Into<String>) -> Self {
		Self {
			x,
			y,
			width,
			height,
			href: href.into(),
		}
	}
}

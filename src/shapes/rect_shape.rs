use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with optional rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectShape {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
	pub radius_x: f64,
	pub radius_y: f64,
}

impl RectShape {
	pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
			radius_x: 0.,
			radius_y: 0.,
		}
	}
}

use crate::consts::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
	pub x: f64,
	pub y: f64,
	pub text: String,
	pub font_size: f64,
	pub font_family: String,
}

impl TextShape {
	pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
		Self {
			x,
			y,
			text: text.into(),
			font_size: DEFAULT_FONT_SIZE,
			font_family: DEFAULT_FONT_FAMILY.to_string(),
		}
	}
}

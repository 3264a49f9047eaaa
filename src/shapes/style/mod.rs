use crate::color::Color;
use crate::document::FilterId;
use crate::filters::FilterType;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fill {
	color: Option<Color>,
}

impl Fill {
	pub fn new(color: Color) -> Self {
		Self { color: Some(color) }
	}

	pub fn color(&self) -> Option<Color> {
		self.color
	}

	pub const fn none() -> Self {
		Self { color: None }
	}
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
	color: Color,
	width: f32,
}

impl Stroke {
	pub const fn new(color: Color, width: f32) -> Self {
		Self { color, width }
	}

	pub fn color(&self) -> Color {
		self.color
	}

	pub fn width(&self) -> f32 {
		self.width
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
	pub offset: f64,
	pub color: Color,
}

/// A palette gradient: a start/end axis (the radius for radial gradients) and its color stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
	pub start: DVec2,
	pub end: DVec2,
	pub radial: bool,
	pub stops: Vec<GradientStop>,
}

impl Gradient {
	pub fn linear(start: DVec2, end: DVec2, stops: Vec<GradientStop>) -> Self {
		Self { start, end, radial: false, stops }
	}

	pub fn radial(center: DVec2, edge: DVec2, stops: Vec<GradientStop>) -> Self {
		Self {
			start: center,
			end: edge,
			radial: true,
			stops,
		}
	}
}

/// The style envelope shared by every shape variant.
/// `translate` is the shape's offset from its authored position; `svg_filters` references
/// filters in the owning page's filter table, keyed by effect type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
	pub translate: DVec2,
	pub fill: Option<Fill>,
	pub stroke: Option<Stroke>,
	pub opacity: f64,
	pub svg_filters: HashMap<FilterType, Vec<FilterId>>,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			translate: DVec2::ZERO,
			fill: None,
			stroke: None,
			opacity: 1.,
			svg_filters: HashMap::new(),
		}
	}
}

impl Style {
	pub fn new(fill: Option<Fill>, stroke: Option<Stroke>) -> Self {
		Self {
			fill,
			stroke,
			..Default::default()
		}
	}

	/// Shallow-merge `update` over this style: fields the update leaves as `None` keep their current value.
	pub fn apply(&mut self, update: StyleUpdate) {
		if let Some(translate) = update.translate {
			self.translate = translate;
		}
		if let Some(fill) = update.fill {
			self.fill = Some(fill);
		}
		if let Some(stroke) = update.stroke {
			self.stroke = Some(stroke);
		}
		if let Some(opacity) = update.opacity {
			self.opacity = opacity;
		}
		if let Some(svg_filters) = update.svg_filters {
			self.svg_filters = svg_filters;
		}
	}
}

/// A partial [Style] used by format operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleUpdate {
	pub translate: Option<DVec2>,
	pub fill: Option<Fill>,
	pub stroke: Option<Stroke>,
	pub opacity: Option<f64>,
	pub svg_filters: Option<HashMap<FilterType, Vec<FilterId>>>,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn apply_preserves_unspecified_fields() {
		let mut style = Style::new(Some(Fill::new(Color::RED)), Some(Stroke::new(Color::BLACK, 2.)));
		style.translate = DVec2::new(4., 9.);

		style.apply(StyleUpdate {
			opacity: Some(0.5),
			..Default::default()
		});

		assert_eq!(style.opacity, 0.5);
		assert_eq!(style.translate, DVec2::new(4., 9.));
		assert_eq!(style.fill, Some(Fill::new(Color::RED)));
		assert_eq!(style.stroke, Some(Stroke::new(Color::BLACK, 2.)));
	}
}

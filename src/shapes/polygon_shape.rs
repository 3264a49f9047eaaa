use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A closed polygon described by its corner points in drawing order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonShape {
	pub points: Vec<DVec2>,
}

impl PolygonShape {
	pub fn new(points: Vec<DVec2>) -> Self {
		Self { points }
	}
}

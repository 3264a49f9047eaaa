use crate::color::Color;
use crate::document::FilterId;
use crate::uuid::generate_uuid;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of effect a [Filter] applies. Shapes key their filter references by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
	Blur,
	DropShadow,
	Offset,
	Saturation,
}

impl fmt::Display for FilterType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			FilterType::Blur => write!(f, "Blur"),
			FilterType::DropShadow => write!(f, "DropShadow"),
			FilterType::Offset => write!(f, "Offset"),
			FilterType::Saturation => write!(f, "Saturation"),
		}
	}
}

/// A named visual effect. Filters live in a page-level table keyed by their own id and are
/// referenced from shapes through `Style::svg_filters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
	Blur { id: FilterId, std_deviation: f64 },
	DropShadow { id: FilterId, dx: f64, dy: f64, std_deviation: f64, color: Color },
	Offset { id: FilterId, dx: f64, dy: f64 },
	Saturation { id: FilterId, amount: f64 },
}

impl Filter {
	pub fn blur(std_deviation: f64) -> Self {
		Filter::Blur { id: generate_uuid(), std_deviation }
	}

	pub fn drop_shadow(dx: f64, dy: f64, std_deviation: f64, color: Color) -> Self {
		Filter::DropShadow {
			id: generate_uuid(),
			dx,
			dy,
			std_deviation,
			color,
		}
	}

	pub fn offset(dx: f64, dy: f64) -> Self {
		Filter::Offset { id: generate_uuid(), dx, dy }
	}

	pub fn saturation(amount: f64) -> Self {
		Filter::Saturation { id: generate_uuid(), amount }
	}

	pub fn id(&self) -> FilterId {
		match self {
			Filter::Blur { id, .. } | Filter::DropShadow { id, .. } | Filter::Offset { id, .. } | Filter::Saturation { id, .. } => *id,
		}
	}

	pub fn filter_type(&self) -> FilterType {
		self.into()
	}
}

impl From<&Filter> for FilterType {
	fn from(filter: &Filter) -> Self {
		match filter {
			Filter::Blur { .. } => FilterType::Blur,
			Filter::DropShadow { .. } => FilterType::DropShadow,
			Filter::Offset { .. } => FilterType::Offset,
			Filter::Saturation { .. } => FilterType::Saturation,
		}
	}
}

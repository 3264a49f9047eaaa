pub mod style;

pub mod ellipse_shape;
pub mod group_shape;
pub mod image_shape;
pub mod polygon_shape;
pub mod rect_shape;
pub mod text_shape;

pub use ellipse_shape::EllipseShape;
pub use group_shape::GroupShape;
pub use image_shape::ImageShape;
pub use polygon_shape::PolygonShape;
pub use rect_shape::RectShape;
pub use text_shape::TextShape;

use crate::document::ShapeId;
use crate::error::DocumentError;
use style::Style;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDataType {
	Rect(RectShape),
	Ellipse(EllipseShape),
	Polygon(PolygonShape),
	Text(TextShape),
	Image(ImageShape),
	Group(GroupShape),
}

impl ShapeDataType {
	pub fn as_group(&self) -> Result<&GroupShape, DocumentError> {
		match self {
			ShapeDataType::Group(group) => Ok(group),
			_ => Err(DocumentError::NotAGroup),
		}
	}

	pub fn as_group_mut(&mut self) -> Result<&mut GroupShape, DocumentError> {
		match self {
			ShapeDataType::Group(group) => Ok(group),
			_ => Err(DocumentError::NotAGroup),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeDataTypeDiscriminant {
	Rect,
	Ellipse,
	Polygon,
	Text,
	Image,
	Group,
}

impl fmt::Display for ShapeDataTypeDiscriminant {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ShapeDataTypeDiscriminant::Rect => write!(f, "Rect"),
			ShapeDataTypeDiscriminant::Ellipse => write!(f, "Ellipse"),
			ShapeDataTypeDiscriminant::Polygon => write!(f, "Polygon"),
			ShapeDataTypeDiscriminant::Text => write!(f, "Text"),
			ShapeDataTypeDiscriminant::Image => write!(f, "Image"),
			ShapeDataTypeDiscriminant::Group => write!(f, "Group"),
		}
	}
}

impl From<&ShapeDataType> for ShapeDataTypeDiscriminant {
	fn from(data: &ShapeDataType) -> Self {
		use ShapeDataType::*;

		match data {
			Rect(_) => ShapeDataTypeDiscriminant::Rect,
			Ellipse(_) => ShapeDataTypeDiscriminant::Ellipse,
			Polygon(_) => ShapeDataTypeDiscriminant::Polygon,
			Text(_) => ShapeDataTypeDiscriminant::Text,
			Image(_) => ShapeDataTypeDiscriminant::Image,
			Group(_) => ShapeDataTypeDiscriminant::Group,
		}
	}
}

/// A single variant-payload field update, applied by format operations.
/// Applying a property to a shape variant that does not carry it is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeProperty {
	Name(String),
	X(f64),
	Y(f64),
	Width(f64),
	Height(f64),
	RadiusX(f64),
	RadiusY(f64),
	Points(Vec<DVec2>),
	Text(String),
	FontSize(f64),
	FontFamily(String),
	Href(String),
}

impl ShapeProperty {
	pub fn name(&self) -> &'static str {
		match self {
			ShapeProperty::Name(_) => "name",
			ShapeProperty::X(_) => "x",
			ShapeProperty::Y(_) => "y",
			ShapeProperty::Width(_) => "width",
			ShapeProperty::Height(_) => "height",
			ShapeProperty::RadiusX(_) => "radius_x",
			ShapeProperty::RadiusY(_) => "radius_y",
			ShapeProperty::Points(_) => "points",
			ShapeProperty::Text(_) => "text",
			ShapeProperty::FontSize(_) => "font_size",
			ShapeProperty::FontFamily(_) => "font_family",
			ShapeProperty::Href(_) => "href",
		}
	}
}

/// A drawable entity: the shared envelope (id, name, visibility, style) plus variant-specific
/// geometry. `visible` marks whether the shape is painted as a standalone target; shapes folded
/// into a group keep their table entry but are painted through the group instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
	pub id: ShapeId,
	pub name: Option<String>,
	pub visible: bool,
	pub style: Style,
	pub data: ShapeDataType,
}

impl Shape {
	pub fn new(id: ShapeId, data: ShapeDataType, style: Style) -> Self {
		Self {
			id,
			name: None,
			visible: true,
			style,
			data,
		}
	}

	pub fn set_name(&mut self, name: String) {
		self.name = if name.is_empty() { None } else { Some(name) };
	}

	/// Apply one variant-payload update. Fails with [DocumentError::InvalidProperty] when the
	/// property does not exist on this shape's variant, leaving the shape untouched.
	pub fn set_property(&mut self, property: &ShapeProperty) -> Result<(), DocumentError> {
		use ShapeDataType::*;
		use ShapeProperty as Property;

		// The name lives on the shared envelope, so every variant accepts it
		if let Property::Name(name) = property {
			self.set_name(name.clone());
			return Ok(());
		}

		match (property, &mut self.data) {
			(Property::X(x), Rect(rect)) => rect.x = *x,
			(Property::X(x), Ellipse(ellipse)) => ellipse.x = *x,
			(Property::X(x), Text(text)) => text.x = *x,
			(Property::X(x), Image(image)) => image.x = *x,
			(Property::Y(y), Rect(rect)) => rect.y = *y,
			(Property::Y(y), Ellipse(ellipse)) => ellipse.y = *y,
			(Property::Y(y), Text(text)) => text.y = *y,
			(Property::Y(y), Image(image)) => image.y = *y,
			(Property::Width(width), Rect(rect)) => rect.width = *width,
			(Property::Width(width), Image(image)) => image.width = *width,
			(Property::Height(height), Rect(rect)) => rect.height = *height,
			(Property::Height(height), Image(image)) => image.height = *height,
			(Property::RadiusX(radius), Rect(rect)) => rect.radius_x = *radius,
			(Property::RadiusX(radius), Ellipse(ellipse)) => ellipse.radius_x = *radius,
			(Property::RadiusY(radius), Rect(rect)) => rect.radius_y = *radius,
			(Property::RadiusY(radius), Ellipse(ellipse)) => ellipse.radius_y = *radius,
			(Property::Points(points), Polygon(polygon)) => polygon.points = points.clone(),
			(Property::Text(content), Text(text)) => text.text = content.clone(),
			(Property::FontSize(size), Text(text)) => text.font_size = *size,
			(Property::FontFamily(family), Text(text)) => text.font_family = family.clone(),
			(Property::Href(href), Image(image)) => image.href = href.clone(),
			(property, data) => {
				return Err(DocumentError::InvalidProperty {
					property: property.name(),
					shape_type: (&*data).into(),
				});
			}
		}
		Ok(())
	}
}

use crate::document::ShapeId;
use crate::shapes::ShapeDataTypeDiscriminant;

use thiserror::Error;

/// A set of different errors that can occur when using this crate.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentError {
	#[error("page index {0} is out of bounds")]
	PageNotFound(usize),

	#[error("shape {0} was not found in the page's shape table")]
	ShapeNotFound(ShapeId),

	#[error("the shape is not a group")]
	NotAGroup,

	#[error("the property `{property}` does not apply to a {shape_type} shape")]
	InvalidProperty {
		property: &'static str,
		shape_type: ShapeDataTypeDiscriminant,
	},

	#[error("inserting or removing a page at a specific index is not supported")]
	IndexedPageEditsUnsupported,

	#[error("invalid document file: {0}")]
	InvalidFile(String),
}

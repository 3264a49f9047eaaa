use crate::document::ShapeId;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes which part of the document an operation changed, so that consumers relying on
/// identity-based change detection know exactly what to refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DocumentResponse {
	/// Triggers a re-render of the entire document.
	DocumentChanged,
	/// The page-level state (filter table, page list) at this index changed.
	PageChanged { index: usize },
	CreatedShape { id: ShapeId },
	DeletedShape { id: ShapeId },
	ShapeChanged { id: ShapeId },
	SelectionChanged,
	ClipboardChanged,
	PaletteChanged,
}

impl fmt::Display for DocumentResponse {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			DocumentResponse::DocumentChanged => write!(f, "DocumentChanged"),
			DocumentResponse::PageChanged { .. } => write!(f, "PageChanged"),
			DocumentResponse::CreatedShape { .. } => write!(f, "CreatedShape"),
			DocumentResponse::DeletedShape { .. } => write!(f, "DeletedShape"),
			DocumentResponse::ShapeChanged { .. } => write!(f, "ShapeChanged"),
			DocumentResponse::SelectionChanged => write!(f, "SelectionChanged"),
			DocumentResponse::ClipboardChanged => write!(f, "ClipboardChanged"),
			DocumentResponse::PaletteChanged => write!(f, "PaletteChanged"),
		}
	}
}

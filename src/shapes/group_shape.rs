use crate::document::ShapeId;

use serde::{Deserialize, Serialize};

/// A group's payload is an ordered list of child shape ids, the only nesting mechanism in the
/// model. The referenced shapes stay in the owning page's flat table; a group never owns its
/// children directly, which keeps the model acyclic and serializable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupShape {
	pub children: Vec<ShapeId>,
}

impl GroupShape {
	pub fn new(children: Vec<ShapeId>) -> Self {
		Self { children }
	}
}

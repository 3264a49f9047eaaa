use crate::color::Color;
use crate::error::DocumentError;
use crate::filters::Filter;
use crate::operation::Operation;
use crate::response::DocumentResponse;
use crate::shapes::style::{Gradient, Style};
use crate::shapes::{GroupShape, Shape, ShapeDataType};
use crate::uuid::generate_uuid;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A number that identifies a shape. Unique for the lifetime of the process.
pub type ShapeId = u64;
/// A number that identifies a page.
pub type PageId = u64;
/// A number that identifies a filter in a page's filter table.
pub type FilterId = u64;
/// A number that identifies an entry in a document-level palette.
pub type PaletteId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolType {
	Select,
	Pan,
	Rectangle,
	Ellipse,
	Polygon,
	Text,
	Image,
}

impl Default for ToolType {
	fn default() -> Self {
		ToolType::Pan
	}
}

/// Screen-space state of the canvas context menu. `clipboard_anchor` is the menu position
/// recorded at the last copy/cut; paste subtracts it from the current position to offset the
/// pasted shapes. It is only meaningful between a copy/cut and the following paste.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextMenu {
	pub show: bool,
	pub position: DVec2,
	pub clipboard_anchor: DVec2,
}

/// One canvas of the document: a flat shape table, the selection, the paint order and the
/// page's filter table. Hierarchy never lives here; groups reference child ids into `shapes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
	pub id: PageId,
	pub shapes: HashMap<ShapeId, Shape>,
	pub active_shapes: Vec<ShapeId>,
	pub render_tree: Vec<ShapeId>,
	pub filters: HashMap<FilterId, Filter>,
}

impl Default for Page {
	fn default() -> Self {
		Self::new()
	}
}

impl Page {
	pub fn new() -> Self {
		Self {
			id: generate_uuid(),
			shapes: HashMap::new(),
			active_shapes: Vec::new(),
			render_tree: Vec::new(),
			filters: HashMap::new(),
		}
	}

	pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
		self.shapes.get(&id)
	}

	pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
		self.shapes.get_mut(&id)
	}

	fn first_missing_shape(&self, ids: &[ShapeId]) -> Option<ShapeId> {
		ids.iter().copied().find(|id| !self.shapes.contains_key(id))
	}

	/// Deep copy with identity rewrite: the returned shape and every descendant get freshly
	/// minted ids, so no id from the source subtree is ever reused. Group children are resolved
	/// against this page's shape table and the cloned descendants are appended to `cloned`;
	/// nothing is inserted into the page.
	pub fn deep_clone_shape(&self, source: &Shape, cloned: &mut Vec<Shape>) -> Result<Shape, DocumentError> {
		let mut shape = source.clone();
		shape.id = generate_uuid();
		if let ShapeDataType::Group(group) = &mut shape.data {
			// Child lists cannot cycle: a group's id is always minted after its children exist.
			for child_id in &mut group.children {
				let original = self.shapes.get(child_id).ok_or(DocumentError::ShapeNotFound(*child_id))?;
				let child = self.deep_clone_shape(original, cloned)?;
				*child_id = child.id;
				cloned.push(child);
			}
		}
		Ok(shape)
	}
}

/// The canonical model of an open document: its pages, the single clipboard slot, the global
/// palettes and the transient UI state (active tool, hover, context menu).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
	pub pages: Vec<Page>,
	pub active_page_index: usize,
	pub active_tool: ToolType,
	pub hovered_shape_id: Option<ShapeId>,
	pub context_menu: ContextMenu,
	pub clipboard: Vec<Shape>,
	pub colors: HashMap<PaletteId, Color>,
	pub gradients: HashMap<PaletteId, Gradient>,
	pub images: HashMap<PaletteId, String>,
}

impl Default for Document {
	fn default() -> Self {
		Self {
			pages: vec![Page::new()],
			active_page_index: 0,
			active_tool: ToolType::default(),
			hovered_shape_id: None,
			context_menu: ContextMenu::default(),
			clipboard: Vec::new(),
			colors: HashMap::new(),
			gradients: HashMap::new(),
			images: HashMap::new(),
		}
	}
}

impl Document {
	/// Deserialize a document from the snapshot format produced by [Self::serialize_document].
	pub fn with_content(serialized_content: &str) -> Result<Self, DocumentError> {
		serde_json::from_str(serialized_content).map_err(|e| DocumentError::InvalidFile(e.to_string()))
	}

	pub fn serialize_document(&self) -> String {
		let val = serde_json::to_string(self);
		// We fully own the document schema, so this serialization can't fail
		val.expect("Failed to serialize document")
	}

	pub fn active_page(&self) -> Result<&Page, DocumentError> {
		self.pages.get(self.active_page_index).ok_or(DocumentError::PageNotFound(self.active_page_index))
	}

	pub fn active_page_mut(&mut self) -> Result<&mut Page, DocumentError> {
		let index = self.active_page_index;
		self.pages.get_mut(index).ok_or(DocumentError::PageNotFound(index))
	}

	/// Mutate the document by applying the `operation` to it. Returned responses tell consumers
	/// which containers changed; `None` means only transient UI state was touched.
	///
	/// Every operation is atomic: it validates before it mutates (or stages its edits aside),
	/// so an `Err` return leaves the document exactly as it was.
	pub fn handle_operation(&mut self, operation: Operation) -> Result<Option<Vec<DocumentResponse>>, DocumentError> {
		use DocumentResponse::*;

		let responses = match operation {
			Operation::SetActivePage { index } => {
				if index >= self.pages.len() {
					return Err(DocumentError::PageNotFound(index));
				}
				self.active_page_index = index;
				Some(vec![DocumentChanged])
			}
			Operation::AddPage { index } => {
				// The index-targeted form is not supported; only appending is.
				if index.is_some() {
					return Err(DocumentError::IndexedPageEditsUnsupported);
				}
				self.pages.push(Page::new());
				self.active_page_index = self.pages.len() - 1;
				Some(vec![DocumentChanged, PageChanged { index: self.active_page_index }])
			}
			Operation::RemovePage { index } => {
				if index.is_some() {
					return Err(DocumentError::IndexedPageEditsUnsupported);
				}
				// Drops the last page no matter which page is active. Removing the final page is
				// allowed; page-targeted operations on the empty document fail with PageNotFound.
				self.pages.pop();
				self.active_page_index = self.pages.len().saturating_sub(1);
				Some(vec![DocumentChanged])
			}
			Operation::AddShape { data, style } => {
				let page = self.active_page_mut()?;
				if let ShapeDataType::Group(group) = &data {
					if let Some(missing) = page.first_missing_shape(&group.children) {
						return Err(DocumentError::ShapeNotFound(missing));
					}
				}
				let id = generate_uuid();
				page.shapes.insert(id, Shape::new(id, data, style));
				page.render_tree.push(id);
				page.active_shapes = vec![id];
				Some(vec![DocumentChanged, CreatedShape { id }, SelectionChanged])
			}
			Operation::TranslateSelection { delta } => {
				let page = self.active_page_mut()?;
				if let Some(missing) = page.first_missing_shape(&page.active_shapes) {
					return Err(DocumentError::ShapeNotFound(missing));
				}
				let mut responses = vec![DocumentChanged];
				for id in page.active_shapes.clone() {
					if let Some(shape) = page.shapes.get_mut(&id) {
						shape.style.translate += delta;
						responses.push(ShapeChanged { id });
					}
				}
				Some(responses)
			}
			Operation::SetActiveTool { tool } => {
				self.active_tool = tool;
				None
			}
			Operation::SetHoveredShape { id } => {
				// Display-only; the hovered id is not required to resolve to a live shape.
				self.hovered_shape_id = id;
				None
			}
			Operation::SetSelection { shapes } => {
				let page = self.active_page_mut()?;
				if let Some(missing) = page.first_missing_shape(&shapes) {
					return Err(DocumentError::ShapeNotFound(missing));
				}
				page.active_shapes = shapes;
				Some(vec![SelectionChanged])
			}
			Operation::ToggleContextMenu { position } => {
				match position {
					Some(position) => {
						self.context_menu.show = true;
						self.context_menu.position = position;
					}
					// Hiding resets the menu position but keeps the clipboard anchor for the next paste.
					None => {
						self.context_menu.show = false;
						self.context_menu.position = DVec2::ZERO;
					}
				}
				None
			}
			Operation::CutSelection => {
				let anchor = self.context_menu.position;
				let page = self.active_page_mut()?;
				let mut clipboard = Vec::new();
				let mut responses = vec![DocumentChanged, SelectionChanged, ClipboardChanged];
				for id in std::mem::take(&mut page.active_shapes) {
					match page.shapes.remove(&id) {
						Some(shape) => {
							clipboard.push(shape);
							responses.push(DeletedShape { id });
						}
						None => warn!("Could not cut selected shape {id}: not in the shape table"),
					}
				}
				self.clipboard = clipboard;
				self.context_menu.clipboard_anchor = anchor;
				Some(responses)
			}
			Operation::CopySelection => {
				let page = self.active_page()?;
				let mut clipboard = Vec::with_capacity(page.active_shapes.len());
				for id in &page.active_shapes {
					match page.shapes.get(id) {
						Some(shape) => clipboard.push(shape.clone()),
						None => warn!("Could not copy selected shape {id}: not in the shape table"),
					}
				}
				self.clipboard = clipboard;
				self.context_menu.clipboard_anchor = self.context_menu.position;
				Some(vec![ClipboardChanged])
			}
			Operation::Paste => {
				let offset = self.context_menu.position - self.context_menu.clipboard_anchor;
				let page = self.active_page()?;
				let mut materialized = Vec::new();
				let mut pasted = Vec::with_capacity(self.clipboard.len());
				for item in &self.clipboard {
					let mut shape = page.deep_clone_shape(item, &mut materialized)?;
					shape.style.translate = item.style.translate + offset;
					pasted.push(shape.id);
					materialized.push(shape);
				}

				// Cloning only read the document, so inserting here keeps a failed paste from
				// leaving partial state behind. Only the top-level shapes become the selection.
				let page = self.active_page_mut()?;
				let mut responses = vec![DocumentChanged, SelectionChanged];
				for shape in materialized {
					responses.push(CreatedShape { id: shape.id });
					page.shapes.insert(shape.id, shape);
				}
				page.active_shapes = pasted;
				Some(responses)
			}
			Operation::DeleteSelection => {
				let page = self.active_page_mut()?;
				let mut responses = vec![DocumentChanged, SelectionChanged];
				// Stale ids stay behind in the render tree and in any group that referenced a
				// deleted shape; consumers skip ids that no longer resolve.
				for id in std::mem::take(&mut page.active_shapes) {
					if page.shapes.remove(&id).is_some() {
						responses.push(DeletedShape { id });
					}
				}
				Some(responses)
			}
			Operation::GroupSelection => {
				let page = self.active_page_mut()?;
				if let Some(missing) = page.first_missing_shape(&page.active_shapes) {
					return Err(DocumentError::ShapeNotFound(missing));
				}
				let children = std::mem::take(&mut page.active_shapes);
				let mut responses = vec![DocumentChanged];
				for id in &children {
					if let Some(shape) = page.shapes.get_mut(id) {
						// Members stay in the table but stop being standalone paint targets.
						shape.visible = false;
						responses.push(ShapeChanged { id: *id });
					}
				}
				let group_id = generate_uuid();
				let group = Shape::new(group_id, ShapeDataType::Group(GroupShape::new(children)), Style::default());
				page.shapes.insert(group_id, group);
				page.active_shapes = vec![group_id];
				responses.extend([CreatedShape { id: group_id }, SelectionChanged]);
				Some(responses)
			}
			Operation::SetShapeName { id, name } => {
				let page = self.active_page_mut()?;
				let shape = page.shapes.get_mut(&id).ok_or(DocumentError::ShapeNotFound(id))?;
				shape.set_name(name);
				Some(vec![ShapeChanged { id }])
			}
			Operation::FormatShape { id, style, properties } => {
				let page = self.active_page_mut()?;
				let shape = page.shape(id).ok_or(DocumentError::ShapeNotFound(id))?;
				// Stage the edit on a copy so a rejected property leaves the shape untouched.
				let mut updated = shape.clone();
				if let Some(update) = style {
					updated.style.apply(update);
				}
				for property in &properties {
					updated.set_property(property)?;
				}
				page.shapes.insert(id, updated);
				Some(vec![DocumentChanged, ShapeChanged { id }])
			}
			Operation::AddFilter { filter } => {
				let index = self.active_page_index;
				let page = self.active_page_mut()?;
				page.filters.insert(filter.id(), filter);
				Some(vec![PageChanged { index }])
			}
			Operation::EditFilter { id, filter } => {
				// Upserts without an existence check, keyed by the targeted id.
				let index = self.active_page_index;
				let page = self.active_page_mut()?;
				page.filters.insert(id, filter);
				Some(vec![PageChanged { index }])
			}
			Operation::RemoveFilter { shape, filter_type, filter } => {
				// The one bidirectionally maintained relation in the model: the filter leaves the
				// page table and the referencing shape's filter list in the same operation.
				let index = self.active_page_index;
				let page = self.active_page_mut()?;
				let referencing = page.shapes.get_mut(&shape).ok_or(DocumentError::ShapeNotFound(shape))?;
				if let Some(references) = referencing.style.svg_filters.get_mut(&filter_type) {
					references.retain(|id| *id != filter);
					if references.is_empty() {
						referencing.style.svg_filters.remove(&filter_type);
					}
				}
				page.filters.remove(&filter);
				Some(vec![PageChanged { index }, ShapeChanged { id: shape }])
			}
			Operation::AddPaletteColor { color } => {
				self.colors.insert(generate_uuid(), color);
				Some(vec![PaletteChanged])
			}
			Operation::EditPaletteColor { id, color } => {
				self.colors.insert(id, color);
				Some(vec![PaletteChanged])
			}
			Operation::RemovePaletteColor { id } => {
				self.colors.remove(&id);
				Some(vec![PaletteChanged])
			}
			Operation::AddPaletteGradient { gradient } => {
				self.gradients.insert(generate_uuid(), gradient);
				Some(vec![PaletteChanged])
			}
			Operation::EditPaletteGradient { id, gradient } => {
				self.gradients.insert(id, gradient);
				Some(vec![PaletteChanged])
			}
			Operation::RemovePaletteGradient { id } => {
				self.gradients.remove(&id);
				Some(vec![PaletteChanged])
			}
		};
		Ok(responses)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::color::Color;
	use crate::filters::FilterType;
	use crate::shapes::style::{Fill, StyleUpdate};
	use crate::shapes::{EllipseShape, RectShape, ShapeProperty, TextShape};

	fn add_shape(document: &mut Document, data: ShapeDataType, translate: DVec2) -> ShapeId {
		let style = Style {
			translate,
			..Default::default()
		};
		document.handle_operation(Operation::AddShape { data, style }).unwrap();
		document.active_page().unwrap().active_shapes[0]
	}

	fn add_rect(document: &mut Document, translate: DVec2) -> ShapeId {
		add_shape(document, ShapeDataType::Rect(RectShape::new(0., 0., 100., 50.)), translate)
	}

	fn add_ellipse(document: &mut Document, translate: DVec2) -> ShapeId {
		add_shape(document, ShapeDataType::Ellipse(EllipseShape::circle(0., 0., 25.)), translate)
	}

	fn select(document: &mut Document, shapes: Vec<ShapeId>) {
		document.handle_operation(Operation::SetSelection { shapes }).unwrap();
	}

	fn open_menu(document: &mut Document, x: f64, y: f64) {
		document
			.handle_operation(Operation::ToggleContextMenu {
				position: Some(DVec2::new(x, y)),
			})
			.unwrap();
	}

	#[test]
	fn copy_paste_at_unchanged_menu_position() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::new(10., 10.));

		select(&mut document, vec![rect]);
		open_menu(&mut document, 25., 25.);
		document.handle_operation(Operation::CopySelection).unwrap();
		document.handle_operation(Operation::Paste).unwrap();

		let page = document.active_page().unwrap();
		assert_eq!(page.shapes.len(), 2);

		let pasted = page.active_shapes[0];
		assert_ne!(pasted, rect);
		assert_eq!(page.shape(pasted).unwrap().style.translate, DVec2::new(10., 10.));

		// The original and the clipboard snapshot are untouched
		assert_eq!(page.shape(rect).unwrap().style.translate, DVec2::new(10., 10.));
		assert_eq!(document.clipboard.len(), 1);
		assert_eq!(document.clipboard[0].id, rect);
	}

	#[test]
	fn cut_then_paste_reinstates_under_a_new_id() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::new(3., 4.));

		select(&mut document, vec![rect]);
		document.handle_operation(Operation::CutSelection).unwrap();

		{
			let page = document.active_page().unwrap();
			assert!(page.shapes.is_empty());
			assert!(page.active_shapes.is_empty());
			assert_eq!(document.clipboard.len(), 1);
			assert_eq!(document.clipboard[0].id, rect);
		}

		document.handle_operation(Operation::Paste).unwrap();

		let page = document.active_page().unwrap();
		assert_eq!(page.shapes.len(), 1);
		let pasted = page.active_shapes[0];
		assert_ne!(pasted, rect);
		assert_eq!(page.shape(pasted).unwrap().style.translate, DVec2::new(3., 4.));
	}

	#[test]
	fn paste_is_repeatable_and_pastes_never_alias() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::ZERO);

		select(&mut document, vec![rect]);
		document.handle_operation(Operation::CopySelection).unwrap();
		document.handle_operation(Operation::Paste).unwrap();
		let first = document.active_page().unwrap().active_shapes[0];
		document.handle_operation(Operation::Paste).unwrap();
		let second = document.active_page().unwrap().active_shapes[0];

		assert_ne!(first, second);
		assert_ne!(first, rect);
		assert_ne!(second, rect);

		// Mutating one paste affects neither the other paste nor the clipboard
		select(&mut document, vec![first]);
		document
			.handle_operation(Operation::TranslateSelection { delta: DVec2::new(7., 0.) })
			.unwrap();

		let page = document.active_page().unwrap();
		assert_eq!(page.shape(first).unwrap().style.translate, DVec2::new(7., 0.));
		assert_eq!(page.shape(second).unwrap().style.translate, DVec2::ZERO);
		assert_eq!(document.clipboard[0].style.translate, DVec2::ZERO);
	}

	#[test]
	fn pasting_a_group_mints_fresh_ids_at_every_depth() {
		let mut document = Document::default();
		let a = add_rect(&mut document, DVec2::ZERO);
		let b = add_ellipse(&mut document, DVec2::ZERO);

		select(&mut document, vec![a, b]);
		document.handle_operation(Operation::GroupSelection).unwrap();
		let inner = document.active_page().unwrap().active_shapes[0];

		let c = add_rect(&mut document, DVec2::ZERO);
		select(&mut document, vec![inner, c]);
		document.handle_operation(Operation::GroupSelection).unwrap();
		let outer = document.active_page().unwrap().active_shapes[0];

		let ids_before: Vec<ShapeId> = document.active_page().unwrap().shapes.keys().copied().collect();

		select(&mut document, vec![outer]);
		document.handle_operation(Operation::CopySelection).unwrap();
		document.handle_operation(Operation::Paste).unwrap();

		let page = document.active_page().unwrap();
		// The whole subtree (outer, inner, a, b, c) was materialized once more
		assert_eq!(page.shapes.len(), ids_before.len() + 5);

		let pasted_outer = page.active_shapes[0];
		assert_ne!(pasted_outer, outer);
		let pasted_outer_children = &page.shape(pasted_outer).unwrap().data.as_group().unwrap().children;
		assert_eq!(pasted_outer_children.len(), 2);
		for child in pasted_outer_children {
			assert!(!ids_before.contains(child));
		}

		// The nested group was re-identified recursively
		let pasted_inner = pasted_outer_children[0];
		let pasted_inner_children = &page.shape(pasted_inner).unwrap().data.as_group().unwrap().children;
		assert_eq!(pasted_inner_children.len(), 2);
		for child in pasted_inner_children {
			assert!(!ids_before.contains(child));
			assert!(page.shapes.contains_key(child));
		}

		// The originals kept their ids and children
		assert_eq!(page.shape(outer).unwrap().data.as_group().unwrap().children, vec![inner, c]);
		assert_eq!(page.shape(inner).unwrap().data.as_group().unwrap().children, vec![a, b]);
	}

	#[test]
	fn paste_with_empty_clipboard_clears_the_selection() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::ZERO);

		select(&mut document, vec![rect]);
		document.handle_operation(Operation::Paste).unwrap();

		let page = document.active_page().unwrap();
		assert_eq!(page.shapes.len(), 1);
		assert!(page.active_shapes.is_empty());
	}

	#[test]
	fn clipboard_anchor_survives_closing_the_menu() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::new(10., 10.));

		select(&mut document, vec![rect]);
		open_menu(&mut document, 5., 5.);
		document.handle_operation(Operation::CopySelection).unwrap();
		document.handle_operation(Operation::ToggleContextMenu { position: None }).unwrap();
		assert!(!document.context_menu.show);

		open_menu(&mut document, 8., 9.);
		document.handle_operation(Operation::Paste).unwrap();

		let page = document.active_page().unwrap();
		let pasted = page.active_shapes[0];
		assert_eq!(page.shape(pasted).unwrap().style.translate, DVec2::new(13., 14.));
	}

	#[test]
	fn context_menu_offset_is_applied_end_to_end() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::new(10., 10.));

		select(&mut document, vec![rect]);
		open_menu(&mut document, 0., 0.);
		document.handle_operation(Operation::CopySelection).unwrap();
		open_menu(&mut document, 50., 30.);
		document.handle_operation(Operation::Paste).unwrap();

		let page = document.active_page().unwrap();
		assert_eq!(page.shapes.len(), 2);
		let pasted = page.active_shapes[0];
		assert_eq!(page.shape(pasted).unwrap().style.translate, DVec2::new(60., 40.));
		assert_eq!(page.shape(rect).unwrap().style.translate, DVec2::new(10., 10.));
		assert_eq!(document.clipboard[0].style.translate, DVec2::new(10., 10.));
	}

	#[test]
	fn group_selection_hides_members_and_selects_the_group() {
		let mut document = Document::default();
		let a = add_rect(&mut document, DVec2::ZERO);
		let b = add_ellipse(&mut document, DVec2::ZERO);

		select(&mut document, vec![a, b]);
		document.handle_operation(Operation::GroupSelection).unwrap();

		let page = document.active_page().unwrap();
		assert_eq!(page.active_shapes.len(), 1);
		let group = page.active_shapes[0];
		assert_eq!(page.shape(group).unwrap().data.as_group().unwrap().children, vec![a, b]);

		assert!(!page.shape(a).unwrap().visible);
		assert!(!page.shape(b).unwrap().visible);
		assert_eq!(page.shapes.len(), 3);
	}

	#[test]
	fn removing_a_filter_updates_both_sides_of_the_relation() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::ZERO);

		let filter = Filter::blur(4.);
		let filter_id = filter.id();
		document.handle_operation(Operation::AddFilter { filter }).unwrap();
		document
			.handle_operation(Operation::FormatShape {
				id: rect,
				style: Some(StyleUpdate {
					svg_filters: Some(HashMap::from([(FilterType::Blur, vec![filter_id])])),
					..Default::default()
				}),
				properties: Vec::new(),
			})
			.unwrap();

		assert_eq!(document.active_page().unwrap().filters.len(), 1);

		document
			.handle_operation(Operation::RemoveFilter {
				shape: rect,
				filter_type: FilterType::Blur,
				filter: filter_id,
			})
			.unwrap();

		let page = document.active_page().unwrap();
		assert!(page.filters.is_empty());
		// The list emptied, so the whole FilterType key is gone
		assert!(!page.shape(rect).unwrap().style.svg_filters.contains_key(&FilterType::Blur));
	}

	#[test]
	fn deleting_the_selection_leaves_stale_render_tree_entries() {
		let mut document = Document::default();
		let a = add_rect(&mut document, DVec2::ZERO);
		let b = add_rect(&mut document, DVec2::ZERO);

		select(&mut document, vec![a, b]);
		document.handle_operation(Operation::DeleteSelection).unwrap();

		let page = document.active_page().unwrap();
		assert!(page.shapes.is_empty());
		assert!(page.active_shapes.is_empty());
		assert_eq!(page.render_tree, vec![a, b]);

		// Deleting again with nothing selected is harmless
		document.handle_operation(Operation::DeleteSelection).unwrap();
	}

	#[test]
	fn format_shape_rejects_foreign_properties_atomically() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::new(1., 2.));

		let result = document.handle_operation(Operation::FormatShape {
			id: rect,
			style: Some(StyleUpdate {
				translate: Some(DVec2::new(99., 99.)),
				..Default::default()
			}),
			properties: vec![ShapeProperty::Text("not a text shape".to_string())],
		});

		assert_eq!(
			result,
			Err(DocumentError::InvalidProperty {
				property: "text",
				shape_type: crate::shapes::ShapeDataTypeDiscriminant::Rect,
			})
		);

		// The failed operation left the shape untouched, style update included
		let page = document.active_page().unwrap();
		assert_eq!(page.shape(rect).unwrap().style.translate, DVec2::new(1., 2.));
	}

	#[test]
	fn format_shape_merges_style_and_applies_properties() {
		let mut document = Document::default();
		let text = add_shape(&mut document, ShapeDataType::Text(TextShape::new(0., 0., "hello")), DVec2::new(5., 5.));

		document
			.handle_operation(Operation::FormatShape {
				id: text,
				style: Some(StyleUpdate {
					fill: Some(Fill::new(Color::RED)),
					opacity: Some(0.5),
					..Default::default()
				}),
				properties: vec![ShapeProperty::FontSize(32.), ShapeProperty::Name("Title".to_string())],
			})
			.unwrap();

		let page = document.active_page().unwrap();
		let shape = page.shape(text).unwrap();
		assert_eq!(shape.style.translate, DVec2::new(5., 5.));
		assert_eq!(shape.style.fill, Some(Fill::new(Color::RED)));
		assert_eq!(shape.style.opacity, 0.5);
		assert_eq!(shape.name.as_deref(), Some("Title"));
		match &shape.data {
			ShapeDataType::Text(text) => assert_eq!(text.font_size, 32.),
			data => panic!("expected a text shape, got {:?}", data),
		}
	}

	#[test]
	fn renaming_with_an_empty_string_clears_the_name() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::ZERO);

		document
			.handle_operation(Operation::SetShapeName {
				id: rect,
				name: "Header".to_string(),
			})
			.unwrap();
		assert_eq!(document.active_page().unwrap().shape(rect).unwrap().name.as_deref(), Some("Header"));

		document
			.handle_operation(Operation::SetShapeName {
				id: rect,
				name: String::new(),
			})
			.unwrap();
		assert_eq!(document.active_page().unwrap().shape(rect).unwrap().name, None);
	}

	#[test]
	fn pages_append_and_remove_from_the_end() {
		let mut document = Document::default();
		add_rect(&mut document, DVec2::ZERO);

		document.handle_operation(Operation::AddPage { index: None }).unwrap();
		assert_eq!(document.pages.len(), 2);
		assert_eq!(document.active_page_index, 1);
		assert!(document.active_page().unwrap().shapes.is_empty());

		// RemovePage drops the last page even when an earlier page is active
		document.handle_operation(Operation::SetActivePage { index: 0 }).unwrap();
		document.handle_operation(Operation::RemovePage { index: None }).unwrap();
		assert_eq!(document.pages.len(), 1);
		assert_eq!(document.active_page_index, 0);
		assert_eq!(document.active_page().unwrap().shapes.len(), 1);

		// Removing the final page leaves an empty document whose page operations fail
		document.handle_operation(Operation::RemovePage { index: None }).unwrap();
		assert!(document.pages.is_empty());
		let result = document.handle_operation(Operation::DeleteSelection);
		assert_eq!(result, Err(DocumentError::PageNotFound(0)));
	}

	#[test]
	fn indexed_page_edits_fail_loudly() {
		let mut document = Document::default();

		assert_eq!(
			document.handle_operation(Operation::AddPage { index: Some(0) }),
			Err(DocumentError::IndexedPageEditsUnsupported)
		);
		assert_eq!(
			document.handle_operation(Operation::RemovePage { index: Some(0) }),
			Err(DocumentError::IndexedPageEditsUnsupported)
		);
		assert_eq!(document.pages.len(), 1);
	}

	#[test]
	fn selection_must_reference_live_shapes() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::ZERO);

		assert_eq!(
			document.handle_operation(Operation::SetSelection { shapes: vec![rect, 123] }),
			Err(DocumentError::ShapeNotFound(123))
		);
		// The failed operation did not clobber the previous selection
		assert_eq!(document.active_page().unwrap().active_shapes, vec![rect]);
	}

	#[test]
	fn tool_and_hover_changes_touch_no_document_state() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::ZERO);
		let before = document.active_page().unwrap().clone();

		let responses = document
			.handle_operation(Operation::SetActiveTool { tool: ToolType::Select })
			.unwrap();
		assert_eq!(responses, None);
		assert_eq!(document.active_tool, ToolType::Select);

		let responses = document.handle_operation(Operation::SetHoveredShape { id: Some(rect) }).unwrap();
		assert_eq!(responses, None);
		assert_eq!(document.hovered_shape_id, Some(rect));

		assert_eq!(*document.active_page().unwrap(), before);
	}

	#[test]
	fn palette_entries_are_minted_edited_and_removed_by_id() {
		let mut document = Document::default();

		document
			.handle_operation(Operation::AddPaletteColor { color: Color::RED })
			.unwrap();
		let (&id, _) = document.colors.iter().next().unwrap();

		document
			.handle_operation(Operation::EditPaletteColor { id, color: Color::BLUE })
			.unwrap();
		assert_eq!(document.colors[&id], Color::BLUE);

		document.handle_operation(Operation::RemovePaletteColor { id }).unwrap();
		assert!(document.colors.is_empty());

		// Removing an id that was never added is harmless
		document.handle_operation(Operation::RemovePaletteColor { id }).unwrap();
	}

	#[test]
	fn document_snapshots_round_trip() {
		let mut document = Document::default();
		let rect = add_rect(&mut document, DVec2::new(10., 10.));
		select(&mut document, vec![rect]);
		document
			.handle_operation(Operation::AddFilter { filter: Filter::blur(2.) })
			.unwrap();
		document
			.handle_operation(Operation::AddPaletteColor { color: Color::GREEN })
			.unwrap();

		let serialized = document.serialize_document();
		let deserialized = Document::with_content(&serialized).expect("snapshot should deserialize");
		assert_eq!(document, deserialized);
	}
}

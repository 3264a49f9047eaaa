use crate::color::Color;
use crate::document::{FilterId, PaletteId, ShapeId, ToolType};
use crate::filters::{Filter, FilterType};
use crate::shapes::style::{Gradient, Style, StyleUpdate};
use crate::shapes::{ShapeDataType, ShapeProperty};

use glam::DVec2;
use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Operation {
	SetActivePage {
		index: usize,
	},
	AddPage {
		index: Option<usize>,
	},
	RemovePage {
		index: Option<usize>,
	},
	AddShape {
		data: ShapeDataType,
		style: Style,
	},
	TranslateSelection {
		delta: DVec2,
	},
	SetActiveTool {
		tool: ToolType,
	},
	SetHoveredShape {
		id: Option<ShapeId>,
	},
	SetSelection {
		shapes: Vec<ShapeId>,
	},
	ToggleContextMenu {
		position: Option<DVec2>,
	},
	CutSelection,
	CopySelection,
	Paste,
	DeleteSelection,
	GroupSelection,
	SetShapeName {
		id: ShapeId,
		name: String,
	},
	FormatShape {
		id: ShapeId,
		style: Option<StyleUpdate>,
		properties: Vec<ShapeProperty>,
	},
	AddFilter {
		filter: Filter,
	},
	EditFilter {
		id: FilterId,
		filter: Filter,
	},
	RemoveFilter {
		shape: ShapeId,
		filter_type: FilterType,
		filter: FilterId,
	},
	AddPaletteColor {
		color: Color,
	},
	EditPaletteColor {
		id: PaletteId,
		color: Color,
	},
	RemovePaletteColor {
		id: PaletteId,
	},
	AddPaletteGradient {
		gradient: Gradient,
	},
	EditPaletteGradient {
		id: PaletteId,
		gradient: Gradient,
	},
	RemovePaletteGradient {
		id: PaletteId,
	},
}

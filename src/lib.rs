// `macro_use` puts the log macros (`error!`, `warn!`, `debug!`, `info!` and `trace!`) in scope for the crate
#[macro_use]
extern crate log;

pub mod color;
pub mod consts;
pub mod document;
pub mod error;
pub mod filters;
pub mod operation;
pub mod response;
pub mod shapes;
pub mod uuid;

pub use document::{FilterId, PageId, PaletteId, ShapeId};
pub use error::DocumentError;
pub use operation::Operation;
pub use response::DocumentResponse;

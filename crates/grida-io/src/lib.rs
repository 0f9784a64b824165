//! Grida IO
//!
//! Importers that turn external design documents into Grida
//! [`DocumentDefinition`](grida_core::DocumentDefinition)s:
//! - [`figma`] - nodes fetched from the Figma REST API
//! - [`svg`] - the IR produced by the native SVG resolver

pub mod figma;
pub mod svg;

pub use figma::FigmaImportError;
pub use svg::{SvgImportError, SvgImportOptions};

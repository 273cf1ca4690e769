/// Types, tables et configuration partagés de la boîte à outils braille.
///
/// This crate contains the cell types emitted by the transliterator, the
/// grade-1 dot tables, and the configuration logic used across the workspace.

pub mod cell;
pub mod config;
pub mod dots;
pub mod error;

pub use cell::{CellDescriptor, Output};
pub use config::{EngineOptions, OutputFormat, QuoteStyle, RenderOptions, ToolboxConfig};
pub use dots::Dots;
pub use error::CoreError;

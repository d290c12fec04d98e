pub mod color;
mod constants;
pub mod document;
pub mod fragments;
pub mod geometry;
mod options;
pub mod panels;
mod types;
mod upload;

pub use color::{ColorDirective, ColorOption, build_color_directive};
pub use constants::*;
pub use document::{assemble_document, generate_markup};
pub use geometry::{Geometry, Inches, Marks, compute_geometry};
pub use options::*;
pub use panels::{PanelContent, PanelLayout, PanelSlot, resolve_panels};
pub use types::*;
pub use upload::*;

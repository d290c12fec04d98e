pub mod backend;
pub mod icc;
mod inspect;
mod options;
mod pipeline;

pub use backend::{DocRaptorClient, RenderBackend, RenderRequest};
pub use icc::{FsIccStore, IccProfileEntry, IccProfileStore, resolve_icc_profile};
pub use inspect::{PageBoxes, PdfBox, PdfSummary, inspect_pdf, inspect_pdf_file};
pub use options::{PrinceOptions, RenderOptions, output_file_name};
pub use pipeline::{RenderedCard, generate_card_pdf, save_pdf};

use card_layout::CardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] CardError),
    #[error("DocRaptor API key is required")]
    MissingApiKey,
    #[error("DocRaptor API error ({status}): {message}")]
    Backend { status: u16, message: String },
    #[error("Rendering backend unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("ICC profile not found: {0}")]
    IccNotFound(String),
    #[error("Invalid ICC profile name '{0}': must be a .icc file")]
    InvalidIccName(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RenderError>;

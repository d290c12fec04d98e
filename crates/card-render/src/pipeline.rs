//! End-to-end card rendering
//!
//! 1. Generate the markup (CPU-bound, off the async executor)
//! 2. Build the production options from the same settings
//! 3. Hand both to the rendering backend

use crate::backend::{RenderBackend, RenderRequest};
use crate::options::{RenderOptions, output_file_name};
use crate::Result;
use card_layout::{CardImages, CardSettings, generate_markup};
use std::path::Path;

/// A rendered card and the markup it was produced from
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub markup: String,
    pub pdf: Vec<u8>,
    /// Suggested file name for the PDF
    pub file_name: String,
}

pub async fn generate_card_pdf<B>(
    backend: &B,
    settings: &CardSettings,
    images: &CardImages,
) -> Result<RenderedCard>
where
    B: RenderBackend + ?Sized,
{
    if let Some(profile) = settings.pdf_profile {
        if profile.is_pdf_x() && settings.icc_profile_data.is_none() {
            log::warn!(
                "{} selected without an ICC output intent; the PDF may not validate",
                profile
            );
        }
    }

    let markup = {
        let settings = settings.clone();
        let images = images.clone();
        tokio::task::spawn_blocking(move || generate_markup(&settings, &images)).await?
    };

    let request = RenderRequest {
        document_content: markup,
        options: RenderOptions::from_settings(settings),
    };
    let pdf = backend.render(&request).await?;

    let file_name = output_file_name(settings);
    log::info!(
        "Rendered {} card → {} ({} bytes)",
        settings.card_type,
        file_name,
        pdf.len()
    );

    Ok(RenderedCard {
        markup: request.document_content,
        pdf,
        file_name,
    })
}

/// Write rendered PDF bytes to disk
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

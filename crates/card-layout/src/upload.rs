//! Upload validation
//!
//! Turns named file uploads into validated `CardImages`. The front image is
//! required; back and inside images are optional extras that are only
//! honoured when the caller asked to provide all images.

use crate::constants::ALLOWED_IMAGE_EXTENSIONS;
use crate::types::*;

/// A named file received from the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Lower-cased extension of an allowed image file name
pub fn allowed_image_extension(file_name: &str) -> Option<String> {
    let (_, extension) = file_name.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

impl TryFrom<Upload> for ImageAsset {
    type Error = CardError;

    fn try_from(upload: Upload) -> Result<Self> {
        match allowed_image_extension(&upload.file_name) {
            Some(extension) => Ok(ImageAsset::new(upload.bytes, &extension)),
            None => Err(CardError::InvalidImageType {
                file_name: upload.file_name,
            }),
        }
    }
}

/// Everything uploaded for one card
#[derive(Debug, Clone, Default)]
pub struct CardUploads {
    pub front: Option<Upload>,
    pub back: Option<Upload>,
    pub inside: Option<Upload>,
    /// Back and inside uploads are ignored unless this is set
    pub provide_all_images: bool,
}

impl CardUploads {
    /// Validate the uploads for the given card type
    pub fn into_images(self, card_type: CardType) -> Result<CardImages> {
        let front = self
            .front
            .filter(|upload| !upload.file_name.is_empty())
            .ok_or(CardError::MissingFrontImage)?;
        let front = ImageAsset::try_from(front)?;

        if !self.provide_all_images {
            if self.back.is_some() || self.inside.is_some() {
                log::debug!("Additional images supplied without provide_all_images; ignoring");
            }
            return Ok(CardImages::front_only(front));
        }

        let back = self.back.and_then(|upload| optional_asset("back", upload));
        let inside = match card_type {
            CardType::Folded => self.inside.and_then(|upload| optional_asset("inside", upload)),
            CardType::Flat => None,
        };

        Ok(CardImages {
            front,
            back,
            inside,
        })
    }
}

/// Optional images with an empty name or disallowed type are skipped, not rejected
fn optional_asset(role: &str, upload: Upload) -> Option<ImageAsset> {
    if upload.file_name.is_empty() {
        return None;
    }
    match ImageAsset::try_from(upload) {
        Ok(asset) => Some(asset),
        Err(e) => {
            log::warn!("Skipping {} image: {}", role, e);
            None
        }
    }
}

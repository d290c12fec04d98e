use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("No image file provided")]
    MissingFrontImage,
    #[error("Invalid file type for '{file_name}'. Allowed: png, jpg, jpeg, gif, webp, tiff, tif")]
    InvalidImageType { file_name: String },
    #[error("Invalid value for {field}: '{value}'")]
    InvalidSetting { field: &'static str, value: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CardError>;

/// Card shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// Single sheet printed front and back, one panel per page
    #[default]
    Flat,
    /// Two panels side by side per spread, folded along the spread midline
    Folded,
}

impl CardType {
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Flat => "flat",
            CardType::Folded => "folded",
        }
    }
}

impl FromStr for CardType {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat" => Ok(CardType::Flat),
            "folded" => Ok(CardType::Folded),
            other => Err(CardError::InvalidSetting {
                field: "card_type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PDF conformance profiles understood by the rendering backend.
///
/// "No profile" is modelled as `Option::None` at the use sites, never as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PdfProfile {
    #[cfg_attr(feature = "serde", serde(rename = "PDF/X-4"))]
    PdfX4,
    #[cfg_attr(feature = "serde", serde(rename = "PDF/X-1a"))]
    PdfX1a,
    #[cfg_attr(feature = "serde", serde(rename = "PDF/X-3"))]
    PdfX3,
    #[cfg_attr(feature = "serde", serde(rename = "PDF/A-1a"))]
    PdfA1a,
    #[cfg_attr(feature = "serde", serde(rename = "PDF/A-1b"))]
    PdfA1b,
    #[cfg_attr(feature = "serde", serde(rename = "PDF/A-3a"))]
    PdfA3a,
    #[cfg_attr(feature = "serde", serde(rename = "PDF/A-3b"))]
    PdfA3b,
    #[cfg_attr(feature = "serde", serde(rename = "PDF/UA-1"))]
    PdfUa1,
}

impl PdfProfile {
    pub const ALL: [PdfProfile; 8] = [
        PdfProfile::PdfX4,
        PdfProfile::PdfX1a,
        PdfProfile::PdfX3,
        PdfProfile::PdfA1a,
        PdfProfile::PdfA1b,
        PdfProfile::PdfA3a,
        PdfProfile::PdfA3b,
        PdfProfile::PdfUa1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PdfProfile::PdfX4 => "PDF/X-4",
            PdfProfile::PdfX1a => "PDF/X-1a",
            PdfProfile::PdfX3 => "PDF/X-3",
            PdfProfile::PdfA1a => "PDF/A-1a",
            PdfProfile::PdfA1b => "PDF/A-1b",
            PdfProfile::PdfA3a => "PDF/A-3a",
            PdfProfile::PdfA3b => "PDF/A-3b",
            PdfProfile::PdfUa1 => "PDF/UA-1",
        }
    }

    /// PDF/X profiles expect an output intent to be fully conformant
    pub fn is_pdf_x(self) -> bool {
        matches!(
            self,
            PdfProfile::PdfX4 | PdfProfile::PdfX1a | PdfProfile::PdfX3
        )
    }

    /// Parse a profile field where the empty string means "no profile"
    pub fn parse_optional(s: &str) -> Result<Option<Self>> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl FromStr for PdfProfile {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        PdfProfile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| CardError::InvalidSetting {
                field: "pdf_profile",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PdfProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an image fills its panel box (CSS `object-fit`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
    ScaleDown,
}

impl ImageFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
            ImageFit::Fill => "fill",
            ImageFit::None => "none",
            ImageFit::ScaleDown => "scale-down",
        }
    }
}

impl FromStr for ImageFit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cover" => Ok(ImageFit::Cover),
            "contain" => Ok(ImageFit::Contain),
            "fill" => Ok(ImageFit::Fill),
            "none" => Ok(ImageFit::None),
            "scale-down" => Ok(ImageFit::ScaleDown),
            other => Err(CardError::InvalidSetting {
                field: "image_fit",
                value: other.to_string(),
            }),
        }
    }
}

/// An already-encoded raster image, passed through to the markup untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    bytes: Vec<u8>,
    mime_subtype: String,
}

impl ImageAsset {
    /// Create an asset from raw bytes and a file extension or MIME subtype.
    ///
    /// The subtype is lower-cased and `jpg` is canonicalised to `jpeg`.
    pub fn new(bytes: Vec<u8>, subtype: &str) -> Self {
        let mut mime_subtype = subtype.trim().to_ascii_lowercase();
        if mime_subtype == "jpg" {
            mime_subtype = "jpeg".to_string();
        }
        Self {
            bytes,
            mime_subtype,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_subtype(&self) -> &str {
        &self.mime_subtype
    }

    /// Self-contained `data:` URI for embedding in markup
    pub fn data_uri(&self) -> String {
        use base64::Engine;
        format!(
            "data:image/{};base64,{}",
            self.mime_subtype,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// The zero-to-three images supplied for one card.
///
/// The front image is mandatory, so it is not optional here; a missing front
/// upload is rejected when the uploads are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImages {
    pub front: ImageAsset,
    pub back: Option<ImageAsset>,
    /// Only used by folded cards; spans both inside panels
    pub inside: Option<ImageAsset>,
}

impl CardImages {
    pub fn front_only(front: ImageAsset) -> Self {
        Self {
            front,
            back: None,
            inside: None,
        }
    }
}

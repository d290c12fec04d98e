use card_layout::CardSettings;
use serde::Serialize;

/// Resolution used for CSS pixel units in the rendered PDF
pub const CSS_DPI: u32 = 300;

/// Name given to every rendered document
pub const DOCUMENT_NAME: &str = "greeting-card.pdf";

/// Engine-specific production options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinceOptions {
    pub css_dpi: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_identity_encoding: Option<bool>,
}

/// Options record sent to the rendering backend alongside the markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    pub name: String,
    pub document_type: String,
    /// Sandbox (watermarked, free) conversion rather than a billable one
    pub test: bool,
    pub prince_options: PrinceOptions,
}

impl RenderOptions {
    pub fn from_settings(settings: &CardSettings) -> Self {
        Self {
            name: DOCUMENT_NAME.to_string(),
            document_type: "pdf".to_string(),
            test: settings.test_mode,
            prince_options: PrinceOptions {
                css_dpi: CSS_DPI,
                profile: settings.pdf_profile.map(|p| p.as_str().to_string()),
                pdf_version: settings.pdf_version.clone(),
                force_identity_encoding: settings.force_cmyk.then_some(false),
            },
        }
    }
}

/// File name for the rendered PDF, e.g. `output_PDF-X-4.pdf`
pub fn output_file_name(settings: &CardSettings) -> String {
    match settings.pdf_profile {
        Some(profile) => format!("output_{}.pdf", profile.as_str().replace('/', "-")),
        None => "output_default.pdf".to_string(),
    }
}

//! Color-management directives for the rendering backend
//!
//! Produces the `@prince-pdf` block carrying the conformance profile, color
//! conversion keywords and the ICC output intent. The output intent is always
//! embedded as a data URI so the backend never has to fetch anything.

use crate::constants::ICC_PROFILE_MIME;
use crate::options::CardSettings;
use crate::types::PdfProfile;
use base64::Engine;

/// Color conversion keywords, in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    UseTrueBlack,
    UseCmykColors,
}

impl ColorOption {
    pub fn keyword(self) -> &'static str {
        match self {
            ColorOption::UseTrueBlack => "use-true-black",
            ColorOption::UseCmykColors => "use-cmyk-colors",
        }
    }
}

/// A non-empty set of color-management declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDirective {
    pub profile: Option<PdfProfile>,
    pub color_options: Vec<ColorOption>,
    /// Base64 of the ICC profile bytes
    pub output_intent: Option<String>,
}

impl ColorDirective {
    /// Render the declarations as an `@prince-pdf` at-rule
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();

        if let Some(profile) = self.profile {
            declarations.push(format!("prince-pdf-profile: \"{}\";", profile));
        }

        if !self.color_options.is_empty() {
            let keywords: Vec<&str> = self.color_options.iter().map(|o| o.keyword()).collect();
            declarations.push(format!(
                "prince-pdf-color-options: {};",
                keywords.join(" ")
            ));
        }

        if let Some(icc_base64) = &self.output_intent {
            declarations.push(format!(
                "prince-pdf-output-intent: url(\"data:{};base64,{}\");",
                ICC_PROFILE_MIME, icc_base64
            ));
        }

        let mut css = String::from("@prince-pdf {\n");
        for declaration in declarations {
            css.push_str("    ");
            css.push_str(&declaration);
            css.push('\n');
        }
        css.push('}');
        css
    }
}

/// Build the color directive for the given settings.
///
/// Returns `None` when there is no profile, no color option and no ICC data,
/// so that no empty block is ever emitted.
pub fn build_color_directive(settings: &CardSettings) -> Option<ColorDirective> {
    let mut color_options = Vec::new();
    if settings.use_true_black {
        color_options.push(ColorOption::UseTrueBlack);
    }
    if settings.use_cmyk_colors {
        color_options.push(ColorOption::UseCmykColors);
    }

    let output_intent = settings
        .icc_profile_data
        .as_deref()
        .filter(|bytes| !bytes.is_empty())
        .map(|bytes| base64::engine::general_purpose::STANDARD.encode(bytes));

    if settings.pdf_profile.is_none() && color_options.is_empty() && output_intent.is_none() {
        return None;
    }

    Some(ColorDirective {
        profile: settings.pdf_profile,
        color_options,
        output_intent,
    })
}

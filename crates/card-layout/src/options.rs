use crate::constants::{DEFAULT_BACKGROUND_COLOR, DEFAULT_PDF_PROFILE};
use crate::types::*;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Form-encoded option bag, as received from an upload form or a settings file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawOptions {
    fields: BTreeMap<String, String>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Form booleans: only the exact string `"true"` is true
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Copy every field of `other` over this bag
    pub fn merge(&mut self, other: &RawOptions) {
        for (key, value) in &other.fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Load an option bag from a JSON object of string fields
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CardError::Config(format!("Failed to parse options: {}", e)))?;
        Ok(options)
    }

    /// Reject values that `resolve_settings` would otherwise silently replace.
    ///
    /// Missing fields are fine; they take their defaults.
    pub fn validate(&self) -> Result<()> {
        if let Some(card_type) = self.get("card_type") {
            card_type.parse::<CardType>()?;
        }
        if let Some(profile) = self.get("pdf_profile") {
            PdfProfile::parse_optional(profile)?;
        }
        if let Some(fit) = self.get("image_fit") {
            fit.parse::<ImageFit>()?;
        }
        if let Some(color) = self.get("background_color") {
            if !is_valid_color(color) {
                return Err(CardError::InvalidSetting {
                    field: "background_color",
                    value: color.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Validated print settings for one card
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardSettings {
    pub card_type: CardType,
    /// `None` suppresses the profile declaration entirely
    pub pdf_profile: Option<PdfProfile>,
    /// Raw ICC profile bytes for the output intent; never written to settings files
    #[cfg_attr(feature = "serde", serde(skip))]
    pub icc_profile_data: Option<Vec<u8>>,
    pub add_bleed: bool,
    pub use_true_black: bool,
    pub use_cmyk_colors: bool,
    pub force_cmyk: bool,
    pub image_fit: ImageFit,
    pub background_color: String,
    pub test_mode: bool,
    pub pdf_version: Option<String>,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            card_type: CardType::Flat,
            pdf_profile: Some(PdfProfile::PdfX4),
            icc_profile_data: None,
            add_bleed: false,
            use_true_black: false,
            use_cmyk_colors: false,
            force_cmyk: false,
            image_fit: ImageFit::Cover,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            test_mode: false,
            pdf_version: None,
        }
    }
}

impl CardSettings {
    pub fn with_icc_profile(mut self, icc_profile_data: Option<Vec<u8>>) -> Self {
        self.icc_profile_data = icc_profile_data;
        self
    }

    /// Load settings from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings: Self = serde_json::from_slice(&bytes)
            .map_err(|e| CardError::Config(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check fields that end up verbatim in the generated stylesheet
    pub fn validate(&self) -> Result<()> {
        if !is_valid_color(&self.background_color) {
            return Err(CardError::InvalidSetting {
                field: "background_color",
                value: self.background_color.clone(),
            });
        }
        Ok(())
    }

    /// Save settings to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CardError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Turn a raw option bag into `CardSettings`.
///
/// Never fails: missing or unrecognised values take their defaults. Run
/// `RawOptions::validate` first when bad input must be reported.
pub fn resolve_settings(raw: &RawOptions, icc_profile_data: Option<Vec<u8>>) -> CardSettings {
    let defaults = CardSettings::default();

    let card_type = raw
        .get("card_type")
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.card_type);

    let pdf_profile = raw
        .get("pdf_profile")
        .unwrap_or(DEFAULT_PDF_PROFILE);
    let pdf_profile = PdfProfile::parse_optional(pdf_profile).unwrap_or_else(|_| {
        log::warn!("Unknown PDF profile '{}', using {}", pdf_profile, DEFAULT_PDF_PROFILE);
        defaults.pdf_profile
    });

    let image_fit = raw
        .get("image_fit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.image_fit);

    let background_color = raw
        .get("background_color")
        .filter(|color| is_valid_color(color))
        .map(str::to_string)
        .unwrap_or(defaults.background_color);

    let pdf_version = raw
        .get("pdf_version")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    CardSettings {
        card_type,
        pdf_profile,
        icc_profile_data,
        add_bleed: raw.flag("add_bleed"),
        use_true_black: raw.flag("use_true_black"),
        use_cmyk_colors: raw.flag("use_cmyk_colors"),
        force_cmyk: raw.flag("force_cmyk"),
        image_fit,
        background_color,
        test_mode: raw.flag("test_mode"),
        pdf_version,
    }
}

/// Hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or a bare CSS color name
fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

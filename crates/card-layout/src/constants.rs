//! Shared constants for card layout
//!
//! This module centralizes the physical dimensions and option defaults used
//! throughout markup generation.

use crate::geometry::Inches;

// =============================================================================
// Physical Dimensions
// =============================================================================

/// Trim width of a single card panel (4.75")
pub const PANEL_TRIM_WIDTH: Inches = Inches::from_thousandths(4_750);

/// Trim height of a single card panel (6.75")
pub const PANEL_TRIM_HEIGHT: Inches = Inches::from_thousandths(6_750);

/// Bleed added on every edge when bleed is enabled (1/8")
pub const BLEED_AMOUNT: Inches = Inches::from_thousandths(125);

// =============================================================================
// Option Defaults
// =============================================================================

/// Profile used when the option bag does not mention one
pub const DEFAULT_PDF_PROFILE: &str = "PDF/X-4";

/// Page and panel background when none is given
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

// =============================================================================
// Uploads
// =============================================================================

/// Image file extensions accepted for card artwork
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "tiff", "tif"];

// =============================================================================
// Color Management
// =============================================================================

/// MIME type used when embedding an ICC profile as a data URI
pub const ICC_PROFILE_MIME: &str = "application/vnd.iccprofile";

//! Physical page geometry
//!
//! Every measurement is held as an exact number of thousandths of an inch so
//! that bleed arithmetic never accumulates floating point error, and is
//! always rendered with its unit.

use crate::constants::{BLEED_AMOUNT, PANEL_TRIM_HEIGHT, PANEL_TRIM_WIDTH};
use crate::types::CardType;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An exact length in inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Inches {
    thousandths: i64,
}

impl Inches {
    pub const ZERO: Inches = Inches { thousandths: 0 };

    pub const fn from_thousandths(thousandths: i64) -> Self {
        Self { thousandths }
    }

    pub const fn thousandths(self) -> i64 {
        self.thousandths
    }

    pub fn is_zero(self) -> bool {
        self.thousandths == 0
    }

    /// Convert to PostScript points (72 per inch)
    pub fn to_points(self) -> f32 {
        self.thousandths as f32 * 72.0 / 1000.0
    }
}

impl Add for Inches {
    type Output = Inches;

    fn add(self, rhs: Inches) -> Inches {
        Inches::from_thousandths(self.thousandths + rhs.thousandths)
    }
}

impl Sub for Inches {
    type Output = Inches;

    fn sub(self, rhs: Inches) -> Inches {
        Inches::from_thousandths(self.thousandths - rhs.thousandths)
    }
}

impl Mul<i64> for Inches {
    type Output = Inches;

    fn mul(self, rhs: i64) -> Inches {
        Inches::from_thousandths(self.thousandths * rhs)
    }
}

impl Neg for Inches {
    type Output = Inches;

    fn neg(self) -> Inches {
        Inches::from_thousandths(-self.thousandths)
    }
}

/// Shortest exact decimal form followed by the unit, e.g. `9.75in`, `7in`, `-0.125in`
impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.thousandths < 0 { "-" } else { "" };
        let abs = self.thousandths.unsigned_abs();
        let whole = abs / 1000;
        let frac = abs % 1000;
        if frac == 0 {
            write!(f, "{sign}{whole}in")
        } else {
            let digits = format!("{frac:03}");
            write!(f, "{sign}{whole}.{}in", digits.trim_end_matches('0'))
        }
    }
}

/// Printer's marks requested from the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marks {
    Crop,
    None,
}

impl Marks {
    pub fn as_css(self) -> &'static str {
        match self {
            Marks::Crop => "crop",
            Marks::None => "none",
        }
    }
}

/// Page (flat) or spread (folded) dimensions for one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub card_type: CardType,
    /// Declared page box width
    pub trim_width: Inches,
    /// Declared page box height
    pub trim_height: Inches,
    /// Bleed on each edge
    pub bleed_amount: Inches,
    /// Content box width including bleed on both sides
    pub total_width: Inches,
    /// Content box height including bleed on both sides
    pub total_height: Inches,
    pub marks: Marks,
}

impl Geometry {
    /// Number of pages (flat) or spreads (folded) in the document
    pub fn page_count(&self) -> usize {
        2
    }
}

/// Compute trim, bleed and total dimensions for a card shape.
///
/// Crop marks are only requested when there is a bleed to cut away.
pub fn compute_geometry(card_type: CardType, add_bleed: bool) -> Geometry {
    let bleed_amount = if add_bleed { BLEED_AMOUNT } else { Inches::ZERO };

    let (trim_width, trim_height) = match card_type {
        CardType::Flat => (PANEL_TRIM_WIDTH, PANEL_TRIM_HEIGHT),
        CardType::Folded => (PANEL_TRIM_WIDTH * 2, PANEL_TRIM_HEIGHT),
    };

    let marks = if bleed_amount > Inches::ZERO {
        Marks::Crop
    } else {
        Marks::None
    };

    Geometry {
        card_type,
        trim_width,
        trim_height,
        bleed_amount,
        total_width: trim_width + bleed_amount * 2,
        total_height: trim_height + bleed_amount * 2,
        marks,
    }
}

// =============================================================================
// Tests
// =============================================================================

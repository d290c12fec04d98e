//! Panel content resolution
//!
//! Decides, for every logical panel of a card, whether the supplied artwork or
//! a placeholder fragment is printed there, and whether the inside spread
//! carries a fold guide.

use crate::fragments;
use crate::types::{CardImages, CardType, ImageAsset};

/// Logical face of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSlot {
    Front,
    Back,
    InsideLeft,
    InsideRight,
}

/// Placeholder printed when no artwork is supplied for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    FlatBack,
    /// Folded back cover, captioned as panel 4
    FoldedBack,
    InsideLeft,
    /// Pre-printed message panel
    InsideRight,
}

impl Fallback {
    pub fn markup(self) -> &'static str {
        match self {
            Fallback::FlatBack => fragments::FLAT_BACK,
            Fallback::FoldedBack => fragments::FOLDED_BACK,
            Fallback::InsideLeft => fragments::INSIDE_LEFT,
            Fallback::InsideRight => fragments::INSIDE_RIGHT,
        }
    }
}

/// Horizontal anchoring of an image inside its panel (CSS `object-position`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectPosition {
    #[default]
    Center,
    Left,
    Right,
}

impl ObjectPosition {
    fn as_css(self) -> &'static str {
        match self {
            ObjectPosition::Center => "center",
            ObjectPosition::Left => "left center",
            ObjectPosition::Right => "right center",
        }
    }
}

/// What gets printed on one panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent<'a> {
    Image {
        asset: &'a ImageAsset,
        alt: &'static str,
        position: ObjectPosition,
    },
    Fallback(Fallback),
}

impl<'a> PanelContent<'a> {
    fn image(asset: &'a ImageAsset, alt: &'static str) -> Self {
        PanelContent::Image {
            asset,
            alt,
            position: ObjectPosition::Center,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PanelContent::Fallback(_))
    }

    pub fn to_html(&self) -> String {
        match self {
            PanelContent::Image {
                asset,
                alt,
                position: ObjectPosition::Center,
            } => format!(
                r#"<img class="image" src="{}" alt="{}">"#,
                asset.data_uri(),
                alt
            ),
            PanelContent::Image {
                asset,
                alt,
                position,
            } => format!(
                r#"<img class="image" src="{}" alt="{}" style="object-position: {};">"#,
                asset.data_uri(),
                alt,
                position.as_css()
            ),
            PanelContent::Fallback(fallback) => fallback.markup().to_string(),
        }
    }
}

/// Content for every panel valid for the card type
#[derive(Debug, Clone, PartialEq)]
pub enum PanelLayout<'a> {
    Flat {
        front: PanelContent<'a>,
        back: PanelContent<'a>,
    },
    Folded {
        front: PanelContent<'a>,
        back: PanelContent<'a>,
        inside_left: PanelContent<'a>,
        inside_right: PanelContent<'a>,
        /// Shown only over placeholder inside panels
        inside_fold_guide: bool,
    },
}

impl<'a> PanelLayout<'a> {
    pub fn card_type(&self) -> CardType {
        match self {
            PanelLayout::Flat { .. } => CardType::Flat,
            PanelLayout::Folded { .. } => CardType::Folded,
        }
    }

    /// Content of a slot, or `None` if the slot does not exist for this card type
    pub fn content(&self, slot: PanelSlot) -> Option<&PanelContent<'a>> {
        match (self, slot) {
            (PanelLayout::Flat { front, .. }, PanelSlot::Front) => Some(front),
            (PanelLayout::Flat { back, .. }, PanelSlot::Back) => Some(back),
            (PanelLayout::Flat { .. }, _) => None,
            (PanelLayout::Folded { front, .. }, PanelSlot::Front) => Some(front),
            (PanelLayout::Folded { back, .. }, PanelSlot::Back) => Some(back),
            (PanelLayout::Folded { inside_left, .. }, PanelSlot::InsideLeft) => Some(inside_left),
            (PanelLayout::Folded { inside_right, .. }, PanelSlot::InsideRight) => {
                Some(inside_right)
            }
        }
    }

    pub fn inside_fold_guide(&self) -> bool {
        match self {
            PanelLayout::Flat { .. } => false,
            PanelLayout::Folded {
                inside_fold_guide, ..
            } => *inside_fold_guide,
        }
    }
}

/// Resolve panel content for a card.
///
/// A supplied back image always wins over the back placeholder. On folded
/// cards a single inside image covers both inside panels: the left half is
/// anchored right and the right half anchored left, so the picture reads as
/// one spread split by the fold.
pub fn resolve_panels(card_type: CardType, images: &CardImages) -> PanelLayout<'_> {
    match card_type {
        CardType::Flat => {
            if images.inside.is_some() {
                log::debug!("Ignoring inside image for flat card");
            }
            let back = match &images.back {
                Some(back) => PanelContent::image(back, "Card Back"),
                None => PanelContent::Fallback(Fallback::FlatBack),
            };
            PanelLayout::Flat {
                front: PanelContent::image(&images.front, "Card Front"),
                back,
            }
        }
        CardType::Folded => {
            let back = match &images.back {
                Some(back) => PanelContent::image(back, "Back Cover"),
                None => PanelContent::Fallback(Fallback::FoldedBack),
            };

            let (inside_left, inside_right, inside_fold_guide) = match &images.inside {
                Some(inside) => (
                    PanelContent::Image {
                        asset: inside,
                        alt: "Inside Left",
                        position: ObjectPosition::Right,
                    },
                    PanelContent::Image {
                        asset: inside,
                        alt: "Inside Right",
                        position: ObjectPosition::Left,
                    },
                    false,
                ),
                None => (
                    PanelContent::Fallback(Fallback::InsideLeft),
                    PanelContent::Fallback(Fallback::InsideRight),
                    true,
                ),
            };

            log::debug!(
                "Resolved folded panels: back {}, inside {}",
                if back.is_fallback() { "placeholder" } else { "image" },
                if inside_fold_guide { "placeholder" } else { "image" },
            );

            PanelLayout::Folded {
                front: PanelContent::image(&images.front, "Front Cover"),
                back,
                inside_left,
                inside_right,
                inside_fold_guide,
            }
        }
    }
}

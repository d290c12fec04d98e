//! Rendered PDF inspection
//!
//! Reads back the page boxes of a rendered card so the output can be checked
//! against the geometry it was generated from.

use crate::Result;
use card_layout::Geometry;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;

/// Tolerance when comparing page boxes against the declared trim size (points)
const BOX_TOLERANCE_PT: f32 = 0.5;

/// Guard against cyclic page trees when walking up for inherited boxes
const MAX_TREE_DEPTH: usize = 32;

/// A page box in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl PdfBox {
    pub fn width(&self) -> f32 {
        (self.x1 - self.x0).abs()
    }

    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).abs()
    }
}

/// The boxes declared for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageBoxes {
    pub media: PdfBox,
    pub trim: Option<PdfBox>,
    pub bleed: Option<PdfBox>,
}

impl PageBoxes {
    /// Trim box, falling back to the media box when no trim box is declared
    pub fn effective_trim(&self) -> PdfBox {
        self.trim.unwrap_or(self.media)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfSummary {
    pub page_count: usize,
    pub pages: Vec<PageBoxes>,
}

impl PdfSummary {
    /// Whether the PDF has the expected page count and trim size for `geometry`
    pub fn matches_layout(&self, geometry: &Geometry) -> bool {
        let width = geometry.trim_width.to_points();
        let height = geometry.trim_height.to_points();

        self.page_count == geometry.page_count()
            && self.pages.iter().all(|page| {
                let trim = page.effective_trim();
                (trim.width() - width).abs() <= BOX_TOLERANCE_PT
                    && (trim.height() - height).abs() <= BOX_TOLERANCE_PT
            })
    }
}

/// Inspect rendered PDF bytes
pub fn inspect_pdf(bytes: &[u8]) -> Result<PdfSummary> {
    let doc = Document::load_mem(bytes)?;
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();

    let mut pages = Vec::with_capacity(page_ids.len());
    for page_id in page_ids {
        let page = doc.get_dictionary(page_id)?;
        let media = inherited_box(&doc, page, b"MediaBox").unwrap_or(PdfBox {
            x0: 0.0,
            y0: 0.0,
            x1: 612.0,
            y1: 792.0,
        });
        pages.push(PageBoxes {
            media,
            trim: page_box(&doc, page, b"TrimBox"),
            bleed: page_box(&doc, page, b"BleedBox"),
        });
    }

    Ok(PdfSummary {
        page_count: pages.len(),
        pages,
    })
}

/// Inspect a PDF file on disk
pub async fn inspect_pdf_file(path: impl AsRef<Path>) -> Result<PdfSummary> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    tokio::task::spawn_blocking(move || inspect_pdf(&bytes)).await?
}

/// MediaBox may be declared on any ancestor in the page tree
fn inherited_box(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<PdfBox> {
    let mut dict = page;
    for _ in 0..MAX_TREE_DEPTH {
        if let Some(found) = page_box(doc, dict, key) {
            return Some(found);
        }
        let parent = dict.get(b"Parent").ok()?.as_reference().ok()?;
        dict = doc.get_dictionary(parent).ok()?;
    }
    None
}

fn page_box(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<PdfBox> {
    let object = dict.get(key).ok()?;
    let (_, object) = doc.dereference(object).ok()?;
    let values = object.as_array().ok()?;
    if values.len() != 4 {
        return None;
    }

    let mut coords = [0.0f32; 4];
    for (coord, value) in coords.iter_mut().zip(values) {
        *coord = number(doc, value)?;
    }
    Some(PdfBox {
        x0: coords[0],
        y0: coords[1],
        x1: coords[2],
        y1: coords[3],
    })
}

fn number(doc: &Document, value: &Object) -> Option<f32> {
    let (_, value) = doc.dereference(value).ok()?;
    match value {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

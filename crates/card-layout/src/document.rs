//! Document assembly
//!
//! Composes geometry, color directives and panel content into one complete
//! HTML document for the rendering backend:
//! 1. `@prince-pdf` color block (only when there is something to declare)
//! 2. `@page` box at trim size, with bleed and marks layered on top
//! 3. Page (flat) or spread (folded) sequence with page-break chaining
//!
//! The declared page box is always the trim size. Each page's content box is
//! shifted up and left by the bleed and sized to the total dimensions, so
//! artwork overflows the trim edge without changing the page size.

use crate::color::{ColorDirective, build_color_directive};
use crate::fragments::{BASE_STYLES, FOLD_GUIDE};
use crate::geometry::{Geometry, compute_geometry};
use crate::options::CardSettings;
use crate::panels::{PanelContent, PanelLayout, resolve_panels};
use crate::types::{CardImages, CardType};

/// One physical page of output: a single panel (flat) or two side by side (folded)
struct Sheet {
    label: &'static str,
    body: String,
}

/// Run the whole pipeline: geometry, color directive, panels, document.
///
/// Pure and deterministic; identical inputs produce byte-identical markup.
pub fn generate_markup(settings: &CardSettings, images: &CardImages) -> String {
    let geometry = compute_geometry(settings.card_type, settings.add_bleed);
    let color = build_color_directive(settings);
    let panels = resolve_panels(settings.card_type, images);
    assemble_document(settings, &geometry, color.as_ref(), &panels)
}

/// Assemble the complete markup document
pub fn assemble_document(
    settings: &CardSettings,
    geometry: &Geometry,
    color: Option<&ColorDirective>,
    panels: &PanelLayout<'_>,
) -> String {
    debug_assert_eq!(geometry.card_type, panels.card_type());

    let (sheet_class, sheets) = match panels {
        PanelLayout::Flat { front, back } => ("page", flat_sheets(front, back)),
        PanelLayout::Folded {
            front,
            back,
            inside_left,
            inside_right,
            inside_fold_guide,
        } => (
            "spread",
            folded_sheets(front, back, inside_left, inside_right, *inside_fold_guide),
        ),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n");

    if let Some(color) = color {
        html.push_str(&color.to_css());
        html.push_str("\n\n");
    }

    html.push_str(&page_rule(geometry));
    html.push_str("\n\n");
    html.push_str(BASE_STYLES);
    html.push_str("\n\n");
    html.push_str(&layout_styles(settings, geometry));
    html.push_str("</style>\n</head>\n<body>\n");

    // Every sheet but the last forces a break; the last one suppresses it
    // so the renderer does not emit a trailing blank page.
    let last = sheets.len().saturating_sub(1);
    for (index, sheet) in sheets.iter().enumerate() {
        let page_break = if index < last { "always" } else { "avoid" };
        html.push_str(&format!(
            "<!-- {} -->\n<div class=\"{}\" style=\"page-break-after: {};\">\n{}</div>\n",
            sheet.label, sheet_class, page_break, sheet.body
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn page_rule(geometry: &Geometry) -> String {
    format!(
        "@page {{\n    size: {} {};\n    margin: 0;\n    bleed: {};\n    marks: {};\n}}",
        geometry.trim_width,
        geometry.trim_height,
        geometry.bleed_amount,
        geometry.marks.as_css()
    )
}

/// Page-box and content-box rules for the card type
fn layout_styles(settings: &CardSettings, geometry: &Geometry) -> String {
    let offset = -geometry.bleed_amount;
    let fit = settings.image_fit.as_css();
    let background = &settings.background_color;

    let image_rule = format!(
        ".image {{\n    width: 100%;\n    height: 100%;\n    object-fit: {fit};\n    object-position: center;\n    display: block;\n}}\n"
    );

    match geometry.card_type {
        CardType::Flat => format!(
            ".page {{
    position: relative;
    width: {trim_w};
    height: {trim_h};
    overflow: visible;
}}

.page-content {{
    position: absolute;
    top: {offset};
    left: {offset};
    width: {total_w};
    height: {total_h};
    background-color: {background};
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}}

{image_rule}",
            trim_w = geometry.trim_width,
            trim_h = geometry.trim_height,
            total_w = geometry.total_width,
            total_h = geometry.total_height,
        ),
        CardType::Folded => format!(
            ".spread {{
    position: relative;
    width: {trim_w};
    height: {trim_h};
    overflow: visible;
}}

.spread-content {{
    position: absolute;
    top: {offset};
    left: {offset};
    width: {total_w};
    height: {total_h};
    display: flex;
    flex-direction: row;
    background-color: {background};
}}

.panel {{
    width: 50%;
    height: 100%;
    position: relative;
    overflow: hidden;
}}

.panel-inner {{
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    position: relative;
    background-color: {background};
}}

{image_rule}
.fold-indicator {{
    position: absolute;
    top: 0;
    left: 50%;
    width: 0;
    height: 100%;
    border-left: 0.5px dashed rgba(200, 200, 200, 0.5);
    z-index: 10;
}}
",
            trim_w = geometry.trim_width,
            trim_h = geometry.trim_height,
            total_w = geometry.total_width,
            total_h = geometry.total_height,
        ),
    }
}

fn flat_sheets(front: &PanelContent<'_>, back: &PanelContent<'_>) -> Vec<Sheet> {
    let page = |content: &PanelContent<'_>| {
        format!(
            "<div class=\"page-content\">\n{}\n</div>\n",
            content.to_html()
        )
    };

    vec![
        Sheet {
            label: "Page 1: Front",
            body: page(front),
        },
        Sheet {
            label: "Page 2: Back",
            body: page(back),
        },
    ]
}

/// Outside spread puts the back cover on the left and the front cover on the
/// right: folded along the midline, the right half becomes the front.
fn folded_sheets(
    front: &PanelContent<'_>,
    back: &PanelContent<'_>,
    inside_left: &PanelContent<'_>,
    inside_right: &PanelContent<'_>,
    inside_fold_guide: bool,
) -> Vec<Sheet> {
    vec![
        Sheet {
            label: "Spread 1: Outside (panel 4 back cover | panel 1 front cover)",
            body: spread(back, front, true),
        },
        Sheet {
            label: "Spread 2: Inside (panel 2 | panel 3)",
            body: spread(inside_left, inside_right, inside_fold_guide),
        },
    ]
}

fn spread(left: &PanelContent<'_>, right: &PanelContent<'_>, fold_guide: bool) -> String {
    let mut body = String::from("<div class=\"spread-content\">\n");
    for panel in [left, right] {
        body.push_str(&format!(
            "<div class=\"panel\">\n<div class=\"panel-inner\">\n{}\n</div>\n</div>\n",
            panel.to_html()
        ));
    }
    body.push_str("</div>\n");
    if fold_guide {
        body.push_str(FOLD_GUIDE);
        body.push('\n');
    }
    body
}

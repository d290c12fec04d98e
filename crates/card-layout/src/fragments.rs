//! Static markup: placeholder panels and the shared stylesheet

/// Back of a flat card when no back image is supplied
pub const FLAT_BACK: &str = r#"<div class="back-content">
    <div class="logo-placeholder">&#10022;</div>
    <h2>Premium Greeting Card</h2>
    <p class="tagline">Crafted with care, delivered with love</p>
    <div class="details">
        <p>Made in USA</p>
        <p>Recycled Paper</p>
        <p>www.example.com</p>
    </div>
    <div class="barcode-placeholder">
        <div class="barcode-lines"></div>
        <span>1234567890</span>
    </div>
</div>"#;

/// Back cover of a folded card (panel 4) when no back image is supplied
pub const FOLDED_BACK: &str = r#"<div class="back-content panel-4">
    <div class="logo-placeholder">&#10022;</div>
    <h2>Premium Greeting Card</h2>
    <p class="tagline">Crafted with care</p>
    <div class="details">
        <p>Made in USA &#8226; Recycled Paper</p>
        <p>www.example.com</p>
    </div>
    <div class="barcode-placeholder">
        <div class="barcode-lines"></div>
        <span>1234567890</span>
    </div>
    <p class="small-text">Panel 4 - Back Cover</p>
</div>"#;

/// Inside left of a folded card (panel 2)
pub const INSIDE_LEFT: &str = r#"<div class="inside-content inside-left">
    <p class="small-text">Panel 2 - Inside Left</p>
</div>"#;

/// Inside right of a folded card (panel 3) with a pre-printed message
pub const INSIDE_RIGHT: &str = r#"<div class="inside-content inside-right">
    <div class="message-area">
        <p class="preprinted-message">Wishing you all the best on your special day!</p>
        <div class="signature-line">
            <span>With love,</span>
            <div class="line"></div>
        </div>
    </div>
    <p class="small-text">Panel 3 - Inside Right</p>
</div>"#;

/// Dashed vertical guide on the spread midline
pub const FOLD_GUIDE: &str = r#"<div class="fold-indicator"></div>"#;

/// Styles shared by every card type; page geometry is appended per document
pub const BASE_STYLES: &str = r#"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html, body {
    margin: 0;
    padding: 0;
}

.back-content,
.inside-content {
    width: 100%;
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0.5in;
    font-family: 'Georgia', serif;
    color: #333;
}

.back-content .logo-placeholder {
    font-size: 48pt;
    color: #c4a052;
    margin-bottom: 0.2in;
}

.back-content h2 {
    font-size: 14pt;
    font-weight: normal;
    letter-spacing: 2pt;
    text-transform: uppercase;
    margin-bottom: 0.1in;
}

.back-content .tagline {
    font-size: 10pt;
    font-style: italic;
    color: #666;
    margin-bottom: 0.3in;
}

.back-content .details {
    font-size: 8pt;
    color: #888;
    line-height: 1.6;
    margin-bottom: 0.3in;
}

.back-content .barcode-placeholder {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.back-content .barcode-lines {
    width: 1.2in;
    height: 0.4in;
    background: repeating-linear-gradient(90deg, #000 0px, #000 2px, #fff 2px, #fff 4px, #000 4px, #000 5px, #fff 5px, #fff 8px);
    margin-bottom: 0.05in;
}

.back-content .barcode-placeholder span {
    font-family: 'Courier New', monospace;
    font-size: 8pt;
}

.inside-content .message-area {
    max-width: 80%;
}

.inside-content .preprinted-message {
    font-size: 14pt;
    font-style: italic;
    line-height: 1.8;
    margin-bottom: 0.5in;
}

.inside-content .signature-line {
    text-align: left;
}

.inside-content .signature-line span {
    font-size: 12pt;
    display: block;
    margin-bottom: 0.1in;
}

.inside-content .signature-line .line {
    width: 2in;
    border-bottom: 1px solid #ccc;
    height: 0.3in;
}

.small-text {
    position: absolute;
    bottom: 0.15in;
    font-size: 6pt;
    color: #ccc;
}"#;

use card_layout::*;

fn settings(card_type: CardType) -> CardSettings {
    CardSettings {
        card_type,
        ..Default::default()
    }
}

fn front() -> ImageAsset {
    ImageAsset::new(vec![0xff, 0xd8, 0xff], "jpg")
}

#[test]
fn test_markup_is_deterministic() {
    let settings = CardSettings {
        card_type: CardType::Folded,
        add_bleed: true,
        use_true_black: true,
        icc_profile_data: Some(vec![0, 1, 2, 3]),
        ..Default::default()
    };
    let images = CardImages {
        front: front(),
        back: Some(ImageAsset::new(vec![1], "png")),
        inside: Some(ImageAsset::new(vec![2], "gif")),
    };

    let first = generate_markup(&settings, &images);
    let second = generate_markup(&settings.clone(), &images.clone());
    assert_eq!(first, second);
}

#[test]
fn test_back_image_overrides_placeholder_for_every_profile() {
    let images = CardImages {
        front: front(),
        back: Some(ImageAsset::new(b"back".to_vec(), "png")),
        inside: None,
    };

    let profiles = PdfProfile::ALL.into_iter().map(Some).chain([None]);
    for profile in profiles {
        for card_type in [CardType::Flat, CardType::Folded] {
            let settings = CardSettings {
                card_type,
                pdf_profile: profile,
                ..Default::default()
            };
            let markup = generate_markup(&settings, &images);
            assert!(markup.contains("data:image/png;base64,YmFjaw=="));
            assert!(!markup.contains("Premium Greeting Card"));
        }
    }
}

#[test]
fn test_folded_front_only() {
    let markup = generate_markup(&settings(CardType::Folded), &CardImages::front_only(front()));

    assert!(markup.contains("Panel 2 - Inside Left"));
    assert!(markup.contains("Wishing you all the best"));
    assert!(markup.contains(fragments::FOLD_GUIDE));
    assert!(!markup.contains("object-position: left center;"));
    assert!(!markup.contains("object-position: right center;"));
}

#[test]
fn test_folded_with_inside_image() {
    let images = CardImages {
        front: front(),
        back: None,
        inside: Some(ImageAsset::new(b"inside".to_vec(), "png")),
    };
    let markup = generate_markup(&settings(CardType::Folded), &images);

    let left = markup.find("object-position: right center;").unwrap();
    let right = markup.find("object-position: left center;").unwrap();
    assert!(left < right);
    assert!(!markup.contains("Panel 2 - Inside Left"));
    assert!(!markup.contains("Panel 3 - Inside Right"));
    // back still falls back independently
    assert!(markup.contains("Panel 4 - Back Cover"));
}

#[test]
fn test_flat_ignores_inside_image() {
    let images = CardImages {
        front: front(),
        back: None,
        inside: Some(ImageAsset::new(b"inside".to_vec(), "png")),
    };
    let markup = generate_markup(&settings(CardType::Flat), &images);

    assert!(!markup.contains("aW5zaWRl"));
    assert!(!markup.contains("fold-indicator\"></div>"));
}

#[test]
fn test_page_break_chaining() {
    for card_type in [CardType::Flat, CardType::Folded] {
        let geometry = compute_geometry(card_type, false);
        let markup = generate_markup(&settings(card_type), &CardImages::front_only(front()));
        assert_eq!(
            markup.matches("page-break-after: always").count(),
            geometry.page_count() - 1
        );
        assert_eq!(markup.matches("page-break-after: avoid").count(), 1);
    }
}

#[test]
fn test_assemble_with_explicit_components() {
    let settings = CardSettings {
        pdf_profile: None,
        add_bleed: true,
        card_type: CardType::Folded,
        ..Default::default()
    };
    let images = CardImages::front_only(front());
    let geometry = compute_geometry(settings.card_type, settings.add_bleed);
    let color = build_color_directive(&settings);
    assert!(color.is_none());
    let panels = resolve_panels(settings.card_type, &images);

    let markup = assemble_document(&settings, &geometry, color.as_ref(), &panels);
    assert!(!markup.contains("@prince-pdf"));
    assert!(markup.contains("size: 9.5in 6.75in;"));
    assert!(markup.contains("width: 9.75in;"));
    assert!(markup.contains("height: 7in;"));
    assert!(markup.contains("marks: crop;"));
    assert_eq!(markup, generate_markup(&settings, &images));
}

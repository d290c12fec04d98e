use card_layout::*;

#[test]
fn test_resolve_defaults() {
    let settings = resolve_settings(&RawOptions::new(), None);

    assert_eq!(settings.card_type, CardType::Flat);
    assert_eq!(settings.pdf_profile, Some(PdfProfile::PdfX4));
    assert_eq!(settings.image_fit, ImageFit::Cover);
    assert_eq!(settings.background_color, "#ffffff");
    assert!(!settings.add_bleed);
    assert!(!settings.use_true_black);
    assert!(!settings.use_cmyk_colors);
    assert!(!settings.force_cmyk);
    assert!(!settings.test_mode);
    assert_eq!(settings.icc_profile_data, None);
    assert_eq!(settings.pdf_version, None);
}

#[test]
fn test_resolve_truthy_strings() {
    let raw = RawOptions::new()
        .with("add_bleed", "true")
        .with("use_true_black", "True")
        .with("use_cmyk_colors", "1")
        .with("test_mode", "true");

    let settings = resolve_settings(&raw, None);
    assert!(settings.add_bleed);
    assert!(!settings.use_true_black);
    assert!(!settings.use_cmyk_colors);
    assert!(settings.test_mode);
}

#[test]
fn test_resolve_explicit_values() {
    let raw: RawOptions = [
        ("card_type", "folded"),
        ("pdf_profile", "PDF/A-3b"),
        ("image_fit", "contain"),
        ("background_color", "#000"),
        ("pdf_version", "1.7"),
    ]
    .into_iter()
    .collect();

    let settings = resolve_settings(&raw, Some(vec![1, 2]));
    assert_eq!(settings.card_type, CardType::Folded);
    assert_eq!(settings.pdf_profile, Some(PdfProfile::PdfA3b));
    assert_eq!(settings.image_fit, ImageFit::Contain);
    assert_eq!(settings.background_color, "#000");
    assert_eq!(settings.pdf_version.as_deref(), Some("1.7"));
    assert_eq!(settings.icc_profile_data, Some(vec![1, 2]));
}

#[test]
fn test_empty_profile_means_no_profile() {
    let raw = RawOptions::new().with("pdf_profile", "");
    assert_eq!(resolve_settings(&raw, None).pdf_profile, None);
    assert!(raw.validate().is_ok());
}

#[test]
fn test_resolve_never_fails_on_bad_values() {
    let raw = RawOptions::new()
        .with("card_type", "trifold")
        .with("pdf_profile", "PDF/Z-9")
        .with("image_fit", "stretch")
        .with("background_color", "url(evil)");

    let settings = resolve_settings(&raw, None);
    assert_eq!(settings, CardSettings::default());
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        ("card_type", "trifold"),
        ("pdf_profile", "PDF/Z-9"),
        ("image_fit", "stretch"),
        ("background_color", "red;}"),
    ];

    for (field, value) in cases {
        let raw = RawOptions::new().with(field, value);
        match raw.validate() {
            Err(CardError::InvalidSetting { field: f, value: v }) => {
                assert_eq!(f, field);
                assert_eq!(v, value);
            }
            other => panic!("Expected InvalidSetting for {}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_validate_accepts_every_profile() {
    for profile in PdfProfile::ALL {
        let raw = RawOptions::new().with("pdf_profile", profile.as_str());
        assert!(raw.validate().is_ok());
        assert_eq!(resolve_settings(&raw, None).pdf_profile, Some(profile));
    }
}

#[test]
fn test_merge_overrides() {
    let mut raw = RawOptions::new()
        .with("card_type", "flat")
        .with("add_bleed", "true");
    raw.merge(&RawOptions::new().with("card_type", "folded"));

    assert_eq!(raw.get("card_type"), Some("folded"));
    assert!(raw.flag("add_bleed"));
}

#[tokio::test]
async fn test_load_raw_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(
        temp_file.path(),
        r#"{ "card_type": "folded", "add_bleed": "true" }"#,
    )
    .unwrap();

    let raw = RawOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(raw.get("card_type"), Some("folded"));
    assert!(raw.flag("add_bleed"));
}

#[tokio::test]
async fn test_load_raw_options_rejects_non_strings() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "add_bleed": true }"#).unwrap();

    match RawOptions::load(temp_file.path()).await {
        Err(CardError::Config(msg)) => assert!(msg.contains("Failed to parse options")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_and_load_settings() {
    use tempfile::NamedTempFile;

    let settings = CardSettings {
        card_type: CardType::Folded,
        pdf_profile: None,
        icc_profile_data: Some(vec![9, 9, 9]),
        add_bleed: true,
        image_fit: ImageFit::ScaleDown,
        pdf_version: Some("1.6".to_string()),
        ..Default::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    settings.save(temp_file.path()).await.unwrap();
    let loaded = CardSettings::load(temp_file.path()).await.unwrap();

    assert_eq!(loaded.card_type, settings.card_type);
    assert_eq!(loaded.pdf_profile, None);
    assert_eq!(loaded.image_fit, ImageFit::ScaleDown);
    assert_eq!(loaded.pdf_version, settings.pdf_version);
    assert!(loaded.add_bleed);
    // ICC bytes are never persisted
    assert_eq!(loaded.icc_profile_data, None);
}

#[tokio::test]
async fn test_load_partial_settings_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{"card_type":"folded"}"#)
        .await
        .unwrap();

    let loaded = CardSettings::load(temp_file.path()).await.unwrap();
    assert_eq!(
        loaded,
        CardSettings {
            card_type: CardType::Folded,
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn test_load_settings_rejects_bad_background_color() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(
        temp_file.path(),
        r#"{"background_color":"red; } body { display: none"}"#,
    )
    .await
    .unwrap();

    match CardSettings::load(temp_file.path()).await {
        Err(CardError::InvalidSetting { field, .. }) => assert_eq!(field, "background_color"),
        other => panic!("Expected InvalidSetting error, got {:?}", other),
    }
}

#[test]
fn test_settings_validate() {
    assert!(CardSettings::default().validate().is_ok());

    let settings = CardSettings {
        background_color: "#1a2b3c".to_string(),
        ..Default::default()
    };
    assert!(settings.validate().is_ok());

    let settings = CardSettings {
        background_color: "url(x)".to_string(),
        ..Default::default()
    };
    assert!(settings.validate().is_err());
}

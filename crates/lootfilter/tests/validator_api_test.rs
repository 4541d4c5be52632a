//! Integration tests for the FilterValidator API

use std::{fs, thread};

use futures::executor::block_on;

use lootfilter::{
    ErrorCode, FilterValidator, LootFilterError, Severity,
    config::{AppConfig, ModConfig, SoundConfig, WhitelistConfig},
    data::ReferenceData,
    sound::SoundInformation,
};

fn validator() -> FilterValidator {
    FilterValidator::new(AppConfig::default()).expect("Failed to create validator")
}

#[test]
fn test_validate_clean_filter() {
    let source = r#"
Show
    Class "Stackable Currency"
    BaseType "Chaos Orb"
    SetTextColor 255 255 0
    PlayAlertSound 1 250
"#;

    let result = validator().validate(source);

    assert!(
        result.diagnostics().is_empty(),
        "Should validate cleanly: {:?}",
        result.diagnostics()
    );
    assert_eq!(result.color_information().len(), 1);
    assert_eq!(result.sound_information().len(), 1);
}

#[test]
fn test_validate_reports_errors() {
    let result = validator().validate("Show\n    ItemLevel 500\n");

    assert!(result.has_errors());
    assert_eq!(result.diagnostics()[0].code(), Some(ErrorCode::E102));
}

#[test]
fn test_validate_async_matches_sync() {
    let validator = validator();
    let source = "Show\nRarity Legendary\nSetTextColor 1 2 3\n";

    let sync = validator.validate(source);
    let asynchronous = block_on(validator.validate_async(source));

    assert_eq!(sync.diagnostics(), asynchronous.diagnostics());
    assert_eq!(sync.color_information(), asynchronous.color_information());
}

#[test]
fn test_validator_is_shared_across_threads() {
    let validator = validator();

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let validator = validator.clone();
            thread::spawn(move || {
                let source = format!("Show\nItemLevel {}\n", n * 100);
                validator.validate(&source).has_errors()
            })
        })
        .collect();

    let errors: Vec<bool> = handles
        .into_iter()
        .map(|handle| handle.join().expect("validation thread panicked"))
        .collect();
    assert_eq!(errors, [false, false, true, true]);
}

#[test]
fn test_whitelist_from_config() {
    let config = AppConfig::new(
        WhitelistConfig::with_rules(vec!["Continue".to_string()]),
        SoundConfig::new(false, None),
        ModConfig::default(),
    );
    let validator = FilterValidator::new(config).unwrap();

    let result = validator.validate("Show\nContinue\n");

    assert!(result.diagnostics().is_empty());
}

#[test]
fn test_custom_sound_verification_uses_folder() {
    let folder = tempfile::tempdir().unwrap();
    fs::write(folder.path().join("found.mp3"), b"ID3").unwrap();

    let config = AppConfig::new(
        WhitelistConfig::default(),
        SoundConfig::new(true, Some(folder.path().to_path_buf())),
        ModConfig::default(),
    );
    let validator = FilterValidator::new(config).unwrap();

    let result = validator.validate(
        "Show\nCustomAlertSound \"found.mp3\"\nShow\nCustomAlertSound \"lost.mp3\"\n",
    );

    let diagnostics = result.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code(), Some(ErrorCode::E203));
    assert_eq!(diagnostics[0].severity(), Severity::Warning);
    assert_eq!(diagnostics[0].range().line(), 3);
    assert!(
        result
            .sound_information()
            .iter()
            .all(|sound| matches!(sound, SoundInformation::Custom { .. }))
    );
}

#[test]
fn test_validate_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.filter");
    fs::write(&path, "Hide\n    Rarity Normal\n").unwrap();

    let result = validator().validate_file(&path).unwrap();
    assert!(result.diagnostics().is_empty());

    let err = validator()
        .validate_file(dir.path().join("missing.filter"))
        .unwrap_err();
    assert!(matches!(err, LootFilterError::Io(_)));
}

#[test]
fn test_with_reference_data_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    let bundled = concat!(env!("CARGO_MANIFEST_DIR"), "/../lootfilter-core/data");
    for file in ["rules.json", "items.json", "mods.json", "sounds.json"] {
        fs::copy(format!("{bundled}/{file}"), dir.path().join(file)).unwrap();
    }

    let data = ReferenceData::from_dir(dir.path()).unwrap();
    let validator = FilterValidator::with_reference_data(AppConfig::default(), data).unwrap();

    assert_eq!(validator.registry().len(), self::validator().registry().len());
}

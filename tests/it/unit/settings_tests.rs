//! Unit tests for settings loading.

use pagedrop::host::EffectAllowed;
use pagedrop::{ActiveDragRegistry, DndError, DndSettings, Edge};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("dnd.json");
    fs::write(
        &path,
        r#"{ "transfer_mime": "application/x-test", "effect_allowed": "copyMove" }"#,
    )?;

    let settings = DndSettings::load_from(&path)?;
    assert_eq!(settings.transfer_mime, "application/x-test");
    assert_eq!(settings.effect_allowed, EffectAllowed::CopyMove);
    // Unnamed fields keep their defaults
    assert_eq!(settings.default_allowed_edges, vec![Edge::Top, Edge::Bottom]);
    Ok(())
}

#[test]
fn test_round_trip_through_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("dnd.json");
    let settings = DndSettings {
        default_allowed_edges: vec![Edge::Left, Edge::Right],
        ..DndSettings::default()
    };
    fs::write(&path, settings.to_json()?)?;

    assert_eq!(DndSettings::load_from(&path)?, settings);
    Ok(())
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = DndSettings::load_from(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DndError::Io(_)));
}

#[test]
fn test_malformed_file_is_settings_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dnd.json");
    fs::write(&path, r#"{ "default_allowed_edges": ["middle"] }"#).unwrap();

    let err = DndSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, DndError::Settings(_)));
    assert!(!err.is_transfer_error());
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = tempdir().unwrap();
    assert_eq!(
        DndSettings::load_or_default(dir.path().join("absent.json")),
        DndSettings::default()
    );

    let path = dir.path().join("broken.json");
    fs::write(&path, "not json").unwrap();
    assert_eq!(DndSettings::load_or_default(&path), DndSettings::default());
}

#[test]
fn test_registry_carries_settings() {
    let settings = DndSettings {
        transfer_mime: "application/x-custom".into(),
        ..DndSettings::default()
    };
    let registry = ActiveDragRegistry::with_settings(settings);
    assert_eq!(registry.settings().transfer_mime, "application/x-custom");
    assert_eq!(registry.clone().settings().transfer_mime, "application/x-custom");
}

use super::*;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = load_settings_from(&tmp.path().join("nope.toml"));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.collection.page_size, 9);
    assert!(settings.collection.seed_sample_data);
    assert_eq!(settings.storage.data_dir, None);
}

#[test]
fn partial_file_fills_in_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[collection]\nseed_sample_data = false\n").unwrap();

    let settings = load_settings_from(&path);
    assert!(!settings.collection.seed_sample_data);
    assert_eq!(settings.collection.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn invalid_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[collection\npage_size = ").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn data_dir_priority() {
    let settings = Settings {
        storage: StorageSettings {
            data_dir: Some(PathBuf::from("/from/settings")),
        },
        ..Settings::default()
    };
    assert_eq!(
        resolve_data_dir(Some(PathBuf::from("/from/cli")), &settings),
        PathBuf::from("/from/cli")
    );
    assert_eq!(
        resolve_data_dir(None, &settings),
        PathBuf::from("/from/settings")
    );
    assert_eq!(
        resolve_data_dir(None, &Settings::default()),
        default_data_dir()
    );
}

#[test]
fn save_data_dir_preserves_other_keys() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("settings.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[collection]\npage_size = 12\n\n[extra]\nkeep = true\n").unwrap();

    save_data_dir_at(&path, Some(Path::new("/data/games"))).unwrap();
    let settings = load_settings_from(&path);
    assert_eq!(
        settings.storage.data_dir.as_deref(),
        Some(Path::new("/data/games"))
    );
    assert_eq!(settings.collection.page_size, 12);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("keep = true"), "lost unknown key:\n{raw}");

    save_data_dir_at(&path, None).unwrap();
    assert_eq!(load_settings_from(&path).storage.data_dir, None);
}

#[test]
fn save_creates_missing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("a").join("b").join("settings.toml");
    save_data_dir_at(&path, Some(Path::new("/x"))).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn pretty_output_omits_unset_data_dir() {
    let text = Settings::default().to_pretty().unwrap();
    assert!(!text.contains("data_dir"));
    assert!(text.contains("page_size = 9"));
    assert!(text.contains("seed_sample_data = true"));
}

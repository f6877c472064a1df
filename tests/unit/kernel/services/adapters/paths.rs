use super::*;

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.ends_with(LOG_DIR));
}

#[test]
fn test_get_settings_path() {
    let path = get_settings_path().unwrap();
    assert!(path.ends_with(Path::new(SETTINGS_DIR).join(SETTINGS_FILE)));
}

#[test]
fn test_ensure_dir_creates_nested() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("a").join("b");

    ensure_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();

    assert!(dir.is_dir());
}

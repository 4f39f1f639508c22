use link_deck::bookmarks::{
    default_bookmarks, load_bookmarks, load_or_default, save_bookmarks, BookmarkEntry,
    BookmarkGroup,
};
use link_deck::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_settings_use_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.favicon_size, 64);
    assert!(!settings.debug_logging);
}

#[test]
fn partial_settings_fill_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"debug_logging": true, "favicon_size": 32}"#).unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.debug_logging);
    assert_eq!(settings.favicon_size, 32);
    assert_eq!(settings.window_size, Some((960, 640)));
    assert_eq!(settings.favicon_timeout_secs, 10);
}

#[test]
fn settings_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();
    let mut settings = Settings::default();
    settings.preferences_file = Some("prefs.json".into());
    settings.save(path).unwrap();
    let loaded = Settings::load(path).unwrap();
    assert_eq!(loaded.preferences_path(), std::path::PathBuf::from("prefs.json"));
}

#[test]
fn bookmarks_file_round_trip_keeps_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bookmarks.json");
    let path = path.to_str().unwrap();
    let groups = vec![BookmarkGroup {
        group: "Reading".into(),
        items: vec![
            BookmarkEntry::new("Lobsters", "https://lobste.rs"),
            BookmarkEntry::new("HN", "https://news.ycombinator.com"),
        ],
    }];
    save_bookmarks(path, &groups).unwrap();
    assert_eq!(load_bookmarks(path).unwrap(), groups);
}

#[test]
fn malformed_bookmarks_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bookmarks.json");
    std::fs::write(&path, "[{").unwrap();
    assert!(load_bookmarks(path.to_str().unwrap()).is_err());
}

#[test]
fn missing_bookmarks_file_falls_back_to_builtin_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-bookmarks.json");
    let path = path.to_str().unwrap();
    assert!(load_bookmarks(path).is_err());
    assert_eq!(load_or_default(Some(path)), default_bookmarks());
}

#[test]
fn empty_bookmarks_file_means_no_groups() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bookmarks.json");
    std::fs::write(&path, "").unwrap();
    assert!(load_or_default(Some(path.to_str().unwrap())).is_empty());
    assert_eq!(load_or_default(None), default_bookmarks());
}

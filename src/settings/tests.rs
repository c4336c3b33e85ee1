use super::*;

#[test]
fn test_missing_file_uses_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let settings =
        Settings::load_from(&tmp.path().join("settings.conf"), "/home/ann/.local/lib".into())
            .unwrap();
    assert_eq!(settings, Settings::with_install_path("/home/ann/.local/lib".into()));
}

#[test]
fn test_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("install_waterfox").join("settings.conf");
    let settings = Settings {
        install_path: "/tmp/fxinstall".into(),
        install_desktop_shortcut: Some(true),
        use_system_dictionaries: Some(false),
        remove_archive: Some(true),
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path, "/elsewhere".into()).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_save_overwrites() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.conf");
    std::fs::write(&path, "[global]\nRemoveArchive=yes\nStale=1\n").unwrap();

    Settings::with_install_path("/opt".into()).save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[global]\nInstallPath=/opt\n");
}

#[test]
fn test_headerless_file_and_lowercase_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.conf");
    std::fs::write(
        &path,
        "installpath = /data/apps\nusesystemdictionaries = yes\nColour = blue\n",
    )
    .unwrap();

    let loaded = Settings::load_from(&path, "/default".into()).unwrap();
    assert_eq!(loaded.install_path, PathBuf::from("/data/apps"));
    assert_eq!(loaded.use_system_dictionaries, Some(true));
    assert_eq!(loaded.install_desktop_shortcut, None);
    assert_eq!(loaded.remove_archive, None);
}

#[test]
fn test_get_and_set_value() {
    let mut settings = Settings::with_install_path("/opt".into());
    assert_eq!(settings.get_value("RemoveArchive").unwrap(), "");

    settings.set_value("removearchive", "yes").unwrap();
    assert_eq!(settings.get_value("RemoveArchive").unwrap(), "yes");

    settings.set_value("RemoveArchive", "").unwrap();
    assert_eq!(settings.remove_archive, None);

    assert!(settings.set_value("editor.command", "code").is_err());
    assert!(settings.get_value("nope").is_err());
}

#[test]
fn test_yes_no() {
    assert!(parse_yes_no("yes"));
    assert!(parse_yes_no(" YES "));
    assert!(!parse_yes_no("no"));
    assert!(!parse_yes_no("maybe"));
    assert_eq!(yes_no(true), "yes");
}

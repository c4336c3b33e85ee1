use super::*;
use std::os::unix::fs::PermissionsExt;

use crate::archive::tests::write_tarball;
use crate::host::testing::sandbox;
use crate::progress::testing::Recorder;

fn classic_tarball(dir: &Path, marker: &str) -> PathBuf {
    let path = dir.join("waterfox-classic-2022.11.en-US.linux-x86_64.tar.bz2");
    write_tarball(
        &path,
        &[
            ("waterfox/waterfox", "#!/bin/sh\n"),
            ("waterfox/marker", marker),
            ("waterfox/dictionaries/en-US.dic", "words"),
        ],
    );
    path
}

fn request(source: PathBuf, root: &Path, options: InstallOptions) -> InstallRequest {
    InstallRequest {
        source,
        install_root: root.join("fxinstall"),
        variant: Variant::Classic,
        options,
        config_file: root.join("config").join("install_waterfox").join("settings.conf"),
    }
}

#[test]
fn test_launcher_script() {
    insta::assert_snapshot!(render_launcher(Path::new("/tmp/fxinstall"), Variant::Classic), @r#"
    #!/bin/bash
    if [ "$XDG_CURRENT_DESKTOP" == "KDE" ]; then
        export GTK_USE_PORTAL=1
    fi
    exec '/tmp/fxinstall/waterfox-classic/waterfox' "$@"
    "#);
}

#[test]
fn test_desktop_entry_has_no_placeholders() {
    let entry = render_desktop_entry(
        Variant::Generation(4),
        Path::new("/home/ann/.local/bin/waterfox-g4"),
    );
    assert!(!entry.contains("{{"));
    assert!(entry.contains("Name=Waterfox G4\n"));
    assert!(entry.contains("Icon=waterfox-g4\n"));
    assert!(entry.contains("Exec=\"/home/ann/.local/bin/waterfox-g4\" %u\n"));
    assert!(entry.contains("Exec=\"/home/ann/.local/bin/waterfox-g4\" --private-window %u\n"));
}

#[test]
fn test_launcher_path_is_not_expanded() {
    let script = render_launcher(Path::new("/opt/it's $HOME/`x`"), Variant::Current);
    assert!(script.contains(r#"exec '/opt/it'\''s $HOME/`x`/waterfox-current/waterfox' "$@""#));
}

#[test]
fn test_desktop_entry_quotes_launcher() {
    let entry = render_desktop_entry(
        Variant::Classic,
        Path::new("/home/ann/my apps/$bin/100%/waterfox-classic"),
    );
    assert!(entry.contains(
        r#"Exec="/home/ann/my apps/\\$bin/100%%/waterfox-classic" %u"#
    ));
}

#[test]
fn test_install_classic_tarball_all_options_off() {
    let tmp = tempfile::tempdir().unwrap();
    let sb = sandbox(tmp.path());
    let source = classic_tarball(tmp.path(), "first");
    let req = request(source.clone(), tmp.path(), InstallOptions::default());
    let progress = Recorder::default();

    let installed = install(&req, &sb.host, &progress).unwrap();

    let app_dir = tmp.path().join("fxinstall").join("waterfox-classic");
    assert_eq!(installed.app_dir, app_dir);
    assert!(app_dir.join("waterfox").is_file());
    assert!(app_dir.join("dictionaries").join("en-US.dic").is_file());
    assert!(source.is_file());
    assert!(installed.desktop_shortcut.is_none());
    assert!(!sb.tools.desktop.join("waterfox-classic.desktop").exists());
    assert!(!tmp.path().join("fxinstall").join(SCRATCH_DIR).exists());

    let launcher = std::fs::read_to_string(&installed.launcher).unwrap();
    let expected = format!("{}/waterfox", app_dir.display());
    assert!(launcher.lines().any(|l| l.starts_with("exec ") && l.contains(&expected)));
    let mode = std::fs::metadata(&installed.launcher).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);

    let entry_mode = std::fs::metadata(&installed.desktop_entry).unwrap().permissions().mode();
    assert_eq!(entry_mode & 0o777, 0o644);

    assert_eq!(installed.icon_links.len(), crate::layout::ICON_SIZES.len());
    let link = sb.host.layout.icon_link(Variant::Classic, 48);
    assert_eq!(
        std::fs::read_link(&link).unwrap(),
        crate::layout::bundled_icon(&app_dir, 48)
    );
    assert_eq!(*sb.tools.refreshed.lock().unwrap(), vec![sb.host.layout.icons_dir.clone()]);

    let config = std::fs::read_to_string(&req.config_file).unwrap();
    let root = tmp.path().join("fxinstall");
    assert!(config.contains(&format!("InstallPath={}\n", root.display())));
    assert!(config.contains("InstallDesktopShortcut=no\n"));
    assert!(config.contains("RemoveArchive=no\n"));

    assert!(progress.saw("Creating executable file..."));
    assert!(progress.saw("Saving settings..."));
    assert!(!progress.saw("Removing older installed version..."));
}

#[test]
fn test_reinstall_replaces_app_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let sb = sandbox(tmp.path());
    let first = classic_tarball(tmp.path(), "first");
    let req = request(first, tmp.path(), InstallOptions::default());
    install(&req, &sb.host, &Recorder::default()).unwrap();
    std::fs::write(req.app_dir().join("leftover"), "old").unwrap();

    let second_dir = tmp.path().join("second");
    std::fs::create_dir(&second_dir).unwrap();
    let second = classic_tarball(&second_dir, "second");
    let req = request(second, tmp.path(), InstallOptions::default());
    let progress = Recorder::default();
    install(&req, &sb.host, &progress).unwrap();

    let variants: Vec<_> = std::fs::read_dir(&req.install_root)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(variants, vec![std::ffi::OsString::from("waterfox-classic")]);
    assert_eq!(std::fs::read_to_string(req.app_dir().join("marker")).unwrap(), "second");
    assert!(!req.app_dir().join("leftover").exists());
    assert!(progress.saw("Removing older installed version..."));
}

#[test]
fn test_install_with_all_options() {
    let tmp = tempfile::tempdir().unwrap();
    let sb = sandbox(tmp.path());
    std::fs::create_dir_all(tmp.path().join("sys/usr/share/hunspell")).unwrap();
    let source = classic_tarball(tmp.path(), "first");
    let options = InstallOptions {
        desktop_shortcut: true,
        system_dictionaries: true,
        remove_archive: true,
    };
    let req = request(source.clone(), tmp.path(), options);

    let installed = install(&req, &sb.host, &Recorder::default()).unwrap();

    let shortcut = installed.desktop_shortcut.unwrap();
    assert_eq!(shortcut, sb.tools.desktop.join("waterfox-classic.desktop"));
    assert_eq!(std::fs::read_link(&shortcut).unwrap(), installed.desktop_entry);

    let pref = req.app_dir().join("browser/defaults/preferences/spellcheck.js");
    let hunspell = tmp.path().join("sys/usr/share/hunspell");
    assert_eq!(
        std::fs::read_to_string(pref).unwrap(),
        format!("pref(\"spellchecker.dictionary_path\", \"{}\");", hunspell.display())
    );
    assert!(!req.app_dir().join("dictionaries").exists());
    assert!(!source.exists());

    let saved = Settings::load_from(&req.config_file, "/unused".into()).unwrap();
    assert_eq!(saved, req.settings());
}

#[test]
fn test_install_appimage() {
    let tmp = tempfile::tempdir().unwrap();
    let sb = sandbox(tmp.path());
    let source = tmp.path().join("waterfox-G4.1.5-x86_64.AppImage");
    std::fs::write(&source, "ELF").unwrap();
    let req = InstallRequest {
        variant: Variant::Generation(4),
        ..request(source, tmp.path(), InstallOptions::default())
    };

    let installed = install(&req, &sb.host, &Recorder::default()).unwrap();

    assert!(installed.app_dir.ends_with("waterfox-g4"));
    assert!(installed.app_dir.join("waterfox").is_file());
    assert!(installed.app_dir.join("application.ini").is_file());
}

#[test]
fn test_existing_icon_links_are_kept() {
    let tmp = tempfile::tempdir().unwrap();
    let sb = sandbox(tmp.path());
    let link = sb.host.layout.icon_link(Variant::Classic, 16);
    std::fs::create_dir_all(link.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink("/somewhere/else.png", &link).unwrap();

    let req = request(classic_tarball(tmp.path(), "x"), tmp.path(), InstallOptions::default());
    install(&req, &sb.host, &Recorder::default()).unwrap();

    assert_eq!(std::fs::read_link(&link).unwrap(), PathBuf::from("/somewhere/else.png"));
}

#[test]
fn test_missing_archive_aborts_before_launcher() {
    let tmp = tempfile::tempdir().unwrap();
    let sb = sandbox(tmp.path());
    let req = request(
        tmp.path().join("waterfox-classic-missing.tar.bz2"),
        tmp.path(),
        InstallOptions::default(),
    );

    assert!(install(&req, &sb.host, &Recorder::default()).is_err());
    assert!(!sb.host.layout.launcher(Variant::Classic).exists());
    assert!(!req.config_file.exists());
}

#[test]
fn test_options_from_settings() {
    let mut settings = Settings::with_install_path("/opt".into());
    settings.remove_archive = Some(true);
    assert_eq!(
        InstallOptions::from_settings(&settings),
        InstallOptions {
            desktop_shortcut: false,
            system_dictionaries: false,
            remove_archive: true,
        }
    );
}

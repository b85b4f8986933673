use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn mysql_ramdisk(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mysql-ramdisk").expect("Failed to locate binary in test");
    // Keep the tool away from the real ~/.mysql-ramdisk and ~/ramdisk.
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn help_lists_both_option_groups() {
    let home = TempDir::new().expect("Failed to create temp home in test");
    mysql_ramdisk(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--create-ramdisk"))
        .stdout(predicate::str::contains("--kill-ramdisk"))
        .stdout(predicate::str::contains("--with-mysql"))
        .stdout(predicate::str::contains("--ramdisk-size"));
}

#[test]
fn no_flags_prints_help() {
    let home = TempDir::new().expect("Failed to create temp home in test");
    mysql_ramdisk(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn teardown_survives_missing_disk_and_database() {
    let home = TempDir::new().expect("Failed to create temp home in test");

    // Every underlying command fails here (nothing is mounted, no MySQL
    // install, bogus device), and the sequence still runs to completion.
    mysql_ramdisk(&home)
        .args(["--kill-ramdisk", "--path-to-ramdisk", "/dev/disk-nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### Deleting ramdisk..."))
        .stdout(predicate::str::contains(
            "#### Starting: hdiutil detach /dev/disk-nonexistent",
        ))
        .stdout(predicate::str::contains("#### Done deleting ramdisk"));
}

#[test]
fn create_wins_over_kill_and_size_flag_overrides_settings() {
    let home = TempDir::new().expect("Failed to create temp home in test");

    // 64 MB at 512-byte sectors is 131072 sectors. With both flags given,
    // only the provision sequence runs.
    mysql_ramdisk(&home)
        .args(["--create-ramdisk", "--kill-ramdisk", "--ramdisk-size", "64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### Creating ramdisk..."))
        .stdout(predicate::str::contains(
            "#### Starting: hdiutil attach -nomount ram://131072",
        ))
        .stdout(predicate::str::contains("Deleting ramdisk").not());
}

#[test]
fn settings_file_overrides_are_honored() {
    let home = TempDir::new().expect("Failed to create temp home in test");
    home.child(".mysql-ramdisk")
        .write_str(r#"{"ramdisk_device_path": "/dev/disk-from-settings"}"#)
        .expect("Failed to write settings in test");

    mysql_ramdisk(&home)
        .arg("--kill-ramdisk")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "hdiutil detach /dev/disk-from-settings",
        ));
}

#[test]
fn malformed_settings_file_aborts() {
    let home = TempDir::new().expect("Failed to create temp home in test");
    home.child(".mysql-ramdisk")
        .write_str("{not json")
        .expect("Failed to write settings in test");

    mysql_ramdisk(&home)
        .arg("--kill-ramdisk")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse settings file"));
}

use std::fs;

use log::info;

use crate::config::Settings;
use crate::error::Result;
use crate::runner::{CommandRunner, banner};

/// Sector size `hdiutil` uses for `ram://` device sizing.
const SECTOR_SIZE: u64 = 512;

/// Volume label the ramdisk is formatted with.
const VOLUME_LABEL: &str = "ramdisk";

/// Where `diskutil eraseVolume` auto-mounts the fresh volume before we
/// re-mount it at the configured path.
const AUTO_MOUNT_PATH: &str = "/Volumes/ramdisk";

/// Number of 512-byte sectors backing a ramdisk of `size_mb` megabytes.
fn sector_count(size_mb: u64) -> u64 {
    size_mb * 1024 * 1024 / SECTOR_SIZE
}

/// The device path is whatever `hdiutil attach` printed, minus whitespace.
fn parse_device_path(attach_stdout: &str) -> String {
    attach_stdout.trim().to_string()
}

fn attach_args(size_mb: u64) -> Vec<String> {
    vec![
        "attach".to_string(),
        "-nomount".to_string(),
        format!("ram://{}", sector_count(size_mb)),
    ]
}

fn erase_args(device: &str) -> Vec<String> {
    vec![
        "eraseVolume".to_string(),
        "HFS+".to_string(),
        VOLUME_LABEL.to_string(),
        device.to_string(),
    ]
}

fn mount_args(device: &str, mount_path: &str) -> Vec<String> {
    vec![
        "-o".to_string(),
        "noowners".to_string(),
        "-t".to_string(),
        "HFS".to_string(),
        device.to_string(),
        mount_path.to_string(),
    ]
}

/// Create and format the ramdisk device.
///
/// Stores the device path reported by `hdiutil attach` back into the
/// settings so the later mount and detach steps address the right disk.
pub fn create(settings: &mut Settings) {
    banner("Creating ramdisk...");
    let attach_stdout = CommandRunner::run("hdiutil", &attach_args(settings.ramdisk_size));
    let device = parse_device_path(&attach_stdout);
    let _ = CommandRunner::run("diskutil", &erase_args(&device));
    settings.ramdisk_device_path = device;
    banner(format!(
        "Done creating ramdisk:{}",
        settings.ramdisk_device_path
    ));
}

/// Mount the formatted ramdisk at the configured path.
///
/// `eraseVolume` leaves the volume auto-mounted under /Volumes, so that
/// mount is dropped before re-mounting at the configured location.
pub fn mount(settings: &Settings) -> Result<()> {
    info!("Ensuring mount point {} exists", settings.ramdisk_mount_path);
    fs::create_dir_all(&settings.ramdisk_mount_path)?;
    let _ = CommandRunner::run("umount", &[AUTO_MOUNT_PATH]);
    let _ = CommandRunner::run(
        "mount",
        &mount_args(&settings.ramdisk_device_path, &settings.ramdisk_mount_path),
    );
    Ok(())
}

/// Unmount the ramdisk filesystem.
pub fn unmount(settings: &Settings) {
    let _ = CommandRunner::run("umount", &[settings.ramdisk_mount_path.as_str()]);
}

/// Detach the ramdisk device, releasing its memory.
pub fn detach(settings: &Settings) {
    banner("Deleting ramdisk...");
    let _ = CommandRunner::run("hdiutil", &["detach", &settings.ramdisk_device_path]);
    banner("Done deleting ramdisk");
}

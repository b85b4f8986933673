// ============================================================================
// File: src/config.rs
// ----------------------------------------------------------------------------
// Settings for the ramdisk and the MySQL instance that runs on it.
//
// Defaults cover a stock Homebrew MySQL install; a JSON file at
// ~/.mysql-ramdisk overlays individual fields on top of the defaults.
// ============================================================================

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::error::{ControlError, Result};

/// Name of the per-user settings file, resolved under the home directory.
pub const SETTINGS_FILE: &str = ".mysql-ramdisk";

/// Flat settings mapping for the ramdisk and MySQL paths.
///
/// Every field is optional in the settings file; absent fields keep their
/// default value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ramdisk size in megabytes
    pub ramdisk_size: u64,
    /// Device node backing the ramdisk. Replaced at runtime with the path
    /// reported by `hdiutil attach` once a disk has been created.
    pub ramdisk_device_path: String,
    /// Where the ramdisk filesystem gets mounted
    pub ramdisk_mount_path: String,
    /// MySQL installation root (passed as --basedir)
    pub mysql_base_path: String,
    /// Directory holding the MySQL client/server binaries
    pub mysql_bin_path: String,
    /// System user the MySQL server runs as
    pub mysql_user: String,
    /// Directory that receives the generated .my.cnf
    pub mysql_cnf_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        let home = home_dir_or_root();
        Self {
            ramdisk_size: 256,
            ramdisk_device_path: "/dev/disk3".to_string(),
            ramdisk_mount_path: format!("{home}/ramdisk"),
            mysql_base_path: "/usr/local/Cellar/mysql/5.6.27".to_string(),
            mysql_bin_path: "/usr/local/Cellar/mysql/5.6.27/bin".to_string(),
            mysql_user: "_mysql".to_string(),
            mysql_cnf_path: home,
        }
    }
}

impl Settings {
    /// Load settings, overlaying `~/.mysql-ramdisk` on the defaults when the
    /// file exists.
    pub fn load() -> Result<Self> {
        match dirs::home_dir() {
            Some(home) => Self::load_from(&home.join(SETTINGS_FILE)),
            None => {
                warn!("Could not determine home directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from an explicit file path.
    ///
    /// A missing file yields the defaults. A present but malformed file is
    /// an error: continuing with half-merged settings would point the later
    /// commands at the wrong paths.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| ControlError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn home_dir_or_root() -> String {
    dirs::home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "/".to_string())
}

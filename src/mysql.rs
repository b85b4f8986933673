// ============================================================================
// File: src/mysql.rs
// ----------------------------------------------------------------------------
// MySQL lifecycle on top of the ramdisk mount.
//
// Bootstraps a data directory with mysql_install_db, writes a mysqld_multi
// configuration pointing at the ramdisk, and starts/stops the instance.
// ============================================================================

use std::fs;
use std::path::Path;

use log::info;

use crate::config::Settings;
use crate::error::Result;
use crate::runner::{CommandRunner, banner};

/// mysqld_multi group number the instance runs under.
const MULTI_GROUP: &str = "8";

/// Socket the instance listens on.
const SOCKET_PATH: &str = "/tmp/mysql.3308.sock";

/// TCP port of the instance.
const PORT: u16 = 3308;

fn install_args(settings: &Settings) -> Vec<String> {
    vec![
        format!("--user={}", settings.mysql_user),
        format!("--basedir={}", settings.mysql_base_path),
        format!("--datadir={}", settings.ramdisk_mount_path),
    ]
}

/// Render the mysqld_multi configuration for the ramdisk-backed instance.
fn render_my_cnf(settings: &Settings) -> String {
    format!(
        "\n\
         [mysqld_multi]\n\
         mysqld     = {bin}/mysqld_safe\n\
         mysqladmin = {bin}/mysqladmin\n\
         user       = root\n\
         \n\
         [mysqld{group}]\n\
         socket     = {socket}\n\
         port       = {port}\n\
         pid-file   = {mount}/mysqld2.pid\n\
         datadir    = {mount}\n\
         user       = {user}\n",
        bin = settings.mysql_bin_path,
        group = MULTI_GROUP,
        socket = SOCKET_PATH,
        port = PORT,
        mount = settings.ramdisk_mount_path,
        user = settings.mysql_user,
    )
}

/// Bootstrap a MySQL data directory on the ramdisk and write `.my.cnf`.
pub fn install_db(settings: &Settings) -> Result<()> {
    let installer = format!("{}/mysql_install_db", settings.mysql_bin_path);
    let _ = CommandRunner::run(&installer, &install_args(settings));

    let cnf_path = Path::new(&settings.mysql_cnf_path).join(".my.cnf");
    info!("Writing mysqld_multi config to {}", cnf_path.display());
    fs::write(&cnf_path, render_my_cnf(settings))?;

    banner(format!(
        "Done installing db at {}",
        settings.ramdisk_mount_path
    ));
    Ok(())
}

/// Start the ramdisk-backed MySQL instance.
pub fn start_db(settings: &Settings) {
    let multi = format!("{}/mysqld_multi", settings.mysql_bin_path);
    let _ = CommandRunner::run(&multi, &["start", MULTI_GROUP]);
    banner(format!(
        "To log into mysql use: 'mysql --socket={SOCKET_PATH} [OPTIONS]'"
    ));
}

/// Stop the ramdisk-backed MySQL instance.
pub fn stop_db(settings: &Settings) {
    let multi = format!("{}/mysqld_multi", settings.mysql_bin_path);
    let _ = CommandRunner::run(&multi, &["stop", MULTI_GROUP]);
}
